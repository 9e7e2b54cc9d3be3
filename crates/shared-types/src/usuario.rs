use serde::{Deserialize, Serialize};

use crate::especialidad::Especialidad;

/// Identity record created by the backend on first sync. The front-end
/// never writes these fields directly; edits go through the profile forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub auth0_id: String,
    pub nombre: String,
    pub apellido: String,
    pub dni: Option<String>,
    pub email: String,
    pub fecha_nacimiento: Option<String>,
    pub telefono: Option<String>,
}

impl Usuario {
    /// "Nombre Apellido" for card headers and dropdowns.
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }

    /// Up-to-two-letter initials for avatar fallbacks.
    pub fn iniciales(&self) -> String {
        let mut out = String::new();
        if let Some(c) = self.nombre.chars().next() {
            out.extend(c.to_uppercase());
        }
        if let Some(c) = self.apellido.chars().next() {
            out.extend(c.to_uppercase());
        }
        out
    }
}

/// Patient profile wrapping a Usuario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paciente {
    pub id: i64,
    pub obra_social: Option<String>,
    pub telefono_emergencia: Option<String>,
    pub usuario: Usuario,
}

/// Dentist profile wrapping a Usuario plus specialty and license number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dentista {
    pub id: i64,
    pub especialidad: Especialidad,
    pub matricula: String,
    pub usuario: Usuario,
}

/// Administrator profile. Carries no role attributes of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Administrador {
    pub id: i64,
    pub usuario: Usuario,
}

/// The resolved backend profile for the signed-in user. Exactly one role
/// profile exists per identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PerfilUsuario {
    Paciente(Paciente),
    Dentista(Dentista),
    Administrador(Administrador),
}

impl PerfilUsuario {
    /// Role-profile id, used for the per-patient/per-dentist turno fetches.
    pub fn id(&self) -> i64 {
        match self {
            PerfilUsuario::Paciente(p) => p.id,
            PerfilUsuario::Dentista(d) => d.id,
            PerfilUsuario::Administrador(a) => a.id,
        }
    }

    pub fn usuario(&self) -> &Usuario {
        match self {
            PerfilUsuario::Paciente(p) => &p.usuario,
            PerfilUsuario::Dentista(d) => &d.usuario,
            PerfilUsuario::Administrador(a) => &a.usuario,
        }
    }

    pub fn email(&self) -> &str {
        &self.usuario().email
    }
}

/// Partial update for a dentist profile, sent to
/// `PATCH /api/dentista/actualizar/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualizarDentistaRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub especialidad_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn usuario() -> Usuario {
        Usuario {
            id: 7,
            auth0_id: "auth0|abc123".into(),
            nombre: "Ana".into(),
            apellido: "Pérez".into(),
            dni: Some("30123456".into()),
            email: "ana@example.com".into(),
            fecha_nacimiento: None,
            telefono: None,
        }
    }

    #[test]
    fn nombre_completo_joins_both_parts() {
        assert_eq!(usuario().nombre_completo(), "Ana Pérez");
    }

    #[test]
    fn iniciales_uppercase_first_letters() {
        assert_eq!(usuario().iniciales(), "AP");
        let mut u = usuario();
        u.apellido = String::new();
        assert_eq!(u.iniciales(), "A");
    }

    #[test]
    fn usuario_deserializes_wire_field_names() {
        let json = r#"{
            "id": 7,
            "auth0Id": "auth0|abc123",
            "nombre": "Ana",
            "apellido": "Pérez",
            "dni": null,
            "email": "ana@example.com",
            "fechaNacimiento": "1990-04-01",
            "telefono": "1155550000"
        }"#;
        let u: Usuario = serde_json::from_str(json).unwrap();
        assert_eq!(u.auth0_id, "auth0|abc123");
        assert_eq!(u.fecha_nacimiento.as_deref(), Some("1990-04-01"));
    }

    #[test]
    fn perfil_exposes_role_profile_id() {
        let paciente = Paciente {
            id: 42,
            obra_social: Some("OSDE".into()),
            telefono_emergencia: None,
            usuario: usuario(),
        };
        let perfil = PerfilUsuario::Paciente(paciente);
        assert_eq!(perfil.id(), 42);
        assert_eq!(perfil.email(), "ana@example.com");
    }
}
