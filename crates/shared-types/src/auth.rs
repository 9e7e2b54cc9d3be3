use serde::{Deserialize, Serialize};

use crate::usuario::{Administrador, Dentista, Paciente, PerfilUsuario};

/// Role assigned by the clinic backend after login. The identity
/// provider knows nothing about roles; this is the backend's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Paciente,
    Dentista,
    Administrador,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Paciente => "paciente",
            UserRole::Dentista => "dentista",
            UserRole::Administrador => "administrador",
        }
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            UserRole::Paciente => "Paciente",
            UserRole::Dentista => "Dentista",
            UserRole::Administrador => "Administrador",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body for `POST /api/auth/login`: the identity-provider profile the
/// backend syncs against its own user table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendLoginRequest {
    pub auth0_id: String,
    pub nombre: String,
    pub email: String,
}

/// Response of `POST /api/auth/login`, tagged by the resolved role.
/// Exactly one of the three profile payloads is present, which the
/// tagged representation makes unrepresentable to get wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum BackendLoginResponse {
    Paciente { patient: Paciente },
    Dentista { dentist: Dentista },
    Administrador { administrator: Administrador },
}

impl BackendLoginResponse {
    /// Splits the response into the role and the matching profile.
    pub fn into_partes(self) -> (UserRole, PerfilUsuario) {
        match self {
            BackendLoginResponse::Paciente { patient } => {
                (UserRole::Paciente, PerfilUsuario::Paciente(patient))
            }
            BackendLoginResponse::Dentista { dentist } => {
                (UserRole::Dentista, PerfilUsuario::Dentista(dentist))
            }
            BackendLoginResponse::Administrador { administrator } => (
                UserRole::Administrador,
                PerfilUsuario::Administrador(administrator),
            ),
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            BackendLoginResponse::Paciente { .. } => UserRole::Paciente,
            BackendLoginResponse::Dentista { .. } => UserRole::Dentista,
            BackendLoginResponse::Administrador { .. } => UserRole::Administrador,
        }
    }
}
