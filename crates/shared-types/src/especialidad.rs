use serde::{Deserialize, Serialize};

/// Named medical specialty, referenced by dentists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Especialidad {
    pub id: i64,
    pub nombre: String,
}

/// Body for `POST /api/especialidades/crear` and
/// `PATCH /api/especialidades/{id}` — both take just a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NombreEspecialidadRequest {
    pub nombre: String,
}

/// Client-side check for the create/edit forms: an empty or
/// whitespace-only name never reaches the network.
pub fn nombre_especialidad_valido(nombre: &str) -> bool {
    !nombre.trim().is_empty()
}

/// Renaming a specialty to its current name is a no-op: the edit form
/// just closes without issuing a request. Only an edit (with the
/// original name at hand) can be a no-op.
pub fn renombre_es_noop(original: Option<&str>, nuevo: &str) -> bool {
    original == Some(nuevo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_and_whitespace_names_rejected() {
        assert!(!nombre_especialidad_valido(""));
        assert!(!nombre_especialidad_valido("   "));
        assert!(!nombre_especialidad_valido("\t\n"));
    }

    #[test]
    fn real_names_accepted() {
        assert!(nombre_especialidad_valido("Ortodoncia"));
        assert!(nombre_especialidad_valido("  Endodoncia  "));
    }

    #[test]
    fn renaming_to_the_same_name_is_a_noop() {
        assert!(renombre_es_noop(Some("Ortodoncia"), "Ortodoncia"));
        assert!(!renombre_es_noop(Some("Ortodoncia"), "Endodoncia"));
        // Creation never has an original name, so it is never a no-op.
        assert!(!renombre_es_noop(None, "Ortodoncia"));
    }

    #[test]
    fn request_serializes_single_field() {
        let req = NombreEspecialidadRequest {
            nombre: "Periodoncia".into(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"nombre":"Periodoncia"}"#
        );
    }
}
