use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of errors surfaced by the backend API or the HTTP layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    BadRequest,
    Validation,
    Network,
    Decode,
    Internal,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Unauthorized => write!(f, "Unauthorized"),
            ApiErrorKind::Forbidden => write!(f, "Forbidden"),
            ApiErrorKind::NotFound => write!(f, "NotFound"),
            ApiErrorKind::Conflict => write!(f, "Conflict"),
            ApiErrorKind::BadRequest => write!(f, "BadRequest"),
            ApiErrorKind::Validation => write!(f, "Validation"),
            ApiErrorKind::Network => write!(f, "Network"),
            ApiErrorKind::Decode => write!(f, "Decode"),
            ApiErrorKind::Internal => write!(f, "Internal"),
        }
    }
}

/// Structured error used across the API client and the UI.
///
/// Every fallible call in the client returns `Result<_, ApiError>` — there
/// is no empty-collection fallback path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Conflict,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Internal,
            message: message.into(),
        }
    }

    /// Map an HTTP status code to an error, keeping the backend's message
    /// when it sent one.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = match status {
            400 => ApiErrorKind::BadRequest,
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            409 => ApiErrorKind::Conflict,
            422 => ApiErrorKind::Validation,
            _ => ApiErrorKind::Internal,
        };
        Self { kind, message }
    }

    /// Whether this error is the scheduling collision the backend reports
    /// with HTTP 409 on turno creation/update.
    pub fn es_conflicto(&self) -> bool {
        self.kind == ApiErrorKind::Conflict
    }

    /// A message fit for a toast. Conflict gets the fixed scheduling text;
    /// everything else falls back to the backend's message.
    pub fn mensaje_usuario(&self) -> String {
        match self.kind {
            ApiErrorKind::Conflict => "Ya existe un turno para esa fecha y hora".to_string(),
            ApiErrorKind::Unauthorized => {
                "No se pudo obtener el token de autenticación".to_string()
            }
            ApiErrorKind::Network => "No se pudo conectar con el servidor".to_string(),
            _ if !self.message.is_empty() => self.message.clone(),
            _ => "Ocurrió un error inesperado".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_status_maps_conflict() {
        let err = ApiError::from_status(409, "duplicate slot");
        assert_eq!(err.kind, ApiErrorKind::Conflict);
        assert!(err.es_conflicto());
    }

    #[test]
    fn from_status_maps_auth_codes() {
        assert_eq!(
            ApiError::from_status(401, "").kind,
            ApiErrorKind::Unauthorized
        );
        assert_eq!(ApiError::from_status(403, "").kind, ApiErrorKind::Forbidden);
    }

    #[test]
    fn from_status_unknown_is_internal() {
        assert_eq!(ApiError::from_status(500, "").kind, ApiErrorKind::Internal);
        assert_eq!(ApiError::from_status(502, "").kind, ApiErrorKind::Internal);
    }

    #[test]
    fn conflict_user_message_is_fixed() {
        let err = ApiError::from_status(409, "whatever the backend said");
        assert_eq!(
            err.mensaje_usuario(),
            "Ya existe un turno para esa fecha y hora"
        );
    }

    #[test]
    fn user_message_falls_back_to_backend_text() {
        let err = ApiError::from_status(404, "turno no encontrado");
        assert_eq!(err.mensaje_usuario(), "turno no encontrado");
    }

    #[test]
    fn user_message_generic_when_empty() {
        let err = ApiError::from_status(500, "");
        assert_eq!(err.mensaje_usuario(), "Ocurrió un error inesperado");
    }

    #[test]
    fn display_impl_formats_kind_and_message() {
        let err = ApiError::unauthorized("token expirado");
        assert_eq!(format!("{err}"), "Unauthorized: token expirado");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = ApiError::conflict("slot taken");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
