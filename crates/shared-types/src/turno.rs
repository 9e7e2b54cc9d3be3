use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::usuario::{Dentista, Paciente};

/// Appointment status. The wire format uses the backend's uppercase
/// Spanish tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnoEstado {
    Programado,
    EnCurso,
    Terminado,
    Cancelado,
}

impl TurnoEstado {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnoEstado::Programado => "PROGRAMADO",
            TurnoEstado::EnCurso => "EN_CURSO",
            TurnoEstado::Terminado => "TERMINADO",
            TurnoEstado::Cancelado => "CANCELADO",
        }
    }

    /// Human label shown next to the status badge.
    pub fn etiqueta(&self) -> &'static str {
        match self {
            TurnoEstado::Programado => "Programado",
            TurnoEstado::EnCurso => "En curso",
            TurnoEstado::Terminado => "Terminado",
            TurnoEstado::Cancelado => "Cancelado",
        }
    }

    /// The transition table for the appointment lifecycle:
    /// Programado → EnCurso | Cancelado, EnCurso → Terminado | Cancelado.
    /// Terminado and Cancelado are terminal.
    pub fn transiciones(&self) -> &'static [TurnoEstado] {
        match self {
            TurnoEstado::Programado => &[TurnoEstado::EnCurso, TurnoEstado::Cancelado],
            TurnoEstado::EnCurso => &[TurnoEstado::Terminado, TurnoEstado::Cancelado],
            TurnoEstado::Terminado | TurnoEstado::Cancelado => &[],
        }
    }

    /// Whether `hacia` is a legal next state. Checked at every call site
    /// before the status PATCH is issued.
    pub fn puede_transicionar(&self, hacia: TurnoEstado) -> bool {
        self.transiciones().contains(&hacia)
    }

    pub fn es_terminal(&self) -> bool {
        self.transiciones().is_empty()
    }
}

/// Appointment linking a patient and a dentist at a date-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turno {
    pub id: i64,
    pub paciente: Paciente,
    pub dentista: Dentista,
    pub fecha_hora: DateTime<Utc>,
    pub estado: TurnoEstado,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notas_tratamiento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comentarios: Option<String>,
}

/// Body for `POST /api/turno/crear` and `PATCH /api/turno/actualizar/{id}`.
/// The (dentistaId, fechaHora) pair must be unique; the backend answers
/// 409 on a collision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrearTurnoRequest {
    pub paciente_id: i64,
    pub dentista_id: i64,
    pub fecha_hora: DateTime<Utc>,
}

/// Body for `PATCH /api/turno/estado/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CambiarEstadoRequest {
    pub estado: TurnoEstado,
}

/// Consultation record sent when a dentist completes a turno via
/// `PATCH /api/turno/actualizar/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultaMedica {
    pub estado: TurnoEstado,
    pub notas_tratamiento: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comentarios: Option<String>,
}

/// Treatment notes are mandatory before a consultation can be completed.
pub fn notas_tratamiento_validas(notas: &str) -> bool {
    !notas.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn estado_serializes_uppercase_tags() {
        assert_eq!(
            serde_json::to_string(&TurnoEstado::EnCurso).unwrap(),
            r#""EN_CURSO""#
        );
        let parsed: TurnoEstado = serde_json::from_str(r#""PROGRAMADO""#).unwrap();
        assert_eq!(parsed, TurnoEstado::Programado);
    }

    #[test]
    fn programado_can_start_or_cancel() {
        assert!(TurnoEstado::Programado.puede_transicionar(TurnoEstado::EnCurso));
        assert!(TurnoEstado::Programado.puede_transicionar(TurnoEstado::Cancelado));
        assert!(!TurnoEstado::Programado.puede_transicionar(TurnoEstado::Terminado));
    }

    #[test]
    fn en_curso_can_finish_or_cancel() {
        assert!(TurnoEstado::EnCurso.puede_transicionar(TurnoEstado::Terminado));
        assert!(TurnoEstado::EnCurso.puede_transicionar(TurnoEstado::Cancelado));
        assert!(!TurnoEstado::EnCurso.puede_transicionar(TurnoEstado::Programado));
    }

    #[test]
    fn terminal_states_allow_nothing() {
        for terminal in [TurnoEstado::Terminado, TurnoEstado::Cancelado] {
            assert!(terminal.es_terminal());
            for destino in [
                TurnoEstado::Programado,
                TurnoEstado::EnCurso,
                TurnoEstado::Terminado,
                TurnoEstado::Cancelado,
            ] {
                assert!(!terminal.puede_transicionar(destino));
            }
        }
    }

    #[test]
    fn no_state_transitions_to_itself() {
        for estado in [
            TurnoEstado::Programado,
            TurnoEstado::EnCurso,
            TurnoEstado::Terminado,
            TurnoEstado::Cancelado,
        ] {
            assert!(!estado.puede_transicionar(estado));
        }
    }

    #[test]
    fn notas_validation_rejects_whitespace() {
        assert!(!notas_tratamiento_validas(""));
        assert!(!notas_tratamiento_validas("   \n"));
        assert!(notas_tratamiento_validas("Limpieza y control"));
    }

    #[test]
    fn crear_request_serializes_camel_case() {
        let req = CrearTurnoRequest {
            paciente_id: 1,
            dentista_id: 2,
            fecha_hora: "2026-03-10T14:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["pacienteId"], 1);
        assert_eq!(json["dentistaId"], 2);
        assert!(json["fechaHora"].as_str().unwrap().starts_with("2026-03-10T14:30"));
    }

    #[test]
    fn consulta_omits_empty_comentarios() {
        let consulta = ConsultaMedica {
            estado: TurnoEstado::Terminado,
            notas_tratamiento: "Extracción pieza 38".into(),
            comentarios: None,
        };
        let json = serde_json::to_value(&consulta).unwrap();
        assert_eq!(json["estado"], "TERMINADO");
        assert!(json.get("comentarios").is_none());
    }
}
