//! Appointment endpoints, including the status state machine.

use shared_types::{
    ApiError, CambiarEstadoRequest, ConsultaMedica, CrearTurnoRequest, Turno, TurnoEstado,
};

use crate::{enviar_json, enviar_sin_cuerpo, ApiClient};

impl ApiClient {
    pub async fn listar_turnos(&self, token: &str) -> Result<Vec<Turno>, ApiError> {
        enviar_json(self.get("/api/turno", token)).await
    }

    pub async fn listar_turnos_de_dentista(
        &self,
        token: &str,
        dentista_id: i64,
    ) -> Result<Vec<Turno>, ApiError> {
        enviar_json(self.get(&format!("/api/turno/dentista/{dentista_id}"), token)).await
    }

    pub async fn listar_turnos_de_paciente(
        &self,
        token: &str,
        paciente_id: i64,
    ) -> Result<Vec<Turno>, ApiError> {
        enviar_json(self.get(&format!("/api/turno/paciente/{paciente_id}"), token)).await
    }

    /// Books a turno. A 409 means the dentist already has a turno at
    /// that exact date and time.
    pub async fn crear_turno(
        &self,
        token: &str,
        request: &CrearTurnoRequest,
    ) -> Result<Turno, ApiError> {
        enviar_json(self.post("/api/turno/crear", token).json(request)).await
    }

    /// Reschedules an existing turno. Same 409 semantics as creation.
    pub async fn actualizar_turno(
        &self,
        token: &str,
        id: i64,
        request: &CrearTurnoRequest,
    ) -> Result<Turno, ApiError> {
        enviar_json(
            self.patch(&format!("/api/turno/actualizar/{id}"), token)
                .json(request),
        )
        .await
    }

    /// Records the consultation outcome, moving the turno to its final
    /// state with mandatory treatment notes.
    pub async fn registrar_consulta(
        &self,
        token: &str,
        id: i64,
        consulta: &ConsultaMedica,
    ) -> Result<Turno, ApiError> {
        enviar_json(
            self.patch(&format!("/api/turno/actualizar/{id}"), token)
                .json(consulta),
        )
        .await
    }

    /// Moves a turno along its lifecycle. Callers must check
    /// [`TurnoEstado::puede_transicionar`] first; the backend rejects
    /// illegal jumps too, but the UI should never offer them.
    pub async fn cambiar_estado_turno(
        &self,
        token: &str,
        id: i64,
        estado: TurnoEstado,
    ) -> Result<Turno, ApiError> {
        let body = CambiarEstadoRequest { estado };
        enviar_json(
            self.patch(&format!("/api/turno/estado/{id}"), token)
                .json(&body),
        )
        .await
    }

    pub async fn eliminar_turno(&self, token: &str, id: i64) -> Result<(), ApiError> {
        enviar_sin_cuerpo(self.delete(&format!("/api/turno/{id}"), token)).await
    }
}
