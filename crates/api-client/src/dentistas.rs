//! Dentist directory and admin maintenance endpoints.

use shared_types::{ActualizarDentistaRequest, ApiError, Dentista};

use crate::{enviar_json, enviar_sin_cuerpo, ApiClient};

impl ApiClient {
    pub async fn listar_dentistas(&self, token: &str) -> Result<Vec<Dentista>, ApiError> {
        enviar_json(self.get("/api/dentista", token)).await
    }

    pub async fn obtener_dentista(&self, token: &str, id: i64) -> Result<Dentista, ApiError> {
        enviar_json(self.get(&format!("/api/dentista/{id}"), token)).await
    }

    pub async fn actualizar_dentista(
        &self,
        token: &str,
        id: i64,
        cambios: &ActualizarDentistaRequest,
    ) -> Result<Dentista, ApiError> {
        enviar_json(
            self.patch(&format!("/api/dentista/actualizar/{id}"), token)
                .json(cambios),
        )
        .await
    }

    /// Deactivates a dentist. The backend keeps the record for history;
    /// it just stops offering the dentist for new turnos.
    pub async fn dar_de_baja_dentista(&self, token: &str, id: i64) -> Result<(), ApiError> {
        enviar_sin_cuerpo(self.post(&format!("/api/dentista/dar-de-baja/{id}"), token)).await
    }
}
