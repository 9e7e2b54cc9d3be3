use shared_types::{ApiError, Paciente};

use crate::{enviar_json, ApiClient};

impl ApiClient {
    pub async fn listar_pacientes(&self, token: &str) -> Result<Vec<Paciente>, ApiError> {
        enviar_json(self.get("/api/paciente", token)).await
    }
}
