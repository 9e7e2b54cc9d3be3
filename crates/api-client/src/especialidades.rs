//! CRUD for especialidades (admin only on the write side).

use shared_types::{ApiError, Especialidad, NombreEspecialidadRequest};

use crate::{enviar_json, enviar_sin_cuerpo, ApiClient};

impl ApiClient {
    pub async fn listar_especialidades(&self, token: &str) -> Result<Vec<Especialidad>, ApiError> {
        enviar_json(self.get("/api/especialidades", token)).await
    }

    pub async fn crear_especialidad(
        &self,
        token: &str,
        nombre: &str,
    ) -> Result<Especialidad, ApiError> {
        let body = NombreEspecialidadRequest {
            nombre: nombre.trim().to_string(),
        };
        enviar_json(self.post("/api/especialidades/crear", token).json(&body)).await
    }

    pub async fn actualizar_especialidad(
        &self,
        token: &str,
        id: i64,
        nombre: &str,
    ) -> Result<Especialidad, ApiError> {
        let body = NombreEspecialidadRequest {
            nombre: nombre.trim().to_string(),
        };
        enviar_json(
            self.patch(&format!("/api/especialidades/{id}"), token)
                .json(&body),
        )
        .await
    }

    pub async fn eliminar_especialidad(&self, token: &str, id: i64) -> Result<(), ApiError> {
        enviar_sin_cuerpo(self.delete(&format!("/api/especialidades/{id}"), token)).await
    }
}
