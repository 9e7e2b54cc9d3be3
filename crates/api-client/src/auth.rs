//! Backend session sync: `POST /api/auth/login`.

use shared_types::{ApiError, BackendLoginRequest, BackendLoginResponse};

use crate::{enviar_json, ApiClient};

impl ApiClient {
    /// Syncs the identity-provider profile with the backend and gets
    /// back the resolved role plus the matching clinic profile.
    pub async fn login(
        &self,
        token: &str,
        request: &BackendLoginRequest,
    ) -> Result<BackendLoginResponse, ApiError> {
        tracing::info!(email = %request.email, "sincronizando sesión con el backend");
        enviar_json(self.post("/api/auth/login", token).json(request)).await
    }
}
