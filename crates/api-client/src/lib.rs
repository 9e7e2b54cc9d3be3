//! HTTP client for the clinic backend and the OIDC identity provider.
//!
//! Every method returns `Result<_, ApiError>`; non-2xx responses are
//! mapped onto the error taxonomy in one place so callers only match
//! on [`ApiErrorKind`](shared_types::ApiErrorKind).

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared_types::ApiError;

pub mod auth;
pub mod dentistas;
pub mod especialidades;
pub mod oidc;
pub mod pacientes;
pub mod turnos;

/// Shape of the backend's error body, when it bothers to send one.
#[derive(Debug, serde::Deserialize)]
struct CuerpoError {
    message: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str, token: &str) -> RequestBuilder {
        self.http.get(self.url(path)).bearer_auth(token)
    }

    fn post(&self, path: &str, token: &str) -> RequestBuilder {
        self.http.post(self.url(path)).bearer_auth(token)
    }

    fn patch(&self, path: &str, token: &str) -> RequestBuilder {
        self.http.patch(self.url(path)).bearer_auth(token)
    }

    fn delete(&self, path: &str, token: &str) -> RequestBuilder {
        self.http.delete(self.url(path)).bearer_auth(token)
    }
}

/// Sends the request and decodes a JSON body, folding transport,
/// status, and decode failures into [`ApiError`].
async fn enviar_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await.map_err(error_de_transporte)?;
    let response = chequear_estado(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode(format!("respuesta inválida del servidor: {e}")))
}

/// Sends a request whose success body we discard (DELETE and the like).
async fn enviar_sin_cuerpo(request: RequestBuilder) -> Result<(), ApiError> {
    let response = request.send().await.map_err(error_de_transporte)?;
    chequear_estado(response).await?;
    Ok(())
}

async fn chequear_estado(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let mensaje = match response.json::<CuerpoError>().await {
        Ok(cuerpo) => cuerpo.message.or(cuerpo.error).unwrap_or_default(),
        Err(_) => String::new(),
    };
    tracing::warn!(status = status.as_u16(), %mensaje, "respuesta de error del backend");
    Err(ApiError::from_status(status.as_u16(), mensaje))
}

fn error_de_transporte(e: reqwest::Error) -> ApiError {
    tracing::error!(error = %e, "fallo de red contra el backend");
    ApiError::network(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/api/turno"), "http://localhost:3000/api/turno");
    }
}
