//! Authorization-code + PKCE flow against the OIDC identity provider.
//!
//! The provider only authenticates; roles come from the clinic backend
//! after [`ApiClient::login`](crate::ApiClient::login).

use oauth2::{CsrfToken, PkceCodeChallenge};
use serde::Deserialize;
use shared_types::{ApiError, ClinicConfig};

/// Everything the caller must stash before redirecting the browser:
/// the URL to navigate to, plus the verifier and state that the
/// callback needs to finish the exchange.
#[derive(Debug, Clone)]
pub struct RedireccionLogin {
    pub authorize_url: String,
    pub pkce_verifier: String,
    pub state: String,
}

/// Successful token exchange. Only `access_token` is used afterwards;
/// the rest is kept for completeness of the wire format.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRespuesta {
    pub access_token: String,
    #[serde(default)]
    pub id_token: Option<String>,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Builds the `/authorize` URL with a fresh PKCE pair and CSRF state.
pub fn preparar_login(config: &ClinicConfig) -> RedireccionLogin {
    let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();
    let state = CsrfToken::new_random();

    let authorize_url = format!(
        "https://{}/authorize?response_type=code&client_id={}&redirect_uri={}&scope={}&audience={}&state={}&code_challenge={}&code_challenge_method=S256",
        config.auth_domain,
        urlencoding::encode(config.auth_client_id),
        urlencoding::encode(config.auth_redirect_uri),
        urlencoding::encode("openid profile email"),
        urlencoding::encode(config.auth_audience),
        urlencoding::encode(state.secret()),
        pkce_challenge.as_str(),
    );

    RedireccionLogin {
        authorize_url,
        pkce_verifier: pkce_verifier.secret().to_string(),
        state: state.secret().to_string(),
    }
}

/// Exchanges the authorization code for tokens at `/oauth/token`.
pub async fn canjear_codigo(
    config: &ClinicConfig,
    code: &str,
    pkce_verifier: &str,
) -> Result<TokenRespuesta, ApiError> {
    let token_url = format!("https://{}/oauth/token", config.auth_domain);
    let form = [
        ("grant_type", "authorization_code"),
        ("client_id", config.auth_client_id),
        ("code", code),
        ("redirect_uri", config.auth_redirect_uri),
        ("code_verifier", pkce_verifier),
    ];

    let response = reqwest::Client::new()
        .post(&token_url)
        .form(&form)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "fallo de red contra el proveedor de identidad");
            ApiError::network(e.to_string())
        })?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        tracing::warn!(status, "el proveedor de identidad rechazó el código");
        return Err(ApiError::unauthorized(
            "el proveedor de identidad rechazó el código de autorización",
        ));
    }

    response
        .json::<TokenRespuesta>()
        .await
        .map_err(|e| ApiError::decode(format!("respuesta de token inválida: {e}")))
}

/// Identity claims from the provider's userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PerfilOidc {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Fetches the authenticated user's claims with the access token.
pub async fn obtener_perfil(
    config: &ClinicConfig,
    access_token: &str,
) -> Result<PerfilOidc, ApiError> {
    let userinfo_url = format!("https://{}/userinfo", config.auth_domain);
    let response = reqwest::Client::new()
        .get(&userinfo_url)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ApiError::unauthorized(
            "no se pudo obtener el perfil del proveedor de identidad",
        ));
    }

    response
        .json::<PerfilOidc>()
        .await
        .map_err(|e| ApiError::decode(format!("perfil de identidad inválido: {e}")))
}

/// Provider-side logout, returning to the app's landing page.
pub fn logout_url(config: &ClinicConfig, return_to: &str) -> String {
    format!(
        "https://{}/v2/logout?client_id={}&returnTo={}",
        config.auth_domain,
        urlencoding::encode(config.auth_client_id),
        urlencoding::encode(return_to),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> ClinicConfig {
        ClinicConfig::from_env()
    }

    #[test]
    fn authorize_url_carries_pkce_and_state() {
        let login = preparar_login(&config());
        assert!(login.authorize_url.contains("response_type=code"));
        assert!(login.authorize_url.contains("code_challenge_method=S256"));
        assert!(login
            .authorize_url
            .contains(&format!("state={}", urlencoding::encode(&login.state))));
        assert!(!login.pkce_verifier.is_empty());
    }

    #[test]
    fn every_login_gets_fresh_secrets() {
        let a = preparar_login(&config());
        let b = preparar_login(&config());
        assert_ne!(a.state, b.state);
        assert_ne!(a.pkce_verifier, b.pkce_verifier);
    }

    #[test]
    fn logout_url_encodes_return_target() {
        let url = logout_url(&config(), "http://localhost:8080/");
        assert!(url.contains("/v2/logout"));
        assert!(url.contains("returnTo=http%3A%2F%2Flocalhost%3A8080%2F"));
    }

    #[test]
    fn token_response_tolerates_missing_optionals() {
        let json = serde_json::json!({
            "access_token": "abc",
            "token_type": "Bearer"
        });
        let parsed: TokenRespuesta = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.access_token, "abc");
        assert!(parsed.id_token.is_none());
    }
}
