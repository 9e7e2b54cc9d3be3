/// Deployment settings baked in at compile time. Each value can be
/// overridden with a `CLINIC_*` environment variable at build time;
/// the defaults target a local development setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicConfig {
    /// Identity-provider tenant domain, e.g. `dev-clinic.us.auth0.com`.
    pub auth_domain: &'static str,
    /// OAuth client id of this single-page application.
    pub auth_client_id: &'static str,
    /// API audience requested with the access token.
    pub auth_audience: &'static str,
    /// Redirect URI registered for the authorization-code callback.
    pub auth_redirect_uri: &'static str,
    /// Base URL of the clinic backend, without a trailing slash.
    pub api_url: &'static str,
}

impl ClinicConfig {
    pub fn from_env() -> Self {
        Self {
            auth_domain: option_env!("CLINIC_AUTH_DOMAIN").unwrap_or("dev-clinic.us.auth0.com"),
            auth_client_id: option_env!("CLINIC_AUTH_CLIENT_ID").unwrap_or("dev-client-id"),
            auth_audience: option_env!("CLINIC_AUTH_AUDIENCE")
                .unwrap_or("https://api.clinica-dental.local"),
            auth_redirect_uri: option_env!("CLINIC_AUTH_REDIRECT_URI")
                .unwrap_or("http://localhost:8080/callback"),
            api_url: option_env!("CLINIC_API_URL").unwrap_or("http://localhost:3000"),
        }
    }
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_has_no_trailing_slash() {
        let config = ClinicConfig::from_env();
        assert!(!config.api_url.ends_with('/'));
    }
}
