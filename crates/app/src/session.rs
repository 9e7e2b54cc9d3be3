use api_client::{oidc, ApiClient};
use dioxus::prelude::*;
use shared_types::{ApiError, BackendLoginRequest, ClinicConfig, PerfilUsuario, UserRole};

const CLAVE_VERIFIER: &str = "clinic_pkce_verifier";
const CLAVE_STATE: &str = "clinic_oauth_state";

/// Global session state, provided via context from `App`.
///
/// The identity provider only answers "who is this"; the backend answers
/// "what are they". Both answers live here: the access token from the
/// code exchange, and the role + profile from the backend sync.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub access_token: Signal<Option<String>>,
    pub rol: Signal<Option<UserRole>>,
    pub perfil: Signal<Option<PerfilUsuario>>,
    /// Set when the backend sync failed; drives the retry panel.
    pub error_sync: Signal<Option<ApiError>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            access_token: Signal::new(None),
            rol: Signal::new(None),
            perfil: Signal::new(None),
            error_sync: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.read().is_some()
    }

    /// Authenticated but the backend never resolved a role. This is the
    /// state the retry panel renders for.
    pub fn sync_pendiente(&self) -> bool {
        self.is_authenticated() && self.rol.read().is_none()
    }

    pub fn get_access_token(&self) -> Option<String> {
        self.access_token.read().clone()
    }

    pub fn nombre_completo(&self) -> Option<String> {
        self.perfil
            .read()
            .as_ref()
            .map(|p| p.usuario().nombre_completo())
    }

    pub fn set_token(&mut self, token: String) {
        self.access_token.set(Some(token));
    }

    pub fn completar_sync(&mut self, rol: UserRole, perfil: PerfilUsuario) {
        self.rol.set(Some(rol));
        self.perfil.set(Some(perfil));
        self.error_sync.set(None);
    }

    pub fn clear(&mut self) {
        self.access_token.set(None);
        self.rol.set(None);
        self.perfil.set(None);
        self.error_sync.set(None);
    }

    /// Starts the authorization-code flow: stashes the PKCE verifier and
    /// CSRF state in session storage, then sends the browser away.
    pub fn login(&self, config: &ClinicConfig) {
        let redireccion = oidc::preparar_login(config);
        guardar(CLAVE_VERIFIER, &redireccion.pkce_verifier);
        guardar(CLAVE_STATE, &redireccion.state);
        tracing::info!("redirigiendo al proveedor de identidad");
        redirigir(&redireccion.authorize_url);
    }

    /// Clears the local session and logs out at the provider too.
    pub fn logout(&mut self, config: &ClinicConfig, return_to: &str) {
        self.clear();
        borrar(CLAVE_VERIFIER);
        borrar(CLAVE_STATE);
        redirigir(&oidc::logout_url(config, return_to));
    }

    /// One POST of the identity claims to the backend. On success the
    /// role and profile are stored; on failure the error is kept so the
    /// caller can offer a retry.
    pub async fn sync_with_backend(
        &mut self,
        config: &ClinicConfig,
        api: &ApiClient,
    ) -> Result<UserRole, ApiError> {
        let Some(token) = self.get_access_token() else {
            return Err(ApiError::unauthorized("sesión sin token de acceso"));
        };

        let claims = oidc::obtener_perfil(config, &token).await?;
        let request = BackendLoginRequest {
            auth0_id: claims.sub,
            nombre: claims.name.unwrap_or_default(),
            email: claims.email.unwrap_or_default(),
        };

        match api.login(&token, &request).await {
            Ok(respuesta) => {
                let (rol, perfil) = respuesta.into_partes();
                tracing::info!(rol = %rol, "sesión sincronizada con el backend");
                self.completar_sync(rol, perfil);
                Ok(rol)
            }
            Err(e) => {
                tracing::error!(error = %e, "fallo la sincronización con el backend");
                self.error_sync.set(Some(e.clone()));
                Err(e)
            }
        }
    }
}

/// Hook to access the session from any route.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Reads the verifier and state saved before the login redirect.
pub async fn leer_datos_callback() -> (Option<String>, Option<String>) {
    (leer(CLAVE_VERIFIER).await, leer(CLAVE_STATE).await)
}

pub fn limpiar_datos_callback() {
    borrar(CLAVE_VERIFIER);
    borrar(CLAVE_STATE);
}

// Session-storage and navigation shims over the browser.

fn guardar(clave: &str, valor: &str) {
    let _ = document::eval(&format!(
        "sessionStorage.setItem('{clave}', '{}');",
        valor.replace('\'', "")
    ));
}

async fn leer(clave: &str) -> Option<String> {
    let eval = document::eval(&format!("return sessionStorage.getItem('{clave}');"));
    match eval.await {
        Ok(valor) => valor.as_str().map(|s| s.to_string()),
        Err(_) => None,
    }
}

fn borrar(clave: &str) {
    let _ = document::eval(&format!("sessionStorage.removeItem('{clave}');"));
}

fn redirigir(url: &str) {
    let _ = document::eval(&format!("window.location.assign('{url}');"));
}
