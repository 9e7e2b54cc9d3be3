use api_client::{oidc, ApiClient};
use dioxus::prelude::*;
use shared_types::ClinicConfig;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;
use crate::session::{self, use_session};

#[derive(Clone, PartialEq)]
enum EstadoCallback {
    Procesando,
    Fallo(String),
}

/// Landing point of the authorization-code redirect. Validates the CSRF
/// state, exchanges the code, syncs with the backend, and only then
/// moves on to the dashboard.
#[component]
pub fn Callback(code: Option<String>, state: Option<String>) -> Element {
    let mut session = use_session();
    let config = use_context::<ClinicConfig>();
    let api = use_context::<ApiClient>();

    let mut estado = use_signal(|| EstadoCallback::Procesando);

    use_effect(move || {
        let code = code.clone();
        let state = state.clone();
        let api = api.clone();
        spawn(async move {
            let (Some(code), Some(state)) = (code, state) else {
                estado.set(EstadoCallback::Fallo(
                    "La respuesta del proveedor de identidad está incompleta.".to_string(),
                ));
                return;
            };

            let (verifier, state_guardado) = session::leer_datos_callback().await;
            session::limpiar_datos_callback();

            let Some(verifier) = verifier else {
                estado.set(EstadoCallback::Fallo(
                    "No se encontró el inicio de sesión. Volvé a intentarlo.".to_string(),
                ));
                return;
            };
            if state_guardado.as_deref() != Some(state.as_str()) {
                tracing::warn!("el parámetro state no coincide con el guardado");
                estado.set(EstadoCallback::Fallo(
                    "La respuesta del proveedor de identidad no es válida.".to_string(),
                ));
                return;
            }

            let tokens = match oidc::canjear_codigo(&config, &code, &verifier).await {
                Ok(tokens) => tokens,
                Err(e) => {
                    estado.set(EstadoCallback::Fallo(e.mensaje_usuario()));
                    return;
                }
            };
            session.set_token(tokens.access_token);

            match session.sync_with_backend(&config, &api).await {
                Ok(_) => {
                    navigator().replace(Route::Dashboard {});
                }
                Err(_) => {
                    // The guard shows the retry panel for this state.
                    navigator().replace(Route::Dashboard {});
                }
            }
        });
    });

    match &*estado.read() {
        EstadoCallback::Procesando => rsx! {
            div { class: "guard-loading",
                p { "Completando el inicio de sesión..." }
            }
        },
        EstadoCallback::Fallo(mensaje) => rsx! {
            div { class: "guard-retry",
                h2 { "No se pudo iniciar sesión" }
                p { "{mensaje}" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        navigator().replace(Route::Home {});
                    },
                    "Volver al inicio"
                }
            }
        },
    }
}
