pub mod callback;
pub mod dashboard;
pub mod dentistas;
pub mod especialidades;
pub mod home;
pub mod not_found;
pub mod pacientes;
pub mod turnos;

use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{ClinicConfig, UserRole};
use shared_ui::{
    Avatar, AvatarFallback, Badge, BadgeVariant, Button, ButtonVariant, DropdownMenu,
    DropdownMenuContent, DropdownMenuItem, DropdownMenuSeparator, DropdownMenuTrigger, Navbar,
    NavbarNav,
};

use crate::format_helpers::clase_rol;
use crate::session::use_session;

use callback::Callback;
use dashboard::Dashboard;
use home::Home;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/callback?:code&:state")]
    Callback {
        code: Option<String>,
        state: Option<String>,
    },
    #[layout(SessionGuard)]
    #[layout(AppLayout)]
    #[route("/panel")]
    Dashboard {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// What the guard should do for a given session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Not authenticated, back to the landing page.
    RedirigirHome,
    /// Authenticated but the route demands a different role.
    RedirigirDashboard,
    /// Authenticated, backend sync still in flight.
    EsperandoRol,
    /// Authenticated, backend sync failed, offer a retry.
    ReintentarSync,
    Permitir,
}

impl GuardDecision {
    /// Pure decision, tested over the full role/requirement matrix below.
    /// `requerido: None` means the route accepts any resolved role.
    pub fn evaluar(
        autenticado: bool,
        rol: Option<UserRole>,
        requerido: Option<UserRole>,
        sync_fallido: bool,
    ) -> Self {
        if !autenticado {
            return GuardDecision::RedirigirHome;
        }
        match rol {
            Some(rol) => match requerido {
                Some(requerido) if requerido != rol => GuardDecision::RedirigirDashboard,
                _ => GuardDecision::Permitir,
            },
            None if sync_fallido => GuardDecision::ReintentarSync,
            None => GuardDecision::EsperandoRol,
        }
    }
}

/// Session guard layout. An authenticated-but-roleless session does not
/// fall through to an empty dashboard: the sync either finishes, or the
/// user gets a visible retry panel.
#[component]
fn SessionGuard() -> Element {
    let session = use_session();
    let config = use_context::<ClinicConfig>();
    let api = use_context::<ApiClient>();

    // /panel serves every role; routes pinned to one role would pass it here.
    let decision = GuardDecision::evaluar(
        session.is_authenticated(),
        *session.rol.read(),
        None,
        session.error_sync.read().is_some(),
    );

    match decision {
        GuardDecision::Permitir => rsx! { Outlet::<Route> {} },
        GuardDecision::RedirigirHome => {
            navigator().replace(Route::Home {});
            rsx! {
                div { class: "guard-loading",
                    p { "Redirigiendo..." }
                }
            }
        }
        GuardDecision::RedirigirDashboard => {
            navigator().replace(Route::Dashboard {});
            rsx! {
                div { class: "guard-loading",
                    p { "Redirigiendo..." }
                }
            }
        }
        GuardDecision::EsperandoRol => rsx! {
            div { class: "guard-loading",
                p { "Cargando tu sesión..." }
            }
        },
        GuardDecision::ReintentarSync => {
            let mensaje = session
                .error_sync
                .read()
                .as_ref()
                .map(|e| e.mensaje_usuario())
                .unwrap_or_default();
            rsx! {
                div { class: "guard-retry",
                    h2 { "No pudimos cargar tu perfil" }
                    p { "{mensaje}" }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            let mut session = session;
                            let config = config.clone();
                            let api = api.clone();
                            spawn(async move {
                                if session.sync_with_backend(&config, &api).await.is_ok() {
                                    navigator().replace(Route::Dashboard {});
                                }
                            });
                        },
                        "Reintentar"
                    }
                }
            }
        }
    }
}

/// Main layout: top navbar with the role badge and the user dropdown.
#[component]
fn AppLayout() -> Element {
    let mut session = use_session();
    let config = use_context::<ClinicConfig>();

    let rol = *session.rol.read();
    let nombre = session.nombre_completo().unwrap_or_default();
    let iniciales = session
        .perfil
        .read()
        .as_ref()
        .map(|p| p.usuario().iniciales())
        .unwrap_or_default();

    let clase_navbar = rol.map(clase_rol).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        Navbar {
            div { class: "navbar-bar {clase_navbar}",
                Link { to: Route::Home {}, class: "navbar-brand", "Clínica Dental" }

                div { class: "navbar-spacer" }

                NavbarNav {
                    if let Some(rol) = rol {
                        Badge { variant: rol_badge_variant(rol), "{rol.etiqueta()}" }
                    }

                    DropdownMenu {
                        DropdownMenuTrigger {
                            Avatar {
                                AvatarFallback { "{iniciales}" }
                            }
                            span { class: "navbar-nombre", "{nombre}" }
                        }
                        DropdownMenuContent {
                            DropdownMenuItem::<String> {
                                value: "panel".to_string(),
                                index: 0usize,
                                on_select: move |_: String| {
                                    navigator().push(Route::Dashboard {});
                                },
                                "Mi panel"
                            }
                            DropdownMenuSeparator {}
                            DropdownMenuItem::<String> {
                                value: "logout".to_string(),
                                index: 1usize,
                                on_select: move |_: String| {
                                    session.logout(&config, config.auth_redirect_uri.trim_end_matches("/callback"));
                                },
                                "Cerrar sesión"
                            }
                        }
                    }
                }
            }
        }

        div { class: "page-content",
            Outlet::<Route> {}
        }
    }
}

fn rol_badge_variant(rol: UserRole) -> BadgeVariant {
    match rol {
        UserRole::Paciente => BadgeVariant::Info,
        UserRole::Dentista => BadgeVariant::Success,
        UserRole::Administrador => BadgeVariant::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ROLES: [UserRole; 3] = [
        UserRole::Paciente,
        UserRole::Dentista,
        UserRole::Administrador,
    ];

    #[test]
    fn anonymous_always_goes_home() {
        for rol in [None, Some(UserRole::Paciente)] {
            for requerido in [None, Some(UserRole::Administrador)] {
                assert_eq!(
                    GuardDecision::evaluar(false, rol, requerido, false),
                    GuardDecision::RedirigirHome
                );
                assert_eq!(
                    GuardDecision::evaluar(false, rol, requerido, true),
                    GuardDecision::RedirigirHome
                );
            }
        }
    }

    #[test]
    fn role_requirement_matrix() {
        for rol in ROLES {
            // Routes without a pinned role accept any resolved session.
            assert_eq!(
                GuardDecision::evaluar(true, Some(rol), None, false),
                GuardDecision::Permitir
            );
            for requerido in ROLES {
                let esperado = if rol == requerido {
                    GuardDecision::Permitir
                } else {
                    GuardDecision::RedirigirDashboard
                };
                assert_eq!(
                    GuardDecision::evaluar(true, Some(rol), Some(requerido), false),
                    esperado,
                    "rol {rol:?} requerido {requerido:?}"
                );
            }
        }
    }

    #[test]
    fn roleless_session_waits_or_retries() {
        for requerido in [None, Some(UserRole::Dentista)] {
            assert_eq!(
                GuardDecision::evaluar(true, None, requerido, false),
                GuardDecision::EsperandoRol
            );
            assert_eq!(
                GuardDecision::evaluar(true, None, requerido, true),
                GuardDecision::ReintentarSync
            );
        }
    }
}
