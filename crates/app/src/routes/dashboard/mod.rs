pub mod admin;
pub mod dentista;
pub mod paciente;

use dioxus::prelude::*;
use shared_types::UserRole;

use crate::session::use_session;

/// Role-adaptive dashboard. The guard guarantees a resolved role by the
/// time this renders.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let rol = *session.rol.read();

    match rol {
        Some(UserRole::Paciente) => rsx! { paciente::DashboardPaciente {} },
        Some(UserRole::Dentista) => rsx! { dentista::DashboardDentista {} },
        Some(UserRole::Administrador) => rsx! { admin::DashboardAdmin {} },
        None => rsx! {
            div { class: "guard-loading",
                p { "Cargando tu sesión..." }
            }
        },
    }
}
