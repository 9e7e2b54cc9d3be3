use dioxus::prelude::*;

use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Página no encontrada" }
                p { class: "not-found-message",
                    "La página "
                    code { "{path}" }
                    " no existe."
                }
                Link { to: Route::Home {},
                    class: "not-found-link",
                    "Volver al inicio"
                }
            }
        }
    }
}
