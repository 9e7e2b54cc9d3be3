use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::Paciente;
use shared_ui::{
    Avatar, AvatarFallback, Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader,
    CardTitle, Skeleton,
};

use crate::session::use_session;

use super::historial_dialog::HistorialDialog;

/// Patient roster with access to each clinical history. Patients are
/// read-only here; they manage their own data from their panel.
#[component]
pub fn ListadoPacientes() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();

    let pacientes = use_resource(move || {
        let api = api.clone();
        let token = session.get_access_token();
        async move {
            let token = token?;
            api.listar_pacientes(&token).await.ok()
        }
    });

    let mut seleccionado = use_signal(|| None::<Paciente>);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./list.css") }
        div { class: "listado-cabecera",
            h2 { "Pacientes" }
        }

        match &*pacientes.read() {
            Some(Some(lista)) if lista.is_empty() => rsx! {
                p { class: "listado-vacio", "No hay pacientes registrados." }
            },
            Some(Some(lista)) => rsx! {
                div { class: "pacientes-grid",
                    for paciente in lista.iter().cloned() {
                        Card {
                            CardHeader {
                                div { class: "paciente-cabecera",
                                    Avatar {
                                        AvatarFallback { "{paciente.usuario.iniciales()}" }
                                    }
                                    CardTitle { "{paciente.usuario.nombre_completo()}" }
                                }
                            }
                            CardContent {
                                p { class: "paciente-dato", "{paciente.usuario.email}" }
                                if let Some(obra_social) = &paciente.obra_social {
                                    p { class: "paciente-dato", "Obra social: {obra_social}" }
                                }
                                if let Some(telefono) = &paciente.telefono_emergencia {
                                    p { class: "paciente-dato", "Tel. de emergencia: {telefono}" }
                                }
                            }
                            CardFooter {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let paciente = paciente.clone();
                                        move |_| seleccionado.set(Some(paciente.clone()))
                                    },
                                    "Historia clínica"
                                }
                            }
                        }
                    }
                }
            },
            Some(None) => rsx! {
                p { class: "listado-error", "No se pudieron cargar los pacientes." }
            },
            None => rsx! {
                div { class: "pacientes-grid",
                    for _ in 0..3 {
                        Skeleton { class: "skeleton-card" }
                    }
                }
            },
        }

        if let Some(paciente) = seleccionado.read().clone() {
            HistorialDialog {
                key: "{paciente.id}",
                paciente: Some(paciente),
                on_close: move |_| seleccionado.set(None),
            }
        }
    }
}
