use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::Especialidad;
use shared_ui::{Button, ButtonVariant, Card, CardContent, Skeleton};

use crate::routes::turnos::form_dialog::FormMode;
use crate::session::use_session;

use super::delete_dialog::EspecialidadDeleteDialog;
use super::form_dialog::EspecialidadFormDialog;

/// Admin listing of specialties. Mutations patch the loaded list in
/// place instead of refetching it.
#[component]
pub fn ListadoEspecialidades() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();

    let mut items = use_signal(Vec::<Especialidad>::new);
    let mut cargando = use_signal(|| true);
    let mut error_carga = use_signal(|| None::<String>);

    let api_carga = api.clone();
    use_effect(move || {
        let api = api_carga.clone();
        let Some(token) = session.get_access_token() else {
            return;
        };
        spawn(async move {
            cargando.set(true);
            match api.listar_especialidades(&token).await {
                Ok(lista) => {
                    items.set(lista);
                    error_carga.set(None);
                }
                Err(e) => error_carga.set(Some(e.mensaje_usuario())),
            }
            cargando.set(false);
        });
    });

    let mut dialogo_abierto = use_signal(|| false);
    let mut en_edicion = use_signal(|| None::<Especialidad>);
    let mut a_eliminar = use_signal(|| None::<Especialidad>);

    let modo = if en_edicion.read().is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./list.css") }
        div { class: "listado-cabecera",
            h2 { "Especialidades" }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    en_edicion.set(None);
                    dialogo_abierto.set(true);
                },
                "Nueva especialidad"
            }
        }

        if *cargando.read() {
            div { class: "listado-especialidades",
                for _ in 0..4 {
                    Skeleton { class: "skeleton-fila" }
                }
            }
        } else if let Some(mensaje) = error_carga.read().as_ref() {
            p { class: "listado-error", "{mensaje}" }
        } else if items.read().is_empty() {
            p { class: "listado-vacio", "Todavía no hay especialidades cargadas." }
        } else {
            div { class: "listado-especialidades",
                for especialidad in items.read().iter().cloned() {
                    Card {
                        CardContent {
                            div { class: "especialidad-fila",
                                span { class: "especialidad-nombre", "{especialidad.nombre}" }
                                div { class: "especialidad-acciones",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let especialidad = especialidad.clone();
                                            move |_| {
                                                en_edicion.set(Some(especialidad.clone()));
                                                dialogo_abierto.set(true);
                                            }
                                        },
                                        "Renombrar"
                                    }
                                    Button {
                                        variant: ButtonVariant::Destructive,
                                        onclick: {
                                            let especialidad = especialidad.clone();
                                            move |_| a_eliminar.set(Some(especialidad.clone()))
                                        },
                                        "Eliminar"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        EspecialidadFormDialog {
            mode: modo,
            initial: en_edicion.read().clone(),
            open: *dialogo_abierto.read(),
            on_close: move |_| dialogo_abierto.set(false),
            on_saved: move |guardada: Especialidad| {
                let mut lista = items.write();
                match lista.iter_mut().find(|e| e.id == guardada.id) {
                    Some(existente) => *existente = guardada,
                    None => lista.push(guardada),
                }
            },
        }

        EspecialidadDeleteDialog {
            especialidad: a_eliminar.read().clone(),
            on_close: move |_| a_eliminar.set(None),
            on_deleted: move |id: i64| items.write().retain(|e| e.id != id),
        }
    }
}
