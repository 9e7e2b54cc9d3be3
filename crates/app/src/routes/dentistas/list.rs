use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::Dentista;
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Avatar, AvatarFallback, Button,
    ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, Skeleton, ToastOptions,
};

use crate::session::use_session;

use super::form_dialog::DentistaFormDialog;

/// Admin listing of dentists. Edits patch the row in place; "dar de
/// baja" removes the dentist from the roster after confirmation.
#[component]
pub fn ListadoDentistas() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let mut items = use_signal(Vec::<Dentista>::new);
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
            match api.listar_dentistas(&token).await {
                Ok(lista) => {
                    items.set(lista);
                    error_carga.set(None);
                }
                Err(e) => error_carga.set(Some(e.mensaje_usuario())),
            }
            cargando.set(false);
        });
    });

    let mut en_edicion = use_signal(|| None::<Dentista>);
    let mut a_dar_de_baja = use_signal(|| None::<Dentista>);

    let nombre_baja = a_dar_de_baja
        .read()
        .as_ref()
        .map(|d| d.usuario.nombre_completo())
        .unwrap_or_default();

    let api_baja = api.clone();
    let confirmar_baja = move |_| {
        let Some(dentista) = a_dar_de_baja.read().clone() else {
            return;
        };
        let Some(token) = session.get_access_token() else {
            return;
        };
        let api = api_baja.clone();

        spawn(async move {
            match api.dar_de_baja_dentista(&token, dentista.id).await {
                Ok(()) => {
                    toast.success("Dentista dado de baja".to_string(), ToastOptions::new());
                    items.write().retain(|d| d.id != dentista.id);
                }
                Err(e) => {
                    toast.error(e.mensaje_usuario(), ToastOptions::new());
                }
            }
            a_dar_de_baja.set(None);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./list.css") }
        div { class: "listado-cabecera",
            h2 { "Dentistas" }
        }

        if *cargando.read() {
            div { class: "dentistas-grid",
                for _ in 0..3 {
                    Skeleton { class: "skeleton-card" }
                }
            }
        } else if let Some(mensaje) = error_carga.read().as_ref() {
            p { class: "listado-error", "{mensaje}" }
        } else if items.read().is_empty() {
            p { class: "listado-vacio", "No hay dentistas registrados." }
        } else {
            div { class: "dentistas-grid",
                for dentista in items.read().iter().cloned() {
                    Card {
                        CardHeader {
                            div { class: "dentista-cabecera",
                                Avatar {
                                    AvatarFallback { "{dentista.usuario.iniciales()}" }
                                }
                                div {
                                    CardTitle { "{dentista.usuario.nombre_completo()}" }
                                    p { class: "dentista-especialidad", "{dentista.especialidad.nombre}" }
                                }
                            }
                        }
                        CardContent {
                            p { class: "dentista-dato", "Matrícula: {dentista.matricula}" }
                            p { class: "dentista-dato", "{dentista.usuario.email}" }
                        }
                        CardFooter {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let dentista = dentista.clone();
                                    move |_| en_edicion.set(Some(dentista.clone()))
                                },
                                "Editar"
                            }
                            Button {
                                variant: ButtonVariant::Destructive,
                                onclick: {
                                    let dentista = dentista.clone();
                                    move |_| a_dar_de_baja.set(Some(dentista.clone()))
                                },
                                "Dar de baja"
                            }
                        }
                    }
                }
            }
        }

        DentistaFormDialog {
            initial: en_edicion.read().clone(),
            on_close: move |_| en_edicion.set(None),
            on_saved: move |actualizado: Dentista| {
                let mut lista = items.write();
                if let Some(existente) = lista.iter_mut().find(|d| d.id == actualizado.id) {
                    *existente = actualizado;
                }
            },
        }

        AlertDialogRoot {
            open: a_dar_de_baja.read().is_some(),
            on_open_change: move |is_open: bool| {
                if !is_open {
                    a_dar_de_baja.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "¿Dar de baja al dentista?" }
                AlertDialogDescription {
                    "{nombre_baja} dejará de aparecer en el listado y no podrá recibir turnos nuevos."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancelar" }
                    AlertDialogAction { on_click: confirmar_baja, "Dar de baja" }
                }
            }
        }
    }
}
