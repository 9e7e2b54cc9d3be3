use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{Turno, TurnoEstado};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant, PageHeader,
    PageTitle, Skeleton, TabContent, TabList, TabTrigger, Tabs, ToastOptions,
};

use crate::routes::dentistas::list::ListadoDentistas;
use crate::routes::especialidades::list::ListadoEspecialidades;
use crate::routes::pacientes::list::ListadoPacientes;
use crate::routes::turnos::form_dialog::{FormMode, TurnoFormDialog};
use crate::routes::turnos::list::{incorporar_turno, quitar_turno, TurnoCard};
use crate::session::use_session;

/// Admin panel: clinic-wide appointment management plus the specialty,
/// dentist and patient registries.
#[component]
pub fn DashboardAdmin() -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Administración" }
        }

        Tabs { default_value: "turnos", horizontal: true,
            TabList {
                TabTrigger { value: "turnos", index: 0usize, "Turnos" }
                TabTrigger { value: "especialidades", index: 1usize, "Especialidades" }
                TabTrigger { value: "dentistas", index: 2usize, "Dentistas" }
                TabTrigger { value: "pacientes", index: 3usize, "Pacientes" }
            }

            TabContent { value: "turnos", index: 0usize,
                ListadoTurnosAdmin {}
            }
            TabContent { value: "especialidades", index: 1usize,
                ListadoEspecialidades {}
            }
            TabContent { value: "dentistas", index: 2usize,
                ListadoDentistas {}
            }
            TabContent { value: "pacientes", index: 3usize,
                ListadoPacientes {}
            }
        }
    }
}

/// Every turno in the clinic, with the full set of admin actions:
/// book for any patient, reschedule, cancel and hard delete.
#[component]
fn ListadoTurnosAdmin() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let mut items = use_signal(Vec::<Turno>::new);
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
            match api.listar_turnos(&token).await {
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
    let mut en_edicion = use_signal(|| None::<Turno>);
    let mut a_cancelar = use_signal(|| None::<Turno>);
    let mut a_eliminar = use_signal(|| None::<Turno>);

    let modo = if en_edicion.read().is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    };

    let api_cancelar = api.clone();
    let confirmar_cancelacion = move |_| {
        let Some(turno) = a_cancelar.read().clone() else {
            return;
        };
        if !turno.estado.puede_transicionar(TurnoEstado::Cancelado) {
            a_cancelar.set(None);
            return;
        }
        let Some(token) = session.get_access_token() else {
            return;
        };
        let api = api_cancelar.clone();
        spawn(async move {
            match api
                .cambiar_estado_turno(&token, turno.id, TurnoEstado::Cancelado)
                .await
            {
                Ok(actualizado) => {
                    toast.success("Turno cancelado".to_string(), ToastOptions::new());
                    incorporar_turno(&mut items.write(), actualizado);
                }
                Err(e) => {
                    toast.error(e.mensaje_usuario(), ToastOptions::new());
                }
            }
            a_cancelar.set(None);
        });
    };

    let api_eliminar = api.clone();
    let confirmar_eliminacion = move |_| {
        let Some(turno) = a_eliminar.read().clone() else {
            return;
        };
        let Some(token) = session.get_access_token() else {
            return;
        };
        let api = api_eliminar.clone();
        spawn(async move {
            match api.eliminar_turno(&token, turno.id).await {
                Ok(()) => {
                    toast.success("Turno eliminado".to_string(), ToastOptions::new());
                    quitar_turno(&mut items.write(), turno.id);
                }
                Err(e) => {
                    toast.error(e.mensaje_usuario(), ToastOptions::new());
                }
            }
            a_eliminar.set(None);
        });
    };

    rsx! {
        div { class: "listado-cabecera",
            h2 { "Turnos" }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    en_edicion.set(None);
                    dialogo_abierto.set(true);
                },
                "Nuevo turno"
            }
        }

        if *cargando.read() {
            div { class: "turnos-grid",
                for _ in 0..3 {
                    Skeleton { class: "skeleton-card" }
                }
            }
        } else if let Some(mensaje) = error_carga.read().as_ref() {
            p { class: "listado-error", "{mensaje}" }
        } else if items.read().is_empty() {
            div { class: "turnos-vacio",
                p { "No hay turnos cargados." }
            }
        } else {
            div { class: "turnos-grid",
                for turno in items.read().iter().cloned() {
                    TurnoCard {
                        turno: turno.clone(),
                        mostrar_paciente: true,
                        mostrar_dentista: true,
                        acciones: Some(rsx! {
                            if !turno.estado.es_terminal() {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let turno = turno.clone();
                                        move |_| {
                                            en_edicion.set(Some(turno.clone()));
                                            dialogo_abierto.set(true);
                                        }
                                    },
                                    "Reprogramar"
                                }
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: {
                                        let turno = turno.clone();
                                        move |_| a_cancelar.set(Some(turno.clone()))
                                    },
                                    "Cancelar"
                                }
                            }
                            Button {
                                variant: ButtonVariant::Destructive,
                                onclick: {
                                    let turno = turno.clone();
                                    move |_| a_eliminar.set(Some(turno.clone()))
                                },
                                "Eliminar"
                            }
                        }),
                    }
                }
            }
        }

        TurnoFormDialog {
            mode: modo,
            initial: en_edicion.read().clone(),
            open: *dialogo_abierto.read(),
            on_close: move |_| dialogo_abierto.set(false),
            on_saved: move |turno: Turno| incorporar_turno(&mut items.write(), turno),
        }

        AlertDialogRoot {
            open: a_cancelar.read().is_some(),
            on_open_change: move |is_open: bool| {
                if !is_open {
                    a_cancelar.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "¿Cancelar el turno?" }
                AlertDialogDescription { "Tanto el paciente como el dentista lo van a ver como cancelado." }
                AlertDialogActions {
                    AlertDialogCancel { "Volver" }
                    AlertDialogAction { on_click: confirmar_cancelacion, "Cancelar turno" }
                }
            }
        }

        AlertDialogRoot {
            open: a_eliminar.read().is_some(),
            on_open_change: move |is_open: bool| {
                if !is_open {
                    a_eliminar.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "¿Eliminar el turno?" }
                AlertDialogDescription { "El turno se borra definitivamente, incluidas sus notas." }
                AlertDialogActions {
                    AlertDialogCancel { "Volver" }
                    AlertDialogAction { on_click: confirmar_eliminacion, "Eliminar" }
                }
            }
        }
    }
}
