use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{PerfilUsuario, Turno, TurnoEstado};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant, PageActions,
    PageHeader, PageTitle, Skeleton, ToastOptions,
};

use crate::routes::turnos::form_dialog::{FormMode, TurnoFormDialog};
use crate::routes::turnos::list::{incorporar_turno, TurnoCard};
use crate::session::use_session;

/// Patient panel: upcoming and past turnos, booking, rescheduling and
/// cancellation. Terminal turnos only expose their treatment record.
#[component]
pub fn DashboardPaciente() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let mut items = use_signal(Vec::<Turno>::new);
    let mut cargando = use_signal(|| true);
    let mut error_carga = use_signal(|| None::<String>);

    let api_carga = api.clone();
    use_effect(move || {
        let api = api_carga.clone();
        let paciente_id = match session.perfil.read().as_ref() {
            Some(PerfilUsuario::Paciente(p)) => p.id,
            _ => return,
        };
        let Some(token) = session.get_access_token() else {
            return;
        };
        spawn(async move {
            cargando.set(true);
            match api.listar_turnos_de_paciente(&token, paciente_id).await {
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

    let paciente = match session.perfil.read().as_ref() {
        Some(PerfilUsuario::Paciente(p)) => Some(p.clone()),
        _ => None,
    };
    let Some(paciente) = paciente else {
        return rsx! {
            p { class: "listado-error", "Tu perfil de paciente no está disponible." }
        };
    };

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

    let historia: Vec<Turno> = items
        .read()
        .iter()
        .filter(|t| t.estado == TurnoEstado::Terminado && t.notas_tratamiento.is_some())
        .cloned()
        .collect();

    rsx! {
        PageHeader {
            PageTitle { "Mis turnos" }
            PageActions {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        en_edicion.set(None);
                        dialogo_abierto.set(true);
                    },
                    "Reservar turno"
                }
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
                p { "Todavía no tenés turnos. Reservá el primero." }
            }
        } else {
            div { class: "turnos-grid",
                for turno in items.read().iter().cloned() {
                    TurnoCard {
                        turno: turno.clone(),
                        mostrar_dentista: true,
                        acciones: if turno.estado.es_terminal() {
                            None
                        } else {
                            Some(rsx! {
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
                                    variant: ButtonVariant::Destructive,
                                    onclick: {
                                        let turno = turno.clone();
                                        move |_| a_cancelar.set(Some(turno.clone()))
                                    },
                                    "Cancelar"
                                }
                            })
                        },
                    }
                }
            }
        }

        if !historia.is_empty() {
            section { class: "historia-seccion",
                h2 { "Mi historia clínica" }
                div { class: "turnos-grid",
                    for turno in historia {
                        TurnoCard {
                            turno: turno,
                            mostrar_dentista: true,
                        }
                    }
                }
            }
        }

        TurnoFormDialog {
            mode: modo,
            initial: en_edicion.read().clone(),
            paciente_fijo: Some(paciente.clone()),
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
                AlertDialogDescription {
                    "El turno quedará cancelado y vas a tener que reservar uno nuevo si cambiás de idea."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Volver" }
                    AlertDialogAction { on_click: confirmar_cancelacion, "Cancelar turno" }
                }
            }
        }
    }
}
