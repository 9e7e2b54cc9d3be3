use api_client::ApiClient;
use chrono::Local;
use dioxus::prelude::*;
use shared_types::{Dentista, Paciente, PerfilUsuario, Turno, TurnoEstado};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Avatar, AvatarFallback, Button,
    ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, PageHeader, PageTitle,
    Skeleton, TabContent, TabList, TabTrigger, Tabs, ToastOptions,
};

use crate::routes::dentistas::form_dialog::DentistaFormDialog;
use crate::routes::pacientes::historial_dialog::HistorialDialog;
use crate::routes::turnos::consulta_dialog::ConsultaDialog;
use crate::routes::turnos::list::{incorporar_turno, TurnoCard};
use crate::session::use_session;

/// Dentist panel: today's schedule, the full agenda and the patients
/// seen by this dentist. Appointments advance through their lifecycle
/// from here.
#[component]
pub fn DashboardDentista() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let mut items = use_signal(Vec::<Turno>::new);
    let mut cargando = use_signal(|| true);
    let mut error_carga = use_signal(|| None::<String>);

    let api_carga = api.clone();
    use_effect(move || {
        let api = api_carga.clone();
        let dentista_id = match session.perfil.read().as_ref() {
            Some(PerfilUsuario::Dentista(d)) => d.id,
            _ => return,
        };
        let Some(token) = session.get_access_token() else {
            return;
        };
        spawn(async move {
            cargando.set(true);
            match api.listar_turnos_de_dentista(&token, dentista_id).await {
                Ok(lista) => {
                    items.set(lista);
                    error_carga.set(None);
                }
                Err(e) => error_carga.set(Some(e.mensaje_usuario())),
            }
            cargando.set(false);
        });
    });

    let mut en_consulta = use_signal(|| None::<Turno>);
    let mut a_cancelar = use_signal(|| None::<Turno>);
    let mut paciente_historial = use_signal(|| None::<Paciente>);
    let mut editando_perfil = use_signal(|| false);

    let perfil_propio = match session.perfil.read().as_ref() {
        Some(PerfilUsuario::Dentista(d)) => Some(d.clone()),
        _ => None,
    };

    // Programado -> EnCurso, guarded by the transition table.
    let api_inicio = api.clone();
    let iniciar = use_callback(move |turno: Turno| {
        if !turno.estado.puede_transicionar(TurnoEstado::EnCurso) {
            return;
        }
        let Some(token) = session.get_access_token() else {
            return;
        };
        let api = api_inicio.clone();
        spawn(async move {
            match api
                .cambiar_estado_turno(&token, turno.id, TurnoEstado::EnCurso)
                .await
            {
                Ok(actualizado) => {
                    toast.success("Consulta iniciada".to_string(), ToastOptions::new());
                    incorporar_turno(&mut items.write(), actualizado);
                }
                Err(e) => {
                    toast.error(e.mensaje_usuario(), ToastOptions::new());
                }
            }
        });
    });

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

    let hoy = Local::now().date_naive();
    let lista = items.read().clone();
    let de_hoy: Vec<Turno> = lista
        .iter()
        .filter(|t| t.fecha_hora.with_timezone(&Local).date_naive() == hoy)
        .cloned()
        .collect();

    let mut pacientes_vistos: Vec<Paciente> = Vec::new();
    for turno in &lista {
        if !pacientes_vistos.iter().any(|p| p.id == turno.paciente.id) {
            pacientes_vistos.push(turno.paciente.clone());
        }
    }

    let acciones_de = |turno: &Turno| -> Option<Element> {
        match turno.estado {
            TurnoEstado::Programado => {
                let para_iniciar = turno.clone();
                let para_cancelar = turno.clone();
                Some(rsx! {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| iniciar.call(para_iniciar.clone()),
                        "Iniciar"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| a_cancelar.set(Some(para_cancelar.clone())),
                        "Cancelar"
                    }
                })
            }
            TurnoEstado::EnCurso => {
                let para_finalizar = turno.clone();
                let para_cancelar = turno.clone();
                Some(rsx! {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| en_consulta.set(Some(para_finalizar.clone())),
                        "Finalizar"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| a_cancelar.set(Some(para_cancelar.clone())),
                        "Cancelar"
                    }
                })
            }
            TurnoEstado::Terminado | TurnoEstado::Cancelado => None,
        }
    };

    rsx! {
        PageHeader {
            PageTitle { "Mi consultorio" }
        }

        if *cargando.read() {
            div { class: "turnos-grid",
                for _ in 0..3 {
                    Skeleton { class: "skeleton-card" }
                }
            }
        } else if let Some(mensaje) = error_carga.read().as_ref() {
            p { class: "listado-error", "{mensaje}" }
        } else {
            Tabs { default_value: "hoy", horizontal: true,
                TabList {
                    TabTrigger { value: "hoy", index: 0usize, "Turnos de hoy" }
                    TabTrigger { value: "agenda", index: 1usize, "Mi agenda" }
                    TabTrigger { value: "pacientes", index: 2usize, "Mis pacientes" }
                    TabTrigger { value: "perfil", index: 3usize, "Mi perfil" }
                }

                TabContent { value: "hoy", index: 0usize,
                    if de_hoy.is_empty() {
                        div { class: "turnos-vacio",
                            p { "No tenés turnos para hoy." }
                        }
                    } else {
                        div { class: "turnos-grid",
                            for turno in de_hoy {
                                TurnoCard {
                                    turno: turno.clone(),
                                    mostrar_paciente: true,
                                    acciones: acciones_de(&turno),
                                }
                            }
                        }
                    }
                }

                TabContent { value: "agenda", index: 1usize,
                    if lista.is_empty() {
                        div { class: "turnos-vacio",
                            p { "Tu agenda está vacía." }
                        }
                    } else {
                        div { class: "turnos-grid",
                            for turno in lista.iter().cloned() {
                                TurnoCard {
                                    turno: turno.clone(),
                                    mostrar_paciente: true,
                                    acciones: acciones_de(&turno),
                                }
                            }
                        }
                    }
                }

                TabContent { value: "pacientes", index: 2usize,
                    if pacientes_vistos.is_empty() {
                        div { class: "turnos-vacio",
                            p { "Todavía no atendiste pacientes." }
                        }
                    } else {
                        div { class: "turnos-grid",
                            for paciente in pacientes_vistos {
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
                                    }
                                    CardFooter {
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let paciente = paciente.clone();
                                                move |_| paciente_historial.set(Some(paciente.clone()))
                                            },
                                            "Historia clínica"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                TabContent { value: "perfil", index: 3usize,
                    if let Some(dentista) = &perfil_propio {
                        Card {
                            CardHeader {
                                div { class: "paciente-cabecera",
                                    Avatar {
                                        AvatarFallback { "{dentista.usuario.iniciales()}" }
                                    }
                                    div {
                                        CardTitle { "{dentista.usuario.nombre_completo()}" }
                                        p { class: "paciente-dato", "{dentista.especialidad.nombre}" }
                                    }
                                }
                            }
                            CardContent {
                                p { class: "paciente-dato", "Matrícula: {dentista.matricula}" }
                                p { class: "paciente-dato", "{dentista.usuario.email}" }
                            }
                            CardFooter {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| editando_perfil.set(true),
                                    "Editar mis datos"
                                }
                            }
                        }
                    } else {
                        p { class: "listado-error", "Tu perfil de dentista no está disponible." }
                    }
                }
            }
        }

        if *editando_perfil.read() {
            DentistaFormDialog {
                initial: perfil_propio.clone(),
                on_close: move |_| editando_perfil.set(false),
                on_saved: move |actualizado: Dentista| {
                    let mut session = session;
                    session.perfil.set(Some(PerfilUsuario::Dentista(actualizado)));
                },
            }
        }

        if let Some(turno) = en_consulta.read().clone() {
            ConsultaDialog {
                key: "{turno.id}",
                turno: turno,
                open: true,
                on_close: move |_| en_consulta.set(None),
                on_saved: move |actualizado: Turno| {
                    incorporar_turno(&mut items.write(), actualizado);
                },
            }
        }

        if let Some(paciente) = paciente_historial.read().clone() {
            HistorialDialog {
                key: "{paciente.id}",
                paciente: Some(paciente),
                on_close: move |_| paciente_historial.set(None),
            }
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
                AlertDialogDescription { "El paciente va a ver el turno como cancelado." }
                AlertDialogActions {
                    AlertDialogCancel { "Volver" }
                    AlertDialogAction { on_click: confirmar_cancelacion, "Cancelar turno" }
                }
            }
        }
    }
}
