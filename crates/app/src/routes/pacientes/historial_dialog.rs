use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::Paciente;
use shared_ui::{Badge, DialogContent, DialogDescription, DialogRoot, DialogTitle, Skeleton};

use crate::format_helpers::{estado_badge_variant, formatear_fecha_hora};
use crate::routes::turnos::list::ordenar_por_fecha_desc;
use crate::session::use_session;

/// Read-only clinical history for one patient: every turno newest first,
/// with treatment notes where a consultation was recorded.
#[component]
pub fn HistorialDialog(paciente: Option<Paciente>, on_close: EventHandler<()>) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();

    let abierto = paciente.is_some();
    let nombre = paciente
        .as_ref()
        .map(|p| p.usuario.nombre_completo())
        .unwrap_or_default();
    let paciente_id = paciente.as_ref().map(|p| p.id);

    let historial = use_resource(move || {
        let api = api.clone();
        let token = session.get_access_token();
        async move {
            let id = paciente_id?;
            let token = token?;
            let mut turnos = api.listar_turnos_de_paciente(&token, id).await.ok()?;
            ordenar_por_fecha_desc(&mut turnos);
            Some(turnos)
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./historial.css") }
        DialogRoot {
            open: abierto,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Historia clínica" }
                DialogDescription { "Turnos y tratamientos de {nombre}." }

                div { class: "historial-lista",
                    match &*historial.read() {
                        Some(Some(turnos)) if turnos.is_empty() => rsx! {
                            p { class: "historial-vacio", "El paciente todavía no tiene turnos." }
                        },
                        Some(Some(turnos)) => rsx! {
                            for turno in turnos.iter() {
                                div { class: "historial-fila",
                                    div { class: "historial-fila-cabecera",
                                        span { class: "historial-fecha",
                                            {formatear_fecha_hora(&turno.fecha_hora)}
                                        }
                                        Badge {
                                            variant: estado_badge_variant(turno.estado),
                                            "{turno.estado.etiqueta()}"
                                        }
                                    }
                                    p { class: "historial-dentista",
                                        "{turno.dentista.usuario.nombre_completo()} — {turno.dentista.especialidad.nombre}"
                                    }
                                    if let Some(notas) = &turno.notas_tratamiento {
                                        p { class: "historial-notas", "{notas}" }
                                    }
                                    if let Some(comentarios) = &turno.comentarios {
                                        p { class: "historial-comentarios", "{comentarios}" }
                                    }
                                }
                            }
                        },
                        Some(None) => rsx! {
                            p { class: "historial-vacio", "No se pudo cargar la historia clínica." }
                        },
                        None => rsx! {
                            Skeleton { class: "skeleton-fila" }
                            Skeleton { class: "skeleton-fila" }
                        },
                    }
                }
            }
        }
    }
}
