use dioxus::prelude::*;
use shared_types::Turno;
use shared_ui::{Badge, Card, CardContent, CardFooter, CardHeader, CardTitle};

use crate::format_helpers::{estado_badge_variant, formatear_fecha_hora};

/// Card for one appointment. Which line identifies the counterpart
/// depends on who is looking at the list.
#[component]
pub fn TurnoCard(
    turno: Turno,
    #[props(default = false)] mostrar_paciente: bool,
    #[props(default = false)] mostrar_dentista: bool,
    #[props(default)] acciones: Option<Element>,
) -> Element {
    let variant = estado_badge_variant(turno.estado);
    let fecha = formatear_fecha_hora(&turno.fecha_hora);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./list.css") }
        Card {
            CardHeader {
                CardTitle { "{fecha}" }
                Badge { variant: variant, "{turno.estado.etiqueta()}" }
            }
            CardContent {
                if mostrar_paciente {
                    p { class: "turno-linea",
                        span { class: "turno-etiqueta", "Paciente: " }
                        "{turno.paciente.usuario.nombre_completo()}"
                    }
                }
                if mostrar_dentista {
                    p { class: "turno-linea",
                        span { class: "turno-etiqueta", "Dentista: " }
                        "{turno.dentista.usuario.nombre_completo()} — {turno.dentista.especialidad.nombre}"
                    }
                }
                if let Some(notas) = &turno.notas_tratamiento {
                    p { class: "turno-linea",
                        span { class: "turno-etiqueta", "Tratamiento: " }
                        "{notas}"
                    }
                }
                if let Some(comentarios) = &turno.comentarios {
                    p { class: "turno-linea turno-comentarios", "{comentarios}" }
                }
            }
            if let Some(acciones) = acciones {
                CardFooter { {acciones} }
            }
        }
    }
}

/// Newest first. Dashboard lists keep the backend's order; only the
/// clinical-history dialog re-sorts with this.
pub fn ordenar_por_fecha_desc(turnos: &mut [Turno]) {
    turnos.sort_by(|a, b| b.fecha_hora.cmp(&a.fecha_hora));
}

/// Replaces the matching turno in place, keeping its position. Appends
/// when the id is new, which covers creation with the same helper.
pub fn incorporar_turno(lista: &mut Vec<Turno>, turno: Turno) {
    match lista.iter_mut().find(|t| t.id == turno.id) {
        Some(existente) => *existente = turno,
        None => lista.push(turno),
    }
}

pub fn quitar_turno(lista: &mut Vec<Turno>, id: i64) {
    lista.retain(|t| t.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Dentista, Especialidad, Paciente, TurnoEstado, Usuario};

    fn usuario(nombre: &str) -> Usuario {
        Usuario {
            id: 1,
            auth0_id: "auth0|x".into(),
            nombre: nombre.into(),
            apellido: "Test".into(),
            dni: None,
            email: format!("{nombre}@example.com"),
            fecha_nacimiento: None,
            telefono: None,
        }
    }

    fn turno(id: i64, fecha: &str) -> Turno {
        Turno {
            id,
            paciente: Paciente {
                id: 1,
                obra_social: None,
                telefono_emergencia: None,
                usuario: usuario("Ana"),
            },
            dentista: Dentista {
                id: 2,
                especialidad: Especialidad {
                    id: 1,
                    nombre: "Ortodoncia".into(),
                },
                matricula: "MAT-1".into(),
                usuario: usuario("Luis"),
            },
            fecha_hora: fecha.parse().unwrap(),
            estado: TurnoEstado::Programado,
            notas_tratamiento: None,
            comentarios: None,
        }
    }

    #[test]
    fn historial_sorts_newest_first() {
        let mut lista = vec![
            turno(1, "2026-01-10T10:00:00Z"),
            turno(2, "2026-03-10T10:00:00Z"),
            turno(3, "2026-02-10T10:00:00Z"),
        ];
        ordenar_por_fecha_desc(&mut lista);
        let ids: Vec<i64> = lista.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn incorporar_replaces_by_id() {
        let mut lista = vec![turno(1, "2026-01-10T10:00:00Z")];
        let mut editado = turno(1, "2026-01-10T10:00:00Z");
        editado.estado = TurnoEstado::Cancelado;
        incorporar_turno(&mut lista, editado);
        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0].estado, TurnoEstado::Cancelado);
    }

    #[test]
    fn incorporar_keeps_backend_order() {
        // Lists render turnos exactly as the backend returned them, so
        // a reschedule must not move the card and new ones go last.
        let mut lista = vec![
            turno(3, "2026-02-10T10:00:00Z"),
            turno(1, "2026-01-10T10:00:00Z"),
            turno(2, "2026-03-10T10:00:00Z"),
        ];
        let reprogramado = turno(1, "2026-06-01T10:00:00Z");
        incorporar_turno(&mut lista, reprogramado);
        incorporar_turno(&mut lista, turno(4, "2026-01-01T08:00:00Z"));
        let ids: Vec<i64> = lista.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn incorporar_appends_new_ids() {
        let mut lista = vec![turno(1, "2026-01-10T10:00:00Z")];
        incorporar_turno(&mut lista, turno(2, "2026-02-10T10:00:00Z"));
        assert_eq!(lista.len(), 2);
        assert_eq!(lista[1].id, 2);
    }

    #[test]
    fn quitar_removes_only_the_id() {
        let mut lista = vec![
            turno(1, "2026-01-10T10:00:00Z"),
            turno(2, "2026-02-10T10:00:00Z"),
        ];
        quitar_turno(&mut lista, 1);
        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0].id, 2);
    }
}
