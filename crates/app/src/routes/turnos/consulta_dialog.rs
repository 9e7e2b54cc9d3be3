use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{notas_tratamiento_validas, ConsultaMedica, Turno, TurnoEstado};
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    Form, Textarea, ToastOptions,
};

use crate::routes::turnos::form_dialog::{objetivo_hidratacion, SIN_HIDRATAR};
use crate::session::use_session;

/// Closes out a consultation: the dentist records what was done and the
/// turno moves to Terminado. Treatment notes are mandatory; the form
/// never submits without them.
#[component]
pub fn ConsultaDialog(
    turno: Turno,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<Turno>,
) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let mut notas = use_signal(String::new);
    let mut comentarios = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    // Reset the fields whenever the dialog targets a different turno,
    // and drop any abandoned draft when it closes.
    let mut hydrated_id = use_signal(|| SIN_HIDRATAR);
    let turno_id = turno.id;
    use_effect(move || {
        let marcador = *hydrated_id.read();
        let Some(objetivo) = objetivo_hidratacion(open, marcador, Some(turno_id)) else {
            return;
        };
        hydrated_id.set(objetivo);
        if objetivo != SIN_HIDRATAR {
            notas.set(String::new());
            comentarios.set(String::new());
        }
    });

    let handle_save = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        let texto_notas = notas.read().trim().to_string();
        if !notas_tratamiento_validas(&texto_notas) {
            toast.error(
                "Las notas de tratamiento son obligatorias".to_string(),
                ToastOptions::new(),
            );
            return;
        }
        let Some(token) = session.get_access_token() else {
            return;
        };
        let api = api.clone();
        let texto_comentarios = comentarios.read().trim().to_string();

        spawn(async move {
            in_flight.set(true);
            let consulta = ConsultaMedica {
                estado: TurnoEstado::Terminado,
                notas_tratamiento: texto_notas,
                comentarios: if texto_comentarios.is_empty() {
                    None
                } else {
                    Some(texto_comentarios)
                },
            };
            match api.registrar_consulta(&token, turno_id, &consulta).await {
                Ok(actualizado) => {
                    toast.success("Consulta registrada".to_string(), ToastOptions::new());
                    on_saved.call(actualizado);
                    on_close.call(());
                }
                Err(e) => {
                    toast.error(e.mensaje_usuario(), ToastOptions::new());
                }
            }
            in_flight.set(false);
        });
    };

    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Finalizar consulta" }
                DialogDescription {
                    "Registrá el tratamiento realizado a {turno.paciente.usuario.nombre_completo()}."
                }

                Form {
                    onsubmit: handle_save,

                    div { class: "dialog-form",
                        Textarea {
                            label: "Notas de tratamiento *",
                            value: notas.read().clone(),
                            on_input: move |e: FormEvent| notas.set(e.value()),
                            placeholder: "Tratamiento realizado, piezas intervenidas, indicaciones",
                            rows: 5,
                        }
                        Textarea {
                            label: "Comentarios",
                            value: comentarios.read().clone(),
                            on_input: move |e: FormEvent| comentarios.set(e.value()),
                            placeholder: "Observaciones opcionales",
                            rows: 3,
                        }
                    }

                    div { class: "dialog-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_close.call(()),
                            "Cancelar"
                        }
                        button {
                            class: "button",
                            "data-style": "primary",
                            r#type: "submit",
                            disabled: *in_flight.read(),
                            if *in_flight.read() { "Guardando..." } else { "Finalizar" }
                        }
                    }
                }
            }
        }
    }
}
