use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{CrearTurnoRequest, Paciente, Turno};
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    Form, FormSelect, Input, ToastOptions,
};

use crate::format_helpers::{a_datetime_local, desde_datetime_local};
use crate::session::use_session;

/// Controls whether the form creates a new turno or reschedules one.
#[derive(Clone, Copy, PartialEq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Hydration marker for a closed dialog. Record ids are positive and a
/// pristine create form uses 0, so closing always forces a re-hydration
/// on the next open. Abandoned edits never survive a close.
pub(crate) const SIN_HIDRATAR: i64 = -1;

/// Which record the dialog fields should be (re)hydrated to, given the
/// marker of the last hydration. `None` leaves the fields alone.
pub(crate) fn objetivo_hidratacion(open: bool, marcador: i64, edicion: Option<i64>) -> Option<i64> {
    if !open {
        return (marcador != SIN_HIDRATAR).then_some(SIN_HIDRATAR);
    }
    let objetivo = edicion.unwrap_or(0);
    (marcador != objetivo).then_some(objetivo)
}

/// Unified book/reschedule form, rendered inside a Dialog.
///
/// When `paciente_fijo` is set the patient selector is hidden and the
/// turno is always booked for that patient. `on_saved` receives the
/// turno the backend returned so callers can patch their lists in place.
#[component]
pub fn TurnoFormDialog(
    mode: FormMode,
    initial: Option<Turno>,
    #[props(default)] paciente_fijo: Option<Paciente>,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<Turno>,
) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let mut paciente_id = use_signal(String::new);
    let mut dentista_id = use_signal(String::new);
    let mut fecha_hora = use_signal(String::new);

    // The option lists come from the backend every time the dialog is
    // mounted; they change rarely enough that no refresh button is needed.
    let api_opciones = api.clone();
    let dentistas = use_resource(move || {
        let api = api_opciones.clone();
        let token = session.get_access_token();
        async move {
            let token = token?;
            api.listar_dentistas(&token).await.ok()
        }
    });

    let necesita_pacientes = paciente_fijo.is_none();
    let api_pacientes = api.clone();
    let pacientes = use_resource(move || {
        let api = api_pacientes.clone();
        let token = session.get_access_token();
        async move {
            if !necesita_pacientes {
                return Some(Vec::new());
            }
            let token = token?;
            api.listar_pacientes(&token).await.ok()
        }
    });

    // --- Hydration ---
    let mut hydrated_id = use_signal(|| SIN_HIDRATAR);
    let initial_for_hydration = initial.clone();
    let paciente_fijo_id = paciente_fijo.as_ref().map(|p| p.id);

    use_effect(move || {
        let edicion = initial_for_hydration.as_ref().map(|t| t.id);
        let Some(objetivo) = objetivo_hidratacion(open, *hydrated_id.read(), edicion) else {
            return;
        };
        hydrated_id.set(objetivo);
        if objetivo == SIN_HIDRATAR {
            return;
        }
        if let Some(ref data) = initial_for_hydration {
            paciente_id.set(data.paciente.id.to_string());
            dentista_id.set(data.dentista.id.to_string());
            fecha_hora.set(a_datetime_local(&data.fecha_hora));
        } else {
            paciente_id.set(String::new());
            dentista_id.set(String::new());
            fecha_hora.set(String::new());
        }
    });

    // --- Submit ---
    let mut in_flight = use_signal(|| false);

    let handle_save = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        let paciente_elegido = match paciente_fijo_id {
            Some(id) => Some(id),
            None => paciente_id.read().parse::<i64>().ok(),
        };
        let dentista_elegido = dentista_id.read().parse::<i64>().ok();
        let fecha = desde_datetime_local(&fecha_hora.read());

        let (Some(paciente_elegido), Some(dentista_elegido), Some(fecha)) =
            (paciente_elegido, dentista_elegido, fecha)
        else {
            toast.error(
                "Completá paciente, dentista y fecha antes de guardar".to_string(),
                ToastOptions::new(),
            );
            return;
        };

        let Some(token) = session.get_access_token() else {
            return;
        };
        let api = api.clone();
        let id_edicion = initial.as_ref().map(|t| t.id);

        spawn(async move {
            in_flight.set(true);
            let request = CrearTurnoRequest {
                paciente_id: paciente_elegido,
                dentista_id: dentista_elegido,
                fecha_hora: fecha,
            };
            let result = match mode {
                FormMode::Create => api.crear_turno(&token, &request).await,
                FormMode::Edit => {
                    let id = id_edicion.unwrap_or_default();
                    api.actualizar_turno(&token, id, &request).await
                }
            };
            match result {
                Ok(turno) => {
                    let msg = match mode {
                        FormMode::Create => "Turno reservado",
                        FormMode::Edit => "Turno reprogramado",
                    };
                    toast.success(msg.to_string(), ToastOptions::new());
                    on_saved.call(turno);
                    on_close.call(());
                }
                Err(e) => {
                    toast.error(e.mensaje_usuario(), ToastOptions::new());
                }
            }
            in_flight.set(false);
        });
    };

    // --- Render ---
    let titulo = match mode {
        FormMode::Create => "Nuevo turno",
        FormMode::Edit => "Reprogramar turno",
    };
    let descripcion = match mode {
        FormMode::Create => "Elegí dentista, fecha y hora para el turno.",
        FormMode::Edit => "Cambiá la fecha, la hora o el dentista del turno.",
    };
    let etiqueta_guardar = match mode {
        FormMode::Create => "Reservar",
        FormMode::Edit => "Guardar cambios",
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
                DialogTitle { "{titulo}" }
                DialogDescription { "{descripcion}" }

                Form {
                    onsubmit: handle_save,

                    div { class: "dialog-form",

                        if paciente_fijo.is_none() {
                            FormSelect {
                                label: "Paciente *",
                                value: paciente_id.read().clone(),
                                onchange: move |e: Event<FormData>| paciente_id.set(e.value()),
                                option { value: "", "Seleccionar paciente" }
                                match &*pacientes.read() {
                                    Some(Some(lista)) => rsx! {
                                        for p in lista.iter() {
                                            option {
                                                value: "{p.id}",
                                                "{p.usuario.nombre_completo()}"
                                            }
                                        }
                                    },
                                    Some(None) => rsx! {
                                        option { disabled: true, "No se pudieron cargar los pacientes" }
                                    },
                                    None => rsx! {
                                        option { disabled: true, "Cargando..." }
                                    },
                                }
                            }
                        }

                        FormSelect {
                            label: "Dentista *",
                            value: dentista_id.read().clone(),
                            onchange: move |e: Event<FormData>| dentista_id.set(e.value()),
                            option { value: "", "Seleccionar dentista" }
                            match &*dentistas.read() {
                                Some(Some(lista)) => rsx! {
                                    for d in lista.iter() {
                                        option {
                                            value: "{d.id}",
                                            "{d.usuario.nombre_completo()} — {d.especialidad.nombre}"
                                        }
                                    }
                                },
                                Some(None) => rsx! {
                                    option { disabled: true, "No se pudieron cargar los dentistas" }
                                },
                                None => rsx! {
                                    option { disabled: true, "Cargando..." }
                                },
                            }
                        }

                        Input {
                            label: "Fecha y hora *",
                            input_type: "datetime-local",
                            value: fecha_hora.read().clone(),
                            on_input: move |e: FormEvent| fecha_hora.set(e.value()),
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
                            if *in_flight.read() { "Guardando..." } else { "{etiqueta_guardar}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_hydrates_the_target_record() {
        assert_eq!(objetivo_hidratacion(true, SIN_HIDRATAR, Some(5)), Some(5));
        assert_eq!(objetivo_hidratacion(true, SIN_HIDRATAR, None), Some(0));
        // Already hydrated to the right record: leave the fields alone.
        assert_eq!(objetivo_hidratacion(true, 5, Some(5)), None);
        assert_eq!(objetivo_hidratacion(true, 0, None), None);
    }

    #[test]
    fn closing_discards_hydration() {
        assert_eq!(objetivo_hidratacion(false, 5, Some(5)), Some(SIN_HIDRATAR));
        assert_eq!(objetivo_hidratacion(false, 0, None), Some(SIN_HIDRATAR));
        assert_eq!(objetivo_hidratacion(false, SIN_HIDRATAR, None), None);
    }

    #[test]
    fn reopening_same_record_rehydrates() {
        // Open on turno 5, close with edits abandoned, open on 5 again:
        // the close resets the marker so the fields reload.
        let tras_abrir = objetivo_hidratacion(true, SIN_HIDRATAR, Some(5)).unwrap();
        let tras_cerrar = objetivo_hidratacion(false, tras_abrir, Some(5)).unwrap();
        assert_eq!(objetivo_hidratacion(true, tras_cerrar, Some(5)), Some(5));
    }

    #[test]
    fn switching_records_rehydrates() {
        assert_eq!(objetivo_hidratacion(true, 5, Some(9)), Some(9));
        assert_eq!(objetivo_hidratacion(true, 5, None), Some(0));
    }
}
