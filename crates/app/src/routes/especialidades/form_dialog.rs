use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{nombre_especialidad_valido, renombre_es_noop, Especialidad};
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    Form, Input, ToastOptions,
};

use crate::routes::turnos::form_dialog::{objetivo_hidratacion, FormMode, SIN_HIDRATAR};
use crate::session::use_session;

/// Create/rename form for specialties. An empty or whitespace-only name
/// never reaches the network, and renaming to the same name is a no-op
/// that just closes the dialog.
#[component]
pub fn EspecialidadFormDialog(
    mode: FormMode,
    initial: Option<Especialidad>,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<Especialidad>,
) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let mut nombre = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let mut hydrated_id = use_signal(|| SIN_HIDRATAR);
    let initial_for_hydration = initial.clone();

    use_effect(move || {
        let edicion = initial_for_hydration.as_ref().map(|e| e.id);
        let Some(objetivo) = objetivo_hidratacion(open, *hydrated_id.read(), edicion) else {
            return;
        };
        hydrated_id.set(objetivo);
        if objetivo == SIN_HIDRATAR {
            return;
        }
        match initial_for_hydration {
            Some(ref data) => nombre.set(data.nombre.clone()),
            None => nombre.set(String::new()),
        }
    });

    let nombre_original = initial.as_ref().map(|e| e.nombre.clone());
    let id_edicion = initial.as_ref().map(|e| e.id);

    let handle_save = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        let texto = nombre.read().trim().to_string();
        if !nombre_especialidad_valido(&texto) {
            toast.error(
                "El nombre de la especialidad no puede estar vacío".to_string(),
                ToastOptions::new(),
            );
            return;
        }
        if mode == FormMode::Edit && renombre_es_noop(nombre_original.as_deref(), &texto) {
            on_close.call(());
            return;
        }
        let Some(token) = session.get_access_token() else {
            return;
        };
        let api = api.clone();

        spawn(async move {
            in_flight.set(true);
            let result = match mode {
                FormMode::Create => api.crear_especialidad(&token, &texto).await,
                FormMode::Edit => {
                    let id = id_edicion.unwrap_or_default();
                    api.actualizar_especialidad(&token, id, &texto).await
                }
            };
            match result {
                Ok(especialidad) => {
                    let msg = match mode {
                        FormMode::Create => "Especialidad creada",
                        FormMode::Edit => "Especialidad actualizada",
                    };
                    toast.success(msg.to_string(), ToastOptions::new());
                    on_saved.call(especialidad);
                    on_close.call(());
                }
                Err(e) => {
                    toast.error(e.mensaje_usuario(), ToastOptions::new());
                }
            }
            in_flight.set(false);
        });
    };

    let titulo = match mode {
        FormMode::Create => "Nueva especialidad",
        FormMode::Edit => "Renombrar especialidad",
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
                DialogDescription { "Las especialidades se asignan a los dentistas." }

                Form {
                    onsubmit: handle_save,

                    div { class: "dialog-form",
                        Input {
                            label: "Nombre *",
                            value: nombre.read().clone(),
                            on_input: move |e: FormEvent| nombre.set(e.value()),
                            placeholder: "p. ej. Ortodoncia",
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
                            if *in_flight.read() { "Guardando..." } else { "Guardar" }
                        }
                    }
                }
            }
        }
    }
}
