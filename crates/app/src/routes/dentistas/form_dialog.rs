use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{ActualizarDentistaRequest, Dentista};
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    Form, FormSelect, Input, ToastOptions,
};

use crate::routes::turnos::form_dialog::{objetivo_hidratacion, SIN_HIDRATAR};
use crate::session::use_session;

/// Edit form for a dentist profile: name, email and assigned specialty.
/// Dentists are registered through the backend onboarding flow, so there
/// is no create mode here.
#[component]
pub fn DentistaFormDialog(
    initial: Option<Dentista>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<Dentista>,
) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let abierto = initial.is_some();

    let mut nombre = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut especialidad_id = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let api_opciones = api.clone();
    let especialidades = use_resource(move || {
        let api = api_opciones.clone();
        let token = session.get_access_token();
        async move {
            let token = token?;
            api.listar_especialidades(&token).await.ok()
        }
    });

    let mut hydrated_id = use_signal(|| SIN_HIDRATAR);
    let initial_for_hydration = initial.clone();

    use_effect(move || {
        let edicion = initial_for_hydration.as_ref().map(|d| d.id);
        let Some(objetivo) = objetivo_hidratacion(edicion.is_some(), *hydrated_id.read(), edicion)
        else {
            return;
        };
        hydrated_id.set(objetivo);
        if let Some(ref data) = initial_for_hydration {
            nombre.set(data.usuario.nombre.clone());
            email.set(data.usuario.email.clone());
            especialidad_id.set(data.especialidad.id.to_string());
        }
    });

    let id_edicion = initial.as_ref().map(|d| d.id);

    let handle_save = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        let Some(id) = id_edicion else {
            return;
        };
        let Some(token) = session.get_access_token() else {
            return;
        };
        let api = api.clone();
        let texto_nombre = nombre.read().trim().to_string();
        let texto_email = email.read().trim().to_string();
        let especialidad_elegida = especialidad_id.read().parse::<i64>().ok();

        spawn(async move {
            in_flight.set(true);
            let request = ActualizarDentistaRequest {
                nombre: (!texto_nombre.is_empty()).then_some(texto_nombre),
                email: (!texto_email.is_empty()).then_some(texto_email),
                especialidad_id: especialidad_elegida,
            };
            match api.actualizar_dentista(&token, id, &request).await {
                Ok(actualizado) => {
                    toast.success("Dentista actualizado".to_string(), ToastOptions::new());
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
            open: abierto,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Editar dentista" }
                DialogDescription { "Actualizá los datos del profesional." }

                Form {
                    onsubmit: handle_save,

                    div { class: "dialog-form",
                        Input {
                            label: "Nombre",
                            value: nombre.read().clone(),
                            on_input: move |e: FormEvent| nombre.set(e.value()),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email.read().clone(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        FormSelect {
                            label: "Especialidad",
                            value: especialidad_id.read().clone(),
                            onchange: move |e: Event<FormData>| especialidad_id.set(e.value()),
                            match &*especialidades.read() {
                                Some(Some(lista)) => rsx! {
                                    for esp in lista.iter() {
                                        option { value: "{esp.id}", "{esp.nombre}" }
                                    }
                                },
                                Some(None) => rsx! {
                                    option { disabled: true, "No se pudieron cargar las especialidades" }
                                },
                                None => rsx! {
                                    option { disabled: true, "Cargando..." }
                                },
                            }
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
                            if *in_flight.read() { "Guardando..." } else { "Guardar cambios" }
                        }
                    }
                }
            }
        }
    }
}
