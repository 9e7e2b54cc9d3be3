use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::Especialidad;
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, ToastOptions,
};

use crate::session::use_session;

/// Confirmation before deleting a specialty. The backend refuses the
/// delete while dentists still reference it; that error surfaces as a
/// toast instead of removing the row.
#[component]
pub fn EspecialidadDeleteDialog(
    especialidad: Option<Especialidad>,
    on_close: EventHandler<()>,
    on_deleted: EventHandler<i64>,
) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let abierto = especialidad.is_some();
    let nombre = especialidad
        .as_ref()
        .map(|e| e.nombre.clone())
        .unwrap_or_default();
    let id = especialidad.as_ref().map(|e| e.id);

    let confirmar = move |_| {
        let Some(id) = id else {
            return;
        };
        let Some(token) = session.get_access_token() else {
            return;
        };
        let api = api.clone();

        spawn(async move {
            match api.eliminar_especialidad(&token, id).await {
                Ok(()) => {
                    toast.success("Especialidad eliminada".to_string(), ToastOptions::new());
                    on_deleted.call(id);
                }
                Err(e) => {
                    toast.error(e.mensaje_usuario(), ToastOptions::new());
                }
            }
            on_close.call(());
        });
    };

    rsx! {
        AlertDialogRoot {
            open: abierto,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "¿Eliminar especialidad?" }
                AlertDialogDescription {
                    "Se va a eliminar \"{nombre}\". Esta acción no se puede deshacer."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancelar" }
                    AlertDialogAction { on_click: confirmar, "Eliminar" }
                }
            }
        }
    }
}
