pub mod historial_dialog;
pub mod list;
