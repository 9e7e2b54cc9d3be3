pub mod consulta_dialog;
pub mod form_dialog;
pub mod list;
