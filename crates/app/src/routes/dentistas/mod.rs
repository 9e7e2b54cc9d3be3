pub mod form_dialog;
pub mod list;
