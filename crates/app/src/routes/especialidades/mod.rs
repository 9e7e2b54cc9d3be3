pub mod delete_dialog;
pub mod form_dialog;
pub mod list;
