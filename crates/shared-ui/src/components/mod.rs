// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod alert_dialog;
pub mod avatar;
pub mod dialog;
pub mod dropdown_menu;
pub mod navbar;
pub mod tabs;
pub mod toast;

// Re-exports for convenience
pub use alert_dialog::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use dropdown_menu::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use navbar::*;
pub use page_header::*;
pub use skeleton::*;
pub use tabs::*;
pub use textarea::*;
pub use toast::*;
