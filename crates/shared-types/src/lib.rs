pub mod auth;
pub mod config;
pub mod error;

// Clinic domain modules (canonical locations for all domain types)
pub mod especialidad;
pub mod turno;
pub mod usuario;

pub use auth::*;
pub use config::*;
pub use error::*;
pub use especialidad::*;
pub use turno::*;
pub use usuario::*;
