//! Reusable UI building blocks with the clinic's visual language.
//!
//! Each component lives in its own directory next to its stylesheet.

pub mod components;

pub use components::*;
