//! Domain Layer
//!
//! Pure decision inputs and the ports the guard talks through.

pub mod entities;
pub mod ports;
pub mod value_objects;

pub use entities::PageLayout;
pub use value_objects::SearchEngine;
