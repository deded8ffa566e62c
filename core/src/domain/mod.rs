//! Domain layer containing authentication entities.

pub mod entities;

pub use entities::*;
