//! Core data model, constants and numeric primitives.

pub mod constants;
pub mod numeric;
pub mod types;

pub use constants::*;
pub use types::*;
