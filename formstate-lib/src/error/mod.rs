//! Error types

mod field;
mod model;
mod submit;

pub use field::*;
pub use model::*;
pub use submit::*;
