// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod model;

pub use model::{Model, ModelPage};
