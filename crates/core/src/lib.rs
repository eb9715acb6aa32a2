//! `difactura-core` — lifecycle and error building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no configuration).

pub mod error;
pub mod lifecycle;
pub mod scope;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use lifecycle::{Lifecycle, LifecycleState};
pub use scope::Scoped;
pub use value_object::ValueObject;
