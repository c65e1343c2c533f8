//! `ddd-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the value object equality engine, the state conversion contract and the
//! domain error model.

pub mod error;
pub mod state;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use state::ToState;
pub use value_object::{
    AsAny, Component, EqualityComponents, StructuralEquality, ValueObject, equal_optional,
    not_equal_optional,
};
