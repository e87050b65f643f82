//! Business logic services
//!
//! Pure functions that operate on domain models.
//!
//! - [`check`] - Armstrong predicate over a precomputed digit triple
//! - [`evaluate`] - Extract the digit triple, then run [`check`]

mod checker;

pub use checker::{check, evaluate};
