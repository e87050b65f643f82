//! Core domain logic for armcheck
//!
//! This module contains pure arithmetic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`DigitTriple`, `Verdict`)
//! - `services/` - The Armstrong predicate and its negative-input guard

pub mod models;
pub mod services;
