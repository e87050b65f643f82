//! Domain models for armcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`DigitTriple`] - ones, tens and hundreds digits of an integer
//! - [`Verdict`] - whether the integer equals the sum of their cubes

mod digits;
mod verdict;

pub use digits::DigitTriple;
pub use verdict::Verdict;
