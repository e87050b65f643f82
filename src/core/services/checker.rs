//! Armstrong check service
//!
//! Compares an integer with the sum of the cubes of its ones, tens and
//! hundreds digits. Negative integers are skipped without a verdict.

use log::debug;

use crate::core::models::{DigitTriple, Verdict};

/// Check `value` against its precomputed digit triple
///
/// This is pure business logic with no I/O.
///
/// # Arguments
///
/// * `value` - The integer under test
/// * `digits` - The digit triple of `value`, as produced by
///   [`DigitTriple::from_value`]
///
/// # Returns
///
/// `None` when `value` is negative, otherwise the verdict of
/// `value == digits.sum_of_cubes()`.
#[must_use]
pub fn check(value: i64, digits: DigitTriple) -> Option<Verdict> {
    if value < 0 {
        debug!("negative input {value}, skipping");
        return None;
    }

    let candidate = digits.sum_of_cubes();
    let verdict = Verdict::from(value == candidate);
    debug!("{value}: sum of cubes {candidate}, verdict {verdict}");
    Some(verdict)
}

/// Extract the digit triple of `value` and check it
#[must_use]
pub fn evaluate(value: i64) -> Option<Verdict> {
    check(value, DigitTriple::from_value(value))
}
