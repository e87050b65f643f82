//! Digit triple model
//!
//! The ones, tens and hundreds digits of an integer, extracted with truncating
//! division. Positions above the hundreds place are ignored.

use serde::Serialize;

/// The `(ones, tens, hundreds)` decomposition of an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigitTriple {
    /// `n % 10`
    pub ones: i64,
    /// `(n / 10) % 10`
    pub tens: i64,
    /// `(n / 100) % 10`
    pub hundreds: i64,
}

impl DigitTriple {
    /// Extract the digit triple of `n`
    ///
    /// Division truncates toward zero, so a negative `n` yields digits in
    /// `-9..=0`. Callers guard against negative input before using them.
    #[must_use]
    pub const fn from_value(n: i64) -> Self {
        Self {
            ones: n % 10,
            tens: (n / 10) % 10,
            hundreds: (n / 100) % 10,
        }
    }

    /// Sum of the cubes of the three digits
    ///
    /// Each digit lies in `-9..=9`, so the result stays within `±2187`.
    #[must_use]
    pub const fn sum_of_cubes(&self) -> i64 {
        cube(self.ones) + cube(self.tens) + cube(self.hundreds)
    }
}

const fn cube(d: i64) -> i64 {
    d * d * d
}
