//! Check verdict
//!
//! The outcome of comparing an integer with the sum of its digit cubes.

/// Whether an integer equals the sum of the cubes of its digit triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The integer is an Armstrong number (`DA`)
    Match,
    /// The integer is not an Armstrong number (`NE`)
    NoMatch,
}

impl Verdict {
    /// Literal output token for this verdict
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Match => "DA",
            Self::NoMatch => "NE",
        }
    }

    /// Whether this verdict is a match
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match)
    }
}

impl From<bool> for Verdict {
    fn from(matched: bool) -> Self {
        if matched { Self::Match } else { Self::NoMatch }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
