//! Recorded answers and verification of computed ones

use std::fmt;

/// Which fixture a day was run against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputVariant {
    /// The personal puzzle input (`dayNN.txt`)
    #[default]
    Full,
    /// The smaller published example (`dayNN.example.txt`)
    Example,
}

impl InputVariant {
    /// File name of this fixture for a day, e.g. `day05.example.txt`
    pub fn file_name(self, day: u8) -> String {
        match self {
            InputVariant::Full => format!("day{:02}.txt", day),
            InputVariant::Example => format!("day{:02}.example.txt", day),
        }
    }
}

impl fmt::Display for InputVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputVariant::Full => f.write_str("full"),
            InputVariant::Example => f.write_str("example"),
        }
    }
}

/// Answers recorded for a day, per fixture.
///
/// Index `i` holds the answer of part `i + 1`. A part past the end of the
/// slice, or an empty string, has no recorded answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expectations {
    pub full: &'static [&'static str],
    pub example: &'static [&'static str],
}

impl Expectations {
    /// No answers recorded for either fixture
    pub const NONE: Expectations = Expectations {
        full: &[],
        example: &[],
    };

    /// The recorded answer for `part` (1-based) of the given fixture
    pub fn get(&self, variant: InputVariant, part: u8) -> Option<&'static str> {
        let answers = match variant {
            InputVariant::Full => self.full,
            InputVariant::Example => self.example,
        };
        let index = usize::from(part).checked_sub(1)?;
        answers.get(index).copied().filter(|answer| !answer.is_empty())
    }
}

/// Outcome of comparing a computed answer against the recorded one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Matches the recorded answer
    Verified,
    /// Nothing recorded; the answer is provisional
    Unverified,
    /// Differs from the recorded answer
    Mismatch { expected: String },
}

impl Verdict {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Verdict::Mismatch { .. })
    }
}

/// Compare `actual` with an optional recorded answer.
///
/// ```
/// use aoc_solver::{verify, Verdict};
///
/// assert_eq!(verify(Some("42"), "42"), Verdict::Verified);
/// assert_eq!(verify(None, "42"), Verdict::Unverified);
/// assert!(verify(Some("41"), "42").is_mismatch());
/// ```
pub fn verify(expected: Option<&str>, actual: &str) -> Verdict {
    match expected {
        None => Verdict::Unverified,
        Some(expected) if expected == actual => Verdict::Verified,
        Some(expected) => Verdict::Mismatch {
            expected: expected.to_string(),
        },
    }
}
