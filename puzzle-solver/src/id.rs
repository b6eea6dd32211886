//! Puzzle identity

use std::fmt;

/// Identifies one puzzle: an event family (e.g. "adventofcode", "dotwrk"),
/// a year, and a day number within that year.
///
/// Ids order by (event, year, day); the registry iterates in this order,
/// which fixes the output order of any runner built on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    /// Event family the puzzle belongs to
    pub event: &'static str,
    /// The puzzle year
    pub year: u16,
    /// The day number within the year
    pub day: u8,
}

impl PuzzleId {
    /// Create a new puzzle id
    pub const fn new(event: &'static str, year: u16, day: u8) -> Self {
        Self { event, year, day }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} day {:02}", self.event, self.year, self.day)
    }
}

/// An embedded self-test case for one part of a puzzle: a known input
/// paired with the expected answer.
///
/// Runners check samples before touching real input; a failing sample
/// means the solver is wrong and the real run for that part is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// The part this sample exercises
    pub part: u8,
    /// Known puzzle input
    pub input: &'static str,
    /// Expected answer for `input`
    pub expected: &'static str,
}

impl Sample {
    /// Create a new sample
    pub const fn new(part: u8, input: &'static str, expected: &'static str) -> Self {
        Self {
            part,
            input,
            expected,
        }
    }
}

/// Find the sample for a specific part, if one is declared
pub fn sample_for(samples: &'static [Sample], part: u8) -> Option<&'static Sample> {
    samples.iter().find(|s| s.part == part)
}
