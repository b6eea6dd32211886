//! Core puzzle traits

use crate::error::{ParseError, SolveError};
use crate::id::Sample;

/// Trait for parsing puzzle input into shared data
///
/// This trait defines the shared data type and parsing logic for a puzzle,
/// providing clean separation between parsing and solving concerns.
///
/// # Example
///
/// ```
/// use puzzle_solver::{ParseError, PuzzleParser};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait PuzzleParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Core trait that every puzzle solver implements.
///
/// Extends `PuzzleParser` to inherit `SharedData` and `parse()`. Each
/// puzzle declares how many parts it has, which embedded samples it ships
/// with, and how to solve each part. Dispatch over parts is a plain
/// `match` on the part number; there are only ever a handful of fixed
/// variants.
///
/// # Example
///
/// ```
/// use puzzle_solver::{ParseError, Puzzle, PuzzleParser, Sample, SolveError};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl Puzzle for Day1 {
///     const PARTS: u8 = 2;
///     const SAMPLES: &'static [Sample] = &[Sample::new(1, "1\n2\n3", "6")];
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Puzzle: PuzzleParser {
    /// Number of parts this puzzle declares
    const PARTS: u8;

    /// Embedded self-test cases, at most one per part
    const SAMPLES: &'static [Sample] = &[];

    /// Solve a specific part of the puzzle
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data (parsed input and intermediate results)
    /// * `part` - The part number (1, 2, etc.)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part has no working solution
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait PuzzleExt: Puzzle {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Puzzle + ?Sized> PuzzleExt for T {}
