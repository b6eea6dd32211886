//! Placeholder puzzle carried over from the 2022-04 sprint: part 1 only
//! measures the raw input length, and part 2 has no solution yet.

use puzzle_solver::{ParseError, Puzzle, PuzzleParser, Sample, SolveError};
use puzzle_solver_macros::AutoRegisterPuzzle;

#[derive(AutoRegisterPuzzle)]
#[puzzle(event = "dotwrk", year = 2022, day = 4, tags = ["stub"])]
pub struct Solver;

impl PuzzleParser for Solver {
    // Zero-copy: the input is used as-is.
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input)
    }
}

impl Puzzle for Solver {
    const PARTS: u8 = 2;
    const SAMPLES: &'static [Sample] = &[Sample::new(1, "))(((((", "7")];

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.len().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}
