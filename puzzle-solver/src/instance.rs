//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::id::{PuzzleId, Sample};
use crate::solver::{Puzzle, PuzzleExt};
use chrono::{TimeDelta, Utc};

/// Run a closure and measure how long it took
fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let value = f();
    (value, Utc::now() - start)
}

/// An answer for one part, with the time spent computing it
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// Time spent inside the solver for this part
    pub solve_time: TimeDelta,
}

/// A solver instance for a specific puzzle with shared data
///
/// Holds the parsed input (and any intermediate results the solver mutates
/// into it) for solving one puzzle over one input. The time spent parsing
/// is measured once at construction.
pub struct PuzzleInstance<'a, P: Puzzle> {
    id: PuzzleId,
    shared: P::SharedData<'a>,
    parse_time: TimeDelta,
}

impl<'a, P: Puzzle> PuzzleInstance<'a, P> {
    /// Create a new instance by parsing input
    ///
    /// # Returns
    /// * `Ok(PuzzleInstance)` - Successfully parsed
    /// * `Err(ParseError)` - Parsing failed
    pub fn new(id: PuzzleId, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_time) = timed(|| P::parse(input));
        Ok(Self {
            id,
            shared: shared?,
            parse_time,
        })
    }
}

/// Type-erased interface for working with any puzzle through dynamic dispatch
///
/// The concrete `PuzzleInstance<P>` implements this trait, allowing the
/// registry and runners to work with different puzzle types uniformly.
///
/// # Example
///
/// ```no_run
/// use puzzle_solver::DynPuzzle;
///
/// fn example(mut puzzle: Box<dyn DynPuzzle>) -> Result<(), Box<dyn std::error::Error>> {
///     let result = puzzle.solve(1)?;
///     println!("Part 1: {} (solved in {})", result.answer, result.solve_time);
///
///     println!("Parsing took {}", puzzle.parse_time());
///     Ok(())
/// }
/// ```
pub trait DynPuzzle {
    /// Solve the specified part, timing the solver
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The answer and the time it took
    /// * `Err(SolveError)` - The part is out of range, unimplemented, or solving failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Time spent parsing the input at construction
    fn parse_time(&self) -> TimeDelta;

    /// Get the id of the puzzle this instance solves
    fn id(&self) -> PuzzleId;

    /// Get the number of parts this puzzle declares
    fn parts(&self) -> u8;

    /// Get the embedded samples for this puzzle
    fn samples(&self) -> &'static [Sample];
}

impl<'a, P: PuzzleExt> DynPuzzle for PuzzleInstance<'a, P> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        let (answer, solve_time) = timed(|| P::solve_part_checked_range(shared, part));
        Ok(SolveResult {
            answer: answer?,
            solve_time,
        })
    }

    fn parse_time(&self) -> TimeDelta {
        self.parse_time
    }

    fn id(&self) -> PuzzleId {
        self.id
    }

    fn parts(&self) -> u8 {
        P::PARTS
    }

    fn samples(&self) -> &'static [Sample] {
        P::SAMPLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PuzzleParser;

    struct Shout;

    impl PuzzleParser for Shout {
        type SharedData<'a> = &'a str;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input.trim())
        }
    }

    impl Puzzle for Shout {
        const PARTS: u8 = 1;
        const SAMPLES: &'static [Sample] = &[];

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.to_uppercase()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    const ID: PuzzleId = PuzzleId::new("testevent", 2024, 9);

    #[test]
    fn test_solve_carries_answer_and_time() {
        let mut instance = PuzzleInstance::<Shout>::new(ID, "  hello \n").unwrap();
        let result = instance.solve(1).unwrap();
        assert_eq!(result.answer, "HELLO");
        assert!(result.solve_time >= TimeDelta::zero());
    }

    #[test]
    fn test_parse_time_recorded_at_construction() {
        let instance = PuzzleInstance::<Shout>::new(ID, "hi").unwrap();
        assert!(instance.parse_time() >= TimeDelta::zero());
    }

    #[test]
    fn test_metadata_passthrough() {
        let instance = PuzzleInstance::<Shout>::new(ID, "hi").unwrap();
        assert_eq!(instance.id(), ID);
        assert_eq!(instance.parts(), 1);
        assert!(instance.samples().is_empty());
    }
}
