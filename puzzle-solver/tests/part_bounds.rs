//! Property-based tests for puzzle part bounds validation

use proptest::prelude::*;
use puzzle_solver::{ParseError, Puzzle, PuzzleExt, PuzzleParser, SolveError};

/// Test puzzle with configurable PARTS
struct TestPuzzle<const N: u8>;

impl<const N: u8> PuzzleParser for TestPuzzle<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Puzzle for TestPuzzle<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any puzzle with PARTS = N, `solve_part_checked_range(part)` with
    /// part = 0 or part > N returns `PartOutOfRange(part)`; valid parts
    /// succeed.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = match max_parts {
            1 => TestPuzzle::<1>::solve_part_checked_range(&mut (), part),
            2 => TestPuzzle::<2>::solve_part_checked_range(&mut (), part),
            _ => TestPuzzle::<3>::solve_part_checked_range(&mut (), part),
        };

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok(), "Expected Ok for part {} with max {}", part, max_parts);
        }
    }

    /// For valid part numbers, `solve_part_checked_range` delegates to
    /// `solve_part` unchanged.
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=2) {
        let checked = TestPuzzle::<2>::solve_part_checked_range(&mut (), part);
        let direct = TestPuzzle::<2>::solve_part(&mut (), part);

        prop_assert!(checked.is_ok());
        prop_assert!(direct.is_ok());
        prop_assert_eq!(checked.unwrap(), direct.unwrap());
    }
}

#[test]
fn test_part_zero_rejected() {
    let result = TestPuzzle::<2>::solve_part_checked_range(&mut (), 0);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_part_exceeds_max_rejected() {
    let result = TestPuzzle::<2>::solve_part_checked_range(&mut (), 3);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_valid_part_succeeds() {
    let result = TestPuzzle::<2>::solve_part_checked_range(&mut (), 1);
    assert_eq!(result.unwrap(), "part1");
}
