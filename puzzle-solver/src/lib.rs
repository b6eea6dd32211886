//! Puzzle Solver Library
//!
//! A type-safe framework for writing and running recreational puzzle
//! solvers across multiple events and years. Each puzzle is implemented as
//! a solver with custom input parsing and can produce answers for multiple
//! parts.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining puzzles
//! - Embedded self-test samples checked before real input is touched
//! - Type-safe parsing and result handling
//! - An ordered registry for managing multiple puzzles
//! - A plugin system for automatic registration
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{ParseError, Puzzle, PuzzleId, PuzzleParser, RegistryBuilder, SolveError};
//!
//! pub struct MyDay1;
//!
//! impl PuzzleParser for MyDay1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Puzzle for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i64>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let id = PuzzleId::new("adventofcode", 2023, 1);
//! let registry = RegistryBuilder::new().register::<MyDay1>(id).unwrap().build();
//!
//! let mut instance = registry.create(id, "1\n2\n3").unwrap();
//! let result = instance.solve(1).unwrap();
//! assert_eq!(result.answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Puzzle Trait
//!
//! The [`Puzzle`] trait is the core interface. Implement it to define:
//! - How to parse input ([`PuzzleParser::SharedData`] and `parse()`)
//! - How many parts exist (`PARTS`) and their samples (`SAMPLES`)
//! - How to solve each part (`solve_part()`, a plain match over parts)
//!
//! ## DynPuzzle Trait
//!
//! The [`DynPuzzle`] trait provides type erasure for working with different
//! puzzle types uniformly. `solve(part)` returns the answer together with
//! the solve time; the parse time is measured once at construction.
//!
//! ## Samples
//!
//! A [`Sample`] pairs a known input with the expected answer for one part.
//! Runners execute samples first and skip the real input when a sample
//! fails, so a broken solver never produces a bogus answer silently.
//!
//! ## Plugin System and Derive Macro
//!
//! Use `#[derive(AutoRegisterPuzzle)]` from `puzzle-solver-macros` to
//! automatically register puzzles:
//! ```ignore
//! #[derive(AutoRegisterPuzzle)]
//! #[puzzle(event = "adventofcode", year = 2023, day = 6, tags = ["math"])]
//! struct Day6;
//! ```

mod error;
mod id;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, PuzzleError, RegistrationError, SolveError};
pub use id::{PuzzleId, Sample, sample_for};
pub use instance::{DynPuzzle, PuzzleInstance, SolveResult};
pub use registry::{
    PuzzleFactory, PuzzleInfo, PuzzlePlugin, PuzzleRegistry, RegisterablePuzzle, RegistryBuilder,
};
pub use solver::{Puzzle, PuzzleExt, PuzzleParser};

// Re-export inventory for use by the derive macro
pub use inventory;
