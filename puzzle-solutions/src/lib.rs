//! Puzzle solutions with automatic registration
//!
//! This crate contains the actual puzzle solutions, organized by event and
//! year. Each solution uses the `AutoRegisterPuzzle` derive macro for
//! automatic plugin registration with the solver framework.

pub mod adventofcode;
pub mod dotwrk;
