//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
///
/// Only configuration-level problems surface here; per-puzzle failures are
/// reported as printed rows and never abort the run.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] puzzle_solver::RegistrationError),
}
