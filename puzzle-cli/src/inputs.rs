//! Local store for puzzle input files

use puzzle_solver::PuzzleId;
use std::fs;
use std::path::PathBuf;

/// File-based store for puzzle inputs
///
/// Directory structure: `{root}/{event}/{year}_day{day:02}.txt`
///
/// The store is read-only: inputs are placed there by hand, never fetched.
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    /// Create a new input store rooted at a directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the input path for a specific puzzle
    pub fn input_path(&self, id: PuzzleId) -> PathBuf {
        self.root
            .join(id.event)
            .join(format!("{}_day{:02}.txt", id.year, id.day))
    }

    /// Check if an input file exists
    pub fn contains(&self, id: PuzzleId) -> bool {
        self.input_path(id).exists()
    }

    /// Get the stored input, or None if no file exists
    pub fn get(&self, id: PuzzleId) -> Result<Option<String>, std::io::Error> {
        let path = self.input_path(id);
        if path.exists() {
            Ok(Some(fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }
}
