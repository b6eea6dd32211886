//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Event filter (None = all events)
    pub event_filter: Option<String>,
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter puzzles
    pub tags: Vec<String>,
    /// Directory holding puzzle input files
    pub input_dir: PathBuf,
    /// Whether to skip the embedded sample self-tests
    pub skip_samples: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        // Resolve input directory (expand ~)
        let input_dir = expand_tilde(&args.input_dir);

        if input_dir.exists() && !input_dir.is_dir() {
            return Err(CliError::Config(format!(
                "Input path {} is not a directory",
                input_dir.display()
            )));
        }

        Ok(Config {
            event_filter: args.event,
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir,
            skip_samples: args.skip_samples,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/puzzles")), home.join("puzzles"));
        }
    }

    #[test]
    fn test_plain_path_untouched() {
        assert_eq!(
            expand_tilde(Path::new("/tmp/puzzles")),
            PathBuf::from("/tmp/puzzles")
        );
    }
}
