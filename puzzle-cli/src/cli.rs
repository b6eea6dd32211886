//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "puzzle", about = "Run puzzle solvers against local inputs", version)]
pub struct Args {
    /// Event to run, e.g. "adventofcode" (runs all events if omitted)
    #[arg(short, long)]
    pub event: Option<String>,

    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=31))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter puzzles (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle input files
    #[arg(long, default_value = "~/puzzles")]
    pub input_dir: PathBuf,

    /// Skip the embedded sample self-tests
    #[arg(long)]
    pub skip_samples: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
