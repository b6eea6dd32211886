//! Puzzle CLI - run registered puzzle solvers against local inputs

mod cli;
mod config;
mod error;
mod inputs;
mod output;
mod runner;

// Import puzzle-solutions to link the puzzle plugins
use puzzle_solutions as _;

use clap::Parser;
use cli::Args;
use config::Config;
use itertools::Itertools;
use output::OutputFormatter;
use puzzle_solver::{PuzzleRegistry, RegistryBuilder};
use runner::Runner;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;

    let quiet = config.quiet;
    let runner = Runner::new(registry, &config);

    let work_items = runner.collect_work_items();
    if work_items.is_empty() {
        println!("No puzzles found matching the specified filters.");
        return Ok(());
    }

    // Report missing inputs up front; those puzzles run their samples but
    // are skipped for real answers.
    let missing = runner.missing_inputs();
    if !missing.is_empty() && !quiet {
        println!(
            "Missing {} input file(s): {}",
            missing.len(),
            missing.iter().map(|(id, _)| id.to_string()).join(", ")
        );
        println!(
            "Place them under {} to get real answers.",
            config.input_dir.display()
        );
    }

    if !quiet {
        println!("Running {} puzzle(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(quiet);
    let rows = runner.run(|row| formatter.print_row(row));
    formatter.print_summary(&rows);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<PuzzleRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
