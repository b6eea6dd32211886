//! Output formatting for solution rows

use crate::runner::{AnswerOutcome, SampleOutcome, SolutionRow};
use chrono::TimeDelta;

/// Output formatter for solution rows
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single row
    pub fn print_row(&self, row: &SolutionRow) {
        if self.quiet {
            self.print_quiet(row);
        } else {
            self.print_full(row);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, row: &SolutionRow) {
        match &row.answer {
            AnswerOutcome::Answered { answer, .. } => println!("{}", answer),
            AnswerOutcome::NotImplemented => {}
            AnswerOutcome::Failed(msg) => eprintln!("Error: {}", msg),
            AnswerOutcome::SampleBlocked => eprintln!("Error: {}", sample_failure(&row.sample)),
            AnswerOutcome::MissingInput(path) => {
                eprintln!("Error: no input file at {}", path.display())
            }
        }
    }

    /// Print full output with sample status and timings
    fn print_full(&self, row: &SolutionRow) {
        let prefix = format!("Solution {} - {} part {}", row.index, row.id, row.part);

        match &row.answer {
            AnswerOutcome::Answered {
                answer,
                parse_duration,
                solve_duration,
            } => {
                let parse_timing = parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                println!(
                    "{}: {} ({}{}solve: {})",
                    prefix,
                    answer,
                    sample_note(&row.sample),
                    parse_timing,
                    format_duration(*solve_duration)
                );
            }
            AnswerOutcome::NotImplemented => {
                println!("{}: not implemented", prefix);
            }
            AnswerOutcome::SampleBlocked => {
                eprintln!(
                    "{}: {}; real input skipped",
                    prefix,
                    sample_failure(&row.sample)
                );
            }
            AnswerOutcome::MissingInput(path) => {
                println!(
                    "{}: {}input file missing ({})",
                    prefix,
                    sample_note(&row.sample),
                    path.display()
                );
            }
            AnswerOutcome::Failed(msg) => {
                eprintln!("{}: Error - {}", prefix, msg);
            }
        }
    }

    /// Print a summary after all rows
    ///
    /// Shows total parse/solve time (sum of durations) and the actual
    /// elapsed wall-clock time.
    pub fn print_summary(&self, rows: &[SolutionRow]) {
        if self.quiet {
            return;
        }

        let solved = rows
            .iter()
            .filter(|r| matches!(r.answer, AnswerOutcome::Answered { .. }))
            .count();
        let failed = rows
            .iter()
            .filter(|r| {
                matches!(
                    r.answer,
                    AnswerOutcome::Failed(_) | AnswerOutcome::SampleBlocked
                )
            })
            .count();
        let skipped = rows.len() - solved - failed;

        let total_parse_time: TimeDelta = rows
            .iter()
            .filter_map(|r| match &r.answer {
                AnswerOutcome::Answered { parse_duration, .. } => *parse_duration,
                _ => None,
            })
            .sum();
        let total_solve_time: TimeDelta = rows
            .iter()
            .filter_map(|r| match &r.answer {
                AnswerOutcome::Answered { solve_duration, .. } => Some(*solve_duration),
                _ => None,
            })
            .sum();

        println!();
        println!("--- Summary ---");
        println!(
            "Solutions: {} solved, {} failed, {} skipped",
            solved, failed, skipped
        );
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Short note about the sample status, for successful rows
fn sample_note(sample: &SampleOutcome) -> &'static str {
    match sample {
        SampleOutcome::Passed => "sample passed, ",
        SampleOutcome::NotProvided => "no sample, ",
        SampleOutcome::Skipped => "samples skipped, ",
        // Blocking outcomes never reach a successful row.
        SampleOutcome::Failed { .. } | SampleOutcome::Errored(_) => "",
    }
}

/// Describe a blocking sample outcome
fn sample_failure(sample: &SampleOutcome) -> String {
    match sample {
        SampleOutcome::Failed { expected, actual } => {
            format!("sample failed, expected {}, got {}", expected, actual)
        }
        SampleOutcome::Errored(msg) => format!("sample errored: {}", msg),
        _ => "sample failed".to_string(),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
