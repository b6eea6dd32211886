//! Sequential runner: sample self-tests first, then real inputs

use crate::config::Config;
use crate::inputs::InputStore;
use chrono::TimeDelta;
use puzzle_solver::{PuzzleId, PuzzleInfo, PuzzleRegistry, SolveError, sample_for};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Outcome of the embedded sample self-test for one part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Sample solved and matched the expected answer
    Passed,
    /// Sample solved but the answer was wrong
    Failed { expected: String, actual: String },
    /// Sample could not be parsed or solved
    Errored(String),
    /// The puzzle declares no sample for this part
    NotProvided,
    /// Samples disabled via --skip-samples
    Skipped,
}

impl SampleOutcome {
    /// A failing or erroring sample means the solver is wrong; the real
    /// input must not be attempted for that part.
    pub fn blocks_real_run(&self) -> bool {
        matches!(self, SampleOutcome::Failed { .. } | SampleOutcome::Errored(_))
    }
}

/// Outcome of the real-input run for one part
#[derive(Debug, Clone)]
pub enum AnswerOutcome {
    /// Solved; parse duration is set only on the first answered part of an
    /// instance so summaries don't double-count shared parsing
    Answered {
        answer: String,
        parse_duration: Option<TimeDelta>,
        solve_duration: TimeDelta,
    },
    /// The part is declared but has no working solution
    NotImplemented,
    /// Parsing or solving the real input failed
    Failed(String),
    /// Skipped because the sample self-test did not pass
    SampleBlocked,
    /// Skipped because no input file exists at the given path
    MissingInput(PathBuf),
}

/// One printed row: a (puzzle, part) pair with its outcomes
#[derive(Debug, Clone)]
pub struct SolutionRow {
    /// Sequential label across all rows, starting at 1
    pub index: usize,
    pub id: PuzzleId,
    pub part: u8,
    pub sample: SampleOutcome,
    pub answer: AnswerOutcome,
}

/// Sequential runner over the registered puzzles
///
/// Runs strictly in registry (id) order, one part at a time. Per-puzzle
/// failures become rows; they never abort the run.
pub struct Runner {
    registry: PuzzleRegistry,
    store: InputStore,
    event_filter: Option<String>,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    skip_samples: bool,
}

impl Runner {
    /// Create a new runner from config
    pub fn new(registry: PuzzleRegistry, config: &Config) -> Self {
        Self {
            registry,
            store: InputStore::new(config.input_dir.clone()),
            event_filter: config.event_filter.clone(),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            skip_samples: config.skip_samples,
        }
    }

    /// Collect puzzles matching the filters, in registry order
    pub fn collect_work_items(&self) -> Vec<PuzzleInfo> {
        self.registry
            .iter_info()
            .filter(|info| {
                self.event_filter
                    .as_deref()
                    .is_none_or(|e| info.id.event == e)
            })
            .filter(|info| self.year_filter.is_none_or(|y| info.id.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.id.day == d))
            .filter(|info| !self.filter_parts(info.parts).is_empty())
            .collect()
    }

    /// Puzzles from the work list whose input file does not exist yet
    pub fn missing_inputs(&self) -> Vec<(PuzzleId, PathBuf)> {
        self.collect_work_items()
            .iter()
            .filter(|info| !self.store.contains(info.id))
            .map(|info| (info.id, self.store.input_path(info.id)))
            .collect()
    }

    /// Filter parts based on part_filter and the puzzle's declared parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Run everything, invoking `on_row` as each row is produced
    pub fn run(&self, mut on_row: impl FnMut(&SolutionRow)) -> Vec<SolutionRow> {
        let mut rows = Vec::new();
        let mut index = 1;

        for info in self.collect_work_items() {
            let input = match self.store.get(info.id) {
                Ok(input) => input,
                Err(e) => {
                    // Unreadable file: report it per part, keep going.
                    for part in self.filter_parts(info.parts) {
                        let row = SolutionRow {
                            index,
                            id: info.id,
                            part,
                            sample: self.check_sample(&info, part),
                            answer: AnswerOutcome::Failed(format!(
                                "cannot read input file: {}",
                                e
                            )),
                        };
                        index += 1;
                        on_row(&row);
                        rows.push(row);
                    }
                    continue;
                }
            };

            // Parse the real input once; both parts share the instance.
            let mut instance = input
                .as_deref()
                .map(|text| self.registry.create(info.id, text));
            let mut parse_reported = false;

            for part in self.filter_parts(info.parts) {
                let sample = self.check_sample(&info, part);

                let answer = if sample.blocks_real_run() {
                    AnswerOutcome::SampleBlocked
                } else {
                    match instance.as_mut() {
                        None => AnswerOutcome::MissingInput(self.store.input_path(info.id)),
                        Some(Err(e)) => AnswerOutcome::Failed(e.to_string()),
                        Some(Ok(instance)) => match instance.solve(part) {
                            Ok(result) => {
                                let parse_duration =
                                    (!parse_reported).then(|| instance.parse_time());
                                parse_reported = true;
                                AnswerOutcome::Answered {
                                    answer: result.answer.trim().to_string(),
                                    parse_duration,
                                    solve_duration: result.solve_time,
                                }
                            }
                            Err(SolveError::PartNotImplemented(_)) => {
                                AnswerOutcome::NotImplemented
                            }
                            Err(e) => AnswerOutcome::Failed(e.to_string()),
                        },
                    }
                };

                let row = SolutionRow {
                    index,
                    id: info.id,
                    part,
                    sample,
                    answer,
                };
                index += 1;
                on_row(&row);
                rows.push(row);
            }
        }

        rows
    }

    /// Run the embedded sample for one part, if any
    fn check_sample(&self, info: &PuzzleInfo, part: u8) -> SampleOutcome {
        if self.skip_samples {
            return SampleOutcome::Skipped;
        }
        let Some(sample) = sample_for(info.samples, part) else {
            return SampleOutcome::NotProvided;
        };

        let solved = self
            .registry
            .create(info.id, sample.input)
            .and_then(|mut instance| instance.solve(part).map_err(Into::into));

        match solved {
            Ok(result) if result.answer.trim() == sample.expected => SampleOutcome::Passed,
            Ok(result) => SampleOutcome::Failed {
                expected: sample.expected.to_string(),
                actual: result.answer,
            },
            Err(e) => SampleOutcome::Errored(e.to_string()),
        }
    }
}
