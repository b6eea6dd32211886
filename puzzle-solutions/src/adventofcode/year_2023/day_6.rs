//! Wait For It: boat races won by charging before release.
//!
//! Charging for `t` time units of a `duration`-long race travels
//! `(duration - t) * t` distance. Part 1 multiplies the winning charge-time
//! counts of several small races; part 2 reads both lines as one huge race
//! by ignoring the whitespace between the numbers.

use anyhow::anyhow;
use puzzle_solver::{ParseError, Puzzle, PuzzleParser, Sample, SolveError};
use puzzle_solver_macros::AutoRegisterPuzzle;

#[derive(AutoRegisterPuzzle)]
#[puzzle(event = "adventofcode", year = 2023, day = 6, tags = ["2023", "math"])]
pub struct Solver;

/// One race: how long it lasts and the record distance to beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub duration: u64,
    pub record: u64,
}

#[derive(Debug)]
pub struct SharedData {
    races: Vec<Race>,
    combined: Race,
}

const SAMPLE: &str = "Time:      7  15   30\nDistance:  9  40  200";

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().filter(|l| !l.trim().is_empty());
        let time_line = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("'Time:' line".to_string()))?;
        let distance_line = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("'Distance:' line".to_string()))?;

        let durations = labeled_values(time_line, "Time:")?;
        let records = labeled_values(distance_line, "Distance:")?;

        if durations.len() != records.len() {
            return Err(ParseError::InvalidFormat(format!(
                "{} times paired with {} distances",
                durations.len(),
                records.len()
            )));
        }

        let races = durations
            .iter()
            .zip(&records)
            .map(|(&duration, &record)| Race { duration, record })
            .collect();
        let combined = Race {
            duration: concatenated_value(time_line, "Time:")?,
            record: concatenated_value(distance_line, "Distance:")?,
        };

        Ok(SharedData { races, combined })
    }
}

impl Puzzle for Solver {
    const PARTS: u8 = 2;
    const SAMPLES: &'static [Sample] =
        &[Sample::new(1, SAMPLE, "288"), Sample::new(2, SAMPLE, "71503")];

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => margin_product(&shared.races).map(|p| p.to_string()),
            2 => Ok(
                count_winning_charge_times(shared.combined.duration, shared.combined.record)
                    .to_string(),
            ),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Parse the whitespace-separated integers after a line label
fn labeled_values(line: &str, label: &str) -> Result<Vec<u64>, ParseError> {
    let rest = line
        .strip_prefix(label)
        .ok_or_else(|| ParseError::MissingData(format!("'{}' prefix", label)))?;
    rest.split_whitespace()
        .map(|tok| {
            tok.parse::<u64>()
                .map_err(|e| ParseError::InvalidFormat(format!("bad value '{}': {}", tok, e)))
        })
        .collect()
}

/// Read all digits after a line label as one integer, ignoring whitespace
fn concatenated_value(line: &str, label: &str) -> Result<u64, ParseError> {
    // Prefix presence was already checked by labeled_values.
    let digits: String = line
        .strip_prefix(label)
        .unwrap_or(line)
        .split_whitespace()
        .collect();
    digits
        .parse()
        .map_err(|e| ParseError::InvalidFormat(format!("bad concatenated value '{}': {}", digits, e)))
}

/// Product of winning charge-time counts across races; 1 for no races
pub fn margin_product(races: &[Race]) -> Result<u64, SolveError> {
    races
        .iter()
        .map(|r| count_winning_charge_times(r.duration, r.record))
        .try_fold(1u64, |acc, n| {
            acc.checked_mul(n)
                .ok_or_else(|| anyhow!("margin product overflows u64"))
        })
        .map_err(|e| SolveError::SolveFailed(e.into()))
}

/// Count the integer charge times in `[0, duration]` whose traveled
/// distance strictly exceeds the record.
///
/// The distance `(duration - t) * t` is a parabola in `t`, so the winning
/// charge times form one contiguous interval. The interval bounds come from
/// the roots of `t^2 - duration*t + record`, then walk to the exact integer
/// boundaries; the floating-point roots can be off by a few units once the
/// concatenated inputs get large.
pub fn count_winning_charge_times(duration: u64, record: u64) -> u64 {
    // Peak distance is at the middle charge time; if even that loses,
    // nobody wins. Also covers duration == 0.
    let mid = duration / 2;
    if !beats_record(duration, mid, record) {
        return 0;
    }

    let d = duration as f64;
    let half_span = (d * d - 4.0 * record as f64).max(0.0).sqrt() / 2.0;

    let mut lo = ((d / 2.0 - half_span).floor().max(0.0) as u64).min(mid);
    while !beats_record(duration, lo, record) {
        lo += 1;
    }
    while lo > 0 && beats_record(duration, lo - 1, record) {
        lo -= 1;
    }

    let mut hi = (((d / 2.0 + half_span).ceil()) as u64).clamp(mid, duration);
    while !beats_record(duration, hi, record) {
        hi -= 1;
    }
    while hi < duration && beats_record(duration, hi + 1, record) {
        hi += 1;
    }

    hi - lo + 1
}

/// Whether charging for `t` beats the record. 128-bit to dodge overflow of
/// the distance product for concatenated inputs.
fn beats_record(duration: u64, t: u64, record: u64) -> bool {
    (duration - t) as u128 * t as u128 > record as u128
}
