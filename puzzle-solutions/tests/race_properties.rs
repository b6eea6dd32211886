//! Property-based tests for the race charge-time counting

use proptest::prelude::*;
use puzzle_solutions::adventofcode::year_2023::day_6::count_winning_charge_times;

/// Reference implementation: linear scan over every charge time
fn brute_force_count(duration: u64, record: u64) -> u64 {
    (0..=duration)
        .filter(|&t| (duration - t) as u128 * t as u128 > record as u128)
        .count() as u64
}

/// Reference winning interval, if any
fn brute_force_interval(duration: u64, record: u64) -> Option<(u64, u64)> {
    let winners: Vec<u64> = (0..=duration)
        .filter(|&t| (duration - t) as u128 * t as u128 > record as u128)
        .collect();
    winners.first().map(|&lo| (lo, *winners.last().unwrap()))
}

proptest! {
    /// The closed-form count agrees with the exhaustive scan.
    #[test]
    fn prop_matches_brute_force(duration in 0u64..=1000, record in 0u64..=300_000) {
        prop_assert_eq!(
            count_winning_charge_times(duration, record),
            brute_force_count(duration, record)
        );
    }

    /// Raising the record never increases the winning count.
    #[test]
    fn prop_monotone_in_record(duration in 0u64..=1000, record in 0u64..=300_000, bump in 0u64..=10_000) {
        prop_assert!(
            count_winning_charge_times(duration, record + bump)
                <= count_winning_charge_times(duration, record)
        );
    }

    /// The winning charge times are symmetric around duration / 2:
    /// min + max of the interval always sum to the duration.
    #[test]
    fn prop_winning_interval_symmetric(duration in 0u64..=1000, record in 0u64..=300_000) {
        if let Some((lo, hi)) = brute_force_interval(duration, record) {
            prop_assert_eq!(lo + hi, duration);
        }
    }

    /// Pure function: identical inputs give identical results.
    #[test]
    fn prop_idempotent(duration in 0u64..=1000, record in 0u64..=300_000) {
        prop_assert_eq!(
            count_winning_charge_times(duration, record),
            count_winning_charge_times(duration, record)
        );
    }
}

#[test]
fn test_zero_duration_boundary() {
    for record in [0, 1, 7, u64::MAX] {
        assert_eq!(count_winning_charge_times(0, record), 0);
    }
}

#[test]
fn test_records_touching_the_peak() {
    // The peak distance (duration / 2) * (duration - duration / 2) is where
    // the float root estimate is least accurate; check records right at it.
    for duration in [10u64, 11, 999, 1000, 65_537] {
        let peak = (duration / 2) * (duration - duration / 2);
        for record in [peak.saturating_sub(1), peak, peak + 1] {
            assert_eq!(
                count_winning_charge_times(duration, record),
                brute_force_count(duration, record),
                "duration {duration}, record {record}"
            );
        }
    }
}

#[test]
fn test_wide_margin_just_below_the_peak() {
    // duration 10^9 with the record 10^10 below the peak: winners are the
    // charge times strictly within 10^5 of the midpoint, 2 * 10^5 - 1 of
    // them. The two boundary times tie the record and must not count.
    let duration = 1_000_000_000;
    let peak = (duration / 2) * (duration / 2);
    assert_eq!(
        count_winning_charge_times(duration, peak - 10_000_000_000),
        199_999
    );
}

#[test]
fn test_huge_race_beyond_32_bit() {
    // Closed form must stay exact where a 32-bit scan would be hopeless.
    let count = count_winning_charge_times(40_828_492, 233_101_111_101_487);
    assert_eq!(count, brute_force_interval_width(40_828_492, 233_101_111_101_487));
}

fn brute_force_interval_width(duration: u64, record: u64) -> u64 {
    // Walk inward from both ends; feasible because the interval edges are
    // near the quadratic roots, far from the extremes here.
    let beats = |t: u64| (duration - t) as u128 * t as u128 > record as u128;
    let lo = (0..=duration).find(|&t| beats(t));
    match lo {
        Some(lo) => {
            let hi = (0..=duration).rev().find(|&t| beats(t)).unwrap();
            hi - lo + 1
        }
        None => 0,
    }
}
