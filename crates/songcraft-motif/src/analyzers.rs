//! Motif analyzers: pure functions over an ordered note sequence.
//!
//! Each analyzer returns a 0-100 score and never fails; sequences too short
//! to carry information return a neutral sentinel (50) rather than being
//! penalized, and degenerate-but-meaningful cases (no variety at all)
//! return 0.

use std::collections::HashSet;

use songcraft_spec::Note;

/// Consecutive pitch intervals of a note sequence, signed semitones.
fn intervals(notes: &[Note]) -> Vec<i32> {
    notes
        .windows(2)
        .map(|pair| pair[1].pitch as i32 - pair[0].pitch as i32)
        .collect()
}

/// Signed melodic directions, zeros (repeated pitches) dropped.
fn directions(notes: &[Note]) -> Vec<i32> {
    intervals(notes)
        .into_iter()
        .map(|i| i.signum())
        .filter(|d| *d != 0)
        .collect()
}

/// Score the variety of consecutive-interval sizes.
///
/// A single note returns the neutral midpoint 50 (nothing to evaluate,
/// nothing to penalize). A sequence whose every interval is identical,
/// notably an all-same-pitch sequence, returns 0: no melodic variety.
/// Otherwise the count of distinct interval values scales into 0-100.
pub fn interval_variety(notes: &[Note]) -> f64 {
    if notes.len() < 2 {
        return 50.0;
    }
    let intervals = intervals(notes);
    let distinct: HashSet<i32> = intervals.iter().copied().collect();
    if distinct.len() == 1 {
        return 0.0;
    }
    let span = (intervals.len() - 1).max(1);
    ((distinct.len() - 1) as f64 / span as f64 * 100.0).clamp(0.0, 100.0)
}

/// Score duration variability as the coefficient of variation of the
/// duration sequence, mapped into 0-100.
///
/// Empty input returns 0; uniform durations return 0; more varied
/// durations score strictly higher at equal length.
pub fn rhythmic_interest(notes: &[Note]) -> f64 {
    if notes.is_empty() {
        return 0.0;
    }
    let n = notes.len() as f64;
    let mean = notes.iter().map(|n| n.duration).sum::<f64>() / n;
    if mean <= 0.0 {
        return 0.0;
    }
    let variance = notes
        .iter()
        .map(|note| (note.duration - mean).powi(2))
        .sum::<f64>()
        / n;
    let cv = variance.sqrt() / mean;
    (cv * 200.0).clamp(0.0, 100.0)
}

/// Score the overall melodic shape.
///
/// Two notes or fewer are inconclusive: 50. A monotonic line scores 75, a
/// single-peak arch 85, a single-valley 65, and shapes with more direction
/// changes decay from there, so a flat oscillation lands well below an
/// arch of the same length. An all-equal-pitch sequence scores 40.
pub fn contour(notes: &[Note]) -> f64 {
    if notes.len() < 3 {
        return 50.0;
    }
    let moves = directions(notes);
    if moves.is_empty() {
        return 40.0;
    }
    let changes = moves.windows(2).filter(|pair| pair[0] != pair[1]).count();
    match changes {
        0 => 75.0,
        1 => {
            if moves[0] > 0 {
                85.0 // rise then fall: the arch
            } else {
                65.0 // fall then rise: the valley
            }
        }
        _ => (75.0 - 15.0 * (changes as f64 - 1.0)).max(0.0),
    }
}

/// Reward moderate pitch repetition over both extremes.
///
/// The repeat ratio (1 - distinct/len) is compared against a moderate
/// target of 0.4: all-distinct sequences and maximally repetitive ones
/// both score low, while some-but-not-total repetition lands at or above
/// the midpoint. Fewer than two notes returns the neutral 50.
pub fn repetition_balance(notes: &[Note]) -> f64 {
    if notes.len() < 2 {
        return 50.0;
    }
    let distinct: HashSet<u8> = notes.iter().map(|n| n.pitch).collect();
    let ratio = 1.0 - distinct.len() as f64 / notes.len() as f64;
    let score = (100.0 - (ratio - 0.4).abs() / 0.6 * 100.0).clamp(0.0, 100.0);
    // Any repetition short of a single pitch class holds the midpoint,
    // even when the repeat ratio sits far from the 0.4 target.
    if distinct.len() < notes.len() && distinct.len() > 1 {
        score.max(50.0)
    } else {
        score
    }
}
