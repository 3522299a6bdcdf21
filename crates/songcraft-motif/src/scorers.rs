//! Composite motif scorers and the weighted aggregator.

use serde::{Deserialize, Serialize};

use songcraft_harmony::{note_name_to_offset, TheoryError};
use songcraft_spec::{MotifScoreReport, MotifSeed, Note, ScoreBreakdown, StylePrior};

use crate::analyzers;

/// Weights for the overall aggregate. Tunable parameters; the default sums
/// to 1.0 so the aggregate stays in the sub-scores' 0-100 range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub memorability: f64,
    pub singability: f64,
    pub tension_relief: f64,
    pub novelty: f64,
    pub genre_fit: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            memorability: 0.25,
            singability: 0.20,
            tension_relief: 0.20,
            novelty: 0.15,
            genre_fit: 0.20,
        }
    }
}

fn pitch_range(notes: &[Note]) -> f64 {
    let Some(max) = notes.iter().map(|n| n.pitch).max() else {
        return 0.0;
    };
    let min = notes.iter().map(|n| n.pitch).min().unwrap_or(max);
    (max - min) as f64
}

fn mean_abs_interval(notes: &[Note]) -> f64 {
    if notes.len() < 2 {
        return 0.0;
    }
    let total: f64 = notes
        .windows(2)
        .map(|pair| (pair[1].pitch as i32 - pair[0].pitch as i32).unsigned_abs() as f64)
        .sum();
    total / (notes.len() - 1) as f64
}

/// Count of distinct values in an unsorted f64 slice.
fn distinct_f64(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}

/// How easily the motif sticks in the ear.
///
/// Combines contour clarity, repetition balance, and pitch-range
/// compactness (full marks within an octave, zero at three octaves): a
/// simple five-note arc outranks a dense wide-range run. An empty motif
/// returns the neutral 50.
pub fn score_memorability(motif: &MotifSeed) -> f64 {
    if motif.notes.is_empty() {
        return 50.0;
    }
    let contour = analyzers::contour(&motif.notes);
    let repetition = analyzers::repetition_balance(&motif.notes);
    let compactness = ((36.0 - pitch_range(&motif.notes)) / 24.0 * 100.0).clamp(0.0, 100.0);
    (0.4 * contour + 0.3 * compactness + 0.3 * repetition).clamp(0.0, 100.0)
}

/// How comfortably a voice could carry the motif.
///
/// Rewards stepwise motion (mean absolute interval at or under a whole
/// step scores full marks) and narrow total range (full within an octave,
/// zero at two octaves). Zero- or one-note motifs return exactly 70:
/// trivially singable, but with no melodic content to reward further.
pub fn score_singability(motif: &MotifSeed) -> f64 {
    if motif.notes.len() < 2 {
        return 70.0;
    }
    let step = (100.0 - (mean_abs_interval(&motif.notes) - 2.0).max(0.0) * 12.5).clamp(0.0, 100.0);
    let range = ((24.0 - pitch_range(&motif.notes)) / 12.0 * 100.0).clamp(0.0, 100.0);
    (0.6 * step + 0.4 * range).clamp(0.0, 100.0)
}

/// Tension placement and resolution against the motif's key and scale.
///
/// The final note's relation to the tonic dominates (weight 0.7): tonic
/// 100, third or fifth 85, other scale tones 65, the seventh degree 40,
/// chromatic finals 30. A chromaticism term (weight 0.3) rewards exactly
/// one out-of-scale note as intentional tension (80) over a fully diatonic
/// line (60), declining as chromatic density grows. Fails only when the
/// motif's key is not a valid note name; an empty motif scores 50.
pub fn score_tension_relief(motif: &MotifSeed) -> Result<f64, TheoryError> {
    let root = note_name_to_offset(&motif.key)?;
    let Some(last) = motif.notes.last() else {
        return Ok(50.0);
    };

    let member = motif.scale.pitch_classes(root);
    let intervals = motif.scale.intervals();
    let relative = (last.pitch as i32 - root as i32).rem_euclid(12);
    let resolution: f64 = if relative == 0 {
        100.0
    } else if relative == intervals[2] || relative == intervals[4] {
        85.0
    } else if relative == intervals[6] {
        40.0
    } else if member[(last.pitch % 12) as usize] {
        65.0
    } else {
        30.0
    };

    let chromatic = motif
        .notes
        .iter()
        .filter(|n| !member[(n.pitch % 12) as usize])
        .count();
    let tension_term: f64 = match chromatic {
        0 => 60.0,
        1 => 80.0,
        2 => 60.0,
        3 => 40.0,
        _ => 20.0,
    };

    Ok((0.7 * resolution + 0.3 * tension_term).clamp(0.0, 100.0))
}

/// Joint variation across pitch, duration, and velocity.
///
/// Each attribute contributes its distinct-value ratio; a sequence with no
/// variation at all scores 0, and varying several attributes at once
/// scores higher than varying one. Fewer than two notes returns 30.
pub fn score_novelty(motif: &MotifSeed) -> f64 {
    let notes = &motif.notes;
    if notes.len() < 2 {
        return 30.0;
    }
    let denom = (notes.len() - 1) as f64;
    let ratio = |distinct: usize| (distinct - 1) as f64 / denom;

    let pitches: std::collections::HashSet<u8> = notes.iter().map(|n| n.pitch).collect();
    let velocities: std::collections::HashSet<u8> = notes.iter().map(|n| n.velocity).collect();
    let durations: Vec<f64> = notes.iter().map(|n| n.duration).collect();

    let score = 0.4 * ratio(pitches.len())
        + 0.3 * ratio(distinct_f64(&durations))
        + 0.3 * ratio(velocities.len());
    (score * 100.0).clamp(0.0, 100.0)
}

/// Genre-fit targets: expected note density (notes per beat) and mean
/// velocity per energy-profile family.
fn genre_targets(energy_profile: &str) -> (f64, f64) {
    let energy = energy_profile.to_lowercase();
    if ["edm", "house", "electro", "techno"]
        .iter()
        .any(|tag| energy.contains(tag))
    {
        (1.0, 100.0)
    } else if energy.contains("trance") {
        (1.0, 95.0)
    } else if energy.contains("pop") || energy.contains("indie") {
        (0.5, 85.0)
    } else if ["ambient", "chill", "downtempo"]
        .iter()
        .any(|tag| energy.contains(tag))
    {
        (0.25, 60.0)
    } else {
        (0.5, 80.0)
    }
}

/// Fit of the motif's density and dynamics against a style prior.
///
/// Compares notes-per-beat and mean velocity to the targets for the
/// prior's energy-profile family; each axis contributes up to 50 points.
pub fn genre_fit(motif: &MotifSeed, style: &StylePrior) -> f64 {
    let (target_density, target_velocity) = genre_targets(&style.guardrails.energy_profile);

    let beats = (motif.length_bars.max(1) * 4) as f64;
    let density = motif.notes.len() as f64 / beats;
    let mean_velocity = if motif.notes.is_empty() {
        0.0
    } else {
        motif.notes.iter().map(|n| n.velocity as f64).sum::<f64>() / motif.notes.len() as f64
    };

    let density_term = (1.0 - ((density - target_density).abs() / target_density).min(1.0)) * 50.0;
    let velocity_term = (1.0 - ((mean_velocity - target_velocity).abs() / 64.0).min(1.0)) * 50.0;
    (density_term + velocity_term).clamp(0.0, 100.0)
}

/// Score a motif against a style prior with explicit weights.
pub fn calculate_motif_score_with(
    motif: &MotifSeed,
    style: &StylePrior,
    weights: &ScoreWeights,
) -> Result<MotifScoreReport, TheoryError> {
    let memorability = score_memorability(motif).clamp(0.0, 100.0);
    let singability = score_singability(motif).clamp(0.0, 100.0);
    let tension_relief = score_tension_relief(motif)?.clamp(0.0, 100.0);
    let novelty = score_novelty(motif).clamp(0.0, 100.0);
    let genre_fit = genre_fit(motif, style).clamp(0.0, 100.0);

    let overall = (weights.memorability * memorability
        + weights.singability * singability
        + weights.tension_relief * tension_relief
        + weights.novelty * novelty
        + weights.genre_fit * genre_fit)
        .clamp(0.0, 100.0);

    Ok(MotifScoreReport {
        motif_id: motif.id.clone(),
        memorability,
        singability,
        tension_relief,
        novelty,
        genre_fit,
        overall,
        breakdown: ScoreBreakdown {
            interval_variety: analyzers::interval_variety(&motif.notes),
            contour: analyzers::contour(&motif.notes),
            rhythmic_interest: analyzers::rhythmic_interest(&motif.notes),
            repetition_balance: analyzers::repetition_balance(&motif.notes),
        },
    })
}

/// Score a motif against a style prior with the default weights.
pub fn calculate_motif_score(
    motif: &MotifSeed,
    style: &StylePrior,
) -> Result<MotifScoreReport, TheoryError> {
    calculate_motif_score_with(motif, style, &ScoreWeights::default())
}
