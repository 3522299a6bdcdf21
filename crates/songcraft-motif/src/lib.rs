//! Songcraft Motif Engine - Melodic Quality Scoring
//!
//! This crate evaluates a short melodic/rhythmic idea ([`MotifSeed`]) along
//! independent musical-quality axes and combines them into a composite
//! fitness score for ranking generated candidates.
//!
//! Two layers:
//!
//! - [`analyzers`]: four pure functions over the note sequence alone
//!   (interval variety, contour, repetition balance, rhythmic interest),
//!   each returning 0-100 and independent of key/scale.
//! - [`scorers`]: composite scorers (memorability, singability,
//!   tension-relief, novelty) built from the analyzers plus
//!   scale-membership checks, a style-conditioned genre-fit score, and the
//!   final weighted aggregator producing a [`MotifScoreReport`].
//!
//! Degenerate inputs (empty or single-note sequences) are valid musical
//! cases, not errors: every analyzer and scorer returns a defined sentinel
//! for them instead of failing. The only failure mode is a motif whose
//! `key` does not parse as a note name.

pub mod analyzers;
pub mod scorers;

pub use analyzers::{contour, interval_variety, repetition_balance, rhythmic_interest};
pub use scorers::{
    calculate_motif_score, calculate_motif_score_with, genre_fit, score_memorability,
    score_novelty, score_singability, score_tension_relief, ScoreWeights,
};

// Re-export the value types callers need alongside the scorers.
pub use songcraft_spec::{MotifScoreReport, MotifSeed, Note, ScoreBreakdown, StylePrior};
