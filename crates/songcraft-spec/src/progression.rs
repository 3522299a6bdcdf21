//! Chord event and progression candidate types.

use serde::{Deserialize, Serialize};

/// A single timed chord in a progression.
///
/// A progression is an ordered `Vec<ChordEvent>`. Well-formed progressions
/// are gap-free: each event's `start_beat` equals the previous event's
/// `start_beat + duration`. Generators always emit gap-free sequences and
/// post-processors preserve the invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordEvent {
    /// Start offset in beats from the progression start (>= 0).
    pub start_beat: f64,
    /// Chord symbol: root note name plus quality suffix (e.g., "Cmaj",
    /// "F#min", "Bdim").
    pub chord: String,
    /// Length in beats (> 0).
    pub duration: f64,
}

/// A named progression produced for ranking against a style prior.
///
/// Candidates have no persistent identity; they are generated fresh per
/// ranking call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionCandidate {
    /// Human-readable, genre-tagged name.
    pub name: String,
    /// The candidate progression (never empty).
    pub progression: Vec<ChordEvent>,
}
