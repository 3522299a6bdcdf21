//! Note and motif types.

use serde::{Deserialize, Serialize};

use crate::scale::Scale;

/// A single note in a motif.
///
/// Notes form an ordered sequence (ordering by `time` is significant), not
/// a set: analyzers read consecutive pairs for interval and contour work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// MIDI pitch number (60 = middle C).
    pub pitch: u8,
    /// Start offset in beats from the motif start (>= 0).
    pub time: f64,
    /// Length in beats (> 0).
    pub duration: f64,
    /// Intensity (0-127).
    pub velocity: u8,
}

impl Note {
    /// Convenience constructor.
    pub fn new(pitch: u8, time: f64, duration: f64, velocity: u8) -> Self {
        Note {
            pitch,
            time,
            duration,
            velocity,
        }
    }
}

/// Categorical motif kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotifType {
    /// A pitched melodic idea.
    Melodic,
    /// A rhythm-first idea; pitch content is secondary.
    Rhythmic,
    /// An arpeggiated or chordal idea.
    Harmonic,
    /// An unpitched percussive idea.
    Percussive,
}

/// A short, self-contained melodic/rhythmic idea submitted for scoring.
///
/// Immutable once constructed: scorers are pure functions of the seed and
/// never modify it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotifSeed {
    /// Stable identifier, echoed into score reports.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Motif kind.
    pub motif_type: MotifType,
    /// Ordered note sequence.
    pub notes: Vec<Note>,
    /// Length in bars (> 0).
    pub length_bars: u32,
    /// Tonal context: tonic note name (e.g., "C", "F#").
    pub key: String,
    /// Tonal context: scale type.
    pub scale: Scale,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{MotifSeed, MotifType, Note};
    use crate::scale::Scale;

    #[test]
    fn motif_seed_round_trips_through_json() {
        let seed = MotifSeed {
            id: "motif-01".to_string(),
            name: "Opening hook".to_string(),
            description: "Rising fourth answered by a step down".to_string(),
            motif_type: MotifType::Melodic,
            notes: vec![
                Note::new(60, 0.0, 1.0, 96),
                Note::new(65, 1.0, 1.0, 100),
                Note::new(64, 2.0, 2.0, 90),
            ],
            length_bars: 1,
            key: "C".to_string(),
            scale: Scale::Major,
        };

        let json = serde_json::to_string(&seed).unwrap();
        let back: MotifSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
    }

    #[test]
    fn description_defaults_to_empty() {
        let json = r#"{
            "id": "m",
            "name": "m",
            "motif_type": "rhythmic",
            "notes": [],
            "length_bars": 2,
            "key": "A",
            "scale": "minor"
        }"#;
        let seed: MotifSeed = serde_json::from_str(json).unwrap();
        assert_eq!(seed.description, "");
        assert_eq!(seed.motif_type, MotifType::Rhythmic);
    }
}
