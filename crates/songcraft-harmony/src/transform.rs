//! Progression post-processors: extension, transposition, mood analysis.

use serde::{Deserialize, Serialize};

use songcraft_spec::ChordEvent;

use crate::error::TheoryError;
use crate::pitch::{chord_quality_of, transpose_chord_symbol, ChordQuality};

/// Overall mood classification of a progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Dark,
    Bright,
}

/// Mood and tension analysis of a progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    /// Dark when minor/diminished qualities dominate, bright otherwise.
    pub mood: Mood,
    /// 0 with no diminished chords; grows with each additional one,
    /// bounded below 100.
    pub tension: f64,
}

/// Loop a progression until it reaches at least `target_bars * beats_per_bar`
/// beats.
///
/// Copies are appended whole and re-timed to start where the previous copy
/// ends, so the result stays gap-free and never cuts a chord mid-copy; the
/// final copy may overshoot the target. Per-chord durations are preserved.
pub fn extend_progression(
    base: &[ChordEvent],
    target_bars: u32,
    beats_per_bar: f64,
) -> Vec<ChordEvent> {
    let Some((first, last)) = base.first().zip(base.last()) else {
        return Vec::new();
    };
    let span = last.start_beat + last.duration - first.start_beat;
    if span <= 0.0 {
        return base.to_vec();
    }

    let target_beats = target_bars as f64 * beats_per_bar;
    let mut events = base.to_vec();
    let mut offset = span;
    while offset < target_beats {
        for event in base {
            events.push(ChordEvent {
                start_beat: offset + (event.start_beat - first.start_beat),
                chord: event.chord.clone(),
                duration: event.duration,
            });
        }
        offset += span;
    }
    events
}

/// Transpose every chord symbol in a progression, leaving timing untouched.
pub fn transpose_progression(
    progression: &[ChordEvent],
    semitones: i32,
) -> Result<Vec<ChordEvent>, TheoryError> {
    progression
        .iter()
        .map(|event| {
            Ok(ChordEvent {
                start_beat: event.start_beat,
                chord: transpose_chord_symbol(&event.chord, semitones)?,
                duration: event.duration,
            })
        })
        .collect()
}

/// Classify a progression's mood and tension from its chord qualities.
///
/// Mood is dark when minor + diminished chords are at least as many as
/// major chords (and the progression is non-empty); an empty progression
/// reads bright with zero tension. Tension follows a bounded curve,
/// `100 * (1 - 0.7^dim_count)`, strictly increasing per diminished chord.
/// Symbols whose root does not parse count as neither quality.
pub fn analyze_progression_mood(progression: &[ChordEvent]) -> MoodAnalysis {
    let mut major = 0usize;
    let mut minorish = 0usize;
    let mut diminished = 0usize;
    for event in progression {
        match chord_quality_of(&event.chord) {
            Some(ChordQuality::Major) => major += 1,
            Some(ChordQuality::Minor) => minorish += 1,
            Some(ChordQuality::Diminished) => {
                minorish += 1;
                diminished += 1;
            }
            None => {}
        }
    }

    let mood = if minorish >= major && minorish > 0 {
        Mood::Dark
    } else {
        Mood::Bright
    };
    let tension = 100.0 * (1.0 - 0.7f64.powi(diminished as i32));

    MoodAnalysis { mood, tension }
}
