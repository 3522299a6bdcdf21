//! Template and genre progression generators.
//!
//! Every generator funnels through [`realize_degrees`]: a genre contributes
//! only its degree sequence, scale, and default per-chord duration, so
//! timing and chord assembly cannot drift between genres.

use songcraft_spec::{ChordEvent, Scale};

use crate::error::TheoryError;
use crate::pitch::degree_to_chord;
use crate::templates::{
    self, GenreVoicing, EDM_VOICINGS, JAZZ_VOICINGS, POP_VOICINGS, TRANCE_VOICINGS,
};

/// Realize a degree sequence as a gap-free timed progression.
///
/// Each degree becomes one [`ChordEvent`] of `beats_per_chord` beats;
/// `start_beat` is the running sum, so the output always satisfies
/// `start_beat[i+1] == start_beat[i] + duration[i]`.
pub fn realize_degrees(
    degrees: &[u8],
    key: &str,
    scale: Scale,
    beats_per_chord: f64,
) -> Result<Vec<ChordEvent>, TheoryError> {
    let mut events = Vec::with_capacity(degrees.len());
    let mut start_beat = 0.0;
    for &degree in degrees {
        let chord = degree_to_chord(degree, key, scale)?;
        events.push(ChordEvent {
            start_beat,
            chord: chord.to_string(),
            duration: beats_per_chord,
        });
        start_beat += beats_per_chord;
    }
    Ok(events)
}

/// Generate a progression from a named catalog template.
///
/// Fails with [`TheoryError::UnknownTemplate`] if the name is not in the
/// catalog; the result length equals the template's degree count.
pub fn generate_progression_from_template(
    name: &str,
    key: &str,
    scale: Scale,
    beats_per_chord: f64,
) -> Result<Vec<ChordEvent>, TheoryError> {
    let tpl = templates::template(name).ok_or_else(|| TheoryError::UnknownTemplate {
        name: name.to_string(),
    })?;
    realize_degrees(tpl.degrees, key, scale, beats_per_chord)
}

/// The default functional cadence: I-IV-V-I in major, 4 beats per chord.
pub fn generate_basic_progression(key: &str) -> Result<Vec<ChordEvent>, TheoryError> {
    generate_progression_from_template("I-IV-V-I", key, Scale::Major, 4.0)
}

fn genre_progression(
    voicings: &[GenreVoicing],
    genre: &str,
    key: &str,
    variant: &str,
) -> Result<Vec<ChordEvent>, TheoryError> {
    let voicing = voicings
        .iter()
        .find(|v| v.variant.eq_ignore_ascii_case(variant))
        .ok_or_else(|| TheoryError::UnknownTemplate {
            name: format!("{}/{}", genre, variant),
        })?;
    realize_degrees(voicing.degrees, key, voicing.scale, voicing.beats_per_chord)
}

/// Pop progression: `"standard"` (I-V-vi-IV) or `"emotional"` (vi-IV-I-V,
/// starting on the relative-minor chord).
pub fn generate_pop_progression(key: &str, variant: &str) -> Result<Vec<ChordEvent>, TheoryError> {
    genre_progression(POP_VOICINGS, "pop", key, variant)
}

/// EDM progression: `"dark"` (minor i-VI-III-VII) or `"driving"`
/// (major vi-IV-I-V loop). Always 4 chords.
pub fn generate_edm_progression(key: &str, variant: &str) -> Result<Vec<ChordEvent>, TheoryError> {
    genre_progression(EDM_VOICINGS, "edm", key, variant)
}

/// Trance progression: `"uplifting"` or `"epic"`, minor-scale 4-chord loops
/// with 8 beats per chord for slow harmonic rhythm.
pub fn generate_trance_progression(
    key: &str,
    variant: &str,
) -> Result<Vec<ChordEvent>, TheoryError> {
    genre_progression(TRANCE_VOICINGS, "trance", key, variant)
}

/// Jazz progression: `"ii-V-I"` (3 chords) or `"turnaround"` (I-vi-ii-V).
pub fn generate_jazz_progression(key: &str, variant: &str) -> Result<Vec<ChordEvent>, TheoryError> {
    genre_progression(JAZZ_VOICINGS, "jazz", key, variant)
}
