//! The fixed progression template catalog.
//!
//! Templates are static data, not code branches: the catalog can be
//! iterated directly (e.g., by property tests asserting every template's
//! degrees are valid) and a lookup miss is an explicit error at the call
//! site, never a silent default.

use songcraft_spec::Scale;

/// A named, scale-agnostic degree sequence.
///
/// Templates are realized against a concrete key/scale pair at generation
/// time; every degree lies in [1, 7].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionTemplate {
    /// Roman-numeral style name (e.g., "I-V-vi-IV").
    pub name: &'static str,
    /// Scale degrees in order.
    pub degrees: &'static [u8],
}

/// The template catalog.
pub const TEMPLATE_CATALOG: &[ProgressionTemplate] = &[
    ProgressionTemplate {
        name: "I-V-vi-IV",
        degrees: &[1, 5, 6, 4],
    },
    ProgressionTemplate {
        name: "I-IV-V-I",
        degrees: &[1, 4, 5, 1],
    },
    ProgressionTemplate {
        name: "ii-V-I",
        degrees: &[2, 5, 1],
    },
    ProgressionTemplate {
        name: "vi-IV-I-V",
        degrees: &[6, 4, 1, 5],
    },
    ProgressionTemplate {
        name: "I-vi-ii-V",
        degrees: &[1, 6, 2, 5],
    },
    ProgressionTemplate {
        name: "I-vi-IV-V",
        degrees: &[1, 6, 4, 5],
    },
    ProgressionTemplate {
        name: "i-VI-III-VII",
        degrees: &[1, 6, 3, 7],
    },
    ProgressionTemplate {
        name: "i-VII-VI-VII",
        degrees: &[1, 7, 6, 7],
    },
];

/// Look up a template by name.
pub fn template(name: &str) -> Option<&'static ProgressionTemplate> {
    TEMPLATE_CATALOG.iter().find(|t| t.name == name)
}

/// A genre voicing: the degree sequence plus the generation defaults one
/// genre variant supplies to the shared assembly routine.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GenreVoicing {
    pub variant: &'static str,
    pub degrees: &'static [u8],
    pub scale: Scale,
    pub beats_per_chord: f64,
}

/// Pop voicings: the four-chord radio loop and its relative-minor rotation.
pub(crate) const POP_VOICINGS: &[GenreVoicing] = &[
    GenreVoicing {
        variant: "standard",
        degrees: &[1, 5, 6, 4],
        scale: Scale::Major,
        beats_per_chord: 4.0,
    },
    GenreVoicing {
        variant: "emotional",
        degrees: &[6, 4, 1, 5],
        scale: Scale::Major,
        beats_per_chord: 4.0,
    },
];

/// EDM voicings: a minor-rooted dark loop and a vi-based driving loop.
pub(crate) const EDM_VOICINGS: &[GenreVoicing] = &[
    GenreVoicing {
        variant: "dark",
        degrees: &[1, 6, 3, 7],
        scale: Scale::Minor,
        beats_per_chord: 4.0,
    },
    GenreVoicing {
        variant: "driving",
        degrees: &[6, 4, 1, 5],
        scale: Scale::Major,
        beats_per_chord: 4.0,
    },
];

/// Trance voicings: slow harmonic rhythm, 8 beats per chord.
pub(crate) const TRANCE_VOICINGS: &[GenreVoicing] = &[
    GenreVoicing {
        variant: "uplifting",
        degrees: &[1, 6, 3, 7],
        scale: Scale::Minor,
        beats_per_chord: 8.0,
    },
    GenreVoicing {
        variant: "epic",
        degrees: &[1, 7, 6, 7],
        scale: Scale::Minor,
        beats_per_chord: 8.0,
    },
];

/// Jazz voicings: the ii-V-I cadence and the I-vi-ii-V turnaround cycle.
pub(crate) const JAZZ_VOICINGS: &[GenreVoicing] = &[
    GenreVoicing {
        variant: "ii-V-I",
        degrees: &[2, 5, 1],
        scale: Scale::Major,
        beats_per_chord: 4.0,
    },
    GenreVoicing {
        variant: "turnaround",
        degrees: &[1, 6, 2, 5],
        scale: Scale::Major,
        beats_per_chord: 4.0,
    },
];
