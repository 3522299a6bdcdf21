//! Songcraft Harmony Engine - Chord Progression Generation
//!
//! This crate generates timed chord progressions constrained to a key and
//! scale. Progressions come from a fixed template catalog, from
//! genre-flavored voicing tables (pop, EDM, trance, jazz), or from seeded
//! weighted-random derivation; post-processors extend, transpose, and
//! analyze existing progressions, and a candidate ranker selects genre
//! families from a style prior's energy profile.
//!
//! # Determinism
//!
//! Every generator is a pure function of its inputs. Random derivation is
//! seeded: the RNG is a PCG32 derived from the caller's seed and key via
//! BLAKE3, so the same `(seed, key, scale, count)` always yields the same
//! progression, and concurrent calls share no state. Callers that need
//! full control can inject their own `Rng` through the `_with` entry point.
//!
//! # Example
//!
//! ```
//! use songcraft_harmony::{generate_progression_from_template, Scale};
//!
//! let progression = generate_progression_from_template("I-V-vi-IV", "C", Scale::Major, 4.0)?;
//! assert_eq!(progression.len(), 4);
//! assert_eq!(progression[0].chord, "Cmaj");
//! assert_eq!(progression[3].start_beat, 12.0);
//! # Ok::<(), songcraft_harmony::TheoryError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`pitch`]: Note-name/pitch-class conversion, chord symbols, scale degrees
//! - [`templates`]: The fixed progression template catalog
//! - [`generate`]: Template and genre progression generators
//! - [`random`]: Seeded weighted-random progression derivation
//! - [`transform`]: Extension, transposition, and mood analysis
//! - [`candidates`]: Style-prior-driven candidate generation

pub mod candidates;
pub mod error;
pub mod generate;
pub mod pitch;
pub mod random;
pub mod templates;
pub mod transform;

pub use candidates::generate_progression_candidates;
pub use error::TheoryError;
pub use generate::{
    generate_basic_progression, generate_edm_progression, generate_jazz_progression,
    generate_pop_progression, generate_progression_from_template, generate_trance_progression,
};
pub use pitch::{
    degree_to_chord, note_name_to_offset, offset_to_note_name, transpose_chord_symbol, Chord,
    ChordQuality,
};
pub use random::{generate_random_progression, generate_random_progression_with};
pub use templates::{template, ProgressionTemplate, TEMPLATE_CATALOG};
pub use transform::{
    analyze_progression_mood, extend_progression, transpose_progression, Mood, MoodAnalysis,
};

// Re-export the value types callers need alongside the generators.
pub use songcraft_spec::{ChordEvent, ProgressionCandidate, Scale, StylePrior};
