//! Pitch-class and chord-symbol utilities.
//!
//! Chords are structured internally (root pitch class + quality) and only
//! rendered to the external `<RootName><maj|min|dim>` symbol format at the
//! boundary; transposition re-parses symbols rather than doing string
//! arithmetic on them.

use std::fmt;

use serde::{Deserialize, Serialize};

use songcraft_spec::Scale;

use crate::error::TheoryError;

/// Canonical sharp-based note spellings, indexed by pitch class (0 = C).
/// Output spelling never uses flats; flats are accepted on input only.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Parse a note name (e.g., "C", "F#", "Bb") into a pitch-class offset
/// from C (0-11).
///
/// # Examples
/// ```
/// use songcraft_harmony::pitch::note_name_to_offset;
///
/// assert_eq!(note_name_to_offset("C").unwrap(), 0);
/// assert_eq!(note_name_to_offset("F#").unwrap(), 6);
/// assert_eq!(note_name_to_offset("Bb").unwrap(), 10);
/// assert!(note_name_to_offset("H").is_err());
/// ```
pub fn note_name_to_offset(name: &str) -> Result<u8, TheoryError> {
    let invalid = || TheoryError::InvalidNoteName {
        name: name.to_string(),
    };

    let trimmed = name.trim();
    let bytes = trimmed.as_bytes();
    if bytes.is_empty() {
        return Err(invalid());
    }

    let base: i32 = match (bytes[0] as char).to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return Err(invalid()),
    };

    let mut accidental = 0i32;
    for &b in &bytes[1..] {
        match b as char {
            '#' => accidental += 1,
            'b' => accidental -= 1,
            _ => return Err(invalid()),
        }
    }

    Ok((base + accidental).rem_euclid(12) as u8)
}

/// Render a pitch-class offset as its canonical sharp-based note name.
///
/// The offset is taken modulo 12, wrapping in both directions: -1 maps to
/// "B", 12 maps back to "C".
pub fn offset_to_note_name(offset: i32) -> &'static str {
    NOTE_NAMES[offset.rem_euclid(12) as usize]
}

/// Harmonic color of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    /// The symbol suffix for this quality.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "maj",
            ChordQuality::Minor => "min",
            ChordQuality::Diminished => "dim",
        }
    }
}

/// A chord as root pitch class plus quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    /// Root pitch class (0-11).
    pub root_pc: u8,
    /// Chord quality.
    pub quality: ChordQuality,
}

impl Chord {
    /// Shift the root by a semitone count, wrapping modulo 12.
    pub fn transposed(self, semitones: i32) -> Chord {
        Chord {
            root_pc: (self.root_pc as i32 + semitones).rem_euclid(12) as u8,
            quality: self.quality,
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            NOTE_NAMES[self.root_pc as usize % 12],
            self.quality.suffix()
        )
    }
}

/// Per-degree triad qualities for the major scale (degrees 1-7).
const MAJOR_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

/// Per-degree triad qualities for the natural minor scale (degrees 1-7).
const MINOR_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Minor,
    ChordQuality::Diminished,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
];

/// Triad qualities by scale degree for a scale type.
pub fn degree_qualities(scale: Scale) -> &'static [ChordQuality; 7] {
    match scale {
        Scale::Major => &MAJOR_QUALITIES,
        Scale::Minor => &MINOR_QUALITIES,
    }
}

/// Build the diatonic triad on a scale degree of the given key and scale.
///
/// The root pitch class comes from the scale's interval pattern; the
/// quality follows scale-degree convention (major: maj min min maj maj min
/// dim; minor: min dim maj min min maj maj).
///
/// # Examples
/// ```
/// use songcraft_harmony::pitch::degree_to_chord;
/// use songcraft_harmony::Scale;
///
/// assert_eq!(degree_to_chord(5, "C", Scale::Major).unwrap().to_string(), "Gmaj");
/// assert_eq!(degree_to_chord(7, "A", Scale::Minor).unwrap().to_string(), "Gmaj");
/// ```
pub fn degree_to_chord(degree: u8, key: &str, scale: Scale) -> Result<Chord, TheoryError> {
    if !(1..=7).contains(&degree) {
        return Err(TheoryError::InvalidDegree { degree });
    }
    let tonic = note_name_to_offset(key)? as i32;
    let interval = scale.intervals()[(degree - 1) as usize];
    Ok(Chord {
        root_pc: (tonic + interval).rem_euclid(12) as u8,
        quality: degree_qualities(scale)[(degree - 1) as usize],
    })
}

/// Transpose a chord symbol's root by a semitone count, preserving the
/// suffix byte-for-byte.
///
/// The root (letter plus optional `#`/`b`) is parsed, shifted modulo 12 in
/// either direction, and re-rendered with the canonical sharp spelling;
/// whatever follows the root is carried over untouched, so "Cmaj" at -1
/// is "Bmaj" and "F#min" at +1 is "Gmin".
pub fn transpose_chord_symbol(symbol: &str, semitones: i32) -> Result<String, TheoryError> {
    let (root_pc, suffix) = split_chord_symbol(symbol)?;
    let root = offset_to_note_name(root_pc as i32 + semitones);
    Ok(format!("{}{}", root, suffix))
}

/// Split a chord symbol into root pitch class and the verbatim suffix.
pub(crate) fn split_chord_symbol(symbol: &str) -> Result<(u8, &str), TheoryError> {
    let mut chars = symbol.chars();
    let Some(letter) = chars.next() else {
        return Err(TheoryError::InvalidNoteName {
            name: symbol.to_string(),
        });
    };
    let mut root_len = letter.len_utf8();
    if matches!(chars.next(), Some('#') | Some('b')) {
        root_len += 1;
    }
    let root_pc = note_name_to_offset(&symbol[..root_len])?;
    Ok((root_pc, &symbol[root_len..]))
}

/// Read the quality suffix of a chord symbol.
///
/// A valid root with an unrecognized suffix reads as major, matching how
/// an unadorned root name reads; a symbol whose root does not parse at
/// all has no quality and returns `None`.
pub(crate) fn chord_quality_of(symbol: &str) -> Option<ChordQuality> {
    let (_, suffix) = split_chord_symbol(symbol).ok()?;
    if suffix.starts_with("dim") {
        Some(ChordQuality::Diminished)
    } else if suffix.starts_with("min") || (suffix.starts_with('m') && !suffix.starts_with("maj")) {
        Some(ChordQuality::Minor)
    } else {
        Some(ChordQuality::Major)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use songcraft_spec::Scale;

    use super::*;

    #[test]
    fn note_names_parse_with_accidentals() {
        assert_eq!(note_name_to_offset("C").unwrap(), 0);
        assert_eq!(note_name_to_offset("F#").unwrap(), 6);
        assert_eq!(note_name_to_offset("Bb").unwrap(), 10);
        assert_eq!(note_name_to_offset("B#").unwrap(), 0);
        assert_eq!(note_name_to_offset("Cb").unwrap(), 11);
    }

    #[test]
    fn invalid_note_names_fail() {
        for bad in ["", "H", "C$", "sharp", "#"] {
            assert!(
                note_name_to_offset(bad).is_err(),
                "'{}' should not parse",
                bad
            );
        }
    }

    #[test]
    fn offsets_wrap_in_both_directions() {
        assert_eq!(offset_to_note_name(0), "C");
        assert_eq!(offset_to_note_name(-1), "B");
        assert_eq!(offset_to_note_name(12), "C");
        assert_eq!(offset_to_note_name(13), "C#");
        assert_eq!(offset_to_note_name(-13), "B");
    }

    #[test]
    fn diatonic_triads_match_convention() {
        assert_eq!(
            degree_to_chord(1, "C", Scale::Major).unwrap().to_string(),
            "Cmaj"
        );
        assert_eq!(
            degree_to_chord(5, "C", Scale::Major).unwrap().to_string(),
            "Gmaj"
        );
        assert_eq!(
            degree_to_chord(7, "C", Scale::Major).unwrap().to_string(),
            "Bdim"
        );
        assert_eq!(
            degree_to_chord(1, "A", Scale::Minor).unwrap().to_string(),
            "Amin"
        );
        assert_eq!(
            degree_to_chord(2, "A", Scale::Minor).unwrap().to_string(),
            "Bdim"
        );
        assert_eq!(
            degree_to_chord(7, "A", Scale::Minor).unwrap().to_string(),
            "Gmaj"
        );
    }

    #[test]
    fn degree_out_of_range_fails() {
        assert_eq!(
            degree_to_chord(0, "C", Scale::Major),
            Err(TheoryError::InvalidDegree { degree: 0 })
        );
        assert_eq!(
            degree_to_chord(8, "C", Scale::Major),
            Err(TheoryError::InvalidDegree { degree: 8 })
        );
    }

    #[test]
    fn transpose_preserves_suffix_and_wraps() {
        assert_eq!(transpose_chord_symbol("Cmaj", 1).unwrap(), "C#maj");
        assert_eq!(transpose_chord_symbol("Cmaj", -1).unwrap(), "Bmaj");
        assert_eq!(transpose_chord_symbol("Bdim", 1).unwrap(), "Cdim");
        assert_eq!(transpose_chord_symbol("F#min", 12).unwrap(), "F#min");
        assert_eq!(transpose_chord_symbol("Bbmin", 2).unwrap(), "Cmin");
    }

    #[test]
    fn non_ascii_symbols_fail_cleanly() {
        assert_eq!(
            transpose_chord_symbol("Émaj", 1),
            Err(TheoryError::InvalidNoteName {
                name: "É".to_string()
            })
        );
        assert!(transpose_chord_symbol("♭min", -1).is_err());
        assert!(transpose_chord_symbol("", 1).is_err());
    }

    #[test]
    fn quality_suffix_detection() {
        assert_eq!(chord_quality_of("Cmaj"), Some(ChordQuality::Major));
        assert_eq!(chord_quality_of("F#min"), Some(ChordQuality::Minor));
        assert_eq!(chord_quality_of("Bdim"), Some(ChordQuality::Diminished));
        assert_eq!(chord_quality_of("G"), Some(ChordQuality::Major));
        assert_eq!(chord_quality_of("Am"), Some(ChordQuality::Minor));
        assert_eq!(chord_quality_of("Hmaj"), None);
        assert_eq!(chord_quality_of(""), None);
    }
}
