//! Major/minor scale definitions.

use serde::{Deserialize, Serialize};

/// A seven-tone scale type.
///
/// Each scale is defined by its semitone interval pattern from the tonic;
/// the pattern is the single source of truth for both chord-root derivation
/// in `songcraft-harmony` and scale-membership checks in `songcraft-motif`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Major scale: W-W-H-W-W-W-H.
    Major,
    /// Natural minor scale: W-H-W-W-H-W-W.
    Minor,
}

impl Scale {
    /// Semitone offsets from the tonic for scale degrees 1-7.
    pub fn intervals(self) -> [i32; 7] {
        match self {
            Scale::Major => [0, 2, 4, 5, 7, 9, 11],
            Scale::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// The 12 pitch classes that are in scale, as a boolean array indexed
    /// by absolute pitch class 0-11, for a tonic at `root_pc`.
    pub fn pitch_classes(self, root_pc: u8) -> [bool; 12] {
        let mut pcs = [false; 12];
        for interval in self.intervals() {
            pcs[(root_pc as usize + interval as usize) % 12] = true;
        }
        pcs
    }
}
