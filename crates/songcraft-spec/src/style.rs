//! Style prior types.

use serde::{Deserialize, Serialize};

/// Typical tempo for a style, with expected variance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BpmSignature {
    /// Typical tempo in beats per minute.
    pub bpm: f64,
    /// Acceptable deviation around `bpm`.
    #[serde(default)]
    pub variance: f64,
}

/// Swing feel for a style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingProfile {
    /// Swing amount (0.0 = straight, 1.0 = maximal).
    pub amount: f64,
    /// Subdivision the swing applies to (e.g., "eighth", "sixteenth").
    pub subdivision: String,
}

/// Section-length guidance. Unused by the core engine; carried for the
/// arrangement layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrangementNorms {
    /// Typical section length in bars.
    #[serde(default)]
    pub section_bars: u32,
}

/// Style guardrails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guardrails {
    /// Free-text energy descriptor (e.g., "driving house", "uplifting
    /// trance", "indie pop"). Matched case-insensitively by substring to
    /// pick candidate genre families and genre-fit targets.
    pub energy_profile: String,
    /// Cliche tags to avoid. Reserved for future candidate filtering;
    /// unused by core scoring.
    #[serde(default)]
    pub avoid_cliches: Vec<String>,
}

/// A structured profile describing a target style.
///
/// Only `guardrails.energy_profile` influences the core engine's behavior;
/// the remaining fields are pass-through context for consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePrior {
    /// Typical tempo and variance.
    pub bpm_signature: BpmSignature,
    /// Swing feel.
    pub swing_profile: SwingProfile,
    /// Free-form sound-design tags (pass-through).
    #[serde(default)]
    pub sound_design_traits: Vec<String>,
    /// Section-length guidance (unused by scoring).
    #[serde(default)]
    pub arrangement_norms: ArrangementNorms,
    /// Style guardrails.
    pub guardrails: Guardrails,
}

impl StylePrior {
    /// Build a minimal prior from an energy-profile descriptor, with
    /// neutral tempo and swing. Convenient for callers that only care
    /// about genre routing.
    pub fn from_energy_profile(energy_profile: impl Into<String>) -> Self {
        StylePrior {
            bpm_signature: BpmSignature {
                bpm: 120.0,
                variance: 0.0,
            },
            swing_profile: SwingProfile {
                amount: 0.0,
                subdivision: "eighth".to_string(),
            },
            sound_design_traits: Vec::new(),
            arrangement_norms: ArrangementNorms::default(),
            guardrails: Guardrails {
                energy_profile: energy_profile.into(),
                avoid_cliches: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::StylePrior;

    #[test]
    fn style_prior_round_trips_through_json() {
        let prior = StylePrior::from_energy_profile("uplifting trance");
        let json = serde_json::to_string(&prior).unwrap();
        let back: StylePrior = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prior);
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "bpm_signature": { "bpm": 128.0 },
            "swing_profile": { "amount": 0.1, "subdivision": "sixteenth" },
            "guardrails": { "energy_profile": "driving house" }
        }"#;
        let prior: StylePrior = serde_json::from_str(json).unwrap();
        assert_eq!(prior.bpm_signature.variance, 0.0);
        assert!(prior.sound_design_traits.is_empty());
        assert!(prior.guardrails.avoid_cliches.is_empty());
    }
}
