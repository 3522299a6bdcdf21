//! Motif score report types.

use serde::{Deserialize, Serialize};

/// Raw analyzer outputs backing a score report, exposed for explainability.
///
/// Each value is the unweighted 0-100 output of one motif analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Distinct-interval variety of the note sequence.
    pub interval_variety: f64,
    /// Melodic-shape score (arch, monotonic line, oscillation).
    pub contour: f64,
    /// Duration-dispersion score.
    pub rhythmic_interest: f64,
    /// Moderate-repetition score.
    pub repetition_balance: f64,
}

/// Composite fitness report for one motif.
///
/// All sub-scores and `overall` are clamped to [0, 100]; `motif_id` echoes
/// the scored motif's id unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotifScoreReport {
    /// Id of the scored motif.
    pub motif_id: String,
    /// How easily the motif sticks: contour clarity + range compactness.
    pub memorability: f64,
    /// Stepwise, narrow-range vocal friendliness.
    pub singability: f64,
    /// Tension placement and resolution against the motif's key/scale.
    pub tension_relief: f64,
    /// Joint pitch/duration/velocity variation.
    pub novelty: f64,
    /// Fit against the style prior's energy profile.
    pub genre_fit: f64,
    /// Weighted aggregate of the five sub-scores.
    pub overall: f64,
    /// Raw analyzer outputs.
    pub breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{MotifScoreReport, ScoreBreakdown};

    #[test]
    fn report_round_trips_through_json() {
        let report = MotifScoreReport {
            motif_id: "motif-01".to_string(),
            memorability: 81.5,
            singability: 92.0,
            tension_relief: 88.0,
            novelty: 44.0,
            genre_fit: 70.0,
            overall: 76.2,
            breakdown: ScoreBreakdown {
                interval_variety: 66.7,
                contour: 85.0,
                rhythmic_interest: 20.0,
                repetition_balance: 100.0,
            },
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: MotifScoreReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
