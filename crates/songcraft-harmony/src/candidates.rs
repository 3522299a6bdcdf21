//! Style-prior-driven candidate generation.

use songcraft_spec::{ProgressionCandidate, StylePrior};

use crate::error::TheoryError;
use crate::generate::{
    generate_basic_progression, generate_edm_progression, generate_pop_progression,
    generate_trance_progression,
};

/// Generate a short list of named progression candidates for a style.
///
/// The prior's `guardrails.energy_profile` is matched case-insensitively by
/// substring to pick genre families: house/EDM descriptors yield the EDM
/// voicings, "trance" yields trance-named candidates, and pop/indie yield
/// the pop voicings. Several families can match at once. When none match,
/// the basic I-IV-V-I progression is returned as the single fallback. The
/// list is truncated to `max_count`; every candidate's progression is
/// non-empty.
pub fn generate_progression_candidates(
    style: &StylePrior,
    key: &str,
    max_count: usize,
) -> Result<Vec<ProgressionCandidate>, TheoryError> {
    let energy = style.guardrails.energy_profile.to_lowercase();
    let mut candidates = Vec::new();

    if ["house", "edm", "electro", "techno"]
        .iter()
        .any(|tag| energy.contains(tag))
    {
        candidates.push(ProgressionCandidate {
            name: format!("Dark EDM loop in {} minor", key),
            progression: generate_edm_progression(key, "dark")?,
        });
        candidates.push(ProgressionCandidate {
            name: format!("Driving EDM anthem in {}", key),
            progression: generate_edm_progression(key, "driving")?,
        });
    }

    if energy.contains("trance") {
        candidates.push(ProgressionCandidate {
            name: format!("Uplifting Trance in {} minor", key),
            progression: generate_trance_progression(key, "uplifting")?,
        });
        candidates.push(ProgressionCandidate {
            name: format!("Epic Trance in {} minor", key),
            progression: generate_trance_progression(key, "epic")?,
        });
    }

    if energy.contains("pop") || energy.contains("indie") {
        candidates.push(ProgressionCandidate {
            name: format!("Standard Pop in {}", key),
            progression: generate_pop_progression(key, "standard")?,
        });
        candidates.push(ProgressionCandidate {
            name: format!("Emotional Pop in {}", key),
            progression: generate_pop_progression(key, "emotional")?,
        });
    }

    if candidates.is_empty() {
        candidates.push(ProgressionCandidate {
            name: format!("Basic I-IV-V-I in {}", key),
            progression: generate_basic_progression(key)?,
        });
    }

    candidates.truncate(max_count);
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use songcraft_spec::StylePrior;

    use super::*;

    #[test]
    fn trance_profile_yields_trance_named_candidates() {
        let style = StylePrior::from_energy_profile("Uplifting Trance");
        let candidates = generate_progression_candidates(&style, "A", 5).unwrap();
        assert!(!candidates.is_empty());
        assert!(candidates
            .iter()
            .any(|c| c.name.to_lowercase().contains("trance")));
        assert!(candidates.iter().all(|c| !c.progression.is_empty()));
    }

    #[test]
    fn house_profile_yields_edm_candidates() {
        let style = StylePrior::from_energy_profile("driving house");
        let candidates = generate_progression_candidates(&style, "F", 5).unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.name.contains("EDM")));
    }

    #[test]
    fn pop_profile_yields_pop_candidates() {
        let style = StylePrior::from_energy_profile("indie pop");
        let candidates = generate_progression_candidates(&style, "G", 5).unwrap();
        assert!(candidates.iter().any(|c| c.name.contains("Pop")));
        assert_eq!(candidates[0].progression[0].chord, "Gmaj");
    }

    #[test]
    fn multiple_families_can_match() {
        let style = StylePrior::from_energy_profile("trance-adjacent EDM pop crossover");
        let candidates = generate_progression_candidates(&style, "C", 10).unwrap();
        assert_eq!(candidates.len(), 6);
    }

    #[test]
    fn result_is_truncated_to_max_count() {
        let style = StylePrior::from_energy_profile("trance-adjacent EDM pop crossover");
        let candidates = generate_progression_candidates(&style, "C", 3).unwrap();
        assert_eq!(candidates.len(), 3);

        let none = generate_progression_candidates(&style, "C", 0).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn unmatched_profile_falls_back_to_basic() {
        let style = StylePrior::from_energy_profile("lo-fi bossa nova");
        let candidates = generate_progression_candidates(&style, "D", 5).unwrap();
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].name.contains("Basic"));
        assert_eq!(candidates[0].progression[0].chord, "Dmaj");
    }
}
