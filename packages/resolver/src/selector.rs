//! Winner selection among configured candidates.

use serde::{Deserialize, Serialize};
use tracing::debug;

use swatch_model::{ConfigurationMatcher, ConfiguredCandidate, QualifierSet};

/// Outcome of picking one candidate for a device configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub selected: ConfiguredCandidate<String>,
    pub alternatives: Vec<ConfiguredCandidate<String>>,
    /// False when no candidate matched the device and the first one was
    /// kept as a fallback.
    pub matches_device: bool,
}

/// Ranks `candidates` against `device` through the matcher. When nothing
/// matches, the first candidate is kept and flagged rather than dropped,
/// so the attribute still surfaces downstream. Returns `None` only for
/// an empty slice.
pub fn select_winner<M: ConfigurationMatcher>(
    candidates: &[ConfiguredCandidate<String>],
    device: &QualifierSet,
    matcher: &M,
) -> Option<Selection> {
    if candidates.is_empty() {
        return None;
    }
    let qualifier_sets: Vec<&QualifierSet> =
        candidates.iter().map(|candidate| candidate.qualifiers()).collect();
    let (index, matches_device) = match matcher.best_match(&qualifier_sets, device) {
        Some(index) => (index, true),
        None => {
            debug!(device = %device, "No candidate matches the device; keeping the first");
            (0, false)
        }
    };
    let alternatives = candidates
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != index)
        .map(|(_, candidate)| candidate.clone())
        .collect();
    Some(Selection {
        selected: candidates[index].clone(),
        alternatives,
        matches_device,
    })
}
