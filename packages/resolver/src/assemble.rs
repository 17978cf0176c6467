//! Resolved-attribute assembly.

use serde::{Deserialize, Serialize};

use swatch_model::{ConfigurationMatcher, ConfiguredCandidate, QualifierSet};

use crate::selector::{select_winner, Selection};
use crate::walker::AttributeCandidates;

/// Final value of one attribute for a device configuration. The losing
/// candidates stay available for inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAttribute {
    pub name: String,
    pub selected: ConfiguredCandidate<String>,
    pub alternatives: Vec<ConfiguredCandidate<String>>,
    /// False when the selected value does not apply to the device and is
    /// surfaced as a fallback only.
    pub matches_device: bool,
}

impl ResolvedAttribute {
    /// The winning raw value.
    pub fn value(&self) -> &str {
        &self.selected.value
    }

    /// The winning candidate's qualifier set.
    pub fn qualifiers(&self) -> &QualifierSet {
        self.selected.qualifiers()
    }
}

/// One resolved attribute per collected name, in name order. No name
/// appears twice.
pub fn assemble<M: ConfigurationMatcher>(
    candidates: &AttributeCandidates,
    device: &QualifierSet,
    matcher: &M,
) -> Vec<ResolvedAttribute> {
    candidates
        .iter()
        .filter_map(|(name, competing)| {
            let Selection {
                selected,
                alternatives,
                matches_device,
            } = select_winner(competing, device, matcher)?;
            Some(ResolvedAttribute {
                name: name.clone(),
                selected,
                alternatives,
                matches_device,
            })
        })
        .collect()
}
