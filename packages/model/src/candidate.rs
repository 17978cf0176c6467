//! Candidate values paired with the region they apply to.

use serde::{Deserialize, Serialize};

use crate::qualifiers::QualifierSet;
use crate::region::QualifierRegion;

/// A value recorded during an inheritance walk, together with the region
/// of configurations it applies to. Candidates for the same attribute
/// name compete for selection against a concrete device configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredCandidate<T> {
    pub region: QualifierRegion,
    pub value: T,
}

impl<T> ConfiguredCandidate<T> {
    pub fn new(region: QualifierRegion, value: T) -> Self {
        ConfiguredCandidate { region, value }
    }

    /// The region's representative qualifier set, used when this
    /// candidate competes in a best-configuration match.
    pub fn qualifiers(&self) -> &QualifierSet {
        self.region.representative()
    }
}
