//! Best-match selection between competing qualifier sets.

use crate::qualifiers::QualifierSet;

/// Picks the qualifier set that best matches a concrete device
/// configuration. Resolution defers to this trait wherever a single
/// winner has to be chosen among configured candidates.
pub trait ConfigurationMatcher {
    /// Index of the best-matching candidate, `None` when no candidate
    /// matches the device at all.
    fn best_match(&self, candidates: &[&QualifierSet], device: &QualifierSet) -> Option<usize>;
}

/// Resource-folder elimination matching: drop candidates that do not
/// match the device, then walk the dimensions in precedence order
/// (locale, smallest width, orientation, night mode, API level). At each
/// dimension, if any surviving candidate specifies it, candidates not
/// specifying the best value are eliminated; the best value is the
/// highest matching one for lower-bound dimensions. Ties keep the
/// earliest candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMatcher;

impl ConfigurationMatcher for StandardMatcher {
    fn best_match(&self, candidates: &[&QualifierSet], device: &QualifierSet) -> Option<usize> {
        let mut survivors: Vec<usize> = (0..candidates.len())
            .filter(|&index| candidates[index].is_match_for(device))
            .collect();
        if survivors.is_empty() {
            return None;
        }

        if survivors.iter().any(|&i| candidates[i].locale.is_some()) {
            survivors.retain(|&i| candidates[i].locale.is_some());
        }
        if let Some(best) = survivors.iter().filter_map(|&i| candidates[i].min_width_dp).max() {
            survivors.retain(|&i| candidates[i].min_width_dp == Some(best));
        }
        if survivors.iter().any(|&i| candidates[i].orientation.is_some()) {
            survivors.retain(|&i| candidates[i].orientation.is_some());
        }
        if survivors.iter().any(|&i| candidates[i].night.is_some()) {
            survivors.retain(|&i| candidates[i].night.is_some());
        }
        if let Some(best) = survivors.iter().filter_map(|&i| candidates[i].api_level).max() {
            survivors.retain(|&i| candidates[i].api_level == Some(best));
        }

        survivors.first().copied()
    }
}
