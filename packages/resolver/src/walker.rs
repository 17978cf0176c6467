//! Inheritance walking.
//!
//! ## Algorithm
//!
//! Resolution enters the walk once per folder variant of the leaf style,
//! with an unrestricted region. Each step computes the region where the
//! current variant can supply values (its own folder minus the sibling
//! folders, intersected with the region inherited from the styles walked
//! so far), records values for attribute names not yet seen on this
//! path, and recurses into every folder variant of the parent style.
//!
//! A branch ends at a root style, at an unresolvable parent reference
//! (warned, never fatal), or when its region empties. The seen-name set
//! is copied per branch, so sibling branches compete through candidates
//! instead of shadowing each other. Cyclic parent chains abort the whole
//! resolution with [`ResolveError::CyclicInheritance`].

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;
use tracing::{debug, instrument, warn};

use swatch_catalog::{StyleCatalog, StyleEntity};
use swatch_model::{ConfiguredCandidate, QualifierRegion, QualifierSet, StyleReference};

pub type ResolveResult<T> = Result<T, ResolveError>;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Style not found: {style}")]
    StyleNotFound { style: String },

    #[error("Cyclic style inheritance detected: {style}\nInheritance chain: {}", chain.join(" → "))]
    CyclicInheritance { style: String, chain: Vec<String> },
}

/// Candidates collected per attribute name, in name order.
pub type AttributeCandidates = BTreeMap<String, Vec<ConfiguredCandidate<String>>>;

/// Collects every attribute value reachable from `leaf`, together with
/// the region of configurations it applies to.
#[instrument(skip(leaf, catalog), fields(style = %leaf.reference()))]
pub fn resolve_candidates(
    leaf: &StyleEntity,
    catalog: &StyleCatalog,
) -> ResolveResult<AttributeCandidates> {
    let mut walk = Walk {
        catalog,
        collected: AttributeCandidates::new(),
        path: Vec::new(),
    };
    for variant in leaf.variants() {
        walk.descend(
            leaf,
            &variant.qualifiers,
            &QualifierRegion::unrestricted(),
            HashSet::new(),
        )?;
    }
    debug!(attributes = walk.collected.len(), "Candidate collection finished");
    Ok(walk.collected)
}

struct Walk<'a> {
    catalog: &'a StyleCatalog,
    collected: AttributeCandidates,
    path: Vec<StyleReference>,
}

impl Walk<'_> {
    fn descend(
        &mut self,
        style: &StyleEntity,
        qualifiers: &QualifierSet,
        inherited: &QualifierRegion,
        mut seen: HashSet<String>,
    ) -> ResolveResult<()> {
        if self.path.contains(style.reference()) {
            let mut chain: Vec<String> = self.path.iter().map(|r| r.to_string()).collect();
            chain.push(style.reference().to_string());
            return Err(ResolveError::CyclicInheritance {
                style: style.reference().to_string(),
                chain,
            });
        }

        let own = match QualifierRegion::restrict(qualifiers, &style.other_qualifier_sets(qualifiers))
        {
            Some(region) => region,
            None => {
                warn!(
                    style = %style.reference(),
                    folder = %qualifiers,
                    "Folder variant is unreachable; skipping"
                );
                return Ok(());
            }
        };
        let region = match inherited.intersect(&own) {
            Some(region) => region,
            None => {
                debug!(
                    style = %style.reference(),
                    folder = %qualifiers,
                    "Region emptied by inheritance; pruning branch"
                );
                return Ok(());
            }
        };

        for attribute in style.attributes_at(qualifiers) {
            if seen.insert(attribute.name.clone()) {
                self.collected
                    .entry(attribute.name.clone())
                    .or_default()
                    .push(ConfiguredCandidate::new(region.clone(), attribute.value.clone()));
            }
        }

        let parent_name = match style.parent_name_at(qualifiers) {
            Some(name) => name,
            None => return Ok(()),
        };
        let parent = match self.catalog.lookup_parent(&parent_name) {
            Some(parent) => parent,
            None => {
                warn!(
                    style = %style.reference(),
                    parent = %parent_name,
                    "Parent style not found; terminating branch"
                );
                return Ok(());
            }
        };

        self.path.push(style.reference().clone());
        for variant in parent.variants() {
            self.descend(parent, &variant.qualifiers, &region, seen.clone())?;
        }
        self.path.pop();
        Ok(())
    }
}
