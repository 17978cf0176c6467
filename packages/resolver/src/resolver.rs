//! Attribute resolution facade.
//!
//! ## Pipeline
//!
//! [`AttributeResolver`] ties the three resolution stages together for
//! one catalog, device configuration and matcher: candidate collection
//! over the inheritance graph, per-attribute winner selection, and
//! assembly into the final name-ordered list. The resolver borrows its
//! catalog, so one catalog can serve many resolutions; rebuilding the
//! catalog is the only way state ever changes.

use tracing::{error, instrument};

use swatch_catalog::{StyleCatalog, StyleEntity};
use swatch_model::{ConfigurationMatcher, QualifierSet, StandardMatcher, StyleReference};

use crate::assemble::{assemble, ResolvedAttribute};
use crate::walker::{resolve_candidates, ResolveError, ResolveResult};

/// Resolves effective attribute values for whole styles.
pub struct AttributeResolver<'a, M = StandardMatcher> {
    catalog: &'a StyleCatalog,
    device: QualifierSet,
    matcher: M,
}

impl<'a> AttributeResolver<'a, StandardMatcher> {
    pub fn new(catalog: &'a StyleCatalog, device: QualifierSet) -> Self {
        AttributeResolver {
            catalog,
            device,
            matcher: StandardMatcher,
        }
    }
}

impl<'a, M: ConfigurationMatcher> AttributeResolver<'a, M> {
    /// A resolver with a caller-supplied matching strategy.
    pub fn with_matcher(catalog: &'a StyleCatalog, device: QualifierSet, matcher: M) -> Self {
        AttributeResolver {
            catalog,
            device,
            matcher,
        }
    }

    pub fn device(&self) -> &QualifierSet {
        &self.device
    }

    /// Resolves every attribute reachable from the referenced style.
    #[instrument(skip(self), fields(style = %reference, device = %self.device))]
    pub fn resolve(&self, reference: &StyleReference) -> ResolveResult<Vec<ResolvedAttribute>> {
        let entity = match self.catalog.find(reference) {
            Some(entity) => entity,
            None => {
                error!("Style not found in catalog");
                return Err(ResolveError::StyleNotFound {
                    style: reference.to_string(),
                });
            }
        };
        self.resolve_entity(entity)
    }

    /// Resolution for an entity already in hand.
    pub fn resolve_entity(&self, entity: &StyleEntity) -> ResolveResult<Vec<ResolvedAttribute>> {
        let candidates = resolve_candidates(entity, self.catalog)?;
        Ok(assemble(&candidates, &self.device, &self.matcher))
    }
}
