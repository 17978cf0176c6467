//! Three-way style catalog.
//!
//! ## Construction
//!
//! [`StyleCatalog::build`] folds one resource snapshot into an immutable
//! catalog for a concrete device configuration and target module:
//!
//! 1. Framework definitions whose folder matches the device claim
//!    references in the `android` namespace; the framework theme list is
//!    the subset following the theme naming convention.
//! 2. The target module and its transitively reachable Android-capable
//!    dependency modules claim local references.
//! 3. Remaining library definitions claim whatever is left.
//! 4. Claims are first-wins: a reference already claimed by an earlier
//!    scope silently discards later definitions. Within one scope,
//!    definitions merge into the entity variant by variant, first
//!    definition per folder winning.
//!
//! Non-theme entities stay resolvable through [`StyleCatalog::find`] and
//! [`StyleCatalog::lookup_parent`] so inheritance chains can pass through
//! them; only classified themes appear in the scope lists.

use std::collections::{BTreeMap, HashSet, VecDeque};

use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use swatch_model::{QualifierSet, ResourceSnapshot, StyleDefinition, StyleReference};

use crate::classify::{is_theme_name, Classifier, ThemeVerdict};
use crate::entity::{StyleEntity, StyleScope, StyleVariant};

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Module not found: {module}")]
    ModuleNotFound { module: String },

    #[error("'{module}' is not an Android module")]
    NotAnAndroidModule { module: String },
}

/// Immutable catalog of style entities, reusable across resolutions for
/// as long as the snapshot and device configuration stay unchanged.
/// Rebuild it on any change; nothing is updated incrementally.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    entities: BTreeMap<StyleReference, StyleEntity>,
    framework_themes: Vec<StyleReference>,
    local_themes: Vec<StyleReference>,
    external_themes: Vec<StyleReference>,
}

impl StyleCatalog {
    /// Builds the catalog for one device configuration and target
    /// module. An unknown or non-Android target module is a hard error;
    /// a missing platform target only leaves the framework scope empty.
    #[instrument(skip(snapshot), fields(module = %module, device = %device))]
    pub fn build(
        snapshot: &ResourceSnapshot,
        device: &QualifierSet,
        module: &str,
    ) -> CatalogResult<StyleCatalog> {
        info!("Starting style catalog build");

        let target = match snapshot.find_module(module) {
            Some(target) => target,
            None => {
                error!("Target module not found");
                return Err(CatalogError::ModuleNotFound {
                    module: module.to_string(),
                });
            }
        };
        if !target.android {
            error!("Target module has no Android resource support");
            return Err(CatalogError::NotAnAndroidModule {
                module: module.to_string(),
            });
        }

        let mut entities: BTreeMap<StyleReference, StyleEntity> = BTreeMap::new();

        match &snapshot.platform {
            Some(platform) => {
                debug!(
                    api_level = platform.api_level,
                    styles = platform.styles.len(),
                    "Collecting framework styles"
                );
                for definition in &platform.styles {
                    if !definition.qualifiers.is_match_for(device) {
                        continue;
                    }
                    insert_definition(
                        &mut entities,
                        StyleReference::android(definition.name.clone()),
                        StyleScope::Framework,
                        definition,
                    );
                }
            }
            None => debug!("No platform target; framework scope left empty"),
        }

        for name in reachable_modules(snapshot, module) {
            let source = match snapshot.find_module(&name) {
                Some(source) => source,
                None => continue,
            };
            for definition in &source.styles {
                insert_definition(
                    &mut entities,
                    StyleReference::res_auto(definition.name.clone()),
                    StyleScope::Local {
                        module: source.name.clone(),
                    },
                    definition,
                );
            }
        }

        for library in &snapshot.libraries {
            for definition in &library.styles {
                insert_definition(
                    &mut entities,
                    StyleReference::res_auto(definition.name.clone()),
                    StyleScope::External {
                        library: library.name.clone(),
                    },
                    definition,
                );
            }
        }

        let mut framework_themes = Vec::new();
        let mut local_themes = Vec::new();
        let mut external_themes = Vec::new();
        let mut classifier = Classifier::new(&entities);
        for entity in entities.values() {
            match entity.scope() {
                StyleScope::Framework => {
                    if is_theme_name(entity.name()) {
                        framework_themes.push(entity.reference().clone());
                    }
                }
                StyleScope::Local { .. } => {
                    if classifier.classify(entity) == ThemeVerdict::Theme {
                        local_themes.push(entity.reference().clone());
                    }
                }
                StyleScope::External { .. } => {
                    if classifier.classify(entity) == ThemeVerdict::Theme {
                        external_themes.push(entity.reference().clone());
                    }
                }
            }
        }
        info!(
            entities = entities.len(),
            framework = framework_themes.len(),
            local = local_themes.len(),
            external = external_themes.len(),
            "Style catalog build complete"
        );

        Ok(StyleCatalog {
            entities,
            framework_themes,
            local_themes,
            external_themes,
        })
    }

    /// Framework themes matching the device, sorted by name.
    pub fn framework_themes(&self) -> Vec<&StyleEntity> {
        self.resolve_list(&self.framework_themes)
    }

    /// Themes declared by the target module and its dependencies, sorted
    /// by name.
    pub fn local_themes(&self) -> Vec<&StyleEntity> {
        self.resolve_list(&self.local_themes)
    }

    /// Library themes not shadowed by local definitions, sorted by name.
    pub fn external_themes(&self) -> Vec<&StyleEntity> {
        self.resolve_list(&self.external_themes)
    }

    pub fn find(&self, reference: &StyleReference) -> Option<&StyleEntity> {
        self.entities.get(reference)
    }

    /// Resolves raw parent-reference text. Framework styles are only
    /// reachable through the `android:` prefix; bare names resolve to
    /// whichever non-framework scope claimed them.
    pub fn lookup_parent(&self, text: &str) -> Option<&StyleEntity> {
        self.find(&StyleReference::from_text(text))
    }

    fn resolve_list(&self, references: &[StyleReference]) -> Vec<&StyleEntity> {
        references
            .iter()
            .filter_map(|reference| self.entities.get(reference))
            .collect()
    }
}

fn insert_definition(
    entities: &mut BTreeMap<StyleReference, StyleEntity>,
    reference: StyleReference,
    scope: StyleScope,
    definition: &StyleDefinition,
) {
    let entity = entities
        .entry(reference)
        .or_insert_with_key(|reference| StyleEntity::new(reference.clone(), scope.clone()));
    if !entity.scope().is_same_kind(&scope) {
        debug!(
            style = %entity.reference(),
            "Duplicate style reference in a later scope; keeping the first"
        );
        return;
    }
    let variant = StyleVariant {
        qualifiers: definition.qualifiers.clone(),
        parent: definition.parent.clone(),
        attributes: definition.attributes.clone(),
    };
    if !entity.push_variant(variant) {
        debug!(
            style = %entity.reference(),
            folder = %definition.qualifiers,
            "Duplicate folder definition; keeping the first"
        );
    }
}

/// Breadth-first walk over module dependencies starting at `root`,
/// returning the Android-capable modules in visit order. Non-Android
/// modules are traversed but contribute nothing.
fn reachable_modules(snapshot: &ResourceSnapshot, root: &str) -> Vec<String> {
    let mut queue: VecDeque<String> = VecDeque::new();
    let mut seen: HashSet<String> = HashSet::new();
    queue.push_back(root.to_string());
    seen.insert(root.to_string());

    let mut ordered = Vec::new();
    while let Some(name) = queue.pop_front() {
        let module = match snapshot.find_module(&name) {
            Some(module) => module,
            None => {
                warn!(module = %name, "Dependency module missing from snapshot");
                continue;
            }
        };
        if module.android {
            ordered.push(module.name.clone());
        }
        for dependency in &module.dependencies {
            if seen.insert(dependency.clone()) {
                queue.push_back(dependency.clone());
            }
        }
    }
    ordered
}
