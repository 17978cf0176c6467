//! Theme classification.
//!
//! Whether a style is a theme decides which catalog list it appears in.
//! Framework styles are themes purely by naming convention; project and
//! library styles are classified by walking their ancestor chains until
//! a framework root, a dead end or a cycle. Verdicts are memoized per
//! (reference, folder) pair for the lifetime of one catalog build, once
//! the pair has been classified in its own right.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use swatch_model::{QualifierSet, StyleReference};

use crate::entity::{StyleEntity, StyleVariant};

/// Verdict of theme classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeVerdict {
    /// Some ancestor chain reaches a framework theme root.
    Theme,
    /// Every resolvable chain ends in plain styling.
    Style,
    /// Broken or cyclic ancestry everywhere; treated as not a theme.
    Unresolvable,
}

/// Framework theme naming convention: "Theme" itself or any "Theme."
/// descendant.
pub fn is_theme_name(name: &str) -> bool {
    name == "Theme" || name.starts_with("Theme.")
}

pub(crate) struct Classifier<'a> {
    entities: &'a BTreeMap<StyleReference, StyleEntity>,
    cache: HashMap<(StyleReference, QualifierSet), ThemeVerdict>,
}

impl<'a> Classifier<'a> {
    pub(crate) fn new(entities: &'a BTreeMap<StyleReference, StyleEntity>) -> Self {
        Classifier {
            entities,
            cache: HashMap::new(),
        }
    }

    /// Style-level verdict: a style is a theme when any folder variant
    /// reaches a theme root.
    pub(crate) fn classify(&mut self, entity: &StyleEntity) -> ThemeVerdict {
        self.entity_verdict(entity, &mut HashSet::new())
    }

    fn entity_verdict(
        &mut self,
        entity: &StyleEntity,
        visited: &mut HashSet<StyleReference>,
    ) -> ThemeVerdict {
        if entity.is_framework() {
            return if is_theme_name(entity.name()) {
                ThemeVerdict::Theme
            } else {
                ThemeVerdict::Style
            };
        }
        if !visited.insert(entity.reference().clone()) {
            return ThemeVerdict::Unresolvable;
        }

        let mut verdict = ThemeVerdict::Unresolvable;
        for variant in entity.variants() {
            match self.variant_verdict(entity, variant, visited) {
                ThemeVerdict::Theme => {
                    verdict = ThemeVerdict::Theme;
                    break;
                }
                ThemeVerdict::Style => verdict = ThemeVerdict::Style,
                ThemeVerdict::Unresolvable => {}
            }
        }
        visited.remove(entity.reference());
        verdict
    }

    fn variant_verdict(
        &mut self,
        entity: &StyleEntity,
        variant: &StyleVariant,
        visited: &mut HashSet<StyleReference>,
    ) -> ThemeVerdict {
        let key = (entity.reference().clone(), variant.qualifiers.clone());
        if let Some(verdict) = self.cache.get(&key) {
            return *verdict;
        }

        let verdict = match entity.parent_name_at(&variant.qualifiers) {
            // a root that never reached the framework is plain styling
            None => ThemeVerdict::Style,
            Some(text) => match self.entities.get(&StyleReference::from_text(&text)) {
                None => ThemeVerdict::Unresolvable,
                Some(parent) => self.entity_verdict(parent, visited),
            },
        };
        // only the outermost entity's verdicts are path-independent; a
        // verdict observed deeper in the walk can be suppressed by the
        // visited set and must not outlive this walk
        if visited.len() == 1 {
            self.cache.insert(key, verdict);
        }
        verdict
    }
}
