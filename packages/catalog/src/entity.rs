//! Logical styles assembled from physical definitions.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use swatch_model::{QualifierSet, StyleAttribute, StyleReference};

/// Scope a style entity was claimed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StyleScope {
    Framework,
    Local { module: String },
    External { library: String },
}

impl StyleScope {
    pub(crate) fn is_same_kind(&self, other: &StyleScope) -> bool {
        matches!(
            (self, other),
            (StyleScope::Framework, StyleScope::Framework)
                | (StyleScope::Local { .. }, StyleScope::Local { .. })
                | (StyleScope::External { .. }, StyleScope::External { .. })
        )
    }
}

/// One folder variant of a logical style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleVariant {
    pub qualifiers: QualifierSet,
    /// Raw parent reference text; `Some("")` declares an explicit root.
    pub parent: Option<String>,
    pub attributes: Vec<StyleAttribute>,
}

/// A logical style: one reference, one scope, one variant per declaring
/// folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleEntity {
    reference: StyleReference,
    scope: StyleScope,
    variants: Vec<StyleVariant>,
}

impl StyleEntity {
    pub(crate) fn new(reference: StyleReference, scope: StyleScope) -> Self {
        StyleEntity {
            reference,
            scope,
            variants: Vec::new(),
        }
    }

    /// Appends a folder variant. Returns false without touching the
    /// entity when the folder is already defined; the first definition
    /// wins.
    pub(crate) fn push_variant(&mut self, variant: StyleVariant) -> bool {
        if self
            .variants
            .iter()
            .any(|existing| existing.qualifiers == variant.qualifiers)
        {
            return false;
        }
        self.variants.push(variant);
        true
    }

    pub fn reference(&self) -> &StyleReference {
        &self.reference
    }

    pub fn name(&self) -> &str {
        &self.reference.name
    }

    pub fn scope(&self) -> &StyleScope {
        &self.scope
    }

    pub fn is_framework(&self) -> bool {
        self.reference.is_framework()
    }

    pub fn variants(&self) -> &[StyleVariant] {
        &self.variants
    }

    /// Every folder the style is defined in.
    pub fn qualifier_sets(&self) -> Vec<&QualifierSet> {
        self.variants.iter().map(|variant| &variant.qualifiers).collect()
    }

    /// The folders other than `current`, owned so they can feed a region
    /// restriction.
    pub fn other_qualifier_sets(&self, current: &QualifierSet) -> Vec<QualifierSet> {
        self.variants
            .iter()
            .filter(|variant| &variant.qualifiers != current)
            .map(|variant| variant.qualifiers.clone())
            .collect()
    }

    pub fn variant_at(&self, qualifiers: &QualifierSet) -> Option<&StyleVariant> {
        self.variants
            .iter()
            .find(|variant| &variant.qualifiers == qualifiers)
    }

    /// Attributes declared by the variant at `qualifiers`, empty when the
    /// style has no such folder.
    pub fn attributes_at(&self, qualifiers: &QualifierSet) -> &[StyleAttribute] {
        self.variant_at(qualifiers)
            .map_or(&[], |variant| variant.attributes.as_slice())
    }

    /// Parent reference text effective for the variant at `qualifiers`.
    ///
    /// An explicitly empty parent declares a root. A missing declaration
    /// falls back to the implicit dot rule: "Widget.Button.Small"
    /// inherits "Widget.Button". Framework names keep their namespace in
    /// the returned text.
    pub fn parent_name_at(&self, qualifiers: &QualifierSet) -> Option<String> {
        let variant = self.variant_at(qualifiers)?;
        match &variant.parent {
            Some(parent) if parent.is_empty() => None,
            Some(parent) => Some(parent.clone()),
            None => self.implicit_parent(),
        }
    }

    fn implicit_parent(&self) -> Option<String> {
        let (parent, _) = self.reference.name.rsplit_once('.')?;
        if self.is_framework() {
            Some(format!("android:{}", parent))
        } else {
            Some(parent.to_string())
        }
    }

    /// The folder variants that would seed a copy when a definition at
    /// `desired_api` is called for: per version-stripped folder group,
    /// the definition with the highest API level at or below the target.
    /// Groups already defined at the target are omitted, as are groups
    /// existing only above it.
    pub fn variants_to_copy_for_api(&self, desired_api: u16) -> Vec<QualifierSet> {
        let mut best: BTreeMap<QualifierSet, &QualifierSet> = BTreeMap::new();
        for variant in &self.variants {
            let version = variant.qualifiers.api_level.unwrap_or(0);
            if version > desired_api {
                continue;
            }
            let mut stripped = variant.qualifiers.clone();
            stripped.api_level = None;
            match best.entry(stripped) {
                Entry::Vacant(slot) => {
                    slot.insert(&variant.qualifiers);
                }
                Entry::Occupied(mut slot) => {
                    if version > slot.get().api_level.unwrap_or(0) {
                        slot.insert(&variant.qualifiers);
                    }
                }
            }
        }
        best.into_values()
            .filter(|qualifiers| qualifiers.api_level.unwrap_or(0) != desired_api)
            .cloned()
            .collect()
    }
}
