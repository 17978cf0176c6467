//! Immutable snapshot of style definitions, grouped by declaring scope.
//!
//! A snapshot is the whole input boundary of the resolver: framework
//! styles for one platform target, per-module project styles, and
//! library styles. It is built once, read during catalog construction
//! and resolution, and discarded wholesale when the underlying resources
//! change. Nothing here is updated in place.

use serde::{Deserialize, Serialize};

use crate::qualifiers::QualifierSet;

/// One name/value pair inside a style definition. Names are qualified
/// display names ("android:colorPrimary", "colorAccent"); values are raw
/// resource strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleAttribute {
    pub name: String,
    pub value: String,
}

impl StyleAttribute {
    pub fn new(name: String, value: String) -> Self {
        StyleAttribute { name, value }
    }
}

/// One physical style definition inside a qualifier folder.
///
/// Attribute order is the declaration order and is preserved through
/// resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDefinition {
    pub name: String,
    pub qualifiers: QualifierSet,
    /// Raw parent reference text. `None` leaves the parent implicit,
    /// `Some("")` explicitly declares a root style.
    pub parent: Option<String>,
    pub attributes: Vec<StyleAttribute>,
}

impl StyleDefinition {
    pub fn new(name: String, qualifiers: QualifierSet) -> Self {
        StyleDefinition {
            name,
            qualifiers,
            parent: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: String) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_attribute(mut self, name: String, value: String) -> Self {
        self.attributes.push(StyleAttribute::new(name, value));
        self
    }
}

/// Framework style resources for one platform target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformResources {
    pub api_level: u16,
    pub styles: Vec<StyleDefinition>,
}

impl PlatformResources {
    pub fn new(api_level: u16) -> Self {
        PlatformResources {
            api_level,
            styles: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: StyleDefinition) -> Self {
        self.styles.push(style);
        self
    }
}

/// Style resources declared by one project module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleResources {
    pub name: String,
    /// Modules without Android resource support never contribute styles
    /// and cannot be resolution targets.
    pub android: bool,
    /// Names of directly depended-on modules.
    pub dependencies: Vec<String>,
    pub styles: Vec<StyleDefinition>,
}

impl ModuleResources {
    pub fn new(name: String) -> Self {
        ModuleResources {
            name,
            android: true,
            dependencies: Vec::new(),
            styles: Vec::new(),
        }
    }

    pub fn plain(name: String) -> Self {
        ModuleResources {
            android: false,
            ..ModuleResources::new(name)
        }
    }

    pub fn with_dependency(mut self, name: String) -> Self {
        self.dependencies.push(name);
        self
    }

    pub fn with_style(mut self, style: StyleDefinition) -> Self {
        self.styles.push(style);
        self
    }
}

/// Style resources contributed by an external library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryResources {
    pub name: String,
    pub styles: Vec<StyleDefinition>,
}

impl LibraryResources {
    pub fn new(name: String) -> Self {
        LibraryResources {
            name,
            styles: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: StyleDefinition) -> Self {
        self.styles.push(style);
        self
    }
}

/// Everything resolution may read. `platform` is absent when no render
/// target is configured; that is a degraded state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub platform: Option<PlatformResources>,
    pub modules: Vec<ModuleResources>,
    pub libraries: Vec<LibraryResources>,
}

impl ResourceSnapshot {
    pub fn new() -> Self {
        ResourceSnapshot::default()
    }

    pub fn set_platform(&mut self, platform: PlatformResources) {
        self.platform = Some(platform);
    }

    pub fn add_module(&mut self, module: ModuleResources) {
        self.modules.push(module);
    }

    pub fn add_library(&mut self, library: LibraryResources) {
        self.libraries.push(library);
    }

    pub fn find_module(&self, name: &str) -> Option<&ModuleResources> {
        self.modules.iter().find(|module| module.name == name)
    }
}
