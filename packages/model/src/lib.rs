pub mod candidate;
pub mod matching;
pub mod qualifiers;
pub mod reference;
pub mod region;
pub mod snapshot;

pub use candidate::ConfiguredCandidate;
pub use matching::{ConfigurationMatcher, StandardMatcher};
pub use qualifiers::{NightMode, Orientation, QualifierSet};
pub use reference::{ResourceNamespace, StyleReference};
pub use region::QualifierRegion;
pub use snapshot::{
    LibraryResources, ModuleResources, PlatformResources, ResourceSnapshot, StyleAttribute,
    StyleDefinition,
};
