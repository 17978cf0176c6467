pub mod catalog;
pub mod classify;
pub mod entity;

pub use catalog::{CatalogError, CatalogResult, StyleCatalog};
pub use classify::{is_theme_name, ThemeVerdict};
pub use entity::{StyleEntity, StyleScope, StyleVariant};
