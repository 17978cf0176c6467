//! End-to-end resolution over a realistic snapshot: framework, module
//! and library styles with night and version folder variants.

use swatch_catalog::StyleCatalog;
use swatch_model::{
    ConfigurationMatcher, LibraryResources, ModuleResources, PlatformResources, QualifierSet,
    ResourceSnapshot, StyleDefinition, StyleReference,
};

use crate::{AttributeResolver, ResolveError, ResolvedAttribute};

fn folder(suffix: &str) -> QualifierSet {
    QualifierSet::from_folder(suffix).expect("Failed to parse folder suffix")
}

fn style(
    name: &str,
    suffix: &str,
    parent: Option<&str>,
    attributes: &[(&str, &str)],
) -> StyleDefinition {
    let mut definition = StyleDefinition::new(name.to_string(), folder(suffix));
    if let Some(parent) = parent {
        definition = definition.with_parent(parent.to_string());
    }
    for (name, value) in attributes {
        definition = definition.with_attribute(name.to_string(), value.to_string());
    }
    definition
}

fn app_snapshot() -> ResourceSnapshot {
    let mut snapshot = ResourceSnapshot::new();
    snapshot.set_platform(
        PlatformResources::new(23)
            .with_style(style(
                "Theme",
                "",
                Some(""),
                &[
                    ("android:windowBackground", "@android:drawable/screen_background"),
                    ("android:colorForeground", "#FFFFFFFF"),
                ],
            ))
            .with_style(style(
                "Theme.Material",
                "",
                None,
                &[("android:navigationBarColor", "#FF000000")],
            )),
    );
    snapshot.add_module(
        ModuleResources::new("app".to_string())
            .with_style(style(
                "Base.Day",
                "",
                Some("android:Theme.Material"),
                &[("statusBarStyle", "light"), ("dayDecoration", "sun")],
            ))
            .with_style(style(
                "Base.Night",
                "",
                Some("android:Theme.Material"),
                &[("statusBarStyle", "dark"), ("nightDecoration", "moon")],
            ))
            .with_style(style(
                "AppTheme",
                "",
                Some("Base.Day"),
                &[("colorAccent", "#FF4081")],
            ))
            .with_style(style("AppTheme", "night", Some("Base.Night"), &[]))
            .with_style(style(
                "AppTheme",
                "v21",
                Some("Base.Day"),
                &[("colorPrimary", "#3F51B5")],
            )),
    );
    snapshot.add_library(
        LibraryResources::new("material-components".to_string()).with_style(style(
            "Theme.MaterialComponents",
            "",
            Some("android:Theme.Material"),
            &[("colorSecondary", "#018786")],
        )),
    );
    snapshot
}

fn resolve_app_theme(device: &str) -> Vec<ResolvedAttribute> {
    let snapshot = app_snapshot();
    let catalog = StyleCatalog::build(&snapshot, &folder(device), "app")
        .expect("Failed to build catalog");
    let resolver = AttributeResolver::new(&catalog, folder(device));
    resolver
        .resolve(&StyleReference::res_auto("AppTheme".to_string()))
        .expect("Failed to resolve AppTheme")
}

fn attribute<'a>(resolved: &'a [ResolvedAttribute], name: &str) -> &'a ResolvedAttribute {
    resolved
        .iter()
        .find(|attribute| attribute.name == name)
        .expect("Failed to find resolved attribute")
}

#[test]
fn test_every_inherited_attribute_surfaces_once() {
    let resolved = resolve_app_theme("notnight-v23");
    let names: Vec<&str> = resolved.iter().map(|attribute| attribute.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "android:colorForeground",
            "android:navigationBarColor",
            "android:windowBackground",
            "colorAccent",
            "colorPrimary",
            "dayDecoration",
            "nightDecoration",
            "statusBarStyle",
        ]
    );
}

#[test]
fn test_night_device_follows_the_night_parent_chain() {
    let resolved = resolve_app_theme("night-v23");

    let status = attribute(&resolved, "statusBarStyle");
    assert_eq!(status.value(), "dark");
    assert!(status.matches_device);
    assert_eq!(status.alternatives.len(), 2);

    let night_only = attribute(&resolved, "nightDecoration");
    assert_eq!(night_only.value(), "moon");
    assert!(night_only.matches_device);

    // the day chain still surfaces, flagged as not applicable
    let day_only = attribute(&resolved, "dayDecoration");
    assert_eq!(day_only.value(), "sun");
    assert!(!day_only.matches_device);
}

#[test]
fn test_day_device_follows_the_day_parent_chain() {
    let resolved = resolve_app_theme("notnight-v19");

    let status = attribute(&resolved, "statusBarStyle");
    assert_eq!(status.value(), "light");
    assert!(status.matches_device);

    assert!(attribute(&resolved, "dayDecoration").matches_device);
    assert!(!attribute(&resolved, "nightDecoration").matches_device);
    assert!(attribute(&resolved, "colorAccent").matches_device);
}

#[test]
fn test_version_gated_attribute_falls_back_below_the_gate() {
    let resolved = resolve_app_theme("notnight-v19");
    let color = attribute(&resolved, "colorPrimary");
    assert_eq!(color.value(), "#3F51B5");
    assert!(!color.matches_device);
}

#[test]
fn test_version_gated_attribute_applies_at_the_gate() {
    let resolved = resolve_app_theme("notnight-v23");
    let color = attribute(&resolved, "colorPrimary");
    assert_eq!(color.value(), "#3F51B5");
    assert!(color.matches_device);
    assert_eq!(color.qualifiers(), &folder("notnight-v21"));
}

#[test]
fn test_framework_attributes_reach_the_leaf() {
    for device in ["notnight-v19", "night-v23"] {
        let resolved = resolve_app_theme(device);
        let background = attribute(&resolved, "android:windowBackground");
        assert_eq!(background.value(), "@android:drawable/screen_background");
        assert!(background.matches_device);
    }
}

#[test]
fn test_library_theme_resolves_through_the_framework() {
    let snapshot = app_snapshot();
    let catalog = StyleCatalog::build(&snapshot, &folder("notnight-v23"), "app")
        .expect("Failed to build catalog");
    let resolver = AttributeResolver::new(&catalog, folder("notnight-v23"));
    let resolved = resolver
        .resolve(&StyleReference::res_auto("Theme.MaterialComponents".to_string()))
        .expect("Failed to resolve library theme");

    assert_eq!(attribute(&resolved, "colorSecondary").value(), "#018786");
    assert_eq!(
        attribute(&resolved, "android:colorForeground").value(),
        "#FFFFFFFF"
    );
}

#[test]
fn test_unknown_style_is_an_error() {
    let snapshot = app_snapshot();
    let catalog = StyleCatalog::build(&snapshot, &folder(""), "app")
        .expect("Failed to build catalog");
    let resolver = AttributeResolver::new(&catalog, folder(""));

    let error = resolver
        .resolve(&StyleReference::res_auto("Missing".to_string()))
        .expect_err("Expected resolution to fail");
    match error {
        ResolveError::StyleNotFound { style } => assert_eq!(style, "Missing"),
        other => panic!("Expected StyleNotFound, got {:?}", other),
    }
}

#[test]
fn test_custom_matcher_is_honored() {
    struct Pessimist;

    impl ConfigurationMatcher for Pessimist {
        fn best_match(
            &self,
            _candidates: &[&QualifierSet],
            _device: &QualifierSet,
        ) -> Option<usize> {
            None
        }
    }

    let snapshot = app_snapshot();
    let catalog = StyleCatalog::build(&snapshot, &folder("notnight-v23"), "app")
        .expect("Failed to build catalog");
    let resolver = AttributeResolver::with_matcher(&catalog, folder("notnight-v23"), Pessimist);
    let resolved = resolver
        .resolve(&StyleReference::res_auto("AppTheme".to_string()))
        .expect("Failed to resolve AppTheme");

    assert!(!resolved.is_empty());
    assert!(resolved.iter().all(|attribute| !attribute.matches_device));
}

#[test]
fn test_resolved_attribute_serializes_for_presentation() {
    let resolved = resolve_app_theme("notnight-v23");
    let accent = attribute(&resolved, "colorAccent");

    let json = serde_json::to_value(accent).expect("Failed to serialize attribute");
    assert_eq!(json["name"], "colorAccent");
    assert_eq!(json["selected"]["value"], "#FF4081");
    assert_eq!(json["matches_device"], true);
    assert_eq!(
        json["selected"]["region"]["representative"]["night"],
        "NotNight"
    );
}
