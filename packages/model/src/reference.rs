//! Style reference identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resource namespace a style lives in. Framework resources use
/// [`ResourceNamespace::Android`]; project modules and libraries share
/// the non-namespaced [`ResourceNamespace::ResAuto`] space, so a module
/// definition and a library definition of the same name collide on one
/// reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceNamespace {
    Android,
    ResAuto,
}

/// Stable identity of a logical style: namespace plus name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StyleReference {
    pub namespace: ResourceNamespace,
    pub name: String,
}

impl StyleReference {
    pub fn android(name: String) -> Self {
        StyleReference {
            namespace: ResourceNamespace::Android,
            name,
        }
    }

    pub fn res_auto(name: String) -> Self {
        StyleReference {
            namespace: ResourceNamespace::ResAuto,
            name,
        }
    }

    /// Parses raw reference text as it appears in a `parent` declaration:
    /// "android:Theme.Material", "@android:style/Theme", "@style/AppBase"
    /// or a bare name. Anything not in the `android` namespace is
    /// non-namespaced.
    pub fn from_text(text: &str) -> StyleReference {
        let text = text.strip_prefix('@').unwrap_or(text);
        let (namespace, rest) = match text.split_once(':') {
            Some(("android", rest)) => (ResourceNamespace::Android, rest),
            Some((_, rest)) => (ResourceNamespace::ResAuto, rest),
            None => (ResourceNamespace::ResAuto, text),
        };
        let name = rest.strip_prefix("style/").unwrap_or(rest);
        StyleReference {
            namespace,
            name: name.to_string(),
        }
    }

    pub fn is_framework(&self) -> bool {
        self.namespace == ResourceNamespace::Android
    }
}

impl fmt::Display for StyleReference {
    /// Qualified display name: "android:Theme" or the bare name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace {
            ResourceNamespace::Android => write!(f, "android:{}", self.name),
            ResourceNamespace::ResAuto => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_forms() {
        let framework = StyleReference::android("Theme.Material".to_string());
        assert_eq!(StyleReference::from_text("android:Theme.Material"), framework);
        assert_eq!(StyleReference::from_text("@android:style/Theme.Material"), framework);

        let local = StyleReference::res_auto("AppBase".to_string());
        assert_eq!(StyleReference::from_text("AppBase"), local);
        assert_eq!(StyleReference::from_text("@style/AppBase"), local);
    }

    #[test]
    fn test_display_qualified_name() {
        assert_eq!(
            StyleReference::android("Theme".to_string()).to_string(),
            "android:Theme"
        );
        assert_eq!(StyleReference::res_auto("AppTheme".to_string()).to_string(), "AppTheme");
    }
}
