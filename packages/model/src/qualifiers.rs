//! Qualifier dimensions and qualifier sets.
//!
//! A [`QualifierSet`] names the resource qualifiers a style definition was
//! declared under, in the shape of a `values-*` folder suffix
//! ("night-v21"). The same type doubles as a device configuration when the
//! relevant dimensions are filled in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Night mode of a device configuration or resource folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NightMode {
    NotNight,
    Night,
}

impl NightMode {
    /// Every value of the dimension, in folder-name order.
    pub const ALL: [NightMode; 2] = [NightMode::NotNight, NightMode::Night];

    fn folder_segment(&self) -> &'static str {
        match self {
            NightMode::NotNight => "notnight",
            NightMode::Night => "night",
        }
    }
}

/// Screen orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Every value of the dimension, in folder-name order.
    pub const ALL: [Orientation; 2] = [Orientation::Portrait, Orientation::Landscape];

    fn folder_segment(&self) -> &'static str {
        match self {
            Orientation::Portrait => "port",
            Orientation::Landscape => "land",
        }
    }
}

/// A set of resource qualifiers. The empty set is the base `values`
/// folder and matches every configuration.
///
/// Locale, orientation and night mode match a device by equality.
/// Smallest width and API level are lower bounds: a folder qualified with
/// `sw600dp` matches devices whose smallest width is at least 600dp, and
/// `v21` matches devices at API 21 or above.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct QualifierSet {
    pub locale: Option<String>,
    pub min_width_dp: Option<u16>,
    pub orientation: Option<Orientation>,
    pub night: Option<NightMode>,
    pub api_level: Option<u16>,
}

impl QualifierSet {
    pub fn new() -> Self {
        QualifierSet::default()
    }

    /// True when no dimension is specified.
    pub fn is_default(&self) -> bool {
        *self == QualifierSet::default()
    }

    /// True when every qualifier this set specifies is satisfied by
    /// `device`. A dimension the device leaves unspecified never
    /// satisfies a specified qualifier.
    pub fn is_match_for(&self, device: &QualifierSet) -> bool {
        if let Some(locale) = &self.locale {
            if device.locale.as_ref() != Some(locale) {
                return false;
            }
        }
        if let Some(width) = self.min_width_dp {
            match device.min_width_dp {
                Some(device_width) if device_width >= width => {}
                _ => return false,
            }
        }
        if let Some(orientation) = self.orientation {
            if device.orientation != Some(orientation) {
                return false;
            }
        }
        if let Some(night) = self.night {
            if device.night != Some(night) {
                return false;
            }
        }
        if let Some(api) = self.api_level {
            match device.api_level {
                Some(device_api) if device_api >= api => {}
                _ => return false,
            }
        }
        true
    }

    /// Parses a folder suffix such as "values-sw600dp-land-night-v21".
    /// The leading "values" segment is optional; "values" or "" parse to
    /// the empty set. Returns `None` on any unrecognized or repeated
    /// segment.
    pub fn from_folder(folder: &str) -> Option<QualifierSet> {
        let mut set = QualifierSet::default();
        for (index, segment) in folder.split('-').enumerate() {
            if segment.is_empty() {
                if index == 0 && folder.is_empty() {
                    break;
                }
                return None;
            }
            if index == 0 && segment == "values" {
                continue;
            }
            if !set.parse_segment(segment) {
                return None;
            }
        }
        Some(set)
    }

    fn parse_segment(&mut self, segment: &str) -> bool {
        match segment {
            "port" => return replace_empty(&mut self.orientation, Orientation::Portrait),
            "land" => return replace_empty(&mut self.orientation, Orientation::Landscape),
            "night" => return replace_empty(&mut self.night, NightMode::Night),
            "notnight" => return replace_empty(&mut self.night, NightMode::NotNight),
            _ => {}
        }
        if let Some(rest) = segment.strip_prefix("sw") {
            if let Some(width) = rest.strip_suffix("dp") {
                if let Ok(width) = width.parse::<u16>() {
                    return replace_empty(&mut self.min_width_dp, width);
                }
                return false;
            }
        }
        if let Some(rest) = segment.strip_prefix('v') {
            if let Ok(api) = rest.parse::<u16>() {
                return replace_empty(&mut self.api_level, api);
            }
        }
        // two lowercase letters form a language, "rXX" appends a region
        if segment.len() == 2 && segment.bytes().all(|b| b.is_ascii_lowercase()) {
            return replace_empty(&mut self.locale, segment.to_string());
        }
        if segment.len() == 3 && segment.starts_with('r') {
            if let Some(language) = &self.locale {
                if !language.contains('-') && segment[1..].bytes().all(|b| b.is_ascii_uppercase()) {
                    self.locale = Some(format!("{}-{}", language, segment));
                    return true;
                }
            }
        }
        false
    }
}

fn replace_empty<T>(slot: &mut Option<T>, value: T) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}

impl fmt::Display for QualifierSet {
    /// Folder-suffix form; the empty set prints as "default".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(locale) = &self.locale {
            parts.push(locale.clone());
        }
        if let Some(width) = self.min_width_dp {
            parts.push(format!("sw{}dp", width));
        }
        if let Some(orientation) = self.orientation {
            parts.push(orientation.folder_segment().to_string());
        }
        if let Some(night) = self.night {
            parts.push(night.folder_segment().to_string());
        }
        if let Some(api) = self.api_level {
            parts.push(format!("v{}", api));
        }
        if parts.is_empty() {
            write!(f, "default")
        } else {
            write!(f, "{}", parts.join("-"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(suffix: &str) -> QualifierSet {
        QualifierSet::from_folder(suffix).expect("Failed to parse folder suffix")
    }

    #[test]
    fn test_parse_empty_folder() {
        assert!(folder("").is_default());
        assert!(folder("values").is_default());
    }

    #[test]
    fn test_parse_full_folder() {
        let set = folder("values-fr-sw600dp-land-night-v21");
        assert_eq!(set.locale.as_deref(), Some("fr"));
        assert_eq!(set.min_width_dp, Some(600));
        assert_eq!(set.orientation, Some(Orientation::Landscape));
        assert_eq!(set.night, Some(NightMode::Night));
        assert_eq!(set.api_level, Some(21));
    }

    #[test]
    fn test_parse_locale_with_region() {
        let set = folder("fr-rFR-v19");
        assert_eq!(set.locale.as_deref(), Some("fr-rFR"));
        assert_eq!(set.api_level, Some(19));
    }

    #[test]
    fn test_parse_rejects_unknown_segment() {
        assert!(QualifierSet::from_folder("values-wide").is_none());
        assert!(QualifierSet::from_folder("swXXdp").is_none());
        assert!(QualifierSet::from_folder("night-night").is_none());
    }

    #[test]
    fn test_display_round_trip() {
        for suffix in ["night-v21", "fr-sw600dp-port", "de-rDE-notnight", "v19"] {
            let set = folder(suffix);
            assert_eq!(set.to_string(), suffix);
            assert_eq!(QualifierSet::from_folder(&set.to_string()), Some(set));
        }
        assert_eq!(QualifierSet::default().to_string(), "default");
    }

    #[test]
    fn test_match_equality_dimensions() {
        let device = folder("fr-night");
        assert!(folder("night").is_match_for(&device));
        assert!(folder("fr").is_match_for(&device));
        assert!(folder("").is_match_for(&device));
        assert!(!folder("notnight").is_match_for(&device));
        assert!(!folder("de").is_match_for(&device));
        assert!(!folder("port").is_match_for(&device));
    }

    #[test]
    fn test_match_directional_dimensions() {
        let device = folder("sw720dp-v23");
        assert!(folder("sw600dp").is_match_for(&device));
        assert!(folder("sw720dp-v21").is_match_for(&device));
        assert!(!folder("sw800dp").is_match_for(&device));
        assert!(!folder("v24").is_match_for(&device));
    }

    #[test]
    fn test_unspecified_device_dimension_never_matches() {
        let device = folder("v21");
        assert!(!folder("night").is_match_for(&device));
        assert!(!folder("sw600dp").is_match_for(&device));
        assert!(folder("v19").is_match_for(&device));
    }
}
