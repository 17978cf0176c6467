//! Regions of the device-configuration space.
//!
//! A [`QualifierRegion`] describes the configurations that match one
//! folder's qualifier set while explicitly not matching the sibling
//! folders the same style is defined in. "Explicitly" means the exclusion
//! acts per dimension, through the qualifier values a sibling specifies:
//! a sibling folder with no qualifiers of its own cannot carve anything
//! out. Regions drive branch pruning during inheritance walks; a branch
//! whose region comes out empty can never supply a winning value.
//!
//! A constructed region is always non-empty. Operations that can produce
//! an empty region return `Option<QualifierRegion>` instead.

use serde::{Deserialize, Serialize};

use crate::qualifiers::{NightMode, Orientation, QualifierSet};

/// Constraint on an equality-matched dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum ValueConstraint<T> {
    /// Only this value belongs to the region.
    Pinned(T),
    /// Every value except these belongs to the region. Empty means
    /// unconstrained.
    Excluding(Vec<T>),
}

impl<T: Clone + PartialEq> ValueConstraint<T> {
    fn unconstrained() -> Self {
        ValueConstraint::Excluding(Vec::new())
    }

    fn from_qualifier(value: &Option<T>) -> Self {
        match value {
            Some(value) => ValueConstraint::Pinned(value.clone()),
            None => ValueConstraint::unconstrained(),
        }
    }

    fn admits(&self, value: &T) -> bool {
        match self {
            ValueConstraint::Pinned(pinned) => pinned == value,
            ValueConstraint::Excluding(excluded) => !excluded.contains(value),
        }
    }

    /// Removes one value from the dimension. A pinned dimension is left
    /// alone: a sibling sharing the pinned value cannot be told apart
    /// here, and any other value is already outside.
    fn exclude(&mut self, value: &T) {
        if let ValueConstraint::Excluding(excluded) = self {
            if !excluded.contains(value) {
                excluded.push(value.clone());
            }
        }
    }

    fn intersect(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (ValueConstraint::Pinned(a), ValueConstraint::Pinned(b)) => {
                if a == b {
                    Some(ValueConstraint::Pinned(a.clone()))
                } else {
                    None
                }
            }
            (ValueConstraint::Pinned(pinned), ValueConstraint::Excluding(excluded))
            | (ValueConstraint::Excluding(excluded), ValueConstraint::Pinned(pinned)) => {
                if excluded.contains(pinned) {
                    None
                } else {
                    Some(ValueConstraint::Pinned(pinned.clone()))
                }
            }
            (ValueConstraint::Excluding(a), ValueConstraint::Excluding(b)) => {
                let mut merged = a.clone();
                for value in b {
                    if !merged.contains(value) {
                        merged.push(value.clone());
                    }
                }
                Some(ValueConstraint::Excluding(merged))
            }
        }
    }

    /// True when exclusions cover the whole (closed) domain.
    fn exhausts(&self, domain: &[T]) -> bool {
        match self {
            ValueConstraint::Pinned(_) => false,
            ValueConstraint::Excluding(excluded) => {
                domain.iter().all(|value| excluded.contains(value))
            }
        }
    }
}

impl<T: Copy + PartialEq> ValueConstraint<T> {
    fn first_admitted(&self, domain: &[T]) -> Option<T> {
        match self {
            ValueConstraint::Pinned(pinned) => Some(*pinned),
            ValueConstraint::Excluding(excluded) if excluded.is_empty() => None,
            ValueConstraint::Excluding(_) => domain.iter().copied().find(|v| self.admits(v)),
        }
    }
}

/// Constraint on a lower-bound-matched dimension, as a closed interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct RangeConstraint {
    lo: u16,
    hi: u16,
}

impl RangeConstraint {
    fn at_least(lo: u16) -> Self {
        RangeConstraint { lo, hi: u16::MAX }
    }

    fn from_qualifier(value: Option<u16>) -> Self {
        RangeConstraint::at_least(value.unwrap_or(0))
    }

    /// Cuts away the values at or above `bound`, where a sibling folder
    /// starts matching. A bound at or below the lower end cannot tell the
    /// sibling apart in this dimension and is ignored.
    fn exclude_at_or_above(&mut self, bound: u16) {
        if bound > self.lo {
            self.hi = self.hi.min(bound - 1);
        }
    }

    fn contains(&self, value: u16) -> bool {
        self.lo <= value && value <= self.hi
    }

    fn intersect(&self, other: &Self) -> Option<RangeConstraint> {
        let lo = self.lo.max(other.lo);
        let hi = self.hi.min(other.hi);
        if lo > hi {
            None
        } else {
            Some(RangeConstraint { lo, hi })
        }
    }

    fn qualifier(&self) -> Option<u16> {
        if self.lo > 0 {
            Some(self.lo)
        } else {
            None
        }
    }
}

/// A non-empty region of the configuration space, as a product of
/// per-dimension constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifierRegion {
    locale: ValueConstraint<String>,
    min_width_dp: RangeConstraint,
    orientation: ValueConstraint<Orientation>,
    night: ValueConstraint<NightMode>,
    api_level: RangeConstraint,
    representative: QualifierSet,
}

impl QualifierRegion {
    /// The region admitting every configuration. Its representative is
    /// the empty qualifier set.
    pub fn unrestricted() -> QualifierRegion {
        QualifierRegion::seal(
            ValueConstraint::unconstrained(),
            RangeConstraint::at_least(0),
            ValueConstraint::unconstrained(),
            ValueConstraint::unconstrained(),
            RangeConstraint::at_least(0),
        )
    }

    /// The configurations matching `compatible` while explicitly not
    /// matching any of `incompatibles`. Returns `None` when a closed
    /// dimension is left with no admissible value, which is the only way
    /// the carve-out can empty the region.
    ///
    /// With no incompatibles the region is exactly the configurations
    /// matching `compatible`.
    pub fn restrict(
        compatible: &QualifierSet,
        incompatibles: &[QualifierSet],
    ) -> Option<QualifierRegion> {
        let mut locale = ValueConstraint::from_qualifier(&compatible.locale);
        let mut min_width_dp = RangeConstraint::from_qualifier(compatible.min_width_dp);
        let mut orientation = ValueConstraint::from_qualifier(&compatible.orientation);
        let mut night = ValueConstraint::from_qualifier(&compatible.night);
        let mut api_level = RangeConstraint::from_qualifier(compatible.api_level);

        for excluded in incompatibles {
            if let Some(value) = &excluded.locale {
                locale.exclude(value);
            }
            if let Some(width) = excluded.min_width_dp {
                min_width_dp.exclude_at_or_above(width);
            }
            if let Some(value) = excluded.orientation {
                orientation.exclude(&value);
            }
            if let Some(value) = excluded.night {
                night.exclude(&value);
            }
            if let Some(api) = excluded.api_level {
                api_level.exclude_at_or_above(api);
            }
        }

        if orientation.exhausts(&Orientation::ALL) || night.exhausts(&NightMode::ALL) {
            return None;
        }
        Some(QualifierRegion::seal(
            locale,
            min_width_dp,
            orientation,
            night,
            api_level,
        ))
    }

    /// Per-dimension narrowing. `None` exactly when some dimension
    /// empties; commutative in both the value and the `None` case.
    pub fn intersect(&self, other: &QualifierRegion) -> Option<QualifierRegion> {
        let locale = self.locale.intersect(&other.locale)?;
        let min_width_dp = self.min_width_dp.intersect(&other.min_width_dp)?;
        let orientation = self.orientation.intersect(&other.orientation)?;
        let night = self.night.intersect(&other.night)?;
        let api_level = self.api_level.intersect(&other.api_level)?;

        if orientation.exhausts(&Orientation::ALL) || night.exhausts(&NightMode::ALL) {
            return None;
        }
        Some(QualifierRegion::seal(
            locale,
            min_width_dp,
            orientation,
            night,
            api_level,
        ))
    }

    /// True when `config` belongs to the region. A configuration leaving
    /// a pinned dimension unspecified falls outside; unspecified
    /// lower-bound dimensions count as zero.
    pub fn contains(&self, config: &QualifierSet) -> bool {
        let locale_ok = match &config.locale {
            Some(locale) => self.locale.admits(locale),
            None => !matches!(self.locale, ValueConstraint::Pinned(_)),
        };
        let orientation_ok = match config.orientation {
            Some(orientation) => self.orientation.admits(&orientation),
            None => !matches!(self.orientation, ValueConstraint::Pinned(_)),
        };
        let night_ok = match config.night {
            Some(night) => self.night.admits(&night),
            None => !matches!(self.night, ValueConstraint::Pinned(_)),
        };
        locale_ok
            && orientation_ok
            && night_ok
            && self.min_width_dp.contains(config.min_width_dp.unwrap_or(0))
            && self.api_level.contains(config.api_level.unwrap_or(0))
    }

    /// One concrete qualifier set belonging to the region, fixed at
    /// construction time.
    ///
    /// The choice is deterministic: pinned values are carried; a
    /// closed-domain dimension with exclusions falls back to its first
    /// admissible value; lower bounds are carried when above zero. Locale
    /// exclusions and range upper bounds have no folder-qualifier form
    /// and are left unspecified, so a representative can match sibling
    /// folders outside the region. Best-configuration matching between
    /// competing candidates resolves those overlaps.
    pub fn representative(&self) -> &QualifierSet {
        &self.representative
    }

    fn seal(
        locale: ValueConstraint<String>,
        min_width_dp: RangeConstraint,
        orientation: ValueConstraint<Orientation>,
        night: ValueConstraint<NightMode>,
        api_level: RangeConstraint,
    ) -> QualifierRegion {
        let representative = QualifierSet {
            locale: match &locale {
                ValueConstraint::Pinned(value) => Some(value.clone()),
                ValueConstraint::Excluding(_) => None,
            },
            min_width_dp: min_width_dp.qualifier(),
            orientation: orientation.first_admitted(&Orientation::ALL),
            night: night.first_admitted(&NightMode::ALL),
            api_level: api_level.qualifier(),
        };
        QualifierRegion {
            locale,
            min_width_dp,
            orientation,
            night,
            api_level,
            representative,
        }
    }
}
