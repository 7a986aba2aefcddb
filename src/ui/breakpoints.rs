//! Responsive breakpoint table for adaptive layout.
//!
//! DESIGN
//! ======
//! Pure configuration data, validated once at construction and read-only
//! afterwards. Views consult it through context to branch layout by
//! viewport width; the named size classes and the `mobile` alias are the
//! stable contract.

#[cfg(test)]
#[path = "breakpoints_test.rs"]
mod breakpoints_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Named viewport size class, in canonical small-to-large order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl SizeClass {
    /// All size classes in canonical small-to-large order.
    pub const ALL: [SizeClass; 5] = [
        SizeClass::Xs,
        SizeClass::Sm,
        SizeClass::Md,
        SizeClass::Lg,
        SizeClass::Xl,
    ];

    /// Lowercase class name as used in configuration and CSS hooks.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Parse a class name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownSizeClass`] for anything other
    /// than the five canonical lowercase names.
    pub fn parse(name: &str) -> Result<Self, ConfigurationError> {
        match name {
            "xs" => Ok(Self::Xs),
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            other => Err(ConfigurationError::UnknownSizeClass(other.to_owned())),
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated breakpoint table: minimum pixel widths for the declared size
/// classes, plus the `mobile` alias naming one of them.
///
/// Thresholds are stored in canonical class order and are guaranteed
/// non-decreasing; the alias is guaranteed to name a declared class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakpointTable {
    thresholds: Vec<(SizeClass, u32)>,
    mobile: SizeClass,
}

impl BreakpointTable {
    /// Build a validated table from `(class, min_width_px)` pairs and the
    /// mobile alias. Input order does not matter; pairs are canonicalized
    /// to small-to-large class order before the monotonicity check.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::EmptyBreakpointTable`] for an empty input,
    /// [`ConfigurationError::DuplicateSizeClass`] when a class appears
    /// twice, [`ConfigurationError::NonMonotonicThresholds`] when widths
    /// decrease in canonical order, and
    /// [`ConfigurationError::UndeclaredMobileAlias`] when `mobile` names a
    /// class absent from the pairs.
    pub fn new(
        thresholds: &[(SizeClass, u32)],
        mobile: SizeClass,
    ) -> Result<Self, ConfigurationError> {
        if thresholds.is_empty() {
            return Err(ConfigurationError::EmptyBreakpointTable);
        }

        let mut ordered: Vec<(SizeClass, u32)> = thresholds.to_vec();
        ordered.sort_by_key(|(class, _)| *class);
        for pair in ordered.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(ConfigurationError::DuplicateSizeClass(pair[0].0));
            }
            if pair[1].1 < pair[0].1 {
                return Err(ConfigurationError::NonMonotonicThresholds {
                    smaller: pair[0].0,
                    smaller_px: pair[0].1,
                    larger: pair[1].0,
                    larger_px: pair[1].1,
                });
            }
        }

        if !ordered.iter().any(|(class, _)| *class == mobile) {
            return Err(ConfigurationError::UndeclaredMobileAlias(mobile));
        }

        Ok(Self {
            thresholds: ordered,
            mobile,
        })
    }

    /// Minimum width for a declared class, or `None` if the table does not
    /// declare it.
    #[must_use]
    pub fn threshold(&self, class: SizeClass) -> Option<u32> {
        self.thresholds
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, px)| *px)
    }

    /// The class the `mobile` alias points at.
    #[must_use]
    pub fn mobile_alias(&self) -> SizeClass {
        self.mobile
    }

    /// Declared classes with their thresholds, small to large.
    #[must_use]
    pub fn classes(&self) -> &[(SizeClass, u32)] {
        &self.thresholds
    }

    /// The largest declared class whose threshold is at or below `width`.
    /// Widths below every threshold fall into the smallest declared class.
    #[must_use]
    pub fn class_for_width(&self, width: u32) -> SizeClass {
        let mut current = self.thresholds[0].0;
        for (class, px) in &self.thresholds {
            if width >= *px {
                current = *class;
            }
        }
        current
    }

    /// Whether `width` counts as a mobile viewport: strictly below the
    /// mobile alias's threshold.
    #[must_use]
    pub fn is_mobile(&self, width: u32) -> bool {
        // The alias is validated against the declared classes, so the
        // lookup cannot miss.
        self.threshold(self.mobile).is_some_and(|px| width < px)
    }
}

impl Default for BreakpointTable {
    /// The shipped table: `{xs: 0, sm: 600, md: 960, lg: 1280, xl: 1920}`
    /// with `mobile = sm`.
    fn default() -> Self {
        Self {
            thresholds: vec![
                (SizeClass::Xs, 0),
                (SizeClass::Sm, 600),
                (SizeClass::Md, 960),
                (SizeClass::Lg, 1280),
                (SizeClass::Xl, 1920),
            ],
            mobile: SizeClass::Sm,
        }
    }
}

/// Unvalidated breakpoint configuration as written in external config,
/// e.g. `{"thresholds": {"xs": 0, "sm": 600}, "mobileBreakpoint": "sm"}`.
///
/// Convert into a [`BreakpointTable`] with `TryFrom`; class names and the
/// alias are checked during conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointSpec {
    /// Class name to minimum width in pixels.
    pub thresholds: BTreeMap<String, u32>,
    /// Name of the class the `mobile` alias points at.
    #[serde(rename = "mobileBreakpoint")]
    pub mobile: String,
}

impl BreakpointSpec {
    /// Parse a spec from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed documents;
    /// structural validation happens later in the `TryFrom` conversion.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl TryFrom<BreakpointSpec> for BreakpointTable {
    type Error = ConfigurationError;

    fn try_from(spec: BreakpointSpec) -> Result<Self, Self::Error> {
        let mut pairs = Vec::with_capacity(spec.thresholds.len());
        for (name, px) in &spec.thresholds {
            pairs.push((SizeClass::parse(name)?, *px));
        }
        let mobile = SizeClass::parse(&spec.mobile)?;
        Self::new(&pairs, mobile)
    }
}
