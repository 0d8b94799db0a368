//! Discount rules
//!
//! Value object for a per-entry discount plus its validation. Validation
//! rejects bad values with a domain error rather than silently clamping,
//! so the behavior stays observable and testable.

use crate::error::{BundleError, Result};
use strum::{Display, EnumIter, EnumString};

/// Discount kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum DiscountKind {
    #[default]
    Flat,
    Percentage,
}

impl DiscountKind {
    /// Short label for the discount selector widget
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flat => "flat Off",
            Self::Percentage => "% Off",
        }
    }

    /// The other kind; the editor toggles between the two
    pub fn toggled(self) -> Self {
        match self {
            Self::Flat => Self::Percentage,
            Self::Percentage => Self::Flat,
        }
    }
}

/// A discount attached to one bundle entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountRule {
    pub kind: DiscountKind,
    pub value: f64,
}

impl Default for DiscountRule {
    /// Entries start with no discount: flat 0
    fn default() -> Self {
        Self {
            kind: DiscountKind::Flat,
            value: 0.0,
        }
    }
}

impl DiscountRule {
    pub fn new(kind: DiscountKind, value: f64) -> Self {
        Self { kind, value }
    }

    /// Check the domain constraints: value >= 0, percentage <= 100
    pub fn validate(&self) -> Result<()> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(BundleError::validation(
                "discount value must be a non-negative number",
            ));
        }
        if self.kind == DiscountKind::Percentage && self.value > 100.0 {
            return Err(BundleError::validation(
                "percentage discount cannot exceed 100",
            ));
        }
        Ok(())
    }

    /// One-line summary for the bundle row, e.g. "10% off"
    pub fn summary(&self) -> String {
        match self.kind {
            DiscountKind::Flat => format!("{:.2} off", self.value),
            DiscountKind::Percentage => format!("{}% off", self.value),
        }
    }
}
