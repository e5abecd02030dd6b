//! Currency-agnostic monetary amount.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A monetary quantity with no currency attached.
///
/// Immutable value type: compared by value, "changed" by building a new one
/// (see [`Amount::scale`]).
///
/// Backed by `f64`; rounding and currency correctness are out of scope.
/// `Display` always renders a fractional part (`1000.0`, `900.0`, `0.0`) because
/// console lines are compared against that format.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Checked constructor: finite and non-negative.
    pub fn try_new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("amount must be finite"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("amount must not be negative"));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns a new amount multiplied by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // `{:?}` keeps the trailing `.0` on integral values.
        write!(f, "{:?}", self.0)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}
