//! Discount policies.
//!
//! A discount turns a base amount into the amount actually charged. Policies
//! are pure: no IO, no state, same output for the same input. New policies
//! are added by implementing [`Discount`]; consumers take `&dyn Discount` or
//! `Box<dyn Discount>` and never name a concrete policy.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use invoiceflow_core::{Amount, DomainError};

/// Pricing policy applied before payment.
pub trait Discount: Send + Sync {
    /// Short, stable policy name (used for logging).
    fn name(&self) -> &'static str;

    fn apply_discount(&self, amount: Amount) -> Amount;
}

impl<D> Discount for Box<D>
where
    D: Discount + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn apply_discount(&self, amount: Amount) -> Amount {
        (**self).apply_discount(amount)
    }
}

/// Identity policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoDiscount;

impl Discount for NoDiscount {
    fn name(&self) -> &'static str {
        "none"
    }

    fn apply_discount(&self, amount: Amount) -> Amount {
        amount
    }
}

/// 10% off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalDiscount;

impl SeasonalDiscount {
    pub const FACTOR: f64 = 0.9;
}

impl Discount for SeasonalDiscount {
    fn name(&self) -> &'static str {
        "seasonal"
    }

    fn apply_discount(&self, amount: Amount) -> Amount {
        amount.scale(Self::FACTOR)
    }
}

/// 20% off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoyaltyDiscount;

impl LoyaltyDiscount {
    pub const FACTOR: f64 = 0.8;
}

impl Discount for LoyaltyDiscount {
    fn name(&self) -> &'static str {
        "loyalty"
    }

    fn apply_discount(&self, amount: Amount) -> Amount {
        amount.scale(Self::FACTOR)
    }
}

/// Selector for the built-in discount policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    None,
    #[default]
    Seasonal,
    Loyalty,
}

impl DiscountKind {
    pub fn build(self) -> Box<dyn Discount> {
        match self {
            DiscountKind::None => Box::new(NoDiscount),
            DiscountKind::Seasonal => Box::new(SeasonalDiscount),
            DiscountKind::Loyalty => Box::new(LoyaltyDiscount),
        }
    }
}

impl FromStr for DiscountKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(DiscountKind::None),
            "seasonal" => Ok(DiscountKind::Seasonal),
            "loyalty" => Ok(DiscountKind::Loyalty),
            other => Err(DomainError::validation(format!(
                "unknown discount '{other}' (expected none, seasonal or loyalty)"
            ))),
        }
    }
}
