//! Payment methods.
//!
//! Every method honors the same contract: it accepts any amount the caller
//! hands it, "executes" the payment by writing exactly one confirmation line
//! tagged with its own [`Payment::method_name`], and returns nothing. No
//! method rejects input another method would accept.

use core::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use invoiceflow_core::{Amount, DomainError};

use crate::console::{Console, StdoutConsole};

pub trait Payment: Send + Sync {
    /// Human-readable method name used in the confirmation line.
    fn method_name(&self) -> &'static str;

    fn pay(&self, amount: Amount);
}

impl<P> Payment for Box<P>
where
    P: Payment + ?Sized,
{
    fn method_name(&self) -> &'static str {
        (**self).method_name()
    }

    fn pay(&self, amount: Amount) {
        (**self).pay(amount)
    }
}

fn confirmation(amount: Amount, method: &str) -> String {
    format!("Paid {amount} using {method}.")
}

#[derive(Clone)]
pub struct CreditCardPayment {
    console: Arc<dyn Console>,
}

impl CreditCardPayment {
    pub fn new() -> Self {
        Self::with_console(StdoutConsole::shared())
    }

    pub fn with_console(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Default for CreditCardPayment {
    fn default() -> Self {
        Self::new()
    }
}

impl Payment for CreditCardPayment {
    fn method_name(&self) -> &'static str {
        "Credit Card"
    }

    fn pay(&self, amount: Amount) {
        tracing::debug!(method = self.method_name(), %amount, "executing payment");
        self.console.write_line(&confirmation(amount, self.method_name()));
    }
}

#[derive(Clone)]
pub struct UpiPayment {
    console: Arc<dyn Console>,
}

impl UpiPayment {
    pub fn new() -> Self {
        Self::with_console(StdoutConsole::shared())
    }

    pub fn with_console(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Default for UpiPayment {
    fn default() -> Self {
        Self::new()
    }
}

impl Payment for UpiPayment {
    fn method_name(&self) -> &'static str {
        "UPI"
    }

    fn pay(&self, amount: Amount) {
        tracing::debug!(method = self.method_name(), %amount, "executing payment");
        self.console.write_line(&confirmation(amount, self.method_name()));
    }
}

/// Selector for the built-in payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Upi,
}

impl PaymentMethod {
    pub fn build(self, console: Arc<dyn Console>) -> Box<dyn Payment> {
        match self {
            PaymentMethod::CreditCard => Box::new(CreditCardPayment::with_console(console)),
            PaymentMethod::Upi => Box::new(UpiPayment::with_console(console)),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit_card" | "credit-card" | "card" => Ok(PaymentMethod::CreditCard),
            "upi" => Ok(PaymentMethod::Upi),
            other => Err(DomainError::validation(format!(
                "unknown payment method '{other}' (expected credit_card or upi)"
            ))),
        }
    }
}
