//! Demo configuration, read from the environment.

use thiserror::Error;

use invoiceflow_core::{Amount, DomainError, InvoiceId};
use invoiceflow_invoicing::{DiscountKind, NotifierChannel, PaymentMethod};

pub const INVOICE_ID_ENV: &str = "INVOICEFLOW_INVOICE_ID";
pub const INVOICE_AMOUNT_ENV: &str = "INVOICEFLOW_INVOICE_AMOUNT";
pub const DISCOUNT_ENV: &str = "INVOICEFLOW_DISCOUNT";
pub const PAYMENT_ENV: &str = "INVOICEFLOW_PAYMENT";
pub const NOTIFIER_ENV: &str = "INVOICEFLOW_NOTIFIER";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("{var}: '{value}' is not a number")]
    NotANumber { var: &'static str, value: String },
}

/// Everything the demo needs to wire one processing run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub invoice_id: InvoiceId,
    pub invoice_amount: Amount,
    pub discount: DiscountKind,
    pub payment: PaymentMethod,
    pub notifier: NotifierChannel,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            invoice_id: InvoiceId::from("INV001"),
            invoice_amount: Amount::new(1000.0),
            discount: DiscountKind::Seasonal,
            payment: PaymentMethod::CreditCard,
            notifier: NotifierChannel::Sms,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match lookup(INVOICE_ID_ENV) {
            Some(raw) => {
                config.invoice_id = raw.parse().map_err(|source| ConfigError::Invalid {
                    var: INVOICE_ID_ENV,
                    source,
                })?;
            }
            None => using_default(INVOICE_ID_ENV, &config.invoice_id),
        }

        match lookup(INVOICE_AMOUNT_ENV) {
            Some(raw) => config.invoice_amount = parse_amount(&raw)?,
            None => using_default(INVOICE_AMOUNT_ENV, &config.invoice_amount),
        }

        match lookup(DISCOUNT_ENV) {
            Some(raw) => config.discount = parse_selector(DISCOUNT_ENV, &raw)?,
            None => using_default(DISCOUNT_ENV, &config.discount),
        }
        match lookup(PAYMENT_ENV) {
            Some(raw) => config.payment = parse_selector(PAYMENT_ENV, &raw)?,
            None => using_default(PAYMENT_ENV, &config.payment),
        }
        match lookup(NOTIFIER_ENV) {
            Some(raw) => config.notifier = parse_selector(NOTIFIER_ENV, &raw)?,
            None => using_default(NOTIFIER_ENV, &config.notifier),
        }

        tracing::debug!(?config, "demo configuration resolved");
        Ok(config)
    }
}

fn using_default(var: &'static str, value: &dyn core::fmt::Debug) {
    tracing::debug!(var, default = ?value, "not set; using default");
}

fn parse_amount(raw: &str) -> Result<Amount, ConfigError> {
    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
        var: INVOICE_AMOUNT_ENV,
        value: raw.to_string(),
    })?;
    Amount::try_new(value).map_err(|source| ConfigError::Invalid {
        var: INVOICE_AMOUNT_ENV,
        source,
    })
}

fn parse_selector<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: core::str::FromStr<Err = DomainError>,
{
    raw.parse().map_err(|source| ConfigError::Invalid { var, source })
}
