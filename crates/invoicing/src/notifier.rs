//! Notification channels.
//!
//! The processing service depends on [`Notifier`] only; which channel is used
//! is decided by whoever constructs the service.

use core::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use invoiceflow_core::DomainError;

use crate::console::{Console, StdoutConsole};

pub trait Notifier: Send + Sync {
    /// Channel label prefixed to every delivered message.
    fn channel(&self) -> &'static str;

    fn send(&self, message: &str);
}

impl<N> Notifier for Box<N>
where
    N: Notifier + ?Sized,
{
    fn channel(&self) -> &'static str {
        (**self).channel()
    }

    fn send(&self, message: &str) {
        (**self).send(message)
    }
}

/// Simulated email delivery.
#[derive(Clone)]
pub struct EmailNotifier {
    console: Arc<dyn Console>,
}

impl EmailNotifier {
    pub fn new() -> Self {
        Self::with_console(StdoutConsole::shared())
    }

    pub fn with_console(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Default for EmailNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for EmailNotifier {
    fn channel(&self) -> &'static str {
        "Email"
    }

    fn send(&self, message: &str) {
        tracing::debug!(channel = self.channel(), "delivering notification");
        self.console.write_line(&format!("{} sent: {message}", self.channel()));
    }
}

/// Simulated SMS delivery.
#[derive(Clone)]
pub struct SmsNotifier {
    console: Arc<dyn Console>,
}

impl SmsNotifier {
    pub fn new() -> Self {
        Self::with_console(StdoutConsole::shared())
    }

    pub fn with_console(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Default for SmsNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for SmsNotifier {
    fn channel(&self) -> &'static str {
        "SMS"
    }

    fn send(&self, message: &str) {
        tracing::debug!(channel = self.channel(), "delivering notification");
        self.console.write_line(&format!("{} sent: {message}", self.channel()));
    }
}

/// Selector for the built-in notification channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifierChannel {
    Email,
    #[default]
    Sms,
}

impl NotifierChannel {
    pub fn build(self, console: Arc<dyn Console>) -> Box<dyn Notifier> {
        match self {
            NotifierChannel::Email => Box::new(EmailNotifier::with_console(console)),
            NotifierChannel::Sms => Box::new(SmsNotifier::with_console(console)),
        }
    }
}

impl FromStr for NotifierChannel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(NotifierChannel::Email),
            "sms" => Ok(NotifierChannel::Sms),
            other => Err(DomainError::validation(format!(
                "unknown notifier '{other}' (expected email or sms)"
            ))),
        }
    }
}
