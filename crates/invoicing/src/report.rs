//! Invoice report with two independent capabilities.
//!
//! Printing and emailing are separate traits so a consumer that only prints
//! never depends on email delivery (and vice versa). [`InvoiceReport`]
//! happens to support both.

use std::sync::Arc;

use crate::console::{Console, StdoutConsole};

pub trait Printable {
    fn print(&self);
}

pub trait EmailSendable {
    fn send_email(&self);
}

#[derive(Clone)]
pub struct InvoiceReport {
    console: Arc<dyn Console>,
}

impl InvoiceReport {
    pub fn new() -> Self {
        Self::with_console(StdoutConsole::shared())
    }

    pub fn with_console(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Default for InvoiceReport {
    fn default() -> Self {
        Self::new()
    }
}

impl Printable for InvoiceReport {
    fn print(&self) {
        self.console.write_line("Printing invoice report...");
    }
}

impl EmailSendable for InvoiceReport {
    fn send_email(&self) {
        self.console.write_line("Sending invoice report via Email...");
    }
}
