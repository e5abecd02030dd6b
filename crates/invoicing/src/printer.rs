use std::sync::Arc;

use crate::console::{Console, StdoutConsole};
use crate::invoice::Invoice;

/// Renders an invoice summary line.
#[derive(Clone)]
pub struct InvoicePrinter {
    console: Arc<dyn Console>,
}

impl InvoicePrinter {
    pub fn new() -> Self {
        Self::with_console(StdoutConsole::shared())
    }

    pub fn with_console(console: Arc<dyn Console>) -> Self {
        Self { console }
    }

    /// Prints the undiscounted amount.
    pub fn print(&self, invoice: &Invoice) {
        self.console.write_line(&format!(
            "Invoice {} printed with amount: {}",
            invoice.id_typed(),
            invoice.amount()
        ));
    }
}

impl Default for InvoicePrinter {
    fn default() -> Self {
        Self::new()
    }
}
