use std::sync::Arc;

use crate::console::{Console, StdoutConsole};
use crate::invoice::Invoice;

/// Simulated invoice persistence.
///
/// Nothing is stored; `save` only reports that it happened.
#[derive(Clone)]
pub struct InvoiceRepository {
    console: Arc<dyn Console>,
}

impl InvoiceRepository {
    pub fn new() -> Self {
        Self::with_console(StdoutConsole::shared())
    }

    pub fn with_console(console: Arc<dyn Console>) -> Self {
        Self { console }
    }

    pub fn save(&self, invoice: &Invoice) {
        tracing::debug!(invoice_id = %invoice.id_typed(), "saving invoice");
        self.console.write_line(&format!("Invoice {} saved to database.", invoice.id_typed()));
    }
}

impl Default for InvoiceRepository {
    fn default() -> Self {
        Self::new()
    }
}
