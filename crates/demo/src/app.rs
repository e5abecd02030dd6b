use std::sync::Arc;

use anyhow::Context;

use invoiceflow_invoicing::{
    Console, EmailSendable, Invoice, InvoicePrinter, InvoiceProcessingService, InvoiceReport,
    InvoiceRepository, Printable, ProcessingReceipt,
};

use crate::config::DemoConfig;

/// Run the full demo against `console`.
///
/// Order: save, print, process (pay + notify), then the report's print and
/// email. Every component writes to the same console.
pub fn run(config: &DemoConfig, console: Arc<dyn Console>) -> anyhow::Result<ProcessingReceipt> {
    let invoice = Invoice::try_new(config.invoice_id.clone(), config.invoice_amount)
        .context("invalid demo invoice")?;

    InvoiceRepository::with_console(console.clone()).save(&invoice);
    InvoicePrinter::with_console(console.clone()).print(&invoice);

    let service = InvoiceProcessingService::new(
        config.notifier.build(console.clone()),
        config.discount.build(),
    );
    let payment = config.payment.build(console.clone());
    let receipt = service.process_invoice(&invoice, &payment);

    let report = InvoiceReport::with_console(console);
    report.print();
    report.send_email();

    Ok(receipt)
}
