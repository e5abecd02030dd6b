use anyhow::Context;

use invoiceflow_invoicing::StdoutConsole;

fn main() -> anyhow::Result<()> {
    invoiceflow_observability::init("warn");

    let config = invoiceflow_demo::DemoConfig::from_env()
        .context("failed to read demo configuration")?;
    tracing::info!(
        invoice_id = %config.invoice_id,
        discount = ?config.discount,
        payment = ?config.payment,
        notifier = ?config.notifier,
        "starting invoice demo"
    );

    let receipt = invoiceflow_demo::run(&config, StdoutConsole::shared())?;
    tracing::info!(final_amount = %receipt.final_amount, "demo finished");

    Ok(())
}
