//! Invoicing domain module.
//!
//! Invoices are processed by composing three pluggable capabilities:
//! a [`Discount`] policy, a [`Payment`] method and a [`Notifier`] channel.
//! [`InvoiceProcessingService`] depends only on the traits; concrete variants are
//! chosen by the caller (see the selector enums) and injected at construction.
//!
//! Every side effect is a single line written to a [`Console`].

pub mod console;
pub mod discount;
pub mod invoice;
pub mod notifier;
pub mod payment;
pub mod printer;
pub mod report;
pub mod repository;
pub mod service;

pub use console::{Console, InMemoryConsole, StdoutConsole};
pub use discount::{Discount, DiscountKind, LoyaltyDiscount, NoDiscount, SeasonalDiscount};
pub use invoice::Invoice;
pub use notifier::{EmailNotifier, Notifier, NotifierChannel, SmsNotifier};
pub use payment::{CreditCardPayment, Payment, PaymentMethod, UpiPayment};
pub use printer::InvoicePrinter;
pub use report::{EmailSendable, InvoiceReport, Printable};
pub use repository::InvoiceRepository;
pub use service::{InvoiceProcessingService, ProcessingReceipt};
