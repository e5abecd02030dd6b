//! `invoiceflow-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no console, no logging).

pub mod amount;
pub mod entity;
pub mod error;
pub mod id;

pub use amount::Amount;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::InvoiceId;
