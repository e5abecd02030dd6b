//! Composition root for the invoice-processing demo.
//!
//! This is the only place that names concrete strategies; everything else in
//! the workspace depends on the capability traits.

pub mod app;
pub mod config;

pub use app::run;
pub use config::{ConfigError, DemoConfig};
