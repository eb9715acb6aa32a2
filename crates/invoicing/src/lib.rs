//! Invoicing domain module.
//!
//! An [`Invoice`] bills a [`Client`](difactura_parties::Client) for a list of
//! [`Item`]s. The [`factory`] module wires one up per unit of work and makes
//! sure its lifecycle hooks run at the right points.

pub mod config;
pub mod factory;
pub mod invoice;
pub mod item;

pub use config::{ConfigError, InvoiceConfig};
pub use factory::{build_invoice, with_invoice};
pub use invoice::{Invoice, InvoiceView};
pub use item::{Item, Product};
