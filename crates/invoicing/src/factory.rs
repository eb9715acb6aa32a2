//! Explicit wiring of an invoice for one unit of work.
//!
//! Construction, dependency assignment and the post-construction hook happen
//! here, in that order. Teardown is owned by the returned [`Scoped`] guard.

use difactura_core::{DomainResult, Lifecycle, Scoped};
use difactura_parties::Client;

use crate::config::InvoiceConfig;
use crate::invoice::Invoice;
use crate::item::Item;

/// Build, wire and initialize an invoice.
///
/// `init` has run exactly once on the returned invoice; `destroy` runs when
/// the guard is dropped or closed.
pub fn build_invoice(config: &InvoiceConfig, items: Vec<Item>) -> DomainResult<Scoped<Invoice>> {
    let client = Client::new(config.client_name.as_str(), config.client_lastname.as_str());

    let mut invoice = Invoice::new(config.description_template.as_str());
    invoice.set_client(client);
    invoice.set_items(items);

    invoice.init()?;
    tracing::debug!(description = %invoice.description(), "invoice ready");

    Ok(Scoped::new(invoice))
}

/// Run `work` against a freshly built invoice, then tear it down.
///
/// Teardown also happens if `work` panics.
pub fn with_invoice<R, F>(config: &InvoiceConfig, items: Vec<Item>, work: F) -> DomainResult<R>
where
    F: FnOnce(&mut Invoice) -> R,
{
    let mut invoice = build_invoice(config, items)?;
    Ok(work(&mut invoice))
}
