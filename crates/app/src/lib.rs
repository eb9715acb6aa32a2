//! Demo application: one invoice per run, rendered as JSON.

use difactura_invoicing::config::{CLIENT_LASTNAME_KEY, CLIENT_NAME_KEY, DESCRIPTION_KEY};
use difactura_invoicing::{with_invoice, InvoiceConfig, InvoiceView, Item, Product};

/// Built-in property values, used for keys the environment does not set.
pub const DEFAULT_PROPERTIES: &[(&str, &str)] = &[
    (DESCRIPTION_KEY, "Compras de equipos de oficina"),
    (CLIENT_NAME_KEY, "Juan"),
    (CLIENT_LASTNAME_KEY, "Perez"),
];

/// The default item list handed to every invoice.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new(Product::new("Camara Sony", 800), 2),
        Item::new(Product::new("Bicicleta Bianchi 26", 1200), 4),
        Item::new(Product::new("Notebook Asus", 2100), 1),
        Item::new(Product::new("Impresora HP", 500), 3),
    ]
}

fn default_property(key: &str) -> Option<String> {
    DEFAULT_PROPERTIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| (*v).to_string())
}

/// Resolve configuration through `lookup`, falling back to [`DEFAULT_PROPERTIES`].
pub fn load_config<F>(mut lookup: F) -> anyhow::Result<InvoiceConfig>
where
    F: FnMut(&str) -> Option<String>,
{
    let config = InvoiceConfig::from_lookup(|key| {
        lookup(key).or_else(|| {
            tracing::warn!(key, "configuration value not set; using built-in default");
            default_property(key)
        })
    })?;
    Ok(config)
}

/// Run one unit of work and return what it produced.
pub fn run(config: &InvoiceConfig) -> anyhow::Result<InvoiceView> {
    let view = with_invoice(config, default_items(), |invoice| invoice.view())?;
    tracing::info!(total = ?view.total, "invoice processed");
    Ok(view)
}
