use serde::{Deserialize, Serialize};

use difactura_core::{DomainError, DomainResult, Lifecycle, LifecycleState};
use difactura_parties::Client;

use crate::item::Item;

/// Appended to the client's name by `init`.
pub const CLIENT_NAME_SUFFIX: &str = " Cambios";

/// Joins the configured description and the client's full name.
pub const DESCRIPTION_CLIENT_SEPARATOR: &str = " del cliente: ";

/// Invoice for one unit of work.
///
/// Built empty, then wired with a client and items, then initialized.
/// `init` is not idempotent: calling it twice appends both suffixes twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    client: Option<Client>,
    description: String,
    items: Option<Vec<Item>>,
    initialized: bool,
    destroyed: bool,
}

impl Invoice {
    /// Create an unwired invoice carrying only its description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            client: None,
            description: description.into(),
            items: None,
            initialized: false,
            destroyed: false,
        }
    }

    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }

    pub fn set_client(&mut self, client: Client) {
        self.client = Some(client);
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn items(&self) -> Option<&[Item]> {
        self.items.as_deref()
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = Some(items);
    }

    /// Sum of every line's `importe`, left to right, starting at zero.
    ///
    /// Fails if no item list was ever assigned. An empty list totals `0`.
    /// Overflow panics in debug builds and wraps in release builds.
    pub fn total(&self) -> DomainResult<i64> {
        let items = self.items.as_ref().ok_or(DomainError::missing("items"))?;
        Ok(items.iter().fold(0, |sum, item| sum + item.importe()))
    }

    /// Serializable snapshot of the current state.
    pub fn view(&self) -> InvoiceView {
        InvoiceView {
            client: self.client.clone(),
            description: self.description.clone(),
            items: self.items.clone(),
            total: self.total().ok(),
        }
    }
}

impl Lifecycle for Invoice {
    fn init(&mut self) -> DomainResult<()> {
        tracing::info!("creating invoice component");
        if self.initialized {
            tracing::warn!(
                description = %self.description,
                "invoice initialized more than once; suffixes will repeat"
            );
        }

        let client = self
            .client
            .as_ref()
            .ok_or(DomainError::missing("client"))?
            .with_name_suffix(CLIENT_NAME_SUFFIX);

        // The rename must land before the description reads the name.
        self.description.push_str(DESCRIPTION_CLIENT_SEPARATOR);
        self.description.push_str(client.name());
        self.description.push(' ');
        self.description.push_str(client.lastname());
        self.client = Some(client);

        self.initialized = true;
        Ok(())
    }

    fn destroy(&mut self) {
        tracing::info!("destroying invoice component");
        self.destroyed = true;
    }

    fn state(&self) -> LifecycleState {
        if self.destroyed {
            LifecycleState::Destroyed
        } else if self.initialized {
            LifecycleState::Initialized
        } else if self.client.is_some() && self.items.is_some() {
            LifecycleState::Wired
        } else {
            LifecycleState::Uninitialized
        }
    }
}

/// Read-only rendering of an invoice (e.g. for JSON output).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceView {
    pub client: Option<Client>,
    pub description: String,
    pub items: Option<Vec<Item>>,
    /// Absent when no item list was assigned.
    pub total: Option<i64>,
}
