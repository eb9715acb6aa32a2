//! Values an invoice and its client are built from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Property key of the invoice description.
pub const DESCRIPTION_KEY: &str = "invoice.description.office";
/// Property key of the client's name.
pub const CLIENT_NAME_KEY: &str = "client.name";
/// Property key of the client's last name.
pub const CLIENT_LASTNAME_KEY: &str = "client.lastname";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration value: {0}")]
    Missing(&'static str),
}

/// Everything the factory needs besides the item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceConfig {
    pub description_template: String,
    pub client_name: String,
    pub client_lastname: String,
}

impl InvoiceConfig {
    pub fn new(
        description_template: impl Into<String>,
        client_name: impl Into<String>,
        client_lastname: impl Into<String>,
    ) -> Self {
        Self {
            description_template: description_template.into(),
            client_name: client_name.into(),
            client_lastname: client_lastname.into(),
        }
    }

    /// Resolve every property key through `lookup`.
    ///
    /// Keys are resolved in declaration order; the first missing one is
    /// reported.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut require =
            |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            description_template: require(DESCRIPTION_KEY)?,
            client_name: require(CLIENT_NAME_KEY)?,
            client_lastname: require(CLIENT_LASTNAME_KEY)?,
        })
    }

    /// Read the properties from the process environment.
    ///
    /// `client.name` is looked up as `CLIENT_NAME`, and so on.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }
}

/// Resolve a property key against the process environment.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(env_var_name(key)).ok()
}

/// `invoice.description.office` -> `INVOICE_DESCRIPTION_OFFICE`.
pub fn env_var_name(key: &str) -> String {
    key.chars()
        .map(|c| if c == '.' || c == '-' { '_' } else { c.to_ascii_uppercase() })
        .collect()
}
