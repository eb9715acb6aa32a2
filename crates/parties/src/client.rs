use serde::{Deserialize, Serialize};

/// Party billed by an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Client {
    name: String,
    lastname: String,
}

impl Client {
    pub fn new(name: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lastname: lastname.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    pub fn set_lastname(&mut self, lastname: impl Into<String>) {
        self.lastname = lastname.into();
    }

    /// `"<name> <lastname>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lastname)
    }

    /// Returns a copy whose name has `suffix` appended verbatim.
    ///
    /// The receiver is left untouched.
    pub fn with_name_suffix(&self, suffix: &str) -> Self {
        let mut name = String::with_capacity(self.name.len() + suffix.len());
        name.push_str(&self.name);
        name.push_str(suffix);
        Self {
            name,
            lastname: self.lastname.clone(),
        }
    }
}
