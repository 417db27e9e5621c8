//! The named value/description record held by the store.

use serde::{Deserialize, Serialize};

use crate::{IniFileError, IniResult};

/// A single named option.
///
/// The name is trimmed on construction, is never empty afterwards, and cannot
/// change for the lifetime of the option. The value and the description are
/// free text, may each be absent, and carry no validation. When the option is
/// written to an ini file the description is rendered as a `#` comment on the
/// line before the `name = value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IniOption {
    name: String,
    value: Option<String>,
    description: Option<String>,
}

impl IniOption {
    /// Create an option with a name only.
    ///
    /// # Errors
    ///
    /// Returns [`IniFileError::EmptyName`] if `name` is empty or blank after
    /// trimming.
    pub fn new(name: &str) -> IniResult<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(IniFileError::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            value: None,
            description: None,
        })
    }

    /// Create an option with a name and a value.
    ///
    /// # Errors
    ///
    /// Returns [`IniFileError::EmptyName`] if `name` is empty or blank.
    pub fn with_value(name: &str, value: &str) -> IniResult<Self> {
        let mut option = Self::new(name)?;
        option.value = Some(value.to_owned());
        Ok(option)
    }

    /// Create an option with a name and an optional value and description.
    ///
    /// # Errors
    ///
    /// Returns [`IniFileError::EmptyName`] if `name` is empty or blank.
    pub fn with_description(
        name: &str,
        value: Option<&str>,
        description: Option<&str>,
    ) -> IniResult<Self> {
        let mut option = Self::new(name)?;
        option.value = value.map(str::to_owned);
        option.description = description.map(str::to_owned);
        Ok(option)
    }

    /// The option name, trimmed and never empty.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replace the value; `None` clears it.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Replace the description; `None` clears it.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// The lookup key for this option: its name folded to lower case.
    pub(crate) fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
