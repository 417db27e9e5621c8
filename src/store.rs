//! The ordered, case-insensitive option store.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::{IniOption, IniResult};

/// Raw option values that coerce to `true` in [`IniFile::is_true`].
///
/// Matching is exact and case sensitive: `Yes` or a value with surrounding
/// whitespace does not qualify.
const TRUE_VALUES: [&str; 9] = [
    "ja",
    "sí",
    "yes",
    "oui",
    "wahr",
    "verdadero",
    "true",
    "vrai",
    "1",
];

/// An insertion-ordered collection of [`IniOption`]s keyed by folded option
/// name, together with a remembered default file path.
///
/// Names are folded (trimmed, then lower-cased) for lookup, so `option_name`
/// and `OPTION_NAME` address the same entry while each option keeps its
/// original spelling. Insertion order is preserved and determines the order
/// options are written out; replacing an entry keeps its original position.
/// Options are never removed.
///
/// The mutation API is deliberately asymmetric: registering an option through
/// [`IniFile::add_option`] is strict and rejects blank names, whereas the
/// setters that target an option by name quietly do nothing when the option
/// does not exist. File contents and command-line overlays are tolerated;
/// programmatic registration is not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IniFile {
    options: Vec<IniOption>,
    default_path: Option<Utf8PathBuf>,
}

impl IniFile {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one initial option.
    ///
    /// # Errors
    ///
    /// Returns [`crate::IniFileError::EmptyName`] if `name` is empty or
    /// blank.
    pub fn with_option(
        name: &str,
        value: Option<&str>,
        description: Option<&str>,
    ) -> IniResult<Self> {
        let mut store = Self::new();
        store.add_option(name, value, description)?;
        Ok(store)
    }

    /// Register an option, replacing any existing entry with the same folded
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::IniFileError::EmptyName`] if `name` is empty or
    /// blank.
    pub fn add_option(
        &mut self,
        name: &str,
        value: Option<&str>,
        description: Option<&str>,
    ) -> IniResult<()> {
        let option = IniOption::with_description(name, value, description)?;
        self.add(option);
        Ok(())
    }

    /// Insert `option`, replacing any existing entry with the same folded
    /// name. A replaced entry keeps its original position in the write-out
    /// order.
    pub fn add(&mut self, option: IniOption) {
        let key = option.key();
        if let Some(slot) = self.options.iter_mut().find(|o| o.key() == key) {
            *slot = option;
        } else {
            self.options.push(option);
        }
    }

    /// Overwrite the entry matching `option`'s folded name, if one exists.
    ///
    /// Does nothing when the name is not registered; use [`IniFile::add`] to
    /// create new entries.
    pub fn change_option(&mut self, option: IniOption) {
        if self.contains(option.name()) {
            self.add(option);
        }
    }

    /// Set the value of an existing option. Does nothing when the name is
    /// not registered.
    pub fn set_value(&mut self, name: &str, value: Option<&str>) {
        if let Some(option) = self.get_mut(name) {
            option.set_value(value.map(str::to_owned));
        }
    }

    /// Set the description of an existing option. Does nothing when the name
    /// is not registered.
    pub fn set_description(&mut self, name: &str, description: Option<&str>) {
        if let Some(option) = self.get_mut(name) {
            option.set_description(description.map(str::to_owned));
        }
    }

    /// Look up an option by name, case-insensitively.
    ///
    /// Returns `None` for a blank name or an unregistered one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IniOption> {
        let key = fold(name)?;
        self.options.iter().find(|o| o.key() == key)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut IniOption> {
        let key = fold(name)?;
        self.options.iter_mut().find(|o| o.key() == key)
    }

    /// The raw value of an option, or `None` when the option is missing or
    /// has no value.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(IniOption::value)
    }

    /// The value of an option with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed_value(&self, name: &str) -> Option<&str> {
        self.value(name).map(str::trim)
    }

    /// The trimmed, lower-cased value of an option.
    #[must_use]
    pub fn lowercase_value(&self, name: &str) -> Option<String> {
        self.trimmed_value(name).map(str::to_lowercase)
    }

    /// The trimmed value of an option parsed as a base-10 integer.
    ///
    /// Returns `default` when the option is missing, has no value, or its
    /// value does not parse.
    #[must_use]
    pub fn int_value(&self, name: &str, default: i32) -> i32 {
        self.trimmed_value(name)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Whether an option with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether the raw value of an option is one of the truth literals
    /// `ja`, `sí`, `yes`, `oui`, `wahr`, `verdadero`, `true`, `vrai` or `1`.
    ///
    /// The comparison is exact: the raw value is not trimmed or case-folded
    /// first. A missing option is `false`.
    #[must_use]
    pub fn is_true(&self, name: &str) -> bool {
        self.value(name).is_some_and(|v| TRUE_VALUES.contains(&v))
    }

    /// Iterate over the options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &IniOption> {
        self.options.iter()
    }

    /// Number of registered options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the store holds no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The default path used by the parameterless read and write calls, if
    /// one has been set or remembered from an earlier read.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.default_path.as_deref()
    }

    /// Set the default path used by the parameterless read and write calls.
    pub fn set_path(&mut self, path: impl Into<Utf8PathBuf>) {
        self.default_path = Some(path.into());
    }
}

/// Fold a name into its lookup key. `None` when the name is blank.
fn fold(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
