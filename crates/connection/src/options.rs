//! Resolved connection options supplied by the host runtime.
//!
//! The runtime's option-resolution layer merges user, host, and inventory
//! variables by precedence before a plugin is constructed. Plugins only ever
//! see the merged result through [`ResolvedOptions`]; they never parse
//! configuration sources themselves.

use std::collections::BTreeMap;

use crate::error::ConnectionError;

/// Option name for the login user on the target.
pub const REMOTE_USER: &str = "remote_user";

/// Option name for the target address. The runtime defaults this to the
/// task's inventory target name when nothing more specific is configured.
pub const REMOTE_ADDR: &str = "remote_addr";

/// A single resolved option value.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OptionValue {
    /// Text value.
    Text(String),
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
}

impl OptionValue {
    /// Returns the value as text, when it is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Bool(_) | Self::Int(_) => None,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Read-only view onto the connection options the runtime resolved for one
/// plugin instance.
#[derive(Clone, Debug, Default)]
pub struct ResolvedOptions {
    values: BTreeMap<String, OptionValue>,
}

impl ResolvedOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a resolved value, replacing any earlier resolution of the same
    /// option.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Looks up a resolved option by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::MissingOption`] when the runtime never
    /// resolved a value for `name`.
    pub fn get_option(&self, name: &str) -> Result<&OptionValue, ConnectionError> {
        self.values
            .get(name)
            .ok_or_else(|| ConnectionError::MissingOption {
                name: name.to_string(),
            })
    }

    /// The login user on the target, when one was resolved.
    #[must_use]
    pub fn remote_user(&self) -> Option<&str> {
        self.values.get(REMOTE_USER).and_then(OptionValue::as_str)
    }

    /// The target address.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::MissingOption`] when the runtime failed to
    /// supply an address. The error propagates through plugin operations
    /// unchanged.
    pub fn remote_addr(&self) -> Result<&str, ConnectionError> {
        self.get_option(REMOTE_ADDR)?
            .as_str()
            .ok_or_else(|| ConnectionError::MissingOption {
                name: REMOTE_ADDR.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_option_returns_resolved_value() {
        let options = ResolvedOptions::new().with(REMOTE_ADDR, "target.example.com");
        let value = options.get_option(REMOTE_ADDR).unwrap();
        assert_eq!(value.as_str(), Some("target.example.com"));
    }

    #[test]
    fn get_option_reports_missing_name() {
        let options = ResolvedOptions::new();
        let error = options.get_option(REMOTE_USER).unwrap_err();
        assert_eq!(
            error,
            ConnectionError::MissingOption {
                name: REMOTE_USER.to_string(),
            }
        );
    }

    #[test]
    fn remote_user_is_optional() {
        let options = ResolvedOptions::new();
        assert_eq!(options.remote_user(), None);

        let options = options.with(REMOTE_USER, "admin");
        assert_eq!(options.remote_user(), Some("admin"));
    }

    #[test]
    fn remote_addr_is_required() {
        let options = ResolvedOptions::new();
        assert!(options.remote_addr().is_err());

        let options = options.with(REMOTE_ADDR, "host-01");
        assert_eq!(options.remote_addr().unwrap(), "host-01");
    }

    #[test]
    fn remote_addr_rejects_non_text_value() {
        let options = ResolvedOptions::new().with(REMOTE_ADDR, true);
        assert!(options.remote_addr().is_err());
    }

    #[test]
    fn set_replaces_earlier_resolution() {
        let mut options = ResolvedOptions::new();
        options.set(REMOTE_USER, "first");
        options.set(REMOTE_USER, "second");
        assert_eq!(options.remote_user(), Some("second"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn option_value_serializes_untagged() {
        let text: OptionValue = "host".into();
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"host\"");

        let flag: OptionValue = true.into();
        assert_eq!(serde_json::to_string(&flag).unwrap(), "true");
    }
}
