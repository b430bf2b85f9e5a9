//! Dropdown configuration

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// How to resolve a selector that matches more than one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Exactly one element must match.
    #[default]
    Unique,
    /// Use the first match in document order.
    First,
}

/// Which elements make up the dropdown and how it is shown.
///
/// # Example
///
/// ```
/// use account_menu::{DropdownConfig, MatchPolicy};
///
/// let config = DropdownConfig::default()
///     .with_trigger_selector("#user-menu")
///     .with_match_policy(MatchPolicy::First);
/// assert_eq!(config.panel_selector, ".account-dropdown");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Selector for the link that opens and closes the panel.
    ///
    /// Default: `.account-link`
    pub trigger_selector: String,

    /// Selector for the panel being shown or hidden.
    ///
    /// Default: `.account-dropdown`
    pub panel_selector: String,

    /// Class present on the panel while it is open.
    ///
    /// Default: `active`
    pub marker_class: String,

    /// Default: [`MatchPolicy::Unique`]
    pub match_policy: MatchPolicy,

    /// State projected onto the panel at attach time.
    ///
    /// Default: false
    pub initially_open: bool,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            trigger_selector: ".account-link".to_string(),
            panel_selector: ".account-dropdown".to_string(),
            marker_class: "active".to_string(),
            match_policy: MatchPolicy::Unique,
            initially_open: false,
        }
    }
}

impl DropdownConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trigger selector.
    pub fn with_trigger_selector(mut self, selector: impl Into<String>) -> Self {
        self.trigger_selector = selector.into();
        self
    }

    /// Sets the panel selector.
    pub fn with_panel_selector(mut self, selector: impl Into<String>) -> Self {
        self.panel_selector = selector.into();
        self
    }

    /// Sets the marker class.
    pub fn with_marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = class.into();
        self
    }

    /// Sets the match policy.
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Sets the initial state.
    pub fn with_initially_open(mut self, open: bool) -> Self {
        self.initially_open = open;
        self
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }
}
