//! Error types

use std::fmt;
use std::path::PathBuf;

use pagedom::SelectorError;

/// Which half of the dropdown a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Trigger,
    Panel,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trigger => write!(f, "trigger"),
            Self::Panel => write!(f, "panel"),
        }
    }
}

/// Error type for attaching a dropdown controller.
#[derive(Debug, thiserror::Error)]
pub enum DropdownError {
    /// The document is still loading.
    #[error("document has not finished loading")]
    NotReady,

    /// No element matched the selector.
    #[error("no {role} element matches '{selector}'")]
    NotFound { role: ElementRole, selector: String },

    /// More than one element matched and the policy requires exactly one.
    #[error("{count} elements match {role} selector '{selector}', expected exactly one")]
    Ambiguous {
        role: ElementRole,
        selector: String,
        count: usize,
    },

    /// The matched element shares its ID with other elements, so it cannot
    /// be addressed reliably.
    #[error("{role} element '{id}' is one of {count} elements with that id")]
    DuplicateId {
        role: ElementRole,
        id: String,
        count: usize,
    },

    /// The configured selector could not be parsed.
    #[error("invalid selector: {0}")]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DropdownError {
    /// Creates a new not found error.
    pub fn not_found(role: ElementRole, selector: impl Into<String>) -> Self {
        Self::NotFound {
            role,
            selector: selector.into(),
        }
    }

    /// Creates a new ambiguous match error.
    pub fn ambiguous(role: ElementRole, selector: impl Into<String>, count: usize) -> Self {
        Self::Ambiguous {
            role,
            selector: selector.into(),
            count,
        }
    }
}

/// Error type for loading a [`DropdownConfig`](crate::DropdownConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
