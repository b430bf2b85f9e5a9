//! Account dropdown menu for a [`pagedom::Document`].
//!
//! A [`DropdownController`] wires two click listeners: one on the trigger
//! link that toggles the panel, and one on the document that closes the
//! panel when a click lands outside both elements. Whether the panel is open
//! is held by the controller; the panel's marker class only mirrors it.

pub mod config;
pub mod controller;
pub mod error;
pub mod lookup;
pub mod state;

pub use config::{DropdownConfig, MatchPolicy};
pub use controller::{DropdownController, PendingController};
pub use error::{ConfigError, DropdownError, ElementRole};
pub use state::{DropdownState, Visibility};
