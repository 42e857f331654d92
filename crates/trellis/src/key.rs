//! Keybinding definitions and matching utilities.
//!
//! # Example
//!
//! ```rust
//! use trellis::key::{Binding, matches};
//!
//! let expand = Binding::new()
//!     .keys(&["enter", " "])
//!     .help("enter", "expand/collapse");
//!
//! assert!(matches("enter", &[&expand]));
//! assert!(!matches("x", &[&expand]));
//! ```

/// Help information for a keybinding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) to display in help text (e.g., "↑/k").
    pub key: String,
    /// Description of what the binding does.
    pub desc: String,
}

impl Help {
    /// Creates new help information.
    #[must_use]
    pub fn new(key: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            desc: desc.into(),
        }
    }
}

/// A keybinding with associated help text.
///
/// Bindings can be enabled/disabled and contain zero or more key strings
/// (in the canonical [`crate::event::KeyMsg`] display form) that trigger
/// the binding.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help::new(key, desc);
        self
    }

    /// Returns the keys for this binding.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the help information for this binding.
    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// Returns whether this binding is enabled.
    ///
    /// A binding is enabled if it's not explicitly disabled and has at
    /// least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Checks if the given key matches any of the given bindings.
///
/// Disabled bindings never match.
#[must_use]
pub fn matches(key: &str, bindings: &[&Binding]) -> bool {
    bindings
        .iter()
        .any(|b| b.enabled() && b.keys.iter().any(|k| k == key))
}
