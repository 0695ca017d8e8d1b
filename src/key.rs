//! Key bindings for the page selector.
//!
//! A [`Binding`] maps one or more key codes to an action and carries the
//! short help text shown next to it. Components expose their bindings through
//! the [`KeyMap`] trait so a help view can list them.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help text attached to a binding, e.g. `("←/h", "prev page")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Human readable key name.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key codes that trigger the same action.
///
/// ```rust
/// use page_selector::key::Binding;
/// use crossterm::event::KeyCode;
///
/// let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
///     .with_help("→/l", "next page");
/// assert_eq!(next.help().desc, "next page");
/// assert!(next.enabled());
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for `keys` with empty help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key codes that trigger this binding.
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled when it has keys and was not switched off.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Switches the binding on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether `key_msg` triggers this binding. Disabled bindings
    /// never match.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.contains(&key_msg.key)
    }
}

/// Bindings a component exposes for help rendering.
pub trait KeyMap {
    /// Bindings for a compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
