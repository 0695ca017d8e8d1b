#![warn(missing_docs)]

//! # page-selector
//!
//! A numbered page selector for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, styled with lipgloss.
//!
//! Given the current page and the page count, the selector draws a bounded
//! row of page blocks between a previous and a next arrow. Long ranges are
//! collapsed around the current page:
//!
//! ```text
//! < 1 2 3 4 5 . . . 20 >
//! < 1 . . . 9 10 11 . . . 20 >
//! < 1 . . . 16 17 18 19 20 >
//! ```
//!
//! Selecting a block (by click, key, or [`Block::activate`]) calls the
//! action supplied by the caller with the chosen page. The selector keeps no
//! state of its own beyond what the caller passes in.
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`page_list`] | Which page numbers and gaps to show |
//! | [`block`] | A single block and its three states |
//! | [`selector`] | The component: composition, rendering, input |
//! | [`style`] | Class names and lipgloss styles |
//! | [`key`] | Key bindings |
//!
//! ## Quick Start
//!
//! ```rust
//! use page_selector::prelude::*;
//! use lipgloss_extras::lipgloss;
//!
//! let selector = PageSelector::new(3, 20, |page| println!("go to {page}"))
//!     .with_styles(Styles::plain());
//!
//! assert_eq!(lipgloss::strip_ansi(&selector.view()), "< 1 2 3 4 5 . . . 20 >");
//! ```

pub mod block;
pub mod error;
pub mod key;
pub mod page_list;
pub mod selector;
pub mod style;

use bubbletea_rs::Cmd;

/// Focus handling shared by interactive components.
///
/// A focused component reacts to key messages passed to its `update`;
/// a blurred one ignores them.
///
/// ```rust
/// use page_selector::prelude::*;
///
/// let mut selector = PageSelector::new(1, 5, |_| {});
/// assert!(!selector.focused());
///
/// selector.focus();
/// assert!(selector.focused());
///
/// selector.blur();
/// assert!(!selector.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Returns whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use block::{Activate, Arrow, Block, BlockClass, ELLIPSIS, L_ARROW, R_ARROW};
pub use error::SelectorError;
pub use key::{Binding, Help as KeyHelp, KeyMap};
pub use page_list::{page_list, PageEntry, WINDOW};
pub use selector::{new as page_selector_new, ActionFunc, Model as PageSelector, PageSelectorKeyMap};
pub use style::Styles;

/// Common imports.
///
/// ```rust
/// use page_selector::prelude::*;
/// ```
pub mod prelude {
    pub use crate::block::{Block, BlockClass};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::page_list::{page_list, PageEntry};
    pub use crate::selector::{Model as PageSelector, PageSelectorKeyMap};
    pub use crate::style::Styles;
    pub use crate::Component;
    pub use crate::SelectorError;
}
