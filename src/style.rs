//! Style sheet for the page selector.
//!
//! Each visual state of a block has a class name (used by the markup
//! renderer) and a matching lipgloss style (used by the terminal renderer).
//! [`Styles::default`] uses adaptive colors so the selector reads well on
//! light and dark terminals.
//!
//! ```rust
//! use page_selector::style::Styles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = Styles::default();
//! styles.on_page_block = Style::new()
//!     .foreground(Color::from("#FFFFFF"))
//!     .background(Color::from("#7D56F4"))
//!     .padding(0, 1, 0, 1);
//! ```

use lipgloss_extras::prelude::*;

/// Container class wrapping all blocks.
pub const PAGE_SELECTOR_CLASS: &str = "page-selector";
/// Block for the current page.
pub const ON_PAGE_BLOCK_CLASS: &str = "on-page-block";
/// Block without an action (ellipsis or disabled arrow).
pub const NO_ACTION_BLOCK_CLASS: &str = "no-action-block";
/// Selectable page block.
pub const PAGE_BLOCK_CLASS: &str = "page-block";
/// Glyph of the previous-page arrow.
pub const LEFT_ARROW_CLASS: &str = "left-arrow";
/// Glyph of the next-page arrow.
pub const RIGHT_ARROW_CLASS: &str = "right-arrow";
/// Modifier added to an arrow glyph that has an action.
pub const ACTIVE_ARROW_CLASS: &str = "active-arrow";

/// Lipgloss styles for every block state.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Wraps the whole rendered line.
    pub container: Style,
    /// The current page.
    pub on_page_block: Style,
    /// Ellipsis and disabled arrows.
    pub no_action_block: Style,
    /// Selectable pages and enabled arrows.
    pub page_block: Style,
    /// Applied to an arrow glyph.
    pub arrow: Style,
    /// Used in place of `arrow` when the arrow has an action.
    pub active_arrow: Style,
    /// Text placed between adjacent blocks.
    pub separator: String,
}

fn muted() -> AdaptiveColor {
    AdaptiveColor {
        Light: "#B2B2B2",
        Dark: "#4A4A4A",
    }
}

fn normal() -> AdaptiveColor {
    AdaptiveColor {
        Light: "#1A1A1A",
        Dark: "#DDDDDD",
    }
}

fn accent() -> AdaptiveColor {
    AdaptiveColor {
        Light: "#5A56E0",
        Dark: "#7571F9",
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            container: Style::new(),
            on_page_block: Style::new().foreground(accent()).bold(true).underline(true),
            no_action_block: Style::new().foreground(muted()),
            page_block: Style::new().foreground(normal()),
            arrow: Style::new().foreground(muted()),
            active_arrow: Style::new().foreground(accent()).bold(true),
            separator: " ".to_string(),
        }
    }
}

impl Styles {
    /// Styles that emit no escape sequences. Useful for snapshot-style tests
    /// and for terminals without color.
    pub fn plain() -> Self {
        Self {
            container: Style::new(),
            on_page_block: Style::new(),
            no_action_block: Style::new(),
            page_block: Style::new(),
            arrow: Style::new(),
            active_arrow: Style::new(),
            separator: " ".to_string(),
        }
    }
}
