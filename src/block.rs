//! A single unit of the page selector.
//!
//! A block is a page number, an ellipsis, or one of the two navigation
//! arrows. It is in exactly one of three states, picked in this order:
//!
//! 1. current page: highlighted and never activatable
//! 2. no action: an ellipsis or a disabled arrow
//! 3. page: activatable
//!
//! ```rust
//! use page_selector::block::{Block, BlockClass};
//!
//! let gap = Block::inert(page_selector::block::ELLIPSIS);
//! assert_eq!(gap.class(), BlockClass::NoAction);
//! assert!(!gap.activate());
//! ```

use std::fmt;
use std::sync::Arc;

use lipgloss_extras::prelude::*;

use crate::style::{
    Styles, ACTIVE_ARROW_CLASS, LEFT_ARROW_CLASS, NO_ACTION_BLOCK_CLASS, ON_PAGE_BLOCK_CLASS,
    PAGE_BLOCK_CLASS, RIGHT_ARROW_CLASS,
};

/// Label of a gap block.
pub const ELLIPSIS: &str = ". . .";
/// Label marking the previous-page arrow.
pub const L_ARROW: &str = "<";
/// Label marking the next-page arrow.
pub const R_ARROW: &str = ">";

/// Callback run when a block is activated.
pub type Activate = Arc<dyn Fn() + Send + Sync>;

/// Visual and interactive state of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockClass {
    /// The current page.
    OnPage,
    /// Nothing happens on activation.
    NoAction,
    /// Activation selects a page.
    Page,
}

impl BlockClass {
    /// The class name used in markup.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockClass::OnPage => ON_PAGE_BLOCK_CLASS,
            BlockClass::NoAction => NO_ACTION_BLOCK_CLASS,
            BlockClass::Page => PAGE_BLOCK_CLASS,
        }
    }
}

impl fmt::Display for BlockClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of an arrow block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    /// Previous page.
    Left,
    /// Next page.
    Right,
}

impl Arrow {
    /// Class name of the arrow glyph.
    pub fn class(self) -> &'static str {
        match self {
            Arrow::Left => LEFT_ARROW_CLASS,
            Arrow::Right => RIGHT_ARROW_CLASS,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Arrow::Left => L_ARROW,
            Arrow::Right => R_ARROW,
        }
    }
}

/// One rendered unit of the selector.
#[derive(Clone)]
pub struct Block {
    /// Whether this block is the current page.
    pub is_current: bool,
    /// Page number, [`ELLIPSIS`], [`L_ARROW`] or [`R_ARROW`].
    pub label: String,
    on_activate: Option<Activate>,
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("is_current", &self.is_current)
            .field("label", &self.label)
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}

impl Block {
    /// Creates a block from its raw parts.
    pub fn new(is_current: bool, label: impl Into<String>, on_activate: Option<Activate>) -> Self {
        Self {
            is_current,
            label: label.into(),
            on_activate,
        }
    }

    /// A block without an action.
    pub fn inert(label: impl Into<String>) -> Self {
        Self::new(false, label, None)
    }

    /// The current-page block.
    pub fn current(label: impl Into<String>) -> Self {
        Self::new(true, label, None)
    }

    /// An activatable block running `f` on activation.
    pub fn actionable<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::new(false, label, Some(Arc::new(f)))
    }

    /// Whether an action is attached. A current block may still carry one,
    /// it just never runs.
    pub fn has_action(&self) -> bool {
        self.on_activate.is_some()
    }

    /// The block's state; see the module docs for precedence.
    pub fn class(&self) -> BlockClass {
        if self.is_current {
            BlockClass::OnPage
        } else if self.on_activate.is_none() {
            BlockClass::NoAction
        } else {
            BlockClass::Page
        }
    }

    /// Returns the arrow direction if the label is an arrow marker.
    pub fn arrow(&self) -> Option<Arrow> {
        match self.label.as_str() {
            L_ARROW => Some(Arrow::Left),
            R_ARROW => Some(Arrow::Right),
            _ => None,
        }
    }

    /// Class list of the arrow glyph, e.g. `"left-arrow active-arrow"`.
    pub fn arrow_class(&self) -> Option<String> {
        self.arrow().map(|arrow| {
            if self.has_action() {
                format!("{} {}", arrow.class(), ACTIVE_ARROW_CLASS)
            } else {
                arrow.class().to_string()
            }
        })
    }

    /// Runs the block's action. Returns `false` without doing anything when
    /// the block is current or has no action.
    pub fn activate(&self) -> bool {
        if self.is_current {
            tracing::trace!(label = %self.label, "ignoring activation of current page");
            return false;
        }
        match &self.on_activate {
            Some(f) => {
                tracing::debug!(label = %self.label, "block activated");
                f();
                true
            }
            None => {
                tracing::trace!(label = %self.label, "ignoring activation of inert block");
                false
            }
        }
    }

    /// Renders the block for the terminal.
    pub fn view(&self, styles: &Styles) -> String {
        if let Some(arrow) = self.arrow() {
            let style = if self.has_action() {
                &styles.active_arrow
            } else {
                &styles.arrow
            };
            return style.clone().inline(true).render(arrow.glyph());
        }

        let style = match self.class() {
            BlockClass::OnPage => &styles.on_page_block,
            BlockClass::NoAction => &styles.no_action_block,
            BlockClass::Page => &styles.page_block,
        };
        style.clone().inline(true).render(&self.label)
    }

    /// Renders the block as an HTML fragment.
    pub fn markup(&self) -> String {
        let inner = match self.arrow_class() {
            Some(class) => format!("<div class=\"{class}\"></div>"),
            None => format!("<span>{}</span>", escape(&self.label)),
        };
        format!("<div class=\"{}\">{}</div>", self.class(), inner)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        (hits, move || {
            h.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_class_selection_order() {
        assert_eq!(Block::current("3").class(), BlockClass::OnPage);
        assert_eq!(Block::inert(ELLIPSIS).class(), BlockClass::NoAction);
        assert_eq!(Block::actionable("4", || {}).class(), BlockClass::Page);

        // current wins even when an action is attached
        let b = Block::new(true, "3", Some(Arc::new(|| {})));
        assert_eq!(b.class(), BlockClass::OnPage);
    }

    #[test]
    fn test_current_block_never_fires() {
        let (hits, f) = counter();
        let b = Block::new(true, "3", Some(Arc::new(f)));
        assert!(!b.activate());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_actionable_block_fires_once_per_activation() {
        let (hits, f) = counter();
        let b = Block::actionable("7", f);
        assert!(b.activate());
        assert!(b.activate());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_inert_block_is_noop() {
        assert!(!Block::inert(L_ARROW).activate());
    }

    #[test]
    fn test_arrow_classes() {
        assert_eq!(Block::inert(L_ARROW).arrow_class().as_deref(), Some("left-arrow"));
        assert_eq!(
            Block::actionable(R_ARROW, || {}).arrow_class().as_deref(),
            Some("right-arrow active-arrow")
        );
        assert_eq!(Block::inert(ELLIPSIS).arrow_class(), None);
    }

    #[test]
    fn test_markup() {
        assert_eq!(
            Block::current("2").markup(),
            "<div class=\"on-page-block\"><span>2</span></div>"
        );
        assert_eq!(
            Block::inert(ELLIPSIS).markup(),
            "<div class=\"no-action-block\"><span>. . .</span></div>"
        );
        assert_eq!(
            Block::actionable(L_ARROW, || {}).markup(),
            "<div class=\"page-block\"><div class=\"left-arrow active-arrow\"></div></div>"
        );
        assert_eq!(
            Block::inert("a<b").markup(),
            "<div class=\"no-action-block\"><span>a&lt;b</span></div>"
        );
    }

    #[test]
    fn test_view_plain() {
        let styles = Styles::plain();
        assert_eq!(lipgloss::strip_ansi(&Block::current("12").view(&styles)), "12");
        assert_eq!(lipgloss::strip_ansi(&Block::inert(R_ARROW).view(&styles)), ">");
        assert_eq!(
            lipgloss::strip_ansi(&Block::inert(ELLIPSIS).view(&Styles::default())),
            ELLIPSIS
        );
    }

    #[test]
    fn test_debug_hides_closure() {
        let dbg = format!("{:?}", Block::actionable("5", || {}));
        assert!(dbg.contains("on_activate: true"));
    }
}
