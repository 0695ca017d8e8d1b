//! The page selector component.
//!
//! Renders `< 1 . . . 9 10 11 . . . 20 >`-style navigation for a paged view
//! and reports the page the user picks through a caller-supplied action.
//! The selector does not change its own page: the action is a request to the
//! parent, which then calls [`Model::set_page`] (or rebuilds the selector)
//! with the new value.
//!
//! # Examples
//!
//! ```rust
//! use page_selector::selector::Model;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let requested = Arc::new(AtomicUsize::new(0));
//! let sink = Arc::clone(&requested);
//! let selector = Model::new(10, 20, move |page| sink.store(page, Ordering::SeqCst));
//!
//! assert_eq!(
//!     selector.markup(),
//!     concat!(
//!         "<div class=\"page-selector\">",
//!         "<div class=\"page-block\"><div class=\"left-arrow active-arrow\"></div></div>",
//!         "<div class=\"page-block\"><span>1</span></div>",
//!         "<div class=\"no-action-block\"><span>. . .</span></div>",
//!         "<div class=\"page-block\"><span>9</span></div>",
//!         "<div class=\"on-page-block\"><span>10</span></div>",
//!         "<div class=\"page-block\"><span>11</span></div>",
//!         "<div class=\"no-action-block\"><span>. . .</span></div>",
//!         "<div class=\"page-block\"><span>20</span></div>",
//!         "<div class=\"page-block\"><div class=\"right-arrow active-arrow\"></div></div>",
//!         "</div>",
//!     )
//! );
//!
//! // The right arrow asks for the next page.
//! let blocks = selector.blocks();
//! blocks.last().unwrap().activate();
//! assert_eq!(requested.load(Ordering::SeqCst), 11);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use page_selector::selector::Model as PageSelector;
//! use page_selector::Component;
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! struct App {
//!     selector: PageSelector,
//!     requested: Arc<AtomicUsize>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let requested = Arc::new(AtomicUsize::new(1));
//!         let sink = Arc::clone(&requested);
//!         let mut selector = PageSelector::new(1, 42, move |page| {
//!             sink.store(page, Ordering::SeqCst);
//!         });
//!         selector.focus();
//!         (Self { selector, requested }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.selector.update(&msg);
//!         self.selector.set_page(self.requested.load(Ordering::SeqCst));
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Page {}\n\n{}", self.selector.page, self.selector.view())
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss;

use crate::block::{Arrow, Block, ELLIPSIS, L_ARROW, R_ARROW};
use crate::error::{Result, SelectorError};
use crate::key::{self, KeyMap as KeyMapTrait};
use crate::page_list::{page_list, PageEntry};
use crate::style::{Styles, PAGE_SELECTOR_CLASS};
use crate::Component;

/// Callback receiving the page the user selected.
pub type ActionFunc = Arc<dyn Fn(usize) + Send + Sync>;

/// Key bindings for keyboard navigation.
#[derive(Debug, Clone)]
pub struct PageSelectorKeyMap {
    /// Same as activating the left arrow.
    pub prev_page: key::Binding,
    /// Same as activating the right arrow.
    pub next_page: key::Binding,
    /// Selects page 1.
    pub first_page: key::Binding,
    /// Selects the last page.
    pub last_page: key::Binding,
}

impl Default for PageSelectorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("home/g", "first page"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("end/G", "last page"),
        }
    }
}

impl KeyMapTrait for PageSelectorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.first_page, &self.last_page],
        ]
    }
}

/// A numbered page selector.
///
/// `page` is 1-based and expected to lie in `1..=total_pages`. Construction
/// does not check this; out-of-range values render something sensible but
/// unspecified. Use [`Model::try_new`] or [`Model::validate`] to reject them.
#[derive(Clone)]
pub struct Model {
    /// The current page, starting at 1.
    pub page: usize,
    /// The number of pages.
    pub total_pages: usize,
    /// Appearance of each block state.
    pub styles: Styles,
    /// Keyboard navigation bindings.
    pub keymap: PageSelectorKeyMap,
    action: ActionFunc,
    focus: bool,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("page", &self.page)
            .field("total_pages", &self.total_pages)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Creates a selector showing `page` of `total_pages` that calls `action`
    /// with the selected page.
    pub fn new<F>(page: usize, total_pages: usize, action: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        Self {
            page,
            total_pages,
            styles: Styles::default(),
            keymap: PageSelectorKeyMap::default(),
            action: Arc::new(action),
            focus: false,
        }
    }

    /// Like [`Model::new`] but rejects a page outside `1..=total_pages`.
    ///
    /// ```rust
    /// use page_selector::selector::Model;
    /// use page_selector::SelectorError;
    ///
    /// assert!(Model::try_new(3, 5, |_| {}).is_ok());
    /// assert_eq!(
    ///     Model::try_new(6, 5, |_| {}).unwrap_err(),
    ///     SelectorError::PageOutOfRange { page: 6, total_pages: 5 }
    /// );
    /// ```
    pub fn try_new<F>(page: usize, total_pages: usize, action: F) -> Result<Self>
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        let model = Self::new(page, total_pages, action);
        model.validate()?;
        Ok(model)
    }

    /// Checks that the current page lies in `1..=total_pages`.
    pub fn validate(&self) -> Result<()> {
        if self.total_pages == 0 {
            return Err(SelectorError::NoPages);
        }
        if self.page == 0 || self.page > self.total_pages {
            return Err(SelectorError::PageOutOfRange {
                page: self.page,
                total_pages: self.total_pages,
            });
        }
        Ok(())
    }

    /// Sets the styles (builder pattern).
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: PageSelectorKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Sets the text placed between blocks (builder pattern).
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.styles.separator = separator.to_string();
        self
    }

    /// Replaces the selection callback (builder pattern).
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.action = Arc::new(action);
        self
    }

    /// Sets the current page, typically after the action fired.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Sets the page count.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages;
    }

    /// True when there is no previous page.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// True when there is no next page.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// The page numbers and gaps between the two arrows.
    pub fn page_list(&self) -> Vec<PageEntry> {
        page_list(self.page, self.total_pages)
    }

    /// A non-current block that requests `target`, or an inert one.
    fn block_for(&self, label: String, target: Option<usize>) -> Block {
        match target {
            Some(target) => {
                let action = Arc::clone(&self.action);
                Block::actionable(label, move || action(target))
            }
            None => Block::inert(label),
        }
    }

    /// Every block in render order: left arrow, page list, right arrow.
    pub fn blocks(&self) -> Vec<Block> {
        let entries = self.page_list();
        let mut blocks = Vec::with_capacity(entries.len() + 2);

        let prev = (!self.on_first_page()).then(|| self.page - 1);
        blocks.push(self.block_for(L_ARROW.to_string(), prev));

        blocks.extend(entries.into_iter().map(|entry| match entry {
            PageEntry::Number(n) if n == self.page => Block::current(n.to_string()),
            PageEntry::Number(n) => self.block_for(n.to_string(), Some(n)),
            PageEntry::Gap => self.block_for(ELLIPSIS.to_string(), None),
        }));

        let next = (!self.on_last_page()).then(|| self.page + 1);
        blocks.push(self.block_for(R_ARROW.to_string(), next));

        blocks
    }

    /// Requests `target` through the action unless it is the current page or
    /// outside `1..=total_pages`. Returns whether the action ran.
    pub fn select(&self, target: usize) -> bool {
        if target == self.page || target == 0 || target > self.total_pages {
            return false;
        }
        tracing::debug!(from = self.page, to = target, "page selected");
        (self.action)(target);
        true
    }

    /// Returns the block drawn at `column` of the rendered line, counting
    /// from the first cell of the left arrow. Separators map to `None`.
    pub fn block_at(&self, column: usize) -> Option<Block> {
        let separator = lipgloss::width_visible(&self.styles.separator);
        let mut start = 0;
        for block in self.blocks() {
            let width = lipgloss::width_visible(&block.view(&self.styles));
            if column >= start && column < start + width {
                return Some(block);
            }
            start += width + separator;
        }
        None
    }

    /// Activates the block at `column`, like a mouse click on it.
    pub fn click(&self, column: usize) -> bool {
        match self.block_at(column) {
            Some(block) => block.activate(),
            None => {
                tracing::trace!(column, "click outside any block");
                false
            }
        }
    }

    /// Handles navigation keys while focused.
    pub fn update(&mut self, msg: &Msg) {
        if !self.focus {
            return;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.prev_page.matches(key_msg) {
                self.activate_arrow(Arrow::Left);
            } else if self.keymap.next_page.matches(key_msg) {
                self.activate_arrow(Arrow::Right);
            } else if self.keymap.first_page.matches(key_msg) {
                self.select(1);
            } else if self.keymap.last_page.matches(key_msg) {
                self.select(self.total_pages);
            }
        }
    }

    fn activate_arrow(&self, direction: Arrow) {
        let blocks = self.blocks();
        let arrow = match direction {
            Arrow::Left => blocks.first(),
            Arrow::Right => blocks.last(),
        };
        if let Some(arrow) = arrow {
            tracing::trace!(?direction, "arrow key");
            arrow.activate();
        }
    }

    /// Renders the selector as a single styled line.
    pub fn view(&self) -> String {
        let parts: Vec<String> = self
            .blocks()
            .iter()
            .map(|block| block.view(&self.styles))
            .collect();
        self.styles
            .container
            .clone()
            .render(&parts.join(self.styles.separator.as_str()))
    }

    /// Renders the selector as an HTML fragment.
    pub fn markup(&self) -> String {
        let inner: String = self.blocks().iter().map(Block::markup).collect();
        format!("<div class=\"{PAGE_SELECTOR_CLASS}\">{inner}</div>")
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(1, 1, |_| {}), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(&msg);
        None
    }

    fn view(&self) -> String {
        self.view()
    }
}

/// Creates a new selector. Equivalent to [`Model::new`].
pub fn new<F>(page: usize, total_pages: usize, action: F) -> Model
where
    F: Fn(usize) + Send + Sync + 'static,
{
    Model::new(page, total_pages, action)
}
