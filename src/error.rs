//! Errors reported by opt-in input validation.
//!
//! Rendering itself never fails; these are only produced by
//! [`Model::validate`](crate::selector::Model::validate) and
//! [`Model::try_new`](crate::selector::Model::try_new).

use thiserror::Error;

/// Invalid page selector input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// `total_pages` is zero.
    #[error("page selector needs at least one page")]
    NoPages,
    /// `page` is zero or past the last page.
    #[error("page {page} is outside 1..={total_pages}")]
    PageOutOfRange {
        /// The rejected page.
        page: usize,
        /// The page count it was checked against.
        total_pages: usize,
    },
}

/// Result alias for validation.
pub type Result<T> = std::result::Result<T, SelectorError>;
