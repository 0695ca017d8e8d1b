//! Page list computation.
//!
//! Decides which page numbers the selector shows for a given current page.
//! Short ranges are listed in full; longer ranges always keep the first and
//! last page and collapse the rest around the current page into gaps, so the
//! list never exceeds [`WINDOW`] entries.

use std::fmt;

/// Maximum number of entries in a page list.
///
/// The thresholds in [`page_list`] are tuned for this window size and are not
/// configurable.
pub const WINDOW: usize = 7;

/// Pages shown at the leading (or trailing) edge before collapsing.
const EDGE_RUN: usize = 5;

/// One entry of a page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEntry {
    /// A real, 1-based page number.
    Number(usize),
    /// Elided page numbers, rendered as an ellipsis.
    Gap,
}

impl PageEntry {
    /// Returns the page number, or `None` for a gap.
    pub fn page(self) -> Option<usize> {
        match self {
            PageEntry::Number(n) => Some(n),
            PageEntry::Gap => None,
        }
    }

    /// Whether this entry is a gap.
    pub fn is_gap(self) -> bool {
        matches!(self, PageEntry::Gap)
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEntry::Number(n) => write!(f, "{n}"),
            PageEntry::Gap => f.write_str("…"),
        }
    }
}

/// Computes the entries to display for `page` (1-based) out of `total_pages`.
///
/// - fewer than 8 pages: every page, no gaps
/// - near the start (`page < 5`): `1 2 3 4 5 … last`
/// - near the end (`page > last - 4`): `1 … last-4 last-3 last-2 last-1 last`
/// - otherwise: `1 … page-1 page page+1 … last`
///
/// Inputs are not validated. An out-of-range `page` still produces a list of
/// at most [`WINDOW`] entries.
///
/// ```rust
/// use page_selector::page_list::{page_list, PageEntry::{Gap, Number}};
///
/// assert_eq!(
///     page_list(10, 20),
///     vec![Number(1), Gap, Number(9), Number(10), Number(11), Gap, Number(20)]
/// );
/// ```
pub fn page_list(page: usize, total_pages: usize) -> Vec<PageEntry> {
    if total_pages <= WINDOW {
        return (1..=total_pages).map(PageEntry::Number).collect();
    }

    if page < EDGE_RUN {
        let mut list: Vec<PageEntry> = (1..=EDGE_RUN).map(PageEntry::Number).collect();
        list.push(PageEntry::Gap);
        list.push(PageEntry::Number(total_pages));
        return list;
    }

    // total_pages >= 8 here, so the tail run never underflows.
    let tail_start = total_pages - (EDGE_RUN - 1);
    if page > tail_start {
        let mut list = vec![PageEntry::Number(1), PageEntry::Gap];
        list.extend((tail_start..=total_pages).map(PageEntry::Number));
        return list;
    }

    vec![
        PageEntry::Number(1),
        PageEntry::Gap,
        PageEntry::Number(page - 1),
        PageEntry::Number(page),
        PageEntry::Number(page + 1),
        PageEntry::Gap,
        PageEntry::Number(total_pages),
    ]
}

#[cfg(test)]
mod tests {
    use super::PageEntry::{Gap, Number};
    use super::*;

    fn numbers(list: &[PageEntry]) -> Vec<usize> {
        list.iter().filter_map(|e| e.page()).collect()
    }

    #[test]
    fn test_short_ranges_list_every_page() {
        for total in 1..8 {
            for page in 1..=total {
                let list = page_list(page, total);
                assert_eq!(numbers(&list), (1..=total).collect::<Vec<_>>());
                assert!(!list.iter().any(|e| e.is_gap()));
            }
        }
    }

    #[test]
    fn test_leading_run() {
        for total in 8..40 {
            for page in 1..5 {
                assert_eq!(
                    page_list(page, total),
                    vec![
                        Number(1),
                        Number(2),
                        Number(3),
                        Number(4),
                        Number(5),
                        Gap,
                        Number(total)
                    ]
                );
            }
        }
    }

    #[test]
    fn test_trailing_run() {
        for total in 8..40 {
            for page in (total - 3)..=total {
                assert_eq!(
                    page_list(page, total),
                    vec![
                        Number(1),
                        Gap,
                        Number(total - 4),
                        Number(total - 3),
                        Number(total - 2),
                        Number(total - 1),
                        Number(total)
                    ]
                );
            }
        }
    }

    #[test]
    fn test_middle_window() {
        for total in 9..40 {
            for page in 5..=(total - 4) {
                assert_eq!(
                    page_list(page, total),
                    vec![
                        Number(1),
                        Gap,
                        Number(page - 1),
                        Number(page),
                        Number(page + 1),
                        Gap,
                        Number(total)
                    ]
                );
            }
        }
    }

    #[test]
    fn test_eight_pages_has_no_middle_window() {
        // page 4 is still leading, page 5 already trailing
        assert_eq!(page_list(4, 8)[5], Gap);
        assert_eq!(
            page_list(5, 8),
            vec![Number(1), Gap, Number(4), Number(5), Number(6), Number(7), Number(8)]
        );
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(page_list(1, 3), vec![Number(1), Number(2), Number(3)]);
        assert_eq!(
            page_list(3, 20),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5), Gap, Number(20)]
        );
        assert_eq!(
            page_list(18, 20),
            vec![Number(1), Gap, Number(16), Number(17), Number(18), Number(19), Number(20)]
        );
        assert_eq!(
            page_list(10, 20),
            vec![Number(1), Gap, Number(9), Number(10), Number(11), Gap, Number(20)]
        );
    }

    #[test]
    fn test_window_bound_and_edges() {
        for total in 1..60 {
            for page in 1..=total {
                let list = page_list(page, total);
                assert!(list.len() <= WINDOW);
                assert_eq!(list.first(), Some(&Number(1)));
                assert_eq!(list.last(), Some(&Number(total)));
                assert!(list.contains(&Number(page)));
            }
        }
    }

    #[test]
    fn test_is_pure() {
        assert_eq!(page_list(12, 30), page_list(12, 30));
    }

    #[test]
    fn test_out_of_range_input_does_not_panic() {
        assert!(page_list(0, 0).is_empty());
        assert_eq!(page_list(0, 20).len(), WINDOW);
        assert_eq!(page_list(99, 20).len(), WINDOW);
        assert_eq!(page_list(5, 3), vec![Number(1), Number(2), Number(3)]);
    }
}
