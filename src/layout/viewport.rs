//! Viewport: fixed-height window over a list that keeps the cursor visible.
//!
//! The window is recomputed from scratch on every call from the list length,
//! the cursor and the row limit. Nothing is carried between renders, so the
//! same inputs always produce the same window.

/// Rows kept free for the prompt's own chrome when sizing from the terminal.
pub const CHROME_ROWS: u16 = 4;

/// Smallest window that is still usable.
pub const MIN_ROWS: usize = 5;

/// Rows of lookahead kept below the cursor before the window scrolls.
const LOOKAHEAD_BELOW: usize = 3;

/// Rows of lookahead kept above the cursor.
const LOOKAHEAD_ABOVE: usize = 2;

/// Row budget a list may use in a terminal `terminal_rows` tall.
pub const fn row_budget(terminal_rows: u16) -> usize {
    terminal_rows.saturating_sub(CHROME_ROWS) as usize
}

/// Input to [`render_window`].
#[derive(Debug, Clone, Copy)]
pub struct ViewportRequest<'a, T> {
    /// The full list.
    pub items: &'a [T],
    /// Index of the active row.
    pub cursor: usize,
    /// Caller-requested row limit; `None` means unbounded.
    pub max_items: Option<usize>,
    /// Rows the terminal can spare (see [`row_budget`]).
    pub row_budget: usize,
}

/// The computed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Index of the first visible item.
    pub start: usize,
    /// Number of visible rows.
    pub rows: usize,
    /// The first row stands in for items above.
    pub top_ellipsis: bool,
    /// The last row stands in for items below.
    pub bottom_ellipsis: bool,
}

impl Window {
    /// Compute the window for a list of `len` items.
    pub fn compute(len: usize, cursor: usize, max_items: Option<usize>, row_budget: usize) -> Self {
        let rows = effective_rows(len, max_items, row_budget);
        let mut start = 0;

        if cursor + LOOKAHEAD_BELOW >= start + rows {
            start = (cursor + LOOKAHEAD_BELOW)
                .saturating_sub(rows)
                .min(len.saturating_sub(rows));
        } else if cursor < start + LOOKAHEAD_ABOVE {
            start = cursor.saturating_sub(LOOKAHEAD_ABOVE);
        }

        let truncated = rows < len;
        Self {
            start,
            rows,
            top_ellipsis: truncated && start > 0,
            bottom_ellipsis: truncated && start + rows < len,
        }
    }

    /// One past the last visible item.
    pub const fn end(&self) -> usize {
        self.start + self.rows
    }
}

/// Effective row limit.
///
/// The requested limit is capped by the terminal budget, then floored at
/// [`MIN_ROWS`] so tiny terminals stay usable, and finally capped at the
/// list length.
pub fn effective_rows(len: usize, max_items: Option<usize>, row_budget: usize) -> usize {
    let requested = max_items.unwrap_or(usize::MAX).max(MIN_ROWS);
    row_budget.min(requested).max(MIN_ROWS).min(len)
}

/// Render the visible rows of a list.
///
/// `style` receives each visible item and whether it is the cursor row;
/// truncated ends are replaced by `ellipsis`.
pub fn render_window<T, F>(request: &ViewportRequest<'_, T>, ellipsis: &str, mut style: F) -> Vec<String>
where
    F: FnMut(&T, bool) -> String,
{
    let window = Window::compute(
        request.items.len(),
        request.cursor,
        request.max_items,
        request.row_budget,
    );
    let visible = &request.items[window.start..window.end()];
    let last = visible.len().saturating_sub(1);

    visible
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if (i == 0 && window.top_ellipsis) || (i == last && window.bottom_ellipsis) {
                ellipsis.to_owned()
            } else {
                style(item, window.start + i == request.cursor)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(len: usize, cursor: usize, max_items: Option<usize>, budget: usize) -> Vec<String> {
        let items: Vec<usize> = (0..len).collect();
        let request = ViewportRequest {
            items: &items,
            cursor,
            max_items,
            row_budget: budget,
        };
        render_window(&request, "...", |item, active| {
            if active {
                format!(">{item}")
            } else {
                item.to_string()
            }
        })
    }

    #[test]
    fn test_list_fits_terminal() {
        // 20 options, no max, 24-row terminal.
        let budget = row_budget(24);
        assert_eq!(budget, 20);
        assert_eq!(effective_rows(20, None, budget), 20);

        let window = Window::compute(20, 19, None, budget);
        assert_eq!(window.start, 0);
        assert!(!window.top_ellipsis);
        assert!(!window.bottom_ellipsis);

        let rows = render(20, 19, None, budget);
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[19], ">19");
        assert!(!rows.contains(&"...".to_string()));
    }

    #[test]
    fn test_long_list_scrolls_with_both_ellipses() {
        // 100 options, max 10, 50-row terminal, cursor 50.
        let budget = row_budget(50);
        assert_eq!(effective_rows(100, Some(10), budget), 10);

        let window = Window::compute(100, 50, Some(10), budget);
        assert_eq!(window.start, 43);
        assert!(window.top_ellipsis);
        assert!(window.bottom_ellipsis);

        let rows = render(100, 50, Some(10), budget);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], "...");
        assert_eq!(rows[9], "...");
        assert_eq!(rows[7], ">50");
    }

    #[test]
    fn test_floor_of_five_rows() {
        // Requested max below the floor.
        assert_eq!(effective_rows(50, Some(2), 40), 5);
        // Terminal budget below the floor.
        assert_eq!(effective_rows(50, None, row_budget(6)), 5);
        assert_eq!(effective_rows(50, Some(10), 0), 5);
        // Never more than the list itself.
        assert_eq!(effective_rows(3, Some(10), 40), 3);
        assert_eq!(effective_rows(0, None, 40), 0);
    }

    #[test]
    fn test_cursor_at_end_of_long_list() {
        let window = Window::compute(30, 29, Some(8), 40);
        assert_eq!(window.start, 22);
        assert_eq!(window.end(), 30);
        assert!(window.top_ellipsis);
        assert!(!window.bottom_ellipsis);
    }

    #[test]
    fn test_cursor_near_top() {
        let window = Window::compute(30, 1, Some(8), 40);
        assert_eq!(window.start, 0);
        assert!(!window.top_ellipsis);
        assert!(window.bottom_ellipsis);
    }

    #[test]
    fn test_window_is_stateless() {
        let a = Window::compute(100, 60, Some(10), 40);
        let _ = Window::compute(100, 5, Some(10), 40);
        let b = Window::compute(100, 60, Some(10), 40);
        assert_eq!(a, b);
    }

    #[test]
    fn test_properties_exhaustive() {
        for len in 0..40 {
            for max in [None, Some(1), Some(5), Some(7), Some(12)] {
                for budget in [0, 3, 6, 10, 30] {
                    let rows_limit = effective_rows(len, max, budget);
                    assert!(rows_limit <= len);
                    assert!(rows_limit >= MIN_ROWS.min(len));

                    for cursor in 0..len {
                        let window = Window::compute(len, cursor, max, budget);
                        let rows = render(len, cursor, max, budget);
                        assert!(rows.len() <= rows_limit);
                        assert_eq!(rows.len(), rows_limit);

                        // Cursor row is visible and not hidden behind an ellipsis.
                        let active = format!(">{cursor}");
                        assert!(rows.contains(&active), "len={len} cursor={cursor} max={max:?} budget={budget}");

                        let fits = rows_limit >= len;
                        assert_eq!(window.top_ellipsis, !fits && window.start > 0);
                        assert_eq!(window.bottom_ellipsis, !fits && window.end() < len);
                        if fits {
                            assert!(!rows.contains(&"...".to_string()));
                        }
                    }
                }
            }
        }
    }
}
