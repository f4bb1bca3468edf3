/// Bounded window of page links around the current page.
///
/// The window holds at most five contiguous page numbers. The gap flags tell
/// the renderer whether an ellipsis is owed between the window and the
/// separately rendered first/last page link; whether those edge links are
/// shown at all is derived from the window itself (it simply does not
/// contain 1 or `total_pages`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Vec<u32>,
    pub has_leading_gap: bool,
    pub has_trailing_gap: bool,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// True when the first page must be rendered outside the window.
    pub fn needs_first_link(&self) -> bool {
        self.pages.first().is_some_and(|&p| p > 1)
    }

    /// True when the last page must be rendered outside the window.
    pub fn needs_last_link(&self, total_pages: u32) -> bool {
        self.pages.last().is_some_and(|&p| p < total_pages)
    }
}

/// Compute the page window for `current_page` out of `total_pages`.
///
/// Pure and history-free: identical inputs always produce the identical
/// window. `total_pages == 0` yields an empty window.
pub fn page_window(current_page: u32, total_pages: u32) -> PageWindow {
    if total_pages == 0 {
        return PageWindow {
            pages: Vec::new(),
            has_leading_gap: false,
            has_trailing_gap: false,
        };
    }

    let current = current_page.clamp(1, total_pages);
    let mut start = current.saturating_sub(2).max(1);
    let mut end = (current + 2).min(total_pages);

    // Widen toward whichever bound has room so the window stays at five
    // links whenever five pages exist.
    if end - start < 4 {
        if start == 1 {
            end = total_pages.min(5);
        } else if end == total_pages {
            start = total_pages.saturating_sub(4).max(1);
        }
    }

    PageWindow {
        pages: (start..=end).collect(),
        has_leading_gap: start > 2,
        has_trailing_gap: end + 1 < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_examples() {
        assert_eq!(page_window(1, 12).pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(12, 12).pages, vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(6, 12).pages, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn empty_when_no_pages() {
        let window = page_window(1, 0);
        assert!(window.is_empty());
        assert!(!window.has_leading_gap);
        assert!(!window.has_trailing_gap);
    }

    #[test]
    fn window_is_contiguous_and_bounded() {
        for total in 0..=100u32 {
            for current in 1..=total.max(1) {
                let window = page_window(current, total);
                assert_eq!(
                    window.pages.len() as u32,
                    total.min(5),
                    "length for current={current}, total={total}"
                );
                for pair in window.pages.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1, "gap at current={current}, total={total}");
                }
                if total > 0 {
                    assert!(
                        window.pages.contains(&current),
                        "current {current} missing for total={total}"
                    );
                }
            }
        }
    }

    #[test]
    fn gap_flags_track_ellipsis_positions() {
        // 12 pages, current in the middle: both edges owe a link, both gaps open.
        let window = page_window(6, 12);
        assert!(window.needs_first_link());
        assert!(window.needs_last_link(12));
        assert!(window.has_leading_gap);
        assert!(window.has_trailing_gap);

        // Window touching page 2: first link shown but no ellipsis needed.
        let window = page_window(4, 12);
        assert_eq!(window.pages, vec![2, 3, 4, 5, 6]);
        assert!(window.needs_first_link());
        assert!(!window.has_leading_gap);

        // Window starting at 1: no edge link, no gap.
        let window = page_window(2, 12);
        assert!(!window.needs_first_link());
        assert!(!window.has_leading_gap);

        // Window ending at the last page.
        let window = page_window(11, 12);
        assert_eq!(window.pages, vec![8, 9, 10, 11, 12]);
        assert!(!window.needs_last_link(12));
        assert!(!window.has_trailing_gap);
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(page_window(99, 3).pages, vec![1, 2, 3]);
        assert_eq!(page_window(0, 3).pages, vec![1, 2, 3]);
    }
}
