//! Page arithmetic.

use std::ops::Range;

/// One clamped page of a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Effective 1-based page, always within `1..=total_pages`.
    pub page: usize,
    /// Effective page size (at least 1).
    pub page_size: usize,
    /// Page count; 1 for an empty result so "page 1 of 1" stays well-defined.
    pub total_pages: usize,
    /// Half-open range of result positions on this page.
    pub range: Range<usize>,
}

/// `max(1, ceil(total / page_size))`, treating a zero page size as 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Clamp `page` into range and compute its slice of a `total`-item result.
pub fn paginate(total: usize, page: usize, page_size: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let total_pages = total_pages(total, page_size);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    PageWindow {
        page,
        page_size,
        total_pages,
        range: start..end,
    }
}

#[cfg(test)]
mod tests {
    use super::{paginate, total_pages};

    #[test]
    fn total_pages_rounds_up_and_never_drops_below_one() {
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(101, 10), 11);
        assert_eq!(total_pages(100, 25), 4);
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn first_and_last_pages() {
        assert_eq!(paginate(23, 1, 10).range, 0..10);
        let last = paginate(23, 3, 10);
        assert_eq!(last.range, 20..23);
        assert_eq!(last.total_pages, 3);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let high = paginate(100, 5, 25);
        assert_eq!(high.page, 4);
        assert_eq!(high.range, 75..100);

        let low = paginate(100, 0, 25);
        assert_eq!(low.page, 1);
        assert_eq!(low.range, 0..25);
    }

    #[test]
    fn empty_result_is_page_one_of_one() {
        let w = paginate(0, 7, 10);
        assert_eq!(w.page, 1);
        assert_eq!(w.total_pages, 1);
        assert!(w.range.is_empty());
    }

    #[test]
    fn page_length_matches_remaining_items() {
        for total in [0usize, 1, 9, 10, 11, 57] {
            for size in [5usize, 10, 25] {
                for page in 1..=total_pages(total, size) {
                    let w = paginate(total, page, size);
                    assert_eq!(w.range.len(), size.min(total - (page - 1) * size));
                }
            }
        }
    }

    #[test]
    fn zero_page_size_pages_one_item_at_a_time() {
        let w = paginate(2, 5, 0);
        assert_eq!(w.page_size, 1);
        assert_eq!(w.total_pages, 2);
        assert_eq!(w.page, 2);
        assert_eq!(w.range, 1..2);
    }
}
