//! Pagination arithmetic over a fixed page size.

use serde::Serialize;

/// Results per page, fixed by the search endpoint.
pub const PAGE_SIZE: u32 = 10;

/// Derived pagination for one page of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Current page after clamping
    pub page: u32,
    /// `ceil(total / PAGE_SIZE)`, zero when the total is unknown
    pub total_pages: u32,
    /// Total reported by the endpoint
    pub total_count: Option<u32>,
    /// One-based inclusive entry range shown on this page
    pub range: Option<(u32, u32)>,
}

impl PageWindow {
    /// Whether there is a page after the current one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether there is a page before the current one.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Number of pages needed for `total_count` results.
pub fn total_pages(total_count: Option<u32>) -> u32 {
    total_count.map_or(0, |total| total.div_ceil(PAGE_SIZE))
}

/// Computes the window for `page` given the reported total.
///
/// The page is clamped to `[1, max(total_pages, 1)]`. The range is only
/// present when it satisfies `1 <= start <= end <= total`.
pub fn window(page: u32, total_count: Option<u32>) -> PageWindow {
    let total_pages = total_pages(total_count);
    let page = page.clamp(1, total_pages.max(1));

    let range = total_count.filter(|&total| total > 0).and_then(|total| {
        let start = (page - 1).saturating_mul(PAGE_SIZE).saturating_add(1);
        let end = start.saturating_add(PAGE_SIZE - 1).min(total);
        (start <= end).then_some((start, end))
    });

    PageWindow {
        page,
        total_pages,
        total_count,
        range,
    }
}

/// Page reached by the next-page action; never above `total_pages`.
///
/// Stays put when the total is unknown.
pub fn next_page(page: u32, total_count: Option<u32>) -> u32 {
    let last = total_pages(total_count).max(1);
    page.saturating_add(1).min(last).max(1)
}

/// Page reached by the prev-page action; never below 1.
pub fn prev_page(page: u32) -> u32 {
    page.saturating_sub(1).max(1)
}

/// Parses the endpoint's `totalResults`, which may be a string or a number.
///
/// Anything that is not a non-negative integer becomes `None` (unknown).
pub fn parse_total(raw: &serde_json::Value) -> Option<u32> {
    match raw {
        serde_json::Value::String(text) => text.trim().replace(',', "").parse().ok(),
        serde_json::Value::Number(number) => {
            number.as_u64().and_then(|n| u32::try_from(n).ok())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_batman_first_page() {
        let window = window(1, Some(57));
        assert_eq!(window.total_pages, 6);
        assert_eq!(window.range, Some((1, 10)));
        assert!(window.has_next());
        assert!(!window.has_prev());
    }

    #[test]
    fn test_last_partial_page() {
        let window = window(6, Some(57));
        assert_eq!(window.range, Some((51, 57)));
        assert!(!window.has_next());
    }

    #[test]
    fn test_unknown_total_hides_range() {
        let window = window(3, None);
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.page, 1);
        assert_eq!(window.range, None);
    }

    #[test]
    fn test_zero_total_hides_range() {
        assert_eq!(window(1, Some(0)).range, None);
    }

    #[test]
    fn test_page_beyond_total_is_clamped() {
        let window = window(9, Some(25));
        assert_eq!(window.page, 3);
        assert_eq!(window.range, Some((21, 25)));
    }

    #[test]
    fn test_navigation_limits() {
        assert_eq!(next_page(6, Some(57)), 6);
        assert_eq!(next_page(2, Some(57)), 3);
        assert_eq!(next_page(1, None), 1);
        assert_eq!(prev_page(1), 1);
        assert_eq!(prev_page(0), 1);
        assert_eq!(prev_page(4), 3);
    }

    #[test]
    fn test_parse_total_variants() {
        assert_eq!(parse_total(&json!("57")), Some(57));
        assert_eq!(parse_total(&json!(" 1,204 ")), Some(1204));
        assert_eq!(parse_total(&json!(12)), Some(12));
        assert_eq!(parse_total(&json!("N/A")), None);
        assert_eq!(parse_total(&json!(-3)), None);
        assert_eq!(parse_total(&json!(null)), None);
    }

    proptest! {
        #[test]
        fn test_range_stays_within_total(page in 0u32..2_000, total in 1u32..20_000) {
            let window = window(page, Some(total));
            prop_assert!(window.page >= 1 && window.page <= window.total_pages);
            let (start, end) = window.range.expect("non-zero total has a range");
            prop_assert!(start <= end);
            prop_assert!(end <= total);
            prop_assert!(end - start < PAGE_SIZE);
        }

        #[test]
        fn test_navigation_stays_in_bounds(page in 1u32..2_000, total in proptest::option::of(0u32..20_000)) {
            let last = total_pages(total).max(1);
            prop_assert!(next_page(page.min(last), total) <= last);
            prop_assert!(prev_page(page) >= 1);
        }
    }
}
