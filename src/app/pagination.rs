use std::ops::RangeInclusive;

use crate::app::catalog::PageMetadata;

/// How many page numbers the pagination bar shows at once.
pub const PAGE_WINDOW: u32 = 5;

/// Page numbers around `current`, at most `PAGE_WINDOW` wide, shifted so the
/// window stays inside `1..=total`.
pub fn page_window(current: u32, total: u32) -> RangeInclusive<u32> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(PAGE_WINDOW / 2).max(1);
    let end = (start + PAGE_WINDOW - 1).min(total);
    if end - start < PAGE_WINDOW - 1 {
        start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
    }

    start..=end
}

pub fn can_go_prev(current: u32) -> bool {
    current > 1
}

pub fn can_go_next(current: u32, total: u32) -> bool {
    current < total
}

/// Page count for a listing response. Without metadata we only know the page
/// we asked for exists.
pub fn total_pages(metadata: Option<&PageMetadata>, requested: u32) -> u32 {
    metadata
        .and_then(|m| m.page_count)
        .unwrap_or(requested)
        .max(1)
}

/// 1-based positions of the first and last movie shown on `page`. `None`
/// when nothing is shown or the positions do not fit in a `u32`.
pub fn showing_range(page: u32, per_page: u32, shown: usize) -> Option<(u32, u32)> {
    if shown == 0 || per_page == 0 {
        return None;
    }
    let shown = u32::try_from(shown).ok()?;
    let first = (page.max(1) - 1).checked_mul(per_page)?.checked_add(1)?;
    let last = first.checked_add(shown - 1)?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(current: u32, total: u32) -> Vec<u32> {
        page_window(current, total).collect()
    }

    #[test]
    fn window_is_centred_in_the_middle() {
        assert_eq!(window(10, 25), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_sticks_to_the_edges() {
        assert_eq!(window(1, 25), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(2, 25), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(25, 25), vec![21, 22, 23, 24, 25]);
        assert_eq!(window(24, 25), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn window_shrinks_with_few_pages() {
        assert_eq!(window(1, 1), vec![1]);
        assert_eq!(window(2, 3), vec![1, 2, 3]);
        assert_eq!(window(1, 0), vec![1]);
    }

    #[test]
    fn bounds() {
        assert!(!can_go_prev(1));
        assert!(can_go_prev(2));
        assert!(can_go_next(1, 2));
        assert!(!can_go_next(2, 2));
    }

    #[test]
    fn range_of_a_page() {
        assert_eq!(showing_range(2, 10, 10), Some((11, 20)));
        assert_eq!(showing_range(25, 10, 4), Some((241, 244)));
        assert_eq!(showing_range(1, 10, 0), None);
    }

    #[test]
    fn range_of_a_huge_page_does_not_overflow() {
        assert_eq!(showing_range(500_000_000, 10, 10), None);
        assert_eq!(showing_range(u32::MAX, 1, 1), Some((u32::MAX, u32::MAX)));
        assert_eq!(showing_range(u32::MAX, 1, 2), None);
    }

    #[test]
    fn total_pages_prefers_metadata() {
        let meta = PageMetadata {
            current_page: Some(1),
            per_page: Some(10),
            page_count: Some(25),
            total_count: Some(250),
        };
        assert_eq!(total_pages(Some(&meta), 1), 25);
        assert_eq!(total_pages(None, 3), 3);
        assert_eq!(total_pages(None, 0), 1);

        let unknown = PageMetadata {
            page_count: None,
            ..meta
        };
        assert_eq!(total_pages(Some(&unknown), 4), 4);
    }
}
