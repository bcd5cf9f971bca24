//! Pagination window for collection listings.

/// Largest number of entities returned by one listing call.
pub const MAX_PAGE_SIZE: i64 = 10;

/// An offset/limit window with the clamping policy already applied.
///
/// Out-of-range values are never rejected:
///
/// - `count` outside `1..=10` becomes `10`
/// - negative `start` becomes `0`
/// - `start` has no upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    start: i64,
    count: i64,
}

impl Page {
    /// Builds a window from raw values, clamping both into range.
    pub fn clamped(start: i64, count: i64) -> Self {
        let count = if !(1..=MAX_PAGE_SIZE).contains(&count) {
            MAX_PAGE_SIZE
        } else {
            count
        };
        let start = start.max(0);

        Self { start, count }
    }

    /// Offset of the first entity in the window.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Maximum number of entities in the window.
    pub fn count(&self) -> i64 {
        self.count
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::clamped(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_are_kept() {
        let page = Page::clamped(20, 5);
        assert_eq!(page.start(), 20);
        assert_eq!(page.count(), 5);
    }

    #[test]
    fn test_count_bounds_are_inclusive() {
        assert_eq!(Page::clamped(0, 1).count(), 1);
        assert_eq!(Page::clamped(0, 10).count(), 10);
    }

    #[test]
    fn test_count_out_of_range_becomes_max() {
        for count in [i64::MIN, -1, 0, 11, 50, i64::MAX] {
            assert_eq!(Page::clamped(0, count).count(), MAX_PAGE_SIZE, "count={count}");
        }
    }

    #[test]
    fn test_negative_start_becomes_zero() {
        for start in [i64::MIN, -5, -1] {
            assert_eq!(Page::clamped(start, 3).start(), 0, "start={start}");
        }
    }

    #[test]
    fn test_start_has_no_upper_bound() {
        assert_eq!(Page::clamped(1_000_000, 3).start(), 1_000_000);
    }

    #[test]
    fn test_default_is_first_full_page() {
        let page = Page::default();
        assert_eq!(page.start(), 0);
        assert_eq!(page.count(), 10);
    }

    #[test]
    fn test_count_50_start_minus_5() {
        assert_eq!(Page::clamped(-5, 50), Page::clamped(0, 10));
    }
}
