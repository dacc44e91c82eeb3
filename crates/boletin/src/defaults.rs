//! Default windows and counts, and the coercion applied to caller input.
//!
//! Every window or count accepted from a caller is a signed integer so that
//! out-of-range input can be detected: anything `<= 0` is replaced by the
//! default for that parameter instead of being rejected.

/// News recency window in days.
pub const DAYS_BEHIND: u32 = 1;

/// Earnings look-ahead window in days.
pub const DAYS_AHEAD: u32 = 30;

/// Price-performance window in days.
pub const PERFORMANCE_WINDOW: u32 = 180;

/// Number of upcoming earnings returned.
pub const EARNINGS_COUNT: usize = 5;

/// Number of winners and of losers returned.
pub const PERFORMANCE_COUNT: usize = 3;

/// Number of news items the oracle is asked to keep.
pub const TOP_K: usize = 10;

/// Coerces a window in days, falling back to `default` when `value <= 0`.
#[must_use]
pub fn window(value: i64, default: u32) -> u32 {
    if value <= 0 {
        return default;
    }
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Coerces a count, falling back to `default` when `value <= 0`.
#[must_use]
pub fn count(value: i64, default: usize) -> usize {
    if value <= 0 {
        return default;
    }
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_coercion() {
        assert_eq!(window(-5, DAYS_AHEAD), 30);
        assert_eq!(window(0, DAYS_BEHIND), 1);
        assert_eq!(window(7, DAYS_BEHIND), 7);
        assert_eq!(window(i64::MAX, 1), u32::MAX);
    }

    #[test]
    fn test_count_coercion() {
        assert_eq!(count(-1, PERFORMANCE_COUNT), 3);
        assert_eq!(count(0, TOP_K), 10);
        assert_eq!(count(2, TOP_K), 2);
    }
}
