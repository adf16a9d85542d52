//! Window start resolution.
//!
//! `today` is always injected by the caller in the application's single
//! authoritative timezone; nothing here reads the system clock.

use chrono::{Duration, NaiveDate};

/// Shift a window start forward by whole weeks from `today`.
///
/// Negative offsets are clamped to zero, never shifting backward. Offsets
/// past the calendar's representable range saturate at the maximum date
/// instead of panicking, since `week_offset` arrives from request input.
pub fn resolve_start(today: NaiveDate, week_offset: i64) -> NaiveDate {
    let offset = week_offset.max(0);
    Duration::try_weeks(offset)
        .and_then(|shift| today.checked_add_signed(shift))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_offset_is_today() {
        let today = date(2026, 1, 6);
        assert_eq!(resolve_start(today, 0), today);
    }

    #[test]
    fn test_positive_offset_shifts_whole_weeks() {
        let today = date(2026, 1, 6);
        assert_eq!(resolve_start(today, 1), date(2026, 1, 13));
        assert_eq!(resolve_start(today, 4), date(2026, 2, 3));
    }

    #[test]
    fn test_negative_offset_clamps_to_today() {
        let today = date(2026, 1, 6);
        assert_eq!(resolve_start(today, -3), resolve_start(today, 0));
        assert_eq!(resolve_start(today, -3), today);
    }

    #[test]
    fn test_huge_offset_saturates_at_max_date() {
        let today = date(2026, 1, 6);
        // Past the representable calendar in two different ways: a duration
        // that cannot be built at all, and one that overflows the date.
        assert_eq!(resolve_start(today, i64::MAX), NaiveDate::MAX);
        assert_eq!(resolve_start(today, 100_000_000_000), NaiveDate::MAX);
    }
}
