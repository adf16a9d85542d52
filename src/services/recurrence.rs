//! Per-date recurrence matching.
//!
//! [`matches`] is the single predicate that decides whether one schedule is
//! in effect on one calendar date, ignoring exceptions. Both window builders
//! and every scope go through it, so the `active` flag, the activation
//! window, and the parity/ordinal qualifiers have exactly one owner.

use chrono::{Datelike, NaiveDate};

use crate::models::{weekday_index, MonthOccurrence, RecurringSchedule, WeekParity};

/// Does `schedule` recur on `date`? Exceptions are not consulted here.
///
/// All conditions must hold: the rule is active, the weekday matches, the
/// date lies inside the (inclusive) activation window, and the week-parity
/// and month-ordinal qualifiers accept the date. An inverted activation
/// range (`start > end`) is not an error; it simply never matches.
pub fn matches(schedule: &RecurringSchedule, date: NaiveDate) -> bool {
    if !schedule.active {
        return false;
    }

    if weekday_index(date) != schedule.weekday {
        return false;
    }

    if let Some(start) = schedule.activation_start {
        if date < start {
            return false;
        }
    }
    if let Some(end) = schedule.activation_end {
        if date > end {
            return false;
        }
    }

    if !parity_accepts(schedule.week_parity, date) {
        return false;
    }

    month_occurrence_accepts(schedule.month_occurrence, date)
}

fn parity_accepts(parity: WeekParity, date: NaiveDate) -> bool {
    match parity {
        WeekParity::All => true,
        WeekParity::Odd => date.iso_week().week() % 2 == 1,
        WeekParity::Even => date.iso_week().week() % 2 == 0,
    }
}

fn month_occurrence_accepts(occurrence: MonthOccurrence, date: NaiveDate) -> bool {
    match occurrence {
        MonthOccurrence::All => true,
        MonthOccurrence::First => weekday_occurrence_in_month(date) == 1,
        MonthOccurrence::Second => weekday_occurrence_in_month(date) == 2,
        MonthOccurrence::Third => weekday_occurrence_in_month(date) == 3,
        MonthOccurrence::Fourth => weekday_occurrence_in_month(date) == 4,
        MonthOccurrence::Last => is_last_weekday_occurrence_in_month(date),
    }
}

/// Which instance of its weekday this date is within the month (1..=5),
/// counting from the 1st.
pub fn weekday_occurrence_in_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// True when no later instance of this weekday exists in the same month.
pub fn is_last_weekday_occurrence_in_month(date: NaiveDate) -> bool {
    date.day() + 7 > days_in_month(date)
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // Both lookups are infallible for any valid NaiveDate input.
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}
