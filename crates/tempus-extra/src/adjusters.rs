//! Pure date adjusters.
//!
//! Each function takes one temporal value (plus a locale or a target day of
//! week where relevant) and computes a semantically meaningful neighboring
//! value: the next business day, the first day of the week, the last day of
//! the month, and so on. The returned value always has the same concrete
//! kind and calendar system as the input; inputs are never mutated.
//!
//! Locale-dependent adjusters resolve week rules through
//! [`resolve_week_info`], so they accept anything a resolver call accepts:
//! a BCP-47 tag or an already constructed [`icu_locale::Locale`].
//!
//! # Functions
//!
//! - [`previous_business_day`] / [`next_business_day`] — skip locale weekends
//! - [`previous_day_of_week`] / [`next_day_of_week`] — strictly closest match
//! - [`previous_or_same_day_of_week`] / [`next_or_same_day_of_week`]
//! - [`first_day_of_week`] / [`last_day_of_week`] — locale week boundaries
//! - [`first_day_of_month`] / [`last_day_of_month`]
//! - [`first_day_of_year`] / [`last_day_of_year`]
//! - [`first_day_of_next_month`] / [`first_day_of_next_year`]
//! - [`start_of_day`] / [`end_of_day`] — wall-clock boundaries

use icu_calendar::types::Weekday;
use temporal_rs::fields::CalendarFields;
use temporal_rs::PlainTime;

use crate::error::Result;
use crate::value::{weekday_from_number, AdjustableDate, AdjustableDateTime};
use crate::week_info::{resolve_week_info, LocaleRef};

/// Returns the closest business day strictly before `date` under the
/// locale's weekend definition.
pub fn previous_business_day<'a, T: AdjustableDate>(
    date: &T,
    locale: impl Into<LocaleRef<'a>>,
) -> Result<T> {
    let weekend = resolve_week_info(locale)?.weekend;
    let day = date.weekday() as i32;
    let mut diff = 1;

    while weekend.contains(&weekday_from_number((day - diff - 1).rem_euclid(7) + 1)) {
        diff += 1;
    }

    date.add_days(-i64::from(diff))
}

/// Returns the closest business day strictly after `date` under the
/// locale's weekend definition.
pub fn next_business_day<'a, T: AdjustableDate>(
    date: &T,
    locale: impl Into<LocaleRef<'a>>,
) -> Result<T> {
    let weekend = resolve_week_info(locale)?.weekend;
    let day = date.weekday() as i32;
    let mut diff = 1;

    while weekend.contains(&weekday_from_number((day + diff - 1).rem_euclid(7) + 1)) {
        diff += 1;
    }

    date.add_days(i64::from(diff))
}

/// Returns the closest day strictly before `date` that falls on
/// `day_of_week`. The input is never returned, even when it already matches.
pub fn previous_day_of_week<T: AdjustableDate>(date: &T, day_of_week: Weekday) -> Result<T> {
    let diff = day_of_week as i64 - date.weekday() as i64;
    date.add_days(-(if diff >= 0 { 7 - diff } else { -diff }))
}

/// Returns `date` itself when it falls on `day_of_week`, otherwise the
/// closest prior day that does.
pub fn previous_or_same_day_of_week<T: AdjustableDate>(
    date: &T,
    day_of_week: Weekday,
) -> Result<T> {
    if date.weekday() == day_of_week {
        return Ok(date.clone());
    }

    let diff = day_of_week as i64 - date.weekday() as i64;
    date.add_days(-(if diff >= 0 { 7 - diff } else { -diff }))
}

/// Returns the closest day strictly after `date` that falls on
/// `day_of_week`. The input is never returned, even when it already matches.
pub fn next_day_of_week<T: AdjustableDate>(date: &T, day_of_week: Weekday) -> Result<T> {
    let diff = date.weekday() as i64 - day_of_week as i64;
    date.add_days(if diff >= 0 { 7 - diff } else { -diff })
}

/// Returns `date` itself when it falls on `day_of_week`, otherwise the
/// closest following day that does.
pub fn next_or_same_day_of_week<T: AdjustableDate>(date: &T, day_of_week: Weekday) -> Result<T> {
    if date.weekday() == day_of_week {
        return Ok(date.clone());
    }

    let diff = date.weekday() as i64 - day_of_week as i64;
    date.add_days(if diff >= 0 { 7 - diff } else { -diff })
}

/// Returns the first day of the week containing `date`, as defined by the
/// locale's first-day rule.
pub fn first_day_of_week<'a, T: AdjustableDate>(
    date: &T,
    locale: impl Into<LocaleRef<'a>>,
) -> Result<T> {
    let first_day = resolve_week_info(locale)?.first_day;
    let diff = date.weekday() as i64 - first_day as i64;
    date.add_days(-(if diff >= 0 { diff } else { 7 + diff }))
}

/// Returns the last day of the week containing `date`, as defined by the
/// locale's first-day rule.
pub fn last_day_of_week<'a, T: AdjustableDate>(
    date: &T,
    locale: impl Into<LocaleRef<'a>>,
) -> Result<T> {
    let first_day = resolve_week_info(locale)?.first_day;

    // The week's last day sits six positions after its first.
    let last_day = (first_day as i64 + 5) % 7 + 1;
    let diff = last_day - date.weekday() as i64;
    date.add_days(if diff >= 0 { diff } else { 7 + diff })
}

/// Returns the first day of the month containing `date`.
pub fn first_day_of_month<T: AdjustableDate>(date: &T) -> Result<T> {
    date.with_fields(CalendarFields::new().with_day(1))
}

/// Returns the last day of the month containing `date`.
pub fn last_day_of_month<T: AdjustableDate>(date: &T) -> Result<T> {
    date.with_fields(CalendarFields::new().with_day(date.days_in_month() as u8))
}

/// Returns the first day of the year containing `date`.
pub fn first_day_of_year<T: AdjustableDate>(date: &T) -> Result<T> {
    date.with_fields(CalendarFields::new().with_month(1).with_day(1))
}

/// Returns the last day of the year containing `date`.
///
/// Computed in two steps so calendars with a variable month count (e.g. the
/// Hebrew calendar's leap years) resolve to their actual final month and its
/// actual final day, not a hardcoded month 12 / day 31.
pub fn last_day_of_year<T: AdjustableDate>(date: &T) -> Result<T> {
    let last_month =
        date.with_fields(CalendarFields::new().with_month(date.months_in_year() as u8))?;
    last_month.with_fields(CalendarFields::new().with_day(last_month.days_in_month() as u8))
}

/// Returns the first day of the month after the one containing `date`,
/// rolling into the next year past the calendar's final month.
pub fn first_day_of_next_month<T: AdjustableDate>(date: &T) -> Result<T> {
    if u16::from(date.month()) == date.months_in_year() {
        date.with_fields(
            CalendarFields::new()
                .with_year(date.year() + 1)
                .with_month(1)
                .with_day(1),
        )
    } else {
        date.with_fields(CalendarFields::new().with_month(date.month() + 1).with_day(1))
    }
}

/// Returns the first day of the year after the one containing `date`.
pub fn first_day_of_next_year<T: AdjustableDate>(date: &T) -> Result<T> {
    date.with_fields(
        CalendarFields::new()
            .with_year(date.year() + 1)
            .with_month(1)
            .with_day(1),
    )
}

/// Returns `date` with every wall-clock field at its minimum (00:00:00.0).
pub fn start_of_day<T: AdjustableDateTime>(date: &T) -> Result<T> {
    let midnight = PlainTime::try_new(0, 0, 0, 0, 0, 0)?;
    date.with_wall_clock(midnight)
}

/// Returns `date` with every wall-clock field at its maximum
/// (23:59:59.999999999), down to the last representable nanosecond.
pub fn end_of_day<T: AdjustableDateTime>(date: &T) -> Result<T> {
    let last_instant = PlainTime::try_new(23, 59, 59, 999, 999, 999)?;
    date.with_wall_clock(last_instant)
}

// ── Tests ───────────────────────────────────────────────────────────────────
