//! Locale-aware date inspection.

use std::cmp::Ordering;

use temporal_rs::options::DifferenceSettings;
use temporal_rs::{Calendar, PlainDate};

use crate::error::Result;
use crate::value::AdjustableDate;
use crate::week_info::{resolve_week_info, LocaleRef, WeekInfo};

/// The start of the first week of `year`, under the given week rules.
///
/// The week containing January 1 counts as week 1 only when at least
/// `minimal_days` of it fall inside the year; otherwise week 1 starts on
/// the following week-start day.
fn first_week_start(year: i32, week_info: &WeekInfo) -> Result<PlainDate> {
    let jan_first = PlainDate::try_new_iso(year, 1, 1)?;
    let offset = (7 + i32::from(jan_first.day_of_week()) - week_info.first_day as i32) % 7;

    if 7 - offset >= i32::from(week_info.minimal_days) {
        return AdjustableDate::add_days(&jan_first, -i64::from(offset));
    }

    AdjustableDate::add_days(&jan_first, i64::from(7 - offset))
}

fn whole_weeks_between(start: &PlainDate, end: &PlainDate) -> Result<u8> {
    let span = start.until(end, DifferenceSettings::default())?;
    Ok((span.days() / 7) as u8)
}

/// Calculates the locale-aware week number of a date.
///
/// Any date-bearing kind is accepted; the value is first projected onto its
/// ISO calendar date, so time-of-day, time zone, and calendar annotation
/// never influence the result.
///
/// # Examples
///
/// ```
/// use temporal_rs::PlainDate;
/// use tempus_extra::locale_aware_week_number;
///
/// let date = PlainDate::try_new_iso(2025, 1, 1).unwrap();
/// assert_eq!(locale_aware_week_number(&date, "en-US").unwrap(), 1);
/// ```
pub fn locale_aware_week_number<'a, T: AdjustableDate>(
    date: &T,
    locale: impl Into<LocaleRef<'a>>,
) -> Result<u8> {
    let week_info = resolve_week_info(locale)?;
    let date = date.to_plain_date().with_calendar(Calendar::ISO);

    let this_year_start = first_week_start(date.year(), &week_info)?;

    if date.compare_iso(&this_year_start) == Ordering::Less {
        // The date still belongs to the previous year's week sequence, so
        // its week number is that year's final one.
        let previous_year_start = first_week_start(date.year() - 1, &week_info)?;
        return whole_weeks_between(&previous_year_start, &this_year_start);
    }

    let next_year_start = first_week_start(date.year() + 1, &week_info)?;

    if date.compare_iso(&next_year_start) != Ordering::Less {
        return Ok(1);
    }

    Ok(whole_weeks_between(&this_year_start, &date)? + 1)
}

// ── Tests ───────────────────────────────────────────────────────────────────
