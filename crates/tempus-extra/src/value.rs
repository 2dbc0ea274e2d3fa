//! Bridging traits over the `temporal_rs` value kinds.
//!
//! Every helper in this crate is generic over the concrete temporal kind it
//! receives and hands back a value of that same kind, in the same calendar.
//! These traits expose the handful of operations the helpers need:
//! [`AdjustableDate`] for the date-bearing kinds (`PlainDate`,
//! `PlainDateTime`, `ZonedDateTime`) and [`AdjustableDateTime`] for the two
//! kinds that additionally carry a wall-clock time.

use icu_calendar::types::Weekday;
use temporal_rs::fields::{CalendarFields, DateTimeFields, ZonedDateTimeFields};
use temporal_rs::partial::PartialTime;
use temporal_rs::{Duration, PlainDate, PlainDateTime, PlainTime, ZonedDateTime};

use crate::error::Result;

/// Converts a Temporal day-of-week number (1 = Monday .. 7 = Sunday) into
/// the [`Weekday`] enum, whose discriminants use the same numbering.
pub(crate) fn weekday_from_number(day: i32) -> Weekday {
    Weekday::from_days_since_sunday(day.rem_euclid(7) as isize)
}

fn day_span(days: i64) -> Result<Duration> {
    Duration::new(0, 0, 0, days, 0, 0, 0, 0, 0, 0).map_err(Into::into)
}

/// A date-bearing temporal value that adjusters can operate on.
///
/// Implementations must preserve the concrete kind and the calendar system
/// of `self` in every returned value.
pub trait AdjustableDate: Clone + Sized {
    /// The day of week of this value.
    fn weekday(&self) -> Weekday;

    /// The calendar-relative year.
    fn year(&self) -> i32;

    /// The calendar-relative month (ordinal, 1-based).
    fn month(&self) -> u8;

    /// The calendar-relative day of month.
    fn day(&self) -> u8;

    /// Number of days in this value's current month.
    fn days_in_month(&self) -> u16;

    /// Number of months in this value's current year.
    fn months_in_year(&self) -> u16;

    /// Returns a new value shifted by the given (possibly negative) number
    /// of days.
    fn add_days(&self, days: i64) -> Result<Self>;

    /// Returns a new value with the given calendar fields replaced,
    /// constraining out-of-range fields.
    fn with_fields(&self, fields: CalendarFields) -> Result<Self>;

    /// Projects this value onto its calendar date, dropping any time-of-day
    /// and time-zone components.
    fn to_plain_date(&self) -> PlainDate;
}

impl AdjustableDate for PlainDate {
    fn weekday(&self) -> Weekday {
        weekday_from_number(i32::from(self.day_of_week()))
    }

    fn year(&self) -> i32 {
        Self::year(self)
    }

    fn month(&self) -> u8 {
        Self::month(self)
    }

    fn day(&self) -> u8 {
        Self::day(self)
    }

    fn days_in_month(&self) -> u16 {
        Self::days_in_month(self)
    }

    fn months_in_year(&self) -> u16 {
        Self::months_in_year(self)
    }

    fn add_days(&self, days: i64) -> Result<Self> {
        self.add(&day_span(days)?, None).map_err(Into::into)
    }

    fn with_fields(&self, fields: CalendarFields) -> Result<Self> {
        self.with(fields, None).map_err(Into::into)
    }

    fn to_plain_date(&self) -> PlainDate {
        self.clone()
    }
}

impl AdjustableDate for PlainDateTime {
    fn weekday(&self) -> Weekday {
        weekday_from_number(i32::from(self.day_of_week()))
    }

    fn year(&self) -> i32 {
        Self::year(self)
    }

    fn month(&self) -> u8 {
        Self::month(self)
    }

    fn day(&self) -> u8 {
        Self::day(self)
    }

    fn days_in_month(&self) -> u16 {
        Self::days_in_month(self)
    }

    fn months_in_year(&self) -> u16 {
        Self::months_in_year(self)
    }

    fn add_days(&self, days: i64) -> Result<Self> {
        self.add(&day_span(days)?, None).map_err(Into::into)
    }

    fn with_fields(&self, fields: CalendarFields) -> Result<Self> {
        let fields = DateTimeFields {
            calendar_fields: fields,
            time: PartialTime::new(),
        };
        self.with(fields, None).map_err(Into::into)
    }

    fn to_plain_date(&self) -> PlainDate {
        Self::to_plain_date(self)
    }
}

impl AdjustableDate for ZonedDateTime {
    fn weekday(&self) -> Weekday {
        weekday_from_number(i32::from(self.day_of_week()))
    }

    fn year(&self) -> i32 {
        Self::year(self)
    }

    fn month(&self) -> u8 {
        Self::month(self)
    }

    fn day(&self) -> u8 {
        Self::day(self)
    }

    fn days_in_month(&self) -> u16 {
        Self::days_in_month(self)
    }

    fn months_in_year(&self) -> u16 {
        Self::months_in_year(self)
    }

    fn add_days(&self, days: i64) -> Result<Self> {
        self.add(&day_span(days)?, None).map_err(Into::into)
    }

    fn with_fields(&self, fields: CalendarFields) -> Result<Self> {
        let fields = ZonedDateTimeFields {
            calendar_fields: fields,
            time: PartialTime::new(),
            offset: None,
        };
        self.with(fields, None, None, None).map_err(Into::into)
    }

    fn to_plain_date(&self) -> PlainDate {
        Self::to_plain_date(self)
    }
}

/// A temporal value that carries both a calendar date and a wall-clock time.
pub trait AdjustableDateTime: AdjustableDate {
    /// Returns a new value with the wall-clock time replaced, keeping the
    /// calendar date.
    fn with_wall_clock(&self, time: PlainTime) -> Result<Self>;
}

impl AdjustableDateTime for PlainDateTime {
    fn with_wall_clock(&self, time: PlainTime) -> Result<Self> {
        self.with_time(Some(time)).map_err(Into::into)
    }
}

impl AdjustableDateTime for ZonedDateTime {
    fn with_wall_clock(&self, time: PlainTime) -> Result<Self> {
        self.with_plain_time(Some(time)).map_err(Into::into)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_from_number_covers_all_days() {
        assert_eq!(weekday_from_number(1), Weekday::Monday);
        assert_eq!(weekday_from_number(4), Weekday::Thursday);
        assert_eq!(weekday_from_number(6), Weekday::Saturday);
        assert_eq!(weekday_from_number(7), Weekday::Sunday);
    }

    #[test]
    fn test_add_days_preserves_kind_and_calendar() {
        let date = PlainDate::from_utf8(b"2024-06-18").unwrap();
        let shifted = AdjustableDate::add_days(&date, 3).unwrap();
        assert_eq!(shifted.day(), 21);
        assert_eq!(shifted.calendar(), date.calendar());

        let backwards = AdjustableDate::add_days(&date, -18).unwrap();
        assert_eq!(backwards.month(), 5);
        assert_eq!(backwards.day(), 31);
    }

    #[test]
    fn test_to_plain_date_drops_time() {
        let date_time = PlainDateTime::from_utf8(b"2024-06-18T15:12:44").unwrap();
        let date = AdjustableDate::to_plain_date(&date_time);
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 18);
    }
}
