//! Calendar-agnostic comparison of temporal values.
//!
//! `temporal_rs` equality (`PartialEq`) distinguishes values by calendar
//! annotation: an ISO date and its Hebrew-calendar conversion are different
//! values even though they name the same day. The comparators here instead
//! order values by the absolute point they denote on the proleptic
//! timeline, so the same day compares equal no matter which calendar
//! annotates it.
//!
//! Both operands must be the same concrete kind — the functions are generic
//! over a single [`TimelinePoint`] type, so comparing, say, a `PlainDate`
//! with a `PlainTime` is rejected at compile time rather than coerced.

use std::cmp::Ordering;

use temporal_rs::{PlainDate, PlainDateTime, PlainTime, ZonedDateTime};

/// A temporal kind that can be ordered by its position on the timeline,
/// ignoring calendar annotations.
pub trait TimelinePoint {
    /// Compares two values of the same kind by absolute position.
    fn timeline_cmp(&self, other: &Self) -> Ordering;
}

impl TimelinePoint for PlainDate {
    fn timeline_cmp(&self, other: &Self) -> Ordering {
        self.compare_iso(other)
    }
}

impl TimelinePoint for PlainDateTime {
    fn timeline_cmp(&self, other: &Self) -> Ordering {
        self.compare_iso(other)
    }
}

impl TimelinePoint for ZonedDateTime {
    fn timeline_cmp(&self, other: &Self) -> Ordering {
        self.compare_instant(other)
    }
}

impl TimelinePoint for PlainTime {
    fn timeline_cmp(&self, other: &Self) -> Ordering {
        let fields = |time: &Self| {
            (
                time.hour(),
                time.minute(),
                time.second(),
                time.millisecond(),
                time.microsecond(),
                time.nanosecond(),
            )
        };
        fields(self).cmp(&fields(other))
    }
}

/// Compares two temporal values of the same kind by their absolute point
/// in time.
pub fn compare<T: TimelinePoint>(temporal: &T, reference: &T) -> Ordering {
    temporal.timeline_cmp(reference)
}

/// Returns true when both values denote the same point in time, even under
/// different calendar systems.
pub fn is_equal<T: TimelinePoint>(temporal: &T, reference: &T) -> bool {
    compare(temporal, reference) == Ordering::Equal
}

/// Returns true when `temporal` is strictly before `reference`.
pub fn is_before<T: TimelinePoint>(temporal: &T, reference: &T) -> bool {
    compare(temporal, reference) == Ordering::Less
}

/// Returns true when `temporal` is before or equal to `reference`.
pub fn is_before_or_equal<T: TimelinePoint>(temporal: &T, reference: &T) -> bool {
    compare(temporal, reference) != Ordering::Greater
}

/// Returns true when `temporal` is strictly after `reference`.
pub fn is_after<T: TimelinePoint>(temporal: &T, reference: &T) -> bool {
    compare(temporal, reference) == Ordering::Greater
}

/// Returns true when `temporal` is after or equal to `reference`.
pub fn is_after_or_equal<T: TimelinePoint>(temporal: &T, reference: &T) -> bool {
    compare(temporal, reference) != Ordering::Less
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use temporal_rs::options::{Disambiguation, OffsetDisambiguation};
    use temporal_rs::Calendar;

    fn plain_date(iso: &str) -> PlainDate {
        PlainDate::from_utf8(iso.as_bytes()).unwrap()
    }

    #[test]
    fn test_is_equal_across_calendar_systems() {
        let iso = plain_date("2024-06-18");
        let hebrew = iso.with_calendar(Calendar::HEBREW);

        // The native equality distinguishes the calendar annotation; the
        // timeline comparison does not.
        assert_ne!(iso, hebrew);
        assert!(is_equal(&iso, &hebrew));
        assert!(is_before_or_equal(&iso, &hebrew));
        assert!(is_after_or_equal(&iso, &hebrew));
    }

    #[test]
    fn test_is_before_plain_date() {
        let earlier = plain_date("2024-06-18");
        let later = plain_date("2024-06-19");
        assert!(is_before(&earlier, &later));
        assert!(!is_before(&later, &earlier));
        assert!(!is_before(&earlier, &earlier));
    }

    #[test]
    fn test_is_before_plain_time() {
        let ten = PlainTime::try_new(10, 0, 0, 0, 0, 0).unwrap();
        let eleven = PlainTime::try_new(11, 0, 0, 0, 0, 0).unwrap();
        assert!(is_before(&ten, &eleven));
        assert!(!is_before(&eleven, &ten));
    }

    #[test]
    fn test_is_before_plain_time_subsecond() {
        let fine = PlainTime::try_new(10, 0, 0, 0, 0, 1).unwrap();
        let finer = PlainTime::try_new(10, 0, 0, 0, 1, 0).unwrap();
        assert!(is_before(&fine, &finer));
    }

    #[test]
    fn test_is_before_plain_date_time() {
        let earlier = PlainDateTime::from_utf8(b"2024-06-18T10:00:00").unwrap();
        let later = PlainDateTime::from_utf8(b"2024-06-18T11:00:00").unwrap();
        assert!(is_before(&earlier, &later));
        assert!(!is_before(&later, &earlier));
    }

    #[test]
    fn test_is_before_zoned_date_time() {
        let parse = |s: &str| {
            ZonedDateTime::from_utf8(
                s.as_bytes(),
                Disambiguation::Compatible,
                OffsetDisambiguation::Reject,
            )
            .unwrap()
        };
        let earlier = parse("2024-06-18T10:00:00Z[UTC]");
        let later = parse("2024-06-18T11:00:00Z[UTC]");
        assert!(is_before(&earlier, &later));
        assert!(!is_before(&later, &earlier));
    }

    #[test]
    fn test_zoned_comparison_ignores_zone_representation() {
        let parse = |s: &str| {
            ZonedDateTime::from_utf8(
                s.as_bytes(),
                Disambiguation::Compatible,
                OffsetDisambiguation::Reject,
            )
            .unwrap()
        };
        // The same instant expressed in two zones compares equal.
        let utc = parse("2024-06-18T12:00:00Z[UTC]");
        let berlin = parse("2024-06-18T14:00:00+02:00[Europe/Berlin]");
        assert!(is_equal(&utc, &berlin));
    }

    #[test]
    fn test_or_equal_variants() {
        let date = plain_date("2024-06-18");
        let later = plain_date("2024-06-19");

        assert!(is_before_or_equal(&date, &date));
        assert!(is_before_or_equal(&date, &later));
        assert!(!is_before_or_equal(&later, &date));

        assert!(is_after_or_equal(&date, &date));
        assert!(is_after_or_equal(&later, &date));
        assert!(!is_after_or_equal(&date, &later));
    }

    #[test]
    fn test_strict_variants_reject_equal_values() {
        let date = plain_date("2024-06-18");
        assert!(!is_before(&date, &date));
        assert!(!is_after(&date, &date));
        assert_eq!(compare(&date, &date), Ordering::Equal);
    }
}
