//! # tempus-extra
//!
//! Locale-aware helpers for [`temporal_rs`] values.
//!
//! The Temporal types cover calendar arithmetic; this crate layers the
//! everyday questions on top: what is the next business day in this locale,
//! where does this locale's week start, which week number does a date carry,
//! and does this date equal that one regardless of calendar system. Week
//! rules come from the host CLDR data when available and from a compact
//! generated table otherwise, so lookups never fail for lack of data.
//!
//! Every helper is pure: it takes a value, returns a new value of the same
//! concrete kind and calendar, and touches no shared state beyond a one-time
//! lazy selection of the week-data source.
//!
//! ## Modules
//!
//! - [`adjusters`] — shift a value to a meaningful neighboring date
//! - [`inspectors`] — locale-aware week numbering
//! - [`comparators`] — calendar-agnostic point-in-time comparison
//! - [`week_info`] — locale week-rule resolution (first day, weekend, minimal days)
//! - [`value`] — bridging traits over the `temporal_rs` kinds
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use temporal_rs::PlainDate;
//! use tempus_extra::{next_business_day, locale_aware_week_number};
//!
//! let friday = PlainDate::try_new_iso(2024, 6, 14).unwrap();
//! let monday = next_business_day(&friday, "de-DE").unwrap();
//! assert_eq!(monday.day(), 17);
//! assert_eq!(locale_aware_week_number(&monday, "de-DE").unwrap(), 25);
//! ```

pub mod adjusters;
pub mod comparators;
pub mod error;
pub mod inspectors;
pub mod value;
pub mod week_info;

pub use adjusters::{
    end_of_day, first_day_of_month, first_day_of_next_month, first_day_of_next_year,
    first_day_of_week, first_day_of_year, last_day_of_month, last_day_of_week, last_day_of_year,
    next_business_day, next_day_of_week, next_or_same_day_of_week, previous_business_day,
    previous_day_of_week, previous_or_same_day_of_week, start_of_day,
};
pub use comparators::{
    compare, is_after, is_after_or_equal, is_before, is_before_or_equal, is_equal, TimelinePoint,
};
pub use error::{Error, Result};
pub use inspectors::locale_aware_week_number;
pub use value::{AdjustableDate, AdjustableDateTime};
pub use week_info::{resolve_week_info, LocaleRef, WeekInfo};

// The day-of-week type used throughout the public API, re-exported for
// callers that do not depend on icu_calendar directly.
pub use icu_calendar::types::Weekday;
