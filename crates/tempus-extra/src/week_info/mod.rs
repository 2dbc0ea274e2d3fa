//! Locale week-information resolution.
//!
//! A locale's week rules are three facts: which day opens the week, which
//! days are the weekend, and how many days of a partial first-of-year week
//! it takes for that week to count as week 1. The host internationalization
//! data ([`icu_calendar::week::WeekInformation`]) supplies the first two
//! when its week data is available; the minimal-days datum is not part of
//! the host data at all. A compact table generated offline from CLDR
//! (`data.rs`, produced by the `tempus-weekdata-gen` crate) backfills
//! whatever the host cannot answer — including the whole record when the
//! host week data is absent.
//!
//! Which path serves a lookup is decided once per process by a capability
//! probe and never revisited; after that, every resolution is a pure read.

use std::sync::LazyLock;

use icu_calendar::types::Weekday;
use icu_calendar::week::WeekInformation;
use icu_locale::subtags::Region;
use icu_locale::{Locale, LocaleExpander};

use crate::error::Result;

mod data;

use data::{REGION_WEEK_DATA, WORLD_DEFAULTS};

/// Week-definition rules resolved for one locale.
///
/// Produced fresh by every [`resolve_week_info`] call; callers that resolve
/// the same locale repeatedly may cache the record themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekInfo {
    /// The day that opens the week (1 = Monday .. 7 = Sunday).
    pub first_day: Weekday,
    /// The weekend days, never empty.
    pub weekend: Vec<Weekday>,
    /// Minimum day count for a partial first-of-year week to be week 1.
    pub minimal_days: u8,
}

/// A locale argument: either an unparsed BCP-47 tag or an already
/// constructed [`Locale`].
///
/// Every locale-taking function in this crate accepts `impl Into<LocaleRef>`,
/// so both `"de-DE"` and `&locale` work at call sites.
#[derive(Debug, Clone, Copy)]
pub enum LocaleRef<'a> {
    /// An unparsed tag; parsing may fail with [`crate::Error::InvalidLocale`].
    Tag(&'a str),
    /// A locale that has already been parsed by the caller.
    Resolved(&'a Locale),
}

impl<'a> From<&'a str> for LocaleRef<'a> {
    fn from(tag: &'a str) -> Self {
        Self::Tag(tag)
    }
}

impl<'a> From<&'a Locale> for LocaleRef<'a> {
    fn from(locale: &'a Locale) -> Self {
        Self::Resolved(locale)
    }
}

impl LocaleRef<'_> {
    fn into_locale(self) -> Result<Locale> {
        match self {
            Self::Tag(tag) => Ok(Locale::try_from_str(tag)?),
            Self::Resolved(locale) => Ok(locale.clone()),
        }
    }
}

/// One region's stored week data: an ordered `[first_day, weekend,
/// minimal_days]` field list with the trailing run of world-default-equal
/// fields trimmed away. Once a field diverges from the world default, every
/// field before it is stored, so `None`s only ever form a suffix.
pub(crate) struct RegionWeekEntry {
    pub(crate) first_day: Option<Weekday>,
    pub(crate) weekend: Option<&'static [Weekday]>,
    pub(crate) minimal_days: Option<u8>,
}

impl RegionWeekEntry {
    /// Entry storing only a first day; weekend and minimal days are the
    /// world defaults.
    pub(crate) const fn first_day_only(first_day: Weekday) -> Self {
        Self {
            first_day: Some(first_day),
            weekend: None,
            minimal_days: None,
        }
    }

    /// Entry storing first day and weekend; minimal days is the world
    /// default.
    pub(crate) const fn up_to_weekend(first_day: Weekday, weekend: &'static [Weekday]) -> Self {
        Self {
            first_day: Some(first_day),
            weekend: Some(weekend),
            minimal_days: None,
        }
    }

    /// Fully specified entry; nothing was trimmable.
    pub(crate) const fn full(
        first_day: Weekday,
        weekend: &'static [Weekday],
        minimal_days: u8,
    ) -> Self {
        Self {
            first_day: Some(first_day),
            weekend: Some(weekend),
            minimal_days: Some(minimal_days),
        }
    }
}

/// The always-complete entry for the root region "001".
pub(crate) struct WorldWeekDefaults {
    pub(crate) first_day: Weekday,
    pub(crate) weekend: &'static [Weekday],
    pub(crate) minimal_days: u8,
}

/// How week lookups are answered for the rest of the process lifetime.
enum WeekInfoSource {
    /// The host week data responded to the probe; first day and weekend
    /// come from it (which also honors `-u-fw-` overrides), minimal days
    /// from the generated table.
    Native,
    /// No host week data; the generated table answers everything.
    Table,
}

impl WeekInfoSource {
    fn detect() -> Self {
        match WeekInformation::try_new((&Locale::UNKNOWN).into()) {
            Ok(_) => Self::Native,
            Err(_) => Self::Table,
        }
    }
}

static SOURCE: LazyLock<WeekInfoSource> = LazyLock::new(WeekInfoSource::detect);

static EXPANDER: LazyLock<LocaleExpander> = LazyLock::new(LocaleExpander::new_extended);

/// Resolves the week-definition rules for a locale.
///
/// String tags are parsed first; a malformed tag is surfaced as
/// [`crate::Error::InvalidLocale`]. The locale is then maximized
/// (`"de"` becomes `"de-DE"`) so a concrete region drives the lookup.
/// Regions without data fall back to the world defaults — an unknown
/// region is never an error.
///
/// # Examples
///
/// ```
/// use icu_calendar::types::Weekday;
/// use tempus_extra::resolve_week_info;
///
/// let german = resolve_week_info("de-DE").unwrap();
/// assert_eq!(german.first_day, Weekday::Monday);
/// assert_eq!(german.minimal_days, 4);
///
/// let us = resolve_week_info("en-US").unwrap();
/// assert_eq!(us.first_day, Weekday::Sunday);
/// assert_eq!(us.minimal_days, 1);
/// ```
pub fn resolve_week_info<'a>(locale: impl Into<LocaleRef<'a>>) -> Result<WeekInfo> {
    let mut locale = locale.into().into_locale()?;
    EXPANDER.maximize(&mut locale.id);

    let entry = region_entry(locale.id.region);

    match *SOURCE {
        WeekInfoSource::Native => Ok(native_week_info(&locale, entry)),
        WeekInfoSource::Table => Ok(expand_entry(entry)),
    }
}

fn region_entry(region: Option<Region>) -> Option<&'static RegionWeekEntry> {
    let region = region?;
    let index = REGION_WEEK_DATA
        .binary_search_by_key(&region.as_str(), |(code, _)| *code)
        .ok()?;
    Some(&REGION_WEEK_DATA[index].1)
}

fn native_week_info(locale: &Locale, entry: Option<&'static RegionWeekEntry>) -> WeekInfo {
    match WeekInformation::try_new(locale.into()) {
        Ok(info) => WeekInfo {
            first_day: info.first_weekday,
            weekend: info.weekend().collect(),
            // The host data has no minimal-days counterpart; the table
            // supplies it on both paths.
            minimal_days: entry
                .and_then(|entry| entry.minimal_days)
                .unwrap_or(WORLD_DEFAULTS.minimal_days),
        },
        // A per-locale data miss degrades to the table rather than failing.
        Err(_) => expand_entry(entry),
    }
}

/// Expands a (possibly trimmed) table entry against the world defaults,
/// re-filling trimmed fields positionally. A missing entry is the world
/// defaults verbatim.
fn expand_entry(entry: Option<&'static RegionWeekEntry>) -> WeekInfo {
    match entry {
        Some(entry) => WeekInfo {
            first_day: entry.first_day.unwrap_or(WORLD_DEFAULTS.first_day),
            weekend: entry.weekend.unwrap_or(WORLD_DEFAULTS.weekend).to_vec(),
            minimal_days: entry.minimal_days.unwrap_or(WORLD_DEFAULTS.minimal_days),
        },
        None => WeekInfo {
            first_day: WORLD_DEFAULTS.first_day,
            weekend: WORLD_DEFAULTS.weekend.to_vec(),
            minimal_days: WORLD_DEFAULTS.minimal_days,
        },
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_resolves_first_day_per_locale() {
        assert_eq!(resolve_week_info("en-US").unwrap().first_day, Weekday::Sunday);
        assert_eq!(resolve_week_info("de-DE").unwrap().first_day, Weekday::Monday);
        assert_eq!(resolve_week_info("fr-FR").unwrap().first_day, Weekday::Monday);
    }

    #[test]
    fn test_resolves_minimal_days_per_locale() {
        assert_eq!(resolve_week_info("en-US").unwrap().minimal_days, 1);
        assert_eq!(resolve_week_info("de-DE").unwrap().minimal_days, 4);
        assert_eq!(resolve_week_info("en-GB").unwrap().minimal_days, 4);
    }

    #[test]
    fn test_maximizes_bare_language_tags() {
        // "de" has no region until likely-subtags expansion maps it to DE.
        let info = resolve_week_info("de").unwrap();
        assert_eq!(info.first_day, Weekday::Monday);
        assert_eq!(info.minimal_days, 4);

        let info = resolve_week_info("en").unwrap();
        assert_eq!(info.first_day, Weekday::Sunday);
    }

    #[test]
    fn test_weekend_is_never_empty() {
        for tag in ["en-US", "de-DE", "ar-EG", "he-IL", "fa-IR", "hi-IN", "dv-MV"] {
            let info = resolve_week_info(tag).unwrap();
            assert!(!info.weekend.is_empty(), "{tag}: weekend must be non-empty");
        }
    }

    #[test]
    fn test_friday_saturday_weekends() {
        let egypt = resolve_week_info("ar-EG").unwrap();
        assert!(egypt.weekend.contains(&Weekday::Friday));
        assert!(egypt.weekend.contains(&Weekday::Saturday));
        assert!(!egypt.weekend.contains(&Weekday::Sunday));

        let israel = resolve_week_info("he-IL").unwrap();
        assert_eq!(israel.first_day, Weekday::Sunday);
        assert!(israel.weekend.contains(&Weekday::Friday));
        assert!(israel.weekend.contains(&Weekday::Saturday));
    }

    #[test]
    fn test_accepts_resolved_locale_objects() {
        let locale: Locale = "de-DE".parse().unwrap();
        let from_object = resolve_week_info(&locale).unwrap();
        let from_tag = resolve_week_info("de-DE").unwrap();
        assert_eq!(from_object.first_day, from_tag.first_day);
        assert_eq!(from_object.minimal_days, from_tag.minimal_days);
    }

    #[test]
    fn test_invalid_tag_is_surfaced() {
        let err = resolve_week_info("not a locale!").unwrap_err();
        assert!(matches!(err, Error::InvalidLocale(_)));
    }

    #[test]
    fn test_unknown_region_falls_back_to_world_defaults() {
        // Esperanto maximizes to the world region, which has no table entry.
        let info = resolve_week_info("eo").unwrap();
        assert_eq!(info.first_day, WORLD_DEFAULTS.first_day);
        assert_eq!(info.minimal_days, WORLD_DEFAULTS.minimal_days);
    }

    // ── table expansion ─────────────────────────────────────────────────

    #[test]
    fn test_expand_refills_trimmed_fields_positionally() {
        let entry = RegionWeekEntry::first_day_only(Weekday::Sunday);
        let info = expand_entry(Some(&entry));
        assert_eq!(info.first_day, Weekday::Sunday);
        assert_eq!(info.weekend, WORLD_DEFAULTS.weekend.to_vec());
        assert_eq!(info.minimal_days, WORLD_DEFAULTS.minimal_days);

        let entry = RegionWeekEntry::up_to_weekend(Weekday::Saturday, &[Weekday::Friday]);
        let info = expand_entry(Some(&entry));
        assert_eq!(info.first_day, Weekday::Saturday);
        assert_eq!(info.weekend, vec![Weekday::Friday]);
        assert_eq!(info.minimal_days, WORLD_DEFAULTS.minimal_days);
    }

    #[test]
    fn test_expand_missing_entry_is_world_defaults() {
        let info = expand_entry(None);
        assert_eq!(info.first_day, WORLD_DEFAULTS.first_day);
        assert_eq!(info.weekend, WORLD_DEFAULTS.weekend.to_vec());
        assert_eq!(info.minimal_days, WORLD_DEFAULTS.minimal_days);
    }

    #[test]
    fn test_table_nones_only_form_a_suffix() {
        for (code, entry) in REGION_WEEK_DATA {
            assert!(
                entry.first_day.is_some(),
                "{code}: empty entries must be omitted from the table"
            );
            if entry.minimal_days.is_some() {
                assert!(
                    entry.weekend.is_some(),
                    "{code}: a stored minimal-days requires a stored weekend"
                );
            }
        }
    }

    #[test]
    fn test_table_is_sorted_for_binary_search() {
        for window in REGION_WEEK_DATA.windows(2) {
            assert!(window[0].0 < window[1].0);
        }
    }
}
