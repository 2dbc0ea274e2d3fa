// Auto generated by tempus-weekdata-gen from CLDR 46 week data, do not modify manually.

use icu_calendar::types::Weekday::{self, *};

use super::{RegionWeekEntry, WorldWeekDefaults};

const FRI: &[Weekday] = &[Friday];
const FRI_SAT: &[Weekday] = &[Friday, Saturday];
const SAT_SUN: &[Weekday] = &[Saturday, Sunday];
const SUN: &[Weekday] = &[Sunday];
const THU_FRI: &[Weekday] = &[Thursday, Friday];

pub(crate) static WORLD_DEFAULTS: WorldWeekDefaults = WorldWeekDefaults {
    first_day: Monday,
    weekend: SAT_SUN,
    minimal_days: 1,
};

pub(crate) static REGION_WEEK_DATA: &[(&str, RegionWeekEntry)] = &[
    ("AD", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("AF", RegionWeekEntry::up_to_weekend(Saturday, THU_FRI)),
    ("AG", RegionWeekEntry::first_day_only(Sunday)),
    ("AS", RegionWeekEntry::first_day_only(Sunday)),
    ("AT", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("AX", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("BD", RegionWeekEntry::first_day_only(Sunday)),
    ("BE", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("BG", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("BH", RegionWeekEntry::up_to_weekend(Saturday, FRI_SAT)),
    ("BR", RegionWeekEntry::first_day_only(Sunday)),
    ("BS", RegionWeekEntry::first_day_only(Sunday)),
    ("BT", RegionWeekEntry::first_day_only(Sunday)),
    ("BW", RegionWeekEntry::first_day_only(Sunday)),
    ("BZ", RegionWeekEntry::first_day_only(Sunday)),
    ("CA", RegionWeekEntry::first_day_only(Sunday)),
    ("CH", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("CN", RegionWeekEntry::first_day_only(Sunday)),
    ("CO", RegionWeekEntry::first_day_only(Sunday)),
    ("CZ", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("DE", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("DJ", RegionWeekEntry::first_day_only(Saturday)),
    ("DK", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("DM", RegionWeekEntry::first_day_only(Sunday)),
    ("DO", RegionWeekEntry::first_day_only(Sunday)),
    ("DZ", RegionWeekEntry::up_to_weekend(Saturday, FRI_SAT)),
    ("EE", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("EG", RegionWeekEntry::up_to_weekend(Saturday, FRI_SAT)),
    ("ES", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("ET", RegionWeekEntry::first_day_only(Sunday)),
    ("FI", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("FJ", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("FO", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("FR", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("GB", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("GF", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("GG", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("GI", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("GP", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("GR", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("GT", RegionWeekEntry::first_day_only(Sunday)),
    ("GU", RegionWeekEntry::first_day_only(Sunday)),
    ("HK", RegionWeekEntry::first_day_only(Sunday)),
    ("HN", RegionWeekEntry::first_day_only(Sunday)),
    ("HU", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("ID", RegionWeekEntry::first_day_only(Sunday)),
    ("IE", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("IL", RegionWeekEntry::up_to_weekend(Sunday, FRI_SAT)),
    ("IM", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("IN", RegionWeekEntry::up_to_weekend(Sunday, SUN)),
    ("IQ", RegionWeekEntry::up_to_weekend(Saturday, FRI_SAT)),
    ("IR", RegionWeekEntry::up_to_weekend(Saturday, FRI)),
    ("IS", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("IT", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("JE", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("JM", RegionWeekEntry::first_day_only(Sunday)),
    ("JO", RegionWeekEntry::up_to_weekend(Saturday, FRI_SAT)),
    ("JP", RegionWeekEntry::first_day_only(Sunday)),
    ("KE", RegionWeekEntry::first_day_only(Sunday)),
    ("KH", RegionWeekEntry::first_day_only(Sunday)),
    ("KR", RegionWeekEntry::first_day_only(Sunday)),
    ("KW", RegionWeekEntry::up_to_weekend(Saturday, FRI_SAT)),
    ("LA", RegionWeekEntry::first_day_only(Sunday)),
    ("LI", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("LT", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("LU", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("LY", RegionWeekEntry::up_to_weekend(Saturday, FRI_SAT)),
    ("MC", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("MH", RegionWeekEntry::first_day_only(Sunday)),
    ("MM", RegionWeekEntry::first_day_only(Sunday)),
    ("MO", RegionWeekEntry::first_day_only(Sunday)),
    ("MQ", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("MT", RegionWeekEntry::first_day_only(Sunday)),
    ("MV", RegionWeekEntry::up_to_weekend(Friday, FRI_SAT)),
    ("MX", RegionWeekEntry::first_day_only(Sunday)),
    ("MZ", RegionWeekEntry::first_day_only(Sunday)),
    ("NI", RegionWeekEntry::first_day_only(Sunday)),
    ("NL", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("NO", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("NP", RegionWeekEntry::first_day_only(Sunday)),
    ("OM", RegionWeekEntry::up_to_weekend(Saturday, FRI_SAT)),
    ("PA", RegionWeekEntry::first_day_only(Sunday)),
    ("PE", RegionWeekEntry::first_day_only(Sunday)),
    ("PH", RegionWeekEntry::first_day_only(Sunday)),
    ("PK", RegionWeekEntry::first_day_only(Sunday)),
    ("PL", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("PR", RegionWeekEntry::first_day_only(Sunday)),
    ("PT", RegionWeekEntry::full(Sunday, SAT_SUN, 4)),
    ("PY", RegionWeekEntry::first_day_only(Sunday)),
    ("QA", RegionWeekEntry::up_to_weekend(Saturday, FRI_SAT)),
    ("RE", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("RU", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("SA", RegionWeekEntry::up_to_weekend(Sunday, FRI_SAT)),
    ("SD", RegionWeekEntry::up_to_weekend(Saturday, FRI_SAT)),
    ("SE", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("SG", RegionWeekEntry::first_day_only(Sunday)),
    ("SJ", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("SK", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("SM", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("SV", RegionWeekEntry::first_day_only(Sunday)),
    ("SY", RegionWeekEntry::up_to_weekend(Saturday, FRI_SAT)),
    ("TH", RegionWeekEntry::first_day_only(Sunday)),
    ("TT", RegionWeekEntry::first_day_only(Sunday)),
    ("TW", RegionWeekEntry::first_day_only(Sunday)),
    ("UG", RegionWeekEntry::up_to_weekend(Monday, SUN)),
    ("UM", RegionWeekEntry::first_day_only(Sunday)),
    ("US", RegionWeekEntry::first_day_only(Sunday)),
    ("VA", RegionWeekEntry::full(Monday, SAT_SUN, 4)),
    ("VE", RegionWeekEntry::first_day_only(Sunday)),
    ("VI", RegionWeekEntry::first_day_only(Sunday)),
    ("WS", RegionWeekEntry::first_day_only(Sunday)),
    ("YE", RegionWeekEntry::up_to_weekend(Sunday, FRI_SAT)),
    ("ZA", RegionWeekEntry::first_day_only(Sunday)),
    ("ZW", RegionWeekEntry::first_day_only(Sunday)),
];
