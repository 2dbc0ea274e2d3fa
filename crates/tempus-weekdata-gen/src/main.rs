//! Offline generator for tempus-extra's compact week-data table.
//!
//! Reads `supplemental/weekData.json` and `supplemental/territoryInfo.json`
//! from a cldr-core checkout and rewrites
//! `crates/tempus-extra/src/week_info/data.rs`. Per region, the ordered
//! field list `[first_day, weekend, minimal_days]` is stored with the
//! trailing run of world-default-equal fields trimmed; regions equal to the
//! world defaults in every field are omitted entirely. The resolver in
//! tempus-extra re-fills trimmed fields positionally from the world
//! defaults, so generation and resolution must agree on this schema.
//!
//! This tool runs at development time only; the generated table ships as
//! ordinary source.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;

#[derive(Parser)]
#[command(about = "Regenerates tempus-extra's compact CLDR week-data table")]
struct Args {
    /// Path to cldr-core's supplemental/weekData.json
    #[arg(long)]
    week_data: PathBuf,

    /// Path to cldr-core's supplemental/territoryInfo.json
    #[arg(long)]
    territory_info: PathBuf,

    /// Where to write the generated table module
    #[arg(long, default_value = "crates/tempus-extra/src/week_info/data.rs")]
    out: PathBuf,
}

// ── CLDR input shapes ───────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WeekDataFile {
    supplemental: WeekDataSupplemental,
}

#[derive(Deserialize)]
struct WeekDataSupplemental {
    version: Version,
    #[serde(rename = "weekData")]
    week_data: WeekData,
}

#[derive(Deserialize)]
struct Version {
    #[serde(rename = "_cldrVersion")]
    cldr_version: String,
}

#[derive(Deserialize)]
struct WeekData {
    #[serde(rename = "minDays")]
    min_days: BTreeMap<String, String>,
    #[serde(rename = "firstDay")]
    first_day: BTreeMap<String, String>,
    #[serde(rename = "weekendStart")]
    weekend_start: BTreeMap<String, String>,
    #[serde(rename = "weekendEnd")]
    weekend_end: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TerritoryInfoFile {
    supplemental: TerritoryInfoSupplemental,
}

#[derive(Deserialize)]
struct TerritoryInfoSupplemental {
    #[serde(rename = "territoryInfo")]
    territory_info: BTreeMap<String, serde_json::Value>,
}

// ── Week rules ──────────────────────────────────────────────────────────────

/// Fully resolved rules for one region, before compaction.
#[derive(Debug, Clone, PartialEq)]
struct WeekRules {
    first_day: u8,
    weekend: Vec<u8>,
    min_days: u8,
}

const DAY_IDENTS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const DAY_ABBREVS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

fn day_number(key: &str) -> Result<u8> {
    Ok(match key {
        "mon" => 1,
        "tue" => 2,
        "wed" => 3,
        "thu" => 4,
        "fri" => 5,
        "sat" => 6,
        "sun" => 7,
        other => bail!("unexpected week day key: {other}"),
    })
}

fn day_ident(day: u8) -> &'static str {
    DAY_IDENTS[usize::from(day) - 1]
}

fn weekend_const_name(weekend: &[u8]) -> String {
    weekend
        .iter()
        .map(|&day| DAY_ABBREVS[usize::from(day) - 1])
        .collect::<Vec<_>>()
        .join("_")
}

/// Looks up one CLDR per-region map, falling back to the "001" root value.
fn region_or_root<'a>(
    map: &'a BTreeMap<String, String>,
    region: &str,
    what: &str,
) -> Result<&'a str> {
    map.get(region)
        .or_else(|| map.get("001"))
        .map(String::as_str)
        .with_context(|| format!("no {what} for {region} and no root value"))
}

fn rules_for(region: &str, data: &WeekData) -> Result<WeekRules> {
    let first_day = day_number(region_or_root(&data.first_day, region, "first day")?)?;

    let weekend_start = day_number(region_or_root(&data.weekend_start, region, "weekend start")?)?;
    let weekend_end = day_number(region_or_root(&data.weekend_end, region, "weekend end")?)?;
    if weekend_start > weekend_end {
        bail!("[{region}] weekend start can't be after end");
    }
    let weekend: Vec<u8> = (weekend_start..=weekend_end).collect();

    let min_days = region_or_root(&data.min_days, region, "min days")?
        .parse::<u8>()
        .with_context(|| format!("[{region}] min days is not a number"))?;

    Ok(WeekRules {
        first_day,
        weekend,
        min_days,
    })
}

// ── Compaction ──────────────────────────────────────────────────────────────

/// A region's entry after trimming the trailing run of fields that equal
/// the world defaults. Trimmed fields are `None`, and only a true suffix is
/// ever trimmed: a divergent later field pins every field before it.
#[derive(Debug, PartialEq)]
struct PackedEntry {
    first_day: u8,
    weekend: Option<Vec<u8>>,
    min_days: Option<u8>,
}

/// Returns `None` for regions equal to the world defaults in every field;
/// those are omitted from the table entirely.
fn pack(rules: &WeekRules, world: &WeekRules) -> Option<PackedEntry> {
    let mut kept = 3;
    if rules.min_days == world.min_days {
        kept = 2;
        if rules.weekend == world.weekend {
            kept = 1;
            if rules.first_day == world.first_day {
                kept = 0;
            }
        }
    }

    match kept {
        0 => None,
        _ => Some(PackedEntry {
            first_day: rules.first_day,
            weekend: (kept >= 2).then(|| rules.weekend.clone()),
            min_days: (kept >= 3).then_some(rules.min_days),
        }),
    }
}

fn entry_constructor(packed: &PackedEntry) -> String {
    match (&packed.weekend, packed.min_days) {
        (Some(weekend), Some(min_days)) => format!(
            "RegionWeekEntry::full({}, {}, {})",
            day_ident(packed.first_day),
            weekend_const_name(weekend),
            min_days,
        ),
        (Some(weekend), None) => format!(
            "RegionWeekEntry::up_to_weekend({}, {})",
            day_ident(packed.first_day),
            weekend_const_name(weekend),
        ),
        (None, _) => format!(
            "RegionWeekEntry::first_day_only({})",
            day_ident(packed.first_day)
        ),
    }
}

// ── Rendering ───────────────────────────────────────────────────────────────

fn render(
    world: &WeekRules,
    entries: &BTreeMap<String, PackedEntry>,
    cldr_version: &str,
) -> String {
    let mut weekend_consts: BTreeSet<Vec<u8>> = BTreeSet::new();
    weekend_consts.insert(world.weekend.clone());
    for packed in entries.values() {
        if let Some(weekend) = &packed.weekend {
            weekend_consts.insert(weekend.clone());
        }
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "// Auto generated by tempus-weekdata-gen from CLDR {cldr_version} week data, do not modify manually.",
    );
    out.push_str("\nuse icu_calendar::types::Weekday::{self, *};\n");
    out.push_str("\nuse super::{RegionWeekEntry, WorldWeekDefaults};\n\n");

    // Alphabetical by constant name, so regeneration is diff-stable.
    let mut named: Vec<(String, Vec<u8>)> = weekend_consts
        .into_iter()
        .map(|weekend| (weekend_const_name(&weekend), weekend))
        .collect();
    named.sort();
    for (name, weekend) in &named {
        let days: Vec<&str> = weekend.iter().map(|&day| day_ident(day)).collect();
        let _ = writeln!(out, "const {name}: &[Weekday] = &[{}];", days.join(", "));
    }

    let _ = write!(
        out,
        "\npub(crate) static WORLD_DEFAULTS: WorldWeekDefaults = WorldWeekDefaults {{\n    \
         first_day: {},\n    weekend: {},\n    minimal_days: {},\n}};\n",
        day_ident(world.first_day),
        weekend_const_name(&world.weekend),
        world.min_days,
    );

    out.push_str("\npub(crate) static REGION_WEEK_DATA: &[(&str, RegionWeekEntry)] = &[\n");
    for (region, packed) in entries {
        let _ = writeln!(out, "    (\"{region}\", {}),", entry_constructor(packed));
    }
    out.push_str("];\n");

    out
}

fn main() -> Result<()> {
    let args = Args::parse();

    let week_data: WeekDataFile = serde_json::from_slice(
        &fs::read(&args.week_data)
            .with_context(|| format!("reading {}", args.week_data.display()))?,
    )
    .context("parsing weekData.json")?;
    let territory_info: TerritoryInfoFile = serde_json::from_slice(
        &fs::read(&args.territory_info)
            .with_context(|| format!("reading {}", args.territory_info.display()))?,
    )
    .context("parsing territoryInfo.json")?;

    let data = &week_data.supplemental.week_data;
    let world = rules_for("001", data).context("world defaults (001) not found")?;

    let mut entries = BTreeMap::new();
    for region in territory_info.supplemental.territory_info.keys() {
        let rules = rules_for(region, data)?;
        if let Some(packed) = pack(&rules, &world) {
            entries.insert(region.clone(), packed);
        }
    }

    let rendered = render(
        &world,
        &entries,
        &week_data.supplemental.version.cldr_version,
    );
    fs::write(&args.out, rendered).with_context(|| format!("writing {}", args.out.display()))?;

    println!(
        "wrote {} region entries (CLDR {}) to {}",
        entries.len(),
        week_data.supplemental.version.cldr_version,
        args.out.display(),
    );

    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────
