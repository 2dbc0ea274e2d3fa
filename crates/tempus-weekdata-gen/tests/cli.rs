use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn generates_compacted_table_from_cldr_fixtures() {
    let out = std::env::temp_dir().join(format!("weekdata-gen-{}.rs", std::process::id()));

    Command::cargo_bin("tempus-weekdata-gen")
        .unwrap()
        .arg("--week-data")
        .arg(fixture("weekData.json"))
        .arg("--territory-info")
        .arg(fixture("territoryInfo.json"))
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 3 region entries (CLDR 46)"));

    let generated = fs::read_to_string(&out).unwrap();
    fs::remove_file(&out).ok();

    assert!(generated.starts_with("// Auto generated by tempus-weekdata-gen from CLDR 46"));

    // World defaults stay fully specified.
    assert!(generated.contains("first_day: Monday,"));
    assert!(generated.contains("weekend: SAT_SUN,"));
    assert!(generated.contains("minimal_days: 1,"));

    // US keeps only its divergent first field; DE's divergent minimal-days
    // pins all three; IN stores first day and weekend.
    assert!(generated.contains(r#"("US", RegionWeekEntry::first_day_only(Sunday)),"#));
    assert!(generated.contains(r#"("DE", RegionWeekEntry::full(Monday, SAT_SUN, 4)),"#));
    assert!(generated.contains(r#"("IN", RegionWeekEntry::up_to_weekend(Sunday, SUN)),"#));

    // All-default regions are omitted entirely.
    assert!(!generated.contains(r#"("FR""#));
}

#[test]
fn fails_on_missing_input() {
    let out = std::env::temp_dir().join(format!("weekdata-gen-missing-{}.rs", std::process::id()));

    Command::cargo_bin("tempus-weekdata-gen")
        .unwrap()
        .arg("--week-data")
        .arg(fixture("does-not-exist.json"))
        .arg("--territory-info")
        .arg(fixture("territoryInfo.json"))
        .arg("--out")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}
