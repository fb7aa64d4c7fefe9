//! Tests for the eligibility predicate.

use chrono::{DateTime, Local, TimeDelta, TimeZone};
use filepruner::{Config, Error, PrunePolicy};

fn config(file_types: &[&str], delete_after: &str) -> Config {
    Config {
        directories: Vec::new(),
        file_types: file_types.iter().map(ToString::to_string).collect(),
        delete_after: delete_after.to_string(),
    }
}

fn noon() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

#[test]
fn cutoff_is_now_minus_threshold() {
    let policy = PrunePolicy::new(&config(&[".log"], "24h"), noon()).unwrap();
    assert_eq!(policy.cutoff(), noon() - TimeDelta::hours(24));

    let policy = PrunePolicy::new(&config(&[".log"], "7d"), noon()).unwrap();
    assert_eq!(policy.cutoff(), noon() - TimeDelta::hours(168));
}

#[test]
fn older_than_cutoff_matches() {
    let policy = PrunePolicy::new(&config(&[".log"], "24h"), noon()).unwrap();
    let two_days_old = noon() - TimeDelta::hours(48);
    assert!(policy.matches(Some(".log"), two_days_old));
}

#[test]
fn newer_than_cutoff_does_not_match() {
    let policy = PrunePolicy::new(&config(&[".log"], "24h"), noon()).unwrap();
    let one_hour_old = noon() - TimeDelta::hours(1);
    assert!(!policy.matches(Some(".log"), one_hour_old));
}

#[test]
fn tie_with_cutoff_is_not_eligible() {
    // Strictly before only — equality keeps the file
    let policy = PrunePolicy::new(&config(&[".log"], "24h"), noon()).unwrap();
    assert!(!policy.matches(Some(".log"), policy.cutoff()));
}

#[test]
fn extension_outside_the_set_never_matches() {
    let policy = PrunePolicy::new(&config(&[".log"], "24h"), noon()).unwrap();
    let ancient = noon() - TimeDelta::hours(24 * 365);
    assert!(!policy.matches(Some(".txt"), ancient));
    assert!(!policy.matches(None, ancient));
}

#[test]
fn extension_match_is_case_sensitive() {
    let policy = PrunePolicy::new(&config(&[".log"], "24h"), noon()).unwrap();
    let ancient = noon() - TimeDelta::hours(24 * 365);
    assert!(!policy.matches(Some(".LOG"), ancient));
    assert!(!policy.matches(Some(".Log"), ancient));
}

#[test]
fn empty_file_types_matches_nothing() {
    let policy = PrunePolicy::new(&config(&[], "24h"), noon()).unwrap();
    let ancient = noon() - TimeDelta::hours(24 * 365);
    assert!(!policy.matches(Some(".log"), ancient));
}

#[test]
fn zero_threshold_makes_the_past_eligible() {
    let policy = PrunePolicy::new(&config(&[".log"], "0d"), noon()).unwrap();
    assert!(policy.matches(Some(".log"), noon() - TimeDelta::seconds(1)));
    assert!(!policy.matches(Some(".log"), noon()));
}

#[test]
fn negative_threshold_puts_the_cutoff_in_the_future() {
    let policy = PrunePolicy::new(&config(&[".log"], "-1h"), noon()).unwrap();
    assert_eq!(policy.cutoff(), noon() + TimeDelta::hours(1));
    // Even a file modified "now" counts as stale
    assert!(policy.matches(Some(".log"), noon()));
}

#[test]
fn bad_duration_fails_construction() {
    assert!(matches!(
        PrunePolicy::new(&config(&[".log"], "abc"), noon()),
        Err(Error::InvalidDuration(_))
    ));
    assert!(matches!(
        PrunePolicy::new(&config(&[".log"], ""), noon()),
        Err(Error::InvalidDuration(_))
    ));
}
