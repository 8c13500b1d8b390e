//! Behavioral tests for xlogfile session lookup and metadata extraction.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use invtrack_core::{Action, Command, InventoryTracker, ObsChannel, Observation};
use invtrack_xlog::{XlogError, derive_xlog_path, extract_inventory_metadata, find_session};

// ============================================================================
// Helpers
// ============================================================================

fn write_xlog(dir: &Path, name: &str, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn padded(text: &str) -> Vec<u8> {
    let mut buf = text.as_bytes().to_vec();
    buf.resize(80, 0);
    buf
}

fn obs(slots: &[(&str, i16)]) -> Observation {
    let text = slots.iter().map(|(line, _)| padded(line)).collect();
    let codes = slots.iter().map(|&(_, code)| code).collect();
    Observation::new(vec![ObsChannel::Text(text), ObsChannel::Codes(codes)])
}

// ============================================================================
// find_session
// ============================================================================

#[test]
fn test_find_session_by_ttyrecname() {
    let dir = TempDir::new().unwrap();
    let xlog = write_xlog(
        dir.path(),
        "nle.1.xlogfile",
        &[
            "ttyrecname=nle.1.0.ttyrec3.bz2\tturns=10\tdeath=escaped",
            "ttyrecname=nle.1.1.ttyrec3.bz2\tturns=99\tdeath=killed by a newt",
        ],
    );
    let fields = find_session(&xlog, "nle.1.1.ttyrec3.bz2").unwrap();
    assert_eq!(fields["turns"], "99");
    assert_eq!(fields["death"], "killed by a newt");
}

#[test]
fn test_find_session_skips_blank_lines() {
    let dir = TempDir::new().unwrap();
    let xlog = write_xlog(
        dir.path(),
        "nle.2.xlogfile",
        &["", "  ", "ttyrecname=nle.2.0.ttyrec3.bz2\tturns=5"],
    );
    let fields = find_session(&xlog, "nle.2.0.ttyrec3.bz2").unwrap();
    assert_eq!(fields["turns"], "5");
}

#[test]
fn test_unknown_session_is_an_error() {
    let dir = TempDir::new().unwrap();
    let xlog = write_xlog(
        dir.path(),
        "nle.3.xlogfile",
        &["ttyrecname=nle.3.0.ttyrec3.bz2\tturns=1"],
    );
    let err = find_session(&xlog, "nle.3.9.ttyrec3.bz2").unwrap_err();
    assert!(matches!(err, XlogError::SessionNotFound { .. }));
    assert!(err.to_string().contains("nle.3.9.ttyrec3.bz2"));
}

#[test]
fn test_missing_xlogfile_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = find_session(&dir.path().join("absent.xlogfile"), "x").unwrap_err();
    assert!(matches!(err, XlogError::XlogNotFound(_)));
}

// ============================================================================
// Metadata extraction from a logged record
// ============================================================================

#[test]
fn test_extract_metadata_from_record() {
    let dir = TempDir::new().unwrap();
    let xlog = write_xlog(
        dir.path(),
        "nle.4.xlogfile",
        &[concat!(
            "ttyrecname=nle.4.0.ttyrec3.bz2\t",
            r#"inv_pickups_by_name={"dagger": 1, "food ration": 2}"#,
            "\t",
            r#"inv_uses_by_name={"food ration": {"eat": 1}}"#,
            "\t",
            "inv_uses_by_class={oops",
        )],
    );
    let fields = find_session(&xlog, "nle.4.0.ttyrec3.bz2").unwrap();
    let metadata = extract_inventory_metadata(&fields);
    assert_eq!(metadata["inv_pickups_by_name"]["food ration"], 2);
    assert_eq!(metadata["inv_uses_by_name"]["food ration"]["eat"], 1);
    assert_eq!(metadata["inv_uses_by_class"]["_error"], "invalid json");
}

// ============================================================================
// Round trip: tracker output through an xlogfile line and back
// ============================================================================

#[test]
fn test_tracker_metadata_round_trip() {
    let mut tracker = InventoryTracker::new(Some(0), Some(1));
    tracker.start_episode(Some(&obs(&[("a - a food ration", 7)])));
    tracker.record_step(&Action::Command(Command::Eat), Some(&obs(&[])));
    let produced = tracker.finalize_episode();

    // Log the episode the way the environment does: one key=value pair per
    // metadata field, JSON-encoded values.
    let mut parts = vec!["ttyrecname=nle.5.0.ttyrec3.bz2".to_string()];
    for (key, value) in &produced {
        parts.push(format!("{key}={}", serde_json::to_string(value).unwrap()));
    }
    let dir = TempDir::new().unwrap();
    let xlog = write_xlog(dir.path(), "nle.5.xlogfile", &[&parts.join("\t")]);

    let fields = find_session(&xlog, "nle.5.0.ttyrec3.bz2").unwrap();
    let recovered = extract_inventory_metadata(&fields);
    for (key, value) in &produced {
        assert_eq!(&recovered[key], value, "field {key} should survive the log");
    }
}

#[test]
fn test_derived_path_matches_convention() {
    let dir = TempDir::new().unwrap();
    let ttyrec = dir.path().join("nle.6.0.ttyrec3.bz2");
    assert_eq!(derive_xlog_path(&ttyrec), dir.path().join("nle.6.xlogfile"));
}
