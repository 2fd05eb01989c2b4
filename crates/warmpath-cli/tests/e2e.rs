//! E2E tests for the `wp` binary.
//!
//! Each test writes a small snapshot into a temp project and runs one
//! command against it, checking JSON output and error codes.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test harness helpers
// ---------------------------------------------------------------------------

fn wp_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wp"));
    cmd.current_dir(dir);
    cmd.env("WARMPATH_LOG", "error");
    cmd.env("XDG_CONFIG_HOME", dir.join(".xdg"));
    cmd.env("HOME", dir);
    cmd.env_remove("WARMPATH_DATA_DIR");
    cmd.env_remove("WARMPATH_FORMAT");
    cmd
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).expect("serialize")).expect("write fixture");
}

/// Star around Hal plus a closed pair, in `./data`.
fn seed_project() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let data = dir.path().join("data");
    fs::create_dir_all(&data).expect("create data dir");

    write_json(
        &data.join("contacts.json"),
        &json!([
            {"id": "hal", "name": "Hal", "company": "Hub Capital", "category": "VC", "tier": 1},
            {"id": "ann", "name": "Ann", "company": "Acme", "category": "Founder", "tier": 1},
            {"id": "bo", "name": "Bo", "company": "Beta", "category": "Founder", "tier": 2},
            {"id": "cy", "name": "Cy", "company": "Cyan", "category": "LP", "tier": 3},
        ]),
    );
    write_json(
        &data.join("relationships.json"),
        &json!([
            {"a": "hal", "b": "ann", "strength": 0.9, "kind": "worked_with"},
            {"a": "hal", "b": "bo", "strength": 0.5},
            {"a": "cy", "b": "hal", "strength": 0.3, "note": "met at LP summit"},
        ]),
    );
    write_json(
        &data.join("interactions.json"),
        &json!([
            {"contact_id": "ann", "kind": "meeting", "date": "2024-05-01"},
            {"contact_id": "hal", "kind": "email", "date": "2024-05-02"},
        ]),
    );

    dir
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = wp_cmd(dir)
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("wp should not crash");
    assert!(
        output.status.success(),
        "{args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON on stdout")
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[test]
fn brokers_rank_the_hub_first() {
    let dir = seed_project();
    let json = run_json(dir.path(), &["brokers"]);

    assert_eq!(json[0]["id"], "hal");
    assert_eq!(json[0]["bridges"], 3);
    assert_eq!(json[0]["broker_score"], 1.0);
}

#[test]
fn degree_reports_normalized_values() {
    let dir = seed_project();
    let json = run_json(dir.path(), &["degree"]);

    assert_eq!(json[0]["degree"], 3);
    assert_eq!(json[0]["normalized_degree"], 1.0);
    assert_eq!(json.as_array().map(Vec::len), Some(4));
}

#[test]
fn influence_honours_iteration_override() {
    let dir = seed_project();
    let json = run_json(dir.path(), &["influence", "--iterations", "21"]);

    assert_eq!(json["iterations"], 21);
    assert_eq!(json["converged"], false);
    assert_eq!(json["records"][0]["id"], "hal");
    assert_eq!(json["records"][0]["interpretation"], "High network influence");
}

#[test]
fn multipliers_explain_the_hub() {
    let dir = seed_project();
    let json = run_json(dir.path(), &["multipliers"]);

    assert_eq!(json[0]["id"], "hal");
    let why = json[0]["why_valuable"].as_str().unwrap_or_default();
    assert!(why.contains("Bridges disconnected groups (broker)"));
}

#[test]
fn report_has_every_section() {
    let dir = seed_project();
    let json = run_json(dir.path(), &["report"]);

    for key in ["multipliers", "structural_holes", "brokers", "influence", "homophily"] {
        assert!(json.get(key).is_some(), "missing section {key}");
    }
    assert_eq!(json["total_contacts"], 4);
    assert_eq!(json["homophily"]["cross_category_connections"], 3);
}

// ---------------------------------------------------------------------------
// Ties and paths
// ---------------------------------------------------------------------------

#[test]
fn ties_blend_interactions() {
    let dir = seed_project();
    let json = run_json(dir.path(), &["ties"]);

    // hal-ann: (0.9 + 2/10) / 2 = 0.55
    assert_eq!(json[0]["contact_2"], "ann");
    assert_eq!(json[0]["class"], "medium");
}

#[test]
fn contact_groups_relationships() {
    let dir = seed_project();
    let json = run_json(dir.path(), &["contact", "hal"]);

    assert_eq!(json["strong"][0]["contact"]["id"], "ann");
    assert_eq!(json["strong"][0]["relationship_kind"], "worked_with");
    assert_eq!(json["medium"][0]["contact"]["id"], "bo");
    assert_eq!(json["weak"][0]["note"], "met at LP summit");
}

#[test]
fn paths_find_introducers_through_the_hub() {
    let dir = seed_project();
    let json = run_json(dir.path(), &["paths", "cy"]);

    let chains: Vec<Vec<String>> = json
        .as_array()
        .map(|records| {
            records
                .iter()
                .map(|r| {
                    r["path"]
                        .as_array()
                        .map(|p| {
                            p.iter()
                                .filter_map(|c| c["id"].as_str().map(str::to_owned))
                                .collect()
                        })
                        .unwrap_or_default()
                })
                .collect()
        })
        .unwrap_or_default();

    assert_eq!(chains[0], ["hal", "cy"]);
    assert!(chains.contains(&vec!["ann".to_owned(), "hal".to_owned(), "cy".to_owned()]));
}

#[test]
fn reach_and_mutual() {
    let dir = seed_project();

    let reach = run_json(dir.path(), &["reach", "ann", "--degrees", "2"]);
    assert_eq!(reach["total_reach"], 3);

    let mutual = run_json(dir.path(), &["mutual", "ann", "bo"]);
    assert_eq!(mutual[0]["id"], "hal");
}

#[test]
fn opportunities_pair_similar_contacts() {
    let dir = seed_project();
    let json = run_json(dir.path(), &["opportunities"]);

    assert_eq!(json[0]["contact_1"], "ann");
    assert_eq!(json[0]["contact_2"], "bo");
    assert_eq!(json[0]["reason"], "Both Founder, Similar tier");
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn export_writes_file() {
    let dir = seed_project();
    let out = dir.path().join("graph.json");

    wp_cmd(dir.path())
        .args(["export", "--output"])
        .arg(&out)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\t4\t3"));

    let written: Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("export file")).expect("valid JSON");
    assert_eq!(written["metadata"]["total_nodes"], 4);
    assert_eq!(written["edges"][0]["source"], "hal");
}

// ---------------------------------------------------------------------------
// Configuration and errors
// ---------------------------------------------------------------------------

#[test]
fn data_flag_overrides_config() {
    let dir = seed_project();
    let moved = dir.path().join("elsewhere");
    fs::rename(dir.path().join("data"), &moved).expect("move data");

    let json = run_json(dir.path(), &["degree", "--data", "elsewhere"]);
    assert_eq!(json[0]["id"], "hal");
}

#[test]
fn project_config_changes_report_sizes() {
    let dir = seed_project();
    fs::create_dir_all(dir.path().join(".warmpath")).expect("config dir");
    fs::write(
        dir.path().join(".warmpath/config.toml"),
        "[report]\ntop_section = 1\n",
    )
    .expect("write config");

    let json = run_json(dir.path(), &["report"]);
    assert_eq!(json["brokers"].as_array().map(Vec::len), Some(1));
}

#[test]
fn unknown_contact_is_a_coded_error() {
    let dir = seed_project();
    wp_cmd(dir.path())
        .args(["contact", "nobody", "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn invalid_strength_is_rejected_at_load() {
    let dir = seed_project();
    write_json(
        &dir.path().join("data/relationships.json"),
        &json!([{"a": "hal", "b": "ann", "strength": 1.5}]),
    );
    wp_cmd(dir.path())
        .args(["brokers", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2005"));
}

#[test]
fn empty_data_dir_yields_empty_results() {
    let dir = TempDir::new().expect("tempdir");
    let json = run_json(dir.path(), &["brokers"]);
    assert_eq!(json, json!([]));
}
