use assert_cmd::prelude::*;
use orgstat::model::{Author, ContributorStats, ContributorWeek, Repository};
use orgstat::stats::{OrgStats, RepoStats};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn contributor(login: &str, additions: u64, commits: u64) -> ContributorStats {
    ContributorStats {
        author: Author {
            login: login.to_string(),
            extra: BTreeMap::new(),
        },
        weeks: vec![ContributorWeek {
            week_start: 0,
            additions,
            removals: 0,
            commits,
        }],
    }
}

fn repository(name: &str) -> Repository {
    Repository {
        name: name.to_string(),
        full_name: format!("acme/{name}"),
        extra: BTreeMap::new(),
    }
}

/// Writes a two-repo snapshot for org `acme` into `<data_root>/acme/org.json`
/// so cached runs work without any network access or token.
fn seed_snapshot(data_root: &Path) {
    let repo_a = RepoStats::new(
        &repository("repoA"),
        &[contributor("alice", 80, 4), contributor("bob", 20, 2)],
    );
    let repo_b = RepoStats::new(
        &repository("repoB"),
        &[contributor("alice", 0, 1), contributor("bob", 100, 5)],
    );
    let org = OrgStats::new(vec![repo_a, repo_b]);

    let dir = data_root.join("acme");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("org.json"),
        serde_json::to_string_pretty(&org).unwrap(),
    )
    .unwrap();
}

#[test]
fn help_runs() {
    let mut cmd = Command::cargo_bin("orgstat").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn cached_run_reports_org_totals() {
    let dir = tempdir().unwrap();
    seed_snapshot(dir.path());

    let mut cmd = Command::cargo_bin("orgstat").unwrap();
    cmd.env_remove("GITHUB_TOKEN")
        .args(["--org", "acme", "--cached", "--json", "--data"])
        .arg(dir.path());
    let out = cmd.assert().success().get_output().stdout.clone();

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["org"], "acme");
    assert_eq!(v["stats"]["additions"], 200);
    assert_eq!(v["stats"]["members"]["alice"]["percentage"], 0.4);
    assert_eq!(v["stats"]["members"]["bob"]["percentage"], 0.6);
}

#[test]
fn cached_run_applies_include_filter() {
    let dir = tempdir().unwrap();
    seed_snapshot(dir.path());

    let mut cmd = Command::cargo_bin("orgstat").unwrap();
    cmd.env_remove("GITHUB_TOKEN")
        .args([
            "--org",
            "acme",
            "--cached",
            "--json",
            "--repo-include-filter",
            "^repoA$",
            "--data",
        ])
        .arg(dir.path());
    let out = cmd.assert().success().get_output().stdout.clone();

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["stats"]["repos"].as_array().unwrap().len(), 1);
    assert_eq!(v["stats"]["additions"], 100);
    assert_eq!(v["stats"]["members"]["alice"]["percentage"], 0.8);
    assert_eq!(v["stats"]["members"]["bob"]["percentage"], 0.2);
}

#[test]
fn cached_run_writes_report_file() {
    let dir = tempdir().unwrap();
    seed_snapshot(dir.path());
    let report = dir.path().join("report.json");

    let mut cmd = Command::cargo_bin("orgstat").unwrap();
    cmd.env_remove("GITHUB_TOKEN")
        .args(["--org", "acme", "--cached", "--ndjson", "--output-file"])
        .arg(&report)
        .arg("--data")
        .arg(dir.path());
    let out = cmd.assert().success().get_output().stdout.clone();

    // NDJSON on stdout: one line per org member.
    let lines: Vec<_> = out
        .split(|b| *b == b'\n')
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let member: serde_json::Value = serde_json::from_slice(line).unwrap();
        assert!(member.get("login").is_some());
    }

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(written["stats"]["additions"], 200);
}

#[test]
fn invalid_filter_pattern_fails() {
    let dir = tempdir().unwrap();
    seed_snapshot(dir.path());

    let mut cmd = Command::cargo_bin("orgstat").unwrap();
    cmd.env_remove("GITHUB_TOKEN")
        .args([
            "--org",
            "acme",
            "--cached",
            "--repo-include-filter",
            "[",
            "--data",
        ])
        .arg(dir.path());
    cmd.assert().failure();
}

#[test]
fn missing_token_fails_when_fetching() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("orgstat").unwrap();
    cmd.env_remove("GITHUB_TOKEN")
        .args(["--org", "acme", "--data"])
        .arg(dir.path());
    cmd.assert().failure();
}
