use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u32 = 1;

/// Contributor identity as returned by the GitHub API. Everything beyond
/// `login` is carried through untouched so snapshots keep the full payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub login: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One week of a contributor's activity. Wire names are the single letters
/// GitHub uses (`w`/`a`/`d`/`c`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorWeek {
    #[serde(rename = "w", default)]
    pub week_start: i64,
    #[serde(rename = "a")]
    pub additions: u64,
    #[serde(rename = "d")]
    pub removals: u64,
    #[serde(rename = "c")]
    pub commits: u64,
}

/// One contributor's weekly activity in one repository, as returned by
/// `GET /repos/{owner}/{repo}/stats/contributors`. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorStats {
    pub author: Author,
    pub weeks: Vec<ContributorWeek>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgMember {
    pub login: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Top-level report document written by `--output-file` and printed by
/// `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub org: String,
    pub include_filter: Option<String>,
    pub exclude_filter: Option<String>,
    pub stats: crate::stats::OrgStats,
}
