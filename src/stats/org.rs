use super::{ratio, MemberStats, RepoStats};
use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Organization-wide aggregate over a set of repositories. The member map is
/// derived from the repositories and fully rebuilt by every `calculate`; the
/// whole value is a cheap, disposable view over the fetched repository list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgStats {
    pub additions: u64,
    pub removals: u64,
    pub commits: u64,
    pub repos: Vec<RepoStats>,
    pub members: BTreeMap<String, MemberStats>,
}

impl OrgStats {
    pub fn new(repos: Vec<RepoStats>) -> Self {
        let mut stats = Self {
            additions: 0,
            removals: 0,
            commits: 0,
            repos,
            members: BTreeMap::new(),
        };
        stats.calculate();
        stats
    }

    /// Rebuilds the totals and the member map from the current repository
    /// list. Idempotent: safe to call any number of times, and no state
    /// survives from a previous run.
    pub fn calculate(&mut self) {
        let mut additions = 0;
        let mut removals = 0;
        let mut commits = 0;
        let mut members: BTreeMap<String, MemberStats> = BTreeMap::new();

        for repo in &self.repos {
            additions += repo.additions;
            removals += repo.removals;
            commits += repo.commits;

            for repo_member in repo.members.values() {
                let member = members.entry(repo_member.login.clone()).or_insert_with(|| {
                    // Identity is copied on first sight, totals start at
                    // zero; the increment below covers this repo too.
                    let mut fresh = MemberStats::from_aggregate(repo_member);
                    fresh.reset();
                    fresh
                });
                member.additions += repo_member.additions;
                member.removals += repo_member.removals;
                member.commits += repo_member.commits;
            }
        }

        for member in members.values_mut() {
            member.percentage = ratio(member.additions, additions);
        }

        self.additions = additions;
        self.removals = removals;
        self.commits = commits;
        self.members = members;
    }

    /// Narrows the repository list to names matching `include` (when given)
    /// and not matching `exclude` (when given), then recomputes everything.
    /// Filtering is destructive and composes: repeated calls narrow further,
    /// and a dropped repository only comes back by rebuilding from the
    /// original list. An invalid pattern fails before any repository is
    /// touched.
    pub fn filter(&mut self, include: Option<&str>, exclude: Option<&str>) -> Result<()> {
        let include = include.map(Regex::new).transpose()?;
        let exclude = exclude.map(Regex::new).transpose()?;

        self.repos.retain(|repo| {
            include.as_ref().map_or(true, |re| re.is_match(&repo.name))
                && exclude.as_ref().map_or(true, |re| !re.is_match(&repo.name))
        });

        self.calculate();
        Ok(())
    }
}
