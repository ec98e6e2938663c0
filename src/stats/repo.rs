use super::{ratio, MemberStats};
use crate::model::{ContributorStats, Repository};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contribution totals for one repository, with each member's ownership
/// share of the repository's added lines. Built once per repository and not
/// mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoStats {
    pub name: String,
    pub additions: u64,
    pub removals: u64,
    pub commits: u64,
    pub members: BTreeMap<String, MemberStats>,
}

impl RepoStats {
    /// Folds every contributor record into a member entry while accumulating
    /// the repository totals, then derives each member's share of the total.
    /// Records are expected to be pre-filtered to current organization
    /// members; a later record for the same login replaces the earlier map
    /// entry (logins are unique per provider response).
    pub fn new(repo: &Repository, contributions: &[ContributorStats]) -> Self {
        let mut stats = Self {
            name: repo.name.clone(),
            additions: 0,
            removals: 0,
            commits: 0,
            members: BTreeMap::new(),
        };

        for record in contributions {
            let member = MemberStats::from_weekly_contributions(record);
            stats.additions += member.additions;
            stats.removals += member.removals;
            stats.commits += member.commits;
            stats.members.insert(member.login.clone(), member);
        }

        let total = stats.additions;
        for member in stats.members.values_mut() {
            member.percentage = ratio(member.additions, total);
        }

        stats
    }
}
