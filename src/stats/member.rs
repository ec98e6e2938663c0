use crate::model::{Author, ContributorStats};
use serde::{Deserialize, Serialize};

/// Accumulated totals for one contributor, inside a single repository or
/// across the whole organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberStats {
    pub login: String,
    pub additions: u64,
    pub removals: u64,
    pub commits: u64,
    /// Share of the enclosing aggregate's additions, in `[0, 1]`. Zero until
    /// the owning aggregate runs its percentage pass.
    pub percentage: f64,
    pub author: Author,
}

impl MemberStats {
    /// Sums a contributor's weekly records into fresh totals. The sum is
    /// order-independent; the percentage is left for the owner to fill in.
    pub fn from_weekly_contributions(record: &ContributorStats) -> Self {
        let mut stats = Self {
            login: record.author.login.clone(),
            additions: 0,
            removals: 0,
            commits: 0,
            percentage: 0.0,
            author: record.author.clone(),
        };
        for week in &record.weeks {
            stats.additions += week.additions;
            stats.removals += week.removals;
            stats.commits += week.commits;
        }
        stats
    }

    /// Copies an already-computed member verbatim, totals and percentage
    /// included; weekly records are never re-summed. The copy shares no
    /// state with the source. Used when folding repo-level members into the
    /// org level and when restoring from a snapshot.
    pub fn from_aggregate(member: &MemberStats) -> Self {
        member.clone()
    }

    /// Zeroes the three totals, keeping login and author. An org-level entry
    /// is reset right after its first-sight copy so the first repository's
    /// contribution is not counted twice.
    pub fn reset(&mut self) {
        self.additions = 0;
        self.removals = 0;
        self.commits = 0;
    }
}
