pub mod member;
pub mod org;
pub mod repo;

pub use member::MemberStats;
pub use org::OrgStats;
pub use repo::RepoStats;

/// Share of `part` in `total`, defined as 0 when the total is 0 so an empty
/// repository or organization never yields NaN percentages.
pub(crate) fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
