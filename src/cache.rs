use crate::error::{OrgstatError, Result};
use crate::model::{ContributorStats, OrgMember, Repository};
use crate::stats::OrgStats;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Flat JSON data directory holding everything fetched for one organization,
/// including the `org.json` snapshot that later runs can re-slice offline.
pub struct DataDir {
    dir: PathBuf,
}

impl DataDir {
    pub fn new<P: AsRef<Path>>(data_root: P, org: &str) -> Result<Self> {
        let dir = data_root.as_ref().join(org);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn write_members(&self, members: &[OrgMember]) -> Result<()> {
        self.write_json("members", members)
    }

    pub fn write_repo(&self, repo: &Repository) -> Result<()> {
        self.write_json(&format!("repo_{}", repo.name), repo)
    }

    pub fn write_repo_stats(&self, repo: &str, stats: &[ContributorStats]) -> Result<()> {
        self.write_json(&format!("stats_{repo}"), stats)
    }

    pub fn write_snapshot(&self, org: &OrgStats) -> Result<()> {
        self.write_json("org", org)
    }

    pub fn has_snapshot(&self) -> bool {
        self.file("org").exists()
    }

    /// Restores the OrgStats snapshot verbatim: no re-validation and no
    /// recalculation. Cached percentages are trusted as-is until the next
    /// `filter` call recomputes them.
    pub fn load_snapshot(&self) -> Result<OrgStats> {
        let path = self.file("org");
        let json = fs::read_to_string(&path).map_err(|e| {
            OrgstatError::Snapshot(format!("Cannot read {}: {e}", path.display()))
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    fn file(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.file(name), json)?;
        Ok(())
    }
}
