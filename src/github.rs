use crate::error::{OrgstatError, Result};
use crate::log::Logger;
use crate::model::{ContributorStats, OrgMember, Repository};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

const API_ROOT: &str = "https://api.github.com";
const PER_PAGE: usize = 100;
const USER_AGENT: &str = concat!("orgstat/", env!("CARGO_PKG_VERSION"));

/// Minimal GitHub REST v3 client for the three endpoints the report needs:
/// organization members, organization repositories, and per-repository
/// contributor statistics.
pub struct GithubClient<'a> {
    http: Client,
    token: String,
    base_url: String,
    log: &'a Logger,
}

impl<'a> GithubClient<'a> {
    pub fn new(token: impl Into<String>, log: &'a Logger) -> Self {
        Self {
            http: Client::new(),
            token: token.into(),
            base_url: API_ROOT.to_string(),
            log,
        }
    }

    /// Overrides the API root, for GitHub Enterprise installs.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// All current members of the organization, across pages.
    pub fn org_members(&self, org: &str) -> Result<Vec<OrgMember>> {
        self.log.debug(&format!("Fetching members of {org}"));
        self.paginate(
            &format!("/orgs/{org}/members"),
            &[("filter", "all"), ("role", "all")],
        )
    }

    /// All repositories of the organization, across pages.
    pub fn org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        self.log.debug(&format!("Fetching repositories of {org}"));
        self.paginate(&format!("/orgs/{org}/repos"), &[("type", "all")])
    }

    /// Weekly contributor statistics for one repository. GitHub answers 202
    /// (or a non-array body) while it is still computing the statistics;
    /// `None` is returned in that case and the repository should be skipped.
    pub fn contributor_stats(
        &self,
        org: &str,
        repo: &str,
    ) -> Result<Option<Vec<ContributorStats>>> {
        let resp = self.get(&format!("/repos/{org}/{repo}/stats/contributors"), &[])?;
        let status = resp.status();
        if status == StatusCode::ACCEPTED || status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(api_error(resp));
        }
        let body: serde_json::Value = resp.json()?;
        if !body.is_array() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(body)?))
    }

    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{path}", self.base_url.trim_end_matches('/'));
        let resp = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .send()?;
        Ok(resp)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let resp = self.get(path, query)?;
        if !resp.status().is_success() {
            return Err(api_error(resp));
        }
        Ok(resp.json()?)
    }

    /// Walks the page parameter until a short page signals the end.
    fn paginate<T: DeserializeOwned>(&self, path: &str, extra: &[(&str, &str)]) -> Result<Vec<T>> {
        let per_page = PER_PAGE.to_string();
        let mut all = Vec::new();
        let mut page = 1usize;
        loop {
            let page_str = page.to_string();
            let mut query: Vec<(&str, &str)> =
                vec![("per_page", per_page.as_str()), ("page", page_str.as_str())];
            query.extend_from_slice(extra);

            let batch: Vec<T> = self.get_json(path, &query)?;
            let done = batch.len() < PER_PAGE;
            all.extend(batch);
            if done {
                return Ok(all);
            }
            page += 1;
        }
    }
}

fn api_error(resp: Response) -> OrgstatError {
    let url = resp.url().to_string();
    let status = resp.status().as_u16();
    let body = resp.text().unwrap_or_default();
    OrgstatError::Api { url, status, body }
}
