use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrgstatError>;

#[derive(Error, Debug)]
pub enum OrgstatError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GitHub API error: {status} for {url}: {body}")]
    Api {
        url: String,
        status: u16,
        body: String,
    },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}
