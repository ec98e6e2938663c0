use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orgstat")]
#[command(about = "Contributor ownership statistics for a GitHub organization")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "GitHub organization to report on")]
    pub org: String,

    #[arg(short, long, help = "GitHub token; falls back to GITHUB_TOKEN")]
    pub token: Option<String>,

    #[arg(long, default_value = "data", help = "Root directory for fetched JSON data")]
    pub data: PathBuf,

    #[arg(long, help = "Reuse a previously fetched snapshot if available")]
    pub cached: bool,

    #[arg(long, help = "Regex of repository names to include")]
    pub repo_include_filter: Option<String>,

    #[arg(long, help = "Regex of repository names to exclude")]
    pub repo_exclude_filter: Option<String>,

    #[arg(long, help = "Write the JSON report to this file")]
    pub output_file: Option<PathBuf>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON, one org member per line")]
    pub ndjson: bool,

    #[arg(long, help = "Open the report file when complete")]
    pub open: bool,

    #[arg(short, long, help = "Verbose output")]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::report::exec(self)
    }
}
