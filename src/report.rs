use crate::cache::DataDir;
use crate::cli::Cli;
use crate::github::GithubClient;
use crate::log::Logger;
use crate::model::Repository;
use crate::stats::{OrgStats, RepoStats};
use anyhow::{bail, Context};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;

pub fn exec(args: Cli) -> anyhow::Result<()> {
    let log = Logger::new(args.verbose);

    let data = DataDir::new(&args.data, &args.org)
        .context("Failed to initialize data directory")?;
    log.debug(&format!("Using data directory: {}", data.path().display()));

    let mut org_stats = if args.cached && data.has_snapshot() {
        log.info(&format!("Restoring cached stats for {}", args.org));
        data.load_snapshot()
            .context("Failed to restore cached org snapshot")?
    } else {
        collect(&args, &data, &log).context("Failed to collect organization stats")?
    };

    org_stats
        .filter(
            args.repo_include_filter.as_deref(),
            args.repo_exclude_filter.as_deref(),
        )
        .context("Failed to apply repository filters")?;

    if args.json {
        crate::export::output_json(&org_stats, &args)?;
    } else if args.ndjson {
        crate::export::output_ndjson(&org_stats)?;
    } else {
        crate::export::output_table(&org_stats, &args.org)?;
    }

    if let Some(path) = &args.output_file {
        crate::export::write_report(&org_stats, &args, path)
            .context("Failed to write report file")?;
        log.info(&format!("Wrote report: {}", path.display()));

        if args.open {
            open::that(path).context("Failed to open report file")?;
        }
    } else if args.open {
        log.warn("--open ignored: no --output-file given");
    }

    Ok(())
}

/// Fetches members, repositories, and per-repository contributor stats, then
/// folds everything into an OrgStats and persists the snapshot. Aggregation
/// only starts once every repository has been fetched or skipped.
fn collect(args: &Cli, data: &DataDir, log: &Logger) -> anyhow::Result<OrgStats> {
    let token = match args
        .token
        .clone()
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
    {
        Some(token) => token,
        None => bail!("No GitHub token; pass --token or set GITHUB_TOKEN"),
    };
    let client = GithubClient::new(token, log);

    let members = client
        .org_members(&args.org)
        .context("Failed to list organization members")?;
    data.write_members(&members)?;
    let member_logins: HashSet<&str> = members.iter().map(|m| m.login.as_str()).collect();
    log.debug(&format!("{} organization members", member_logins.len()));

    let repos = client
        .org_repos(&args.org)
        .context("Failed to list organization repositories")?;
    log.debug(&format!("{} repositories", repos.len()));
    for repo in &repos {
        data.write_repo(repo)?;
    }

    let pb = progress_bar(repos.len() as u64);
    let mut repo_stats = Vec::new();
    for repo in &repos {
        pb.set_message(repo.full_name.clone());
        match fetch_repo_stats(&client, &args.org, data, repo, &member_logins) {
            Ok(Some(stats)) => repo_stats.push(stats),
            Ok(None) => log.warn(&format!(
                "No stats available for {}, skipping",
                repo.full_name
            )),
            Err(err) => log.warn(&format!("Unable to get stats for {}: {err}", repo.full_name)),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let org_stats = OrgStats::new(repo_stats);
    data.write_snapshot(&org_stats)?;
    Ok(org_stats)
}

fn fetch_repo_stats(
    client: &GithubClient<'_>,
    org: &str,
    data: &DataDir,
    repo: &Repository,
    member_logins: &HashSet<&str>,
) -> anyhow::Result<Option<RepoStats>> {
    let Some(stats) = client.contributor_stats(org, &repo.name)? else {
        return Ok(None);
    };
    data.write_repo_stats(&repo.name, &stats)?;

    // Non-members are dropped here; the engine assumes every input login
    // already belongs to the organization.
    let member_records: Vec<_> = stats
        .into_iter()
        .filter(|record| member_logins.contains(record.author.login.as_str()))
        .collect();

    Ok(Some(RepoStats::new(repo, &member_records)))
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}
