use crate::cli::Cli;
use crate::model::{ReportOutput, SCHEMA_VERSION};
use crate::stats::{MemberStats, OrgStats};
use anyhow::Result;
use chrono::Utc;
use console::style;
use std::collections::BTreeMap;
use std::path::Path;

pub fn output_json(org_stats: &OrgStats, args: &Cli) -> Result<()> {
    let report = report_document(org_stats, args);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn output_ndjson(org_stats: &OrgStats) -> Result<()> {
    for member in org_stats.members.values() {
        println!("{}", serde_json::to_string(member)?);
    }
    Ok(())
}

pub fn write_report(org_stats: &OrgStats, args: &Cli, path: &Path) -> Result<()> {
    let report = report_document(org_stats, args);
    std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

/// Org-wide table first, then one table per repository that has members,
/// then the organization totals. Mirrors the shape of the old spreadsheet
/// report: ownership sorted descending, percentages as `NN.NN%`.
pub fn output_table(org_stats: &OrgStats, org: &str) -> Result<()> {
    println!("{}", style(format!("Org {org}")).bold());
    print_members_table(&org_stats.members);
    println!();

    for repo in org_stats.repos.iter().filter(|r| !r.members.is_empty()) {
        println!("{}", style(&repo.name).bold());
        print_members_table(&repo.members);
        println!("Total lines added: {}\n", style(repo.additions).cyan());
    }

    println!("{}", "─".repeat(62));
    println!("GitHub organization: {org}");
    println!(
        "Total lines added: {}",
        style(org_stats.additions).cyan()
    );
    println!("Total commits: {}", style(org_stats.commits).cyan());
    Ok(())
}

fn report_document(org_stats: &OrgStats, args: &Cli) -> ReportOutput {
    ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        org: args.org.clone(),
        include_filter: args.repo_include_filter.clone(),
        exclude_filter: args.repo_exclude_filter.clone(),
        stats: org_stats.clone(),
    }
}

fn print_members_table(members: &BTreeMap<String, MemberStats>) {
    println!(
        "{:<24} {:>10} {:>12} {:>10}",
        style("name").bold(),
        style("ownership").bold(),
        style("lines").bold(),
        style("commits").bold()
    );
    println!("{}", "─".repeat(62));
    for member in by_percentage(members) {
        println!(
            "{:<24} {:>9.2}% {:>12} {:>10}",
            member.login,
            member.percentage * 100.0,
            member.additions,
            member.commits
        );
    }
}

fn by_percentage(members: &BTreeMap<String, MemberStats>) -> Vec<&MemberStats> {
    let mut sorted: Vec<_> = members.values().collect();
    sorted.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    sorted
}
