use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use roster_query::selftest::Report;

const DEFAULT_ROSTER: &str = "cohort_data.txt";

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER));

    let roster = roster_query::load_file(&path)
        .with_context(|| format!("loading roster {}", path.display()))?;
    log::info!("Loaded {} records from {}", roster.len(), path.display());

    let report = Report::run(&roster);
    println!(
        "{}",
        serde_json::to_string_pretty(&report.summary).context("serializing summary")?
    );

    for check in report.failed_checks() {
        for failure in &check.failures {
            log::error!("{}: {failure}", check.name);
        }
    }

    if report.passed() {
        println!("ALL TESTS PASSED");
        Ok(ExitCode::SUCCESS)
    } else {
        log::error!(
            "{} of {} checks failed",
            report.failed_checks().count(),
            report.checks.len()
        );
        Ok(ExitCode::FAILURE)
    }
}
