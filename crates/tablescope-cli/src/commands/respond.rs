//! Respond command - apply a response to the current dataset.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::{DatasetProfile, DatasetUpdate, Profiler};

pub fn run(
    dataset: PathBuf,
    response: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let profiler = Profiler::new();
    let current = profiler.profile_file(&dataset)?;
    let response_text = super::read_text(&response)?;

    let outcome = profiler.apply_response(&response_text);
    let active: &DatasetProfile = outcome.dataset.replacement().unwrap_or(&current);

    if json_output {
        let status = match &outcome.dataset {
            DatasetUpdate::Unchanged => serde_json::json!({ "status": "unchanged" }),
            DatasetUpdate::Replaced(_) => serde_json::json!({ "status": "replaced" }),
            DatasetUpdate::Rejected(e) => {
                serde_json::json!({ "status": "rejected", "reason": e.to_string() })
            }
        };
        let output = serde_json::json!({
            "text": outcome.text,
            "dataset": status,
            "chart": outcome.chart,
            "profile": active,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", outcome.text);
    println!();

    match &outcome.dataset {
        DatasetUpdate::Unchanged => {
            println!("{}", "No dataset in response; keeping current data.".dimmed())
        }
        DatasetUpdate::Replaced(profile) => {
            println!(
                "{} {} -> {}",
                "Dataset replaced:".green().bold(),
                current.fingerprint.dimmed(),
                profile.fingerprint
            );
        }
        DatasetUpdate::Rejected(e) => {
            println!(
                "{} {}",
                "Dataset rejected, keeping current data:".red().bold(),
                e
            );
        }
    }

    if let Some(chart) = &outcome.chart {
        println!(
            "{} {} ({} points)",
            "Chart:".yellow().bold(),
            chart.chart_type,
            chart.data.len()
        );
    }

    if verbose || outcome.dataset.replacement().is_some() {
        println!();
        super::print_profile(active);
    }

    Ok(())
}
