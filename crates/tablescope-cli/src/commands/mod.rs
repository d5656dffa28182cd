//! CLI command implementations.

pub mod extract;
pub mod profile;
pub mod respond;

use std::path::Path;

use colored::Colorize;
use tablescope::{ColumnProfile, ColumnStats, DatasetProfile, IssueType};

/// Read a text file, naming the path on failure.
pub(crate) fn read_text(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
}

/// Print a human-readable profile.
pub(crate) fn print_profile(profile: &DatasetProfile) {
    println!(
        "{} {} rows, {} columns ({})",
        "Dataset:".cyan().bold(),
        profile.row_count.to_string().white().bold(),
        profile.column_count.to_string().white().bold(),
        profile.fingerprint.dimmed()
    );
    println!();

    println!("{}", "Columns:".yellow().bold());
    for column in &profile.columns {
        print_column(column);
    }
    println!();

    let digest = profile.digest();
    if digest.is_blocking() {
        println!("{}", "Issues:".red().bold());
        for issue_type in [IssueType::InconsistentRowLength, IssueType::MixedDataType] {
            let count = profile
                .issues
                .iter()
                .filter(|i| i.issue_type == issue_type)
                .count();
            if count > 0 {
                println!("  {}: {}", issue_type.label(), count.to_string().red());
            }
        }
        for line in digest.to_string().lines() {
            println!("  {}", line);
        }
    } else {
        println!("{}", digest.to_string().green());
    }
}

fn print_column(column: &ColumnProfile) {
    let missing = if column.has_missing_values {
        format!(
            "{} missing ({:.1}%)",
            column.missing_count,
            column.missing_percentage()
        )
        .yellow()
    } else {
        "complete".green()
    };

    println!(
        "  {} [{}] {}",
        column.name.white().bold(),
        column.column_type.to_string().cyan(),
        missing
    );

    match &column.stats {
        Some(ColumnStats::Numeric(stats)) => println!(
            "      mean {} | median {} | std {} | min {} | max {}",
            stats.mean, stats.median, stats.std_dev, stats.min, stats.max
        ),
        Some(ColumnStats::Categorical(stats)) => {
            let top: Vec<String> = stats
                .value_counts
                .iter()
                .take(5)
                .map(|(value, count)| format!("{} ({})", value, count))
                .collect();
            let more = stats.unique_values.saturating_sub(top.len());
            if more > 0 {
                println!("      {} ... +{} more", top.join(", "), more);
            } else {
                println!("      {}", top.join(", "));
            }
        }
        None => {}
    }
}
