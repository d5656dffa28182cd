//! Extract command - pull dataset and chart blocks out of a response.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::PayloadExtractor;

pub fn run(
    file: PathBuf,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = super::read_text(&file)?;
    let payload = PayloadExtractor::new().extract(&response);

    if json_output {
        let output = serde_json::json!({
            "text": payload.text,
            "dataset": payload.dataset,
            "chart": payload.chart,
            "chartError": payload.chart_error.as_ref().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Text:".cyan().bold());
    println!("{}", payload.text);
    println!();

    match &payload.dataset {
        Some(dataset) => println!(
            "{} {} lines",
            "Dataset block:".yellow().bold(),
            dataset.lines().count()
        ),
        None => println!("{} none", "Dataset block:".yellow().bold()),
    }

    match (&payload.chart, &payload.chart_error) {
        (Some(chart), _) => {
            let (first, second) = chart.keys();
            println!(
                "{} {} with {} points ({}, {})",
                "Chart:".yellow().bold(),
                chart.chart_type.to_string().green(),
                chart.data.len(),
                first,
                second
            );
        }
        (None, Some(error)) => println!(
            "{} {}",
            "Chart dropped:".red().bold(),
            error.to_string().red()
        ),
        (None, None) => println!("{} none", "Chart:".yellow().bold()),
    }

    Ok(())
}
