//! Profile command - classify columns, summarize and validate a dataset.

use std::path::PathBuf;

use tablescope::{Profiler, ProfilerConfig};

pub fn run(
    file: PathBuf,
    json_output: bool,
    config: Option<PathBuf>,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => ProfilerConfig::load(&path)?,
        None => ProfilerConfig::default(),
    };
    tracing::debug!(file = %file.display(), "profiling");

    let profile = Profiler::with_config(config).profile_file(&file)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        super::print_profile(&profile);
    }

    // Outstanding issues gate any further processing of this dataset.
    if !profile.is_clean() {
        std::process::exit(2);
    }

    Ok(())
}
