//! Example: Profile a comma-separated file with tablescope.
//!
//! Usage:
//!   cargo run --example profile -- <file_path>

use std::env;
use std::path::Path;

use tablescope::{ColumnStats, Profiler};

fn main() -> tablescope::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example profile -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    println!("Profiling: {}\n", path.display());
    let profile = Profiler::new().profile_file(path)?;

    println!("=== Dataset ===");
    println!("Rows: {}", profile.row_count);
    println!("Columns: {}", profile.column_count);
    println!("Fingerprint: {}", profile.fingerprint);

    println!("\n=== Columns ===");
    for column in &profile.columns {
        println!(
            "{:<20} {:<16} missing {}/{}",
            column.name, column.column_type, column.missing_count, column.total_rows
        );
        match &column.stats {
            Some(ColumnStats::Numeric(s)) => {
                println!("    mean={} median={} std={}", s.mean, s.median, s.std_dev)
            }
            Some(ColumnStats::Categorical(s)) => {
                if let Some((value, count)) = s.mode() {
                    println!("    {} unique, mode '{}' ({})", s.unique_values, value, count);
                }
            }
            None => {}
        }
    }

    println!("\n=== Integrity ===");
    println!("{}", profile.digest());

    Ok(())
}
