//! Stats Command
//!
//! Corpus statistics as styled text or JSON.

use std::path::Path;

use crate::cli::Output;
use crate::scanner::PathFilter;
use crate::stats::{CorpusStats, format_size};
use crate::types::Result;

pub fn run(root: &Path, format: &str) -> Result<()> {
    let stats = CorpusStats::collect(root, PathFilter::new());

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => print_text(&stats),
    }

    Ok(())
}

fn print_text(stats: &CorpusStats) {
    let out = Output::new();
    out.section("Corpus statistics");
    println!("  Files:       {}", stats.total_files);
    println!("  Directories: {}", stats.total_dirs);
    println!("  Total size:  {}", format_size(stats.total_size));
    if stats.years.is_empty() {
        println!("  Years:       (none)");
    } else {
        println!("  Years:       {}", stats.years.join(", "));
    }
    for (ext, count) in stats.file_types_by_count() {
        let label = if ext.is_empty() { "(none)" } else { ext };
        println!("    {label}: {count}");
    }
}
