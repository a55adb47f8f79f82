//! Generate Command
//!
//! The default run: refresh the README tree block, rewrite the sidebar,
//! and print the corpus summary. Stage failures are reported and the run
//! continues; the summary is always reached.

use std::path::Path;

use crate::cli::Output;
use crate::scanner::PathFilter;
use crate::stats::{CorpusStats, format_size};
use crate::types::Result;
use crate::updater::DocumentUpdater;

pub fn run(root: &Path) -> Result<()> {
    let out = Output::new();
    out.info("Generating file tree and sidebar...");

    let updater = DocumentUpdater::new(root);

    if updater.update_readme() {
        out.success("README.md updated");
    } else {
        out.error("README.md update failed");
    }

    if updater.create_sidebar() {
        out.success("_sidebar.md generated");
    } else {
        out.error("Sidebar generation failed");
    }

    let stats = CorpusStats::collect(root, PathFilter::new());
    print_summary(&out, &stats);

    out.success("Done");
    Ok(())
}

fn print_summary(out: &Output, stats: &CorpusStats) {
    out.section("Corpus statistics");
    println!("  Files:       {}", stats.total_files);
    println!("  Directories: {}", stats.total_dirs);
    match (stats.years.first(), stats.years.last()) {
        (Some(first), Some(last)) => {
            println!(
                "  Years:       {} ({} - {})",
                stats.years.len(),
                first,
                last
            );
        }
        _ => println!("  Years:       0 (N/A)"),
    }
    println!("  Total size:  {}", format_size(stats.total_size));

    let types: Vec<String> = stats
        .file_types_by_count()
        .into_iter()
        .map(|(ext, count)| {
            let label = if ext.is_empty() { "(none)" } else { ext };
            format!("{label}: {count}")
        })
        .collect();
    println!("  File types:  {}", types.join(", "));
}
