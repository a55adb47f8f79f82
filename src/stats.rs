//! Corpus Statistics
//!
//! Full-tree sweep over the archive: file and directory counts, total
//! byte size, a per-extension histogram, and the set of years appearing
//! anywhere in file paths. Recomputed from scratch on every run.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use ignore::WalkBuilder;
use regex::Regex;
use serde::Serialize;

use crate::scanner::PathFilter;

/// Four digits in the 19xx/20xx range, on word boundaries.
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("year pattern compiles"));

#[derive(Debug, Default, Serialize)]
pub struct CorpusStats {
    pub total_files: usize,
    pub total_dirs: usize,
    pub total_size: u64,
    /// Years represented anywhere in file paths, ascending.
    pub years: Vec<String>,
    /// Lowercased extension (with leading dot) to file count.
    pub file_types: BTreeMap<String, usize>,
}

impl CorpusStats {
    /// Sweep the archive rooted at `root`, honoring the shared filter.
    pub fn collect(root: &Path, filter: PathFilter) -> Self {
        let mut stats = Self::default();
        let mut years = BTreeSet::new();

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| !filter.is_ignored(entry.path()))
            .build();

        for entry in walker.filter_map(|e| e.ok()) {
            if entry.depth() == 0 {
                continue;
            }
            let path = entry.path();

            if path.is_dir() {
                stats.total_dirs += 1;
                continue;
            }
            if !path.is_file() {
                continue;
            }

            stats.total_files += 1;
            *stats.file_types.entry(extension_key(path)).or_default() += 1;

            // Per-file stat errors just drop that file's size.
            if let Ok(metadata) = path.metadata() {
                stats.total_size += metadata.len();
            }

            if let Some(year) = YEAR_RE.find(&path.to_string_lossy()) {
                years.insert(year.as_str().to_string());
            }
        }

        stats.years = years.into_iter().collect();
        stats
    }

    /// Sorted (descending count) extension histogram for display.
    pub fn file_types_by_count(&self) -> Vec<(&str, usize)> {
        let mut types: Vec<(&str, usize)> = self
            .file_types
            .iter()
            .map(|(ext, count)| (ext.as_str(), *count))
            .collect();
        types.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        types
    }
}

fn extension_key(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// Human-readable byte size: B below 1 KB, then KB, then MB with one
/// decimal.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let size = bytes as f64;
    if size < KB {
        format!("{bytes} B")
    } else if size < MB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{:.1} MB", size / MB)
    }
}
