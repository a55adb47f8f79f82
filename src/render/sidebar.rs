//! Docsify Sidebar Generation
//!
//! Builds the nested navigation list for the static-site viewer: one
//! section per year directory (newest first), plus a dedicated section for
//! the comprehensive-assessment folder. Link targets are in-page anchors
//! combining directory name and file name; they are not validated against
//! actual anchor existence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::constants::sidebar::{
    ASSESSMENT_ACCESS_ERROR, ASSESSMENT_DIR, EXAM_ARCHIVE_DIR, HOME_LINK, USAGE_LINK,
    YEAR_ACCESS_ERROR,
};
use crate::scanner::{PathFilter, ProblemLabel, naming};

/// Exactly four digits, a year folder at the root.
static YEAR_DIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("year pattern compiles"));

/// Year prefix for entries under the exam-archive fallback folder.
static YEAR_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}").expect("year prefix pattern compiles"));

/// First year-like substring anywhere in a file name.
static YEAR_ANYWHERE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("year substring pattern compiles"));

struct YearDirectory {
    name: String,
    path: PathBuf,
}

pub struct SidebarBuilder {
    filter: PathFilter,
}

impl SidebarBuilder {
    pub fn new(filter: PathFilter) -> Self {
        Self { filter }
    }

    /// Render the complete sidebar document for the archive at `root`.
    pub fn render(&self, root: &Path) -> String {
        let mut lines = vec![HOME_LINK.to_string(), USAGE_LINK.to_string(), String::new()];

        let mut years = self.year_directories(root);
        // Most recent year first.
        years.sort_by(|a, b| b.name.cmp(&a.name));

        for year in &years {
            lines.push(format!("* **{}年**", year.name));
            match self.year_files(&year.path) {
                Ok(files) => {
                    for filename in files {
                        lines.push(problem_line(&year.name, &filename));
                    }
                }
                Err(err) => {
                    debug!("cannot list year directory {}: {}", year.path.display(), err);
                    lines.push(YEAR_ACCESS_ERROR.to_string());
                }
            }
        }

        self.append_assessment_section(root, &mut lines);

        lines.join("\n") + "\n"
    }

    /// Year directories directly under the root, falling back to the exam
    /// archive folder when the root has none.
    fn year_directories(&self, root: &Path) -> Vec<YearDirectory> {
        let mut dirs = self.matching_directories(root, &YEAR_DIR_RE);
        if dirs.is_empty() {
            dirs = self.matching_directories(&root.join(EXAM_ARCHIVE_DIR), &YEAR_PREFIX_RE);
        }
        dirs
    }

    fn matching_directories(&self, parent: &Path, pattern: &Regex) -> Vec<YearDirectory> {
        let Ok(entries) = fs::read_dir(parent) else {
            return Vec::new();
        };

        let mut dirs = Vec::new();
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_dir() || self.filter.is_ignored(&path) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if pattern.is_match(&name) {
                dirs.push(YearDirectory { name, path });
            }
        }
        dirs
    }

    /// File names of one year directory: informational files first, the
    /// rest by uppercased name.
    fn year_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || self.filter.is_ignored(&path) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            files.push(name);
        }
        files.sort_by_key(|name| (!name.starts_with("0_"), name.to_uppercase()));
        Ok(files)
    }

    fn append_assessment_section(&self, root: &Path, lines: &mut Vec<String>) {
        let dir = root.join(ASSESSMENT_DIR);
        if !dir.is_dir() {
            return;
        }

        lines.push(String::new());
        lines.push(format!("* **{ASSESSMENT_DIR}**"));

        match self.assessment_files(&dir) {
            Ok(files) => {
                for filename in files {
                    lines.push(assessment_line(&filename));
                }
            }
            Err(err) => {
                debug!("cannot list assessment directory {}: {}", dir.display(), err);
                lines.push(ASSESSMENT_ACCESS_ERROR.to_string());
            }
        }
    }

    fn assessment_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && !self.filter.is_ignored(&path) {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        files.sort();
        Ok(files)
    }
}

/// One sidebar entry for a problem or informational file.
fn problem_line(year: &str, filename: &str) -> String {
    let info = naming::parse(filename);
    let link = format!("#{year}/{filename}");
    match info.label {
        ProblemLabel::Info => format!("  * [{}]({})", info.title, link),
        label => format!("  * **{label}题** - [{}]({})", info.title, link),
    }
}

/// One sidebar entry for an assessment file; a year substring in the name
/// wins over the raw stem.
fn assessment_line(filename: &str) -> String {
    let title = match YEAR_ANYWHERE_RE.find(filename) {
        Some(year) => format!("{}年综合测评", year.as_str()),
        None => naming::stem(filename).to_string(),
    };
    format!("  * [{title}](#{ASSESSMENT_DIR}/{filename})")
}
