//! File Name Parsing
//!
//! Extracts a category label and display title from archive file names.
//! Precedence: the problem-letter pattern first, then the `0_`
//! informational prefix, then a raw fallback. Total over arbitrary input.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// `A题_标题`, `A_标题`, or `A-标题`.
static PROBLEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z])(?:题)?[_\-](.+)$").expect("problem pattern compiles"));

/// Prefix marking an informational file (notes, instructions).
const INFO_PREFIX: &str = "0_";

/// Category assigned to a parsed file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemLabel {
    /// A single uppercase problem letter.
    Letter(char),
    /// Informational file (`0_` prefix).
    Info,
    /// Anything else.
    File,
}

impl fmt::Display for ProblemLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Info => write!(f, "INFO"),
            Self::File => write!(f, "FILE"),
        }
    }
}

/// Label and display title derived from one file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInfo {
    pub label: ProblemLabel,
    pub title: String,
}

/// Parse a file name into its label and display title.
pub fn parse(filename: &str) -> ProblemInfo {
    let name = stem(filename);

    if let Some(caps) = PROBLEM_RE.captures(name)
        && let Some(letter) = caps[1].chars().next()
    {
        return ProblemInfo {
            label: ProblemLabel::Letter(letter),
            title: caps[2].replace(['_', '-'], " "),
        };
    }

    if let Some(rest) = name.strip_prefix(INFO_PREFIX) {
        return ProblemInfo {
            label: ProblemLabel::Info,
            title: rest.replace('_', " "),
        };
    }

    ProblemInfo {
        label: ProblemLabel::File,
        title: name.replace('_', " "),
    }
}

/// File name with its last extension stripped.
///
/// Leading dots are not extension separators: a name with nothing but
/// dots before the split point has no extension, so `.gitignore` and
/// `..config` keep their full names.
pub fn stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if filename[..idx].bytes().any(|b| b != b'.') => &filename[..idx],
        _ => filename,
    }
}
