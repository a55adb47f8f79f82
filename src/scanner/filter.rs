//! Path Filtering
//!
//! Decides whether a filesystem entry is excluded from every generated
//! output: the README tree, the sidebar, and the statistics sweep all
//! consult the same filter, so an ignored entry never surfaces anywhere.

use std::path::Path;

use crate::constants::filter::{ALLOWED_DOTFILES, IGNORE_PATTERNS};

/// Entry filter shared by all traversals.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathFilter;

impl PathFilter {
    pub fn new() -> Self {
        Self
    }

    /// Check whether an entry is excluded from all outputs.
    ///
    /// Rules, any of which excludes the entry:
    /// - the name starts with `.` and is not an allowed dotfile;
    /// - the name exactly matches a denylisted name;
    /// - the full path string contains a denylisted name as a substring.
    ///
    /// The containment rule is coarse: a legitimate file whose name merely
    /// contains a denylisted substring is excluded too. Kept for output
    /// compatibility with existing archives.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        if name.starts_with('.') && !ALLOWED_DOTFILES.contains(&name) {
            return true;
        }

        if IGNORE_PATTERNS.contains(&name) {
            return true;
        }

        let path_str = path.to_string_lossy();
        IGNORE_PATTERNS
            .iter()
            .any(|pattern| path_str.contains(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotfiles_ignored() {
        let filter = PathFilter::new();
        assert!(filter.is_ignored(Path::new("2023/.DS_Store")));
        assert!(filter.is_ignored(Path::new(".vscode")));
    }

    #[test]
    fn test_nojekyll_caught_by_denylist() {
        // Exempt from the leading-dot rule but still on the denylist.
        let filter = PathFilter::new();
        assert!(filter.is_ignored(Path::new(".nojekyll")));
    }

    #[test]
    fn test_denylisted_names() {
        let filter = PathFilter::new();
        assert!(filter.is_ignored(Path::new("node_modules")));
        assert!(filter.is_ignored(Path::new("docs/index.html")));
        assert!(filter.is_ignored(Path::new("_sidebar.md")));
        assert!(filter.is_ignored(Path::new("tree.bak")));
    }

    #[test]
    fn test_substring_containment() {
        // Containment matches anywhere in the path, including inside a
        // longer file name.
        let filter = PathFilter::new();
        assert!(filter.is_ignored(Path::new("backup/node_modules_old/a.pdf")));
        assert!(filter.is_ignored(Path::new("notes/my_index.html.txt")));
    }

    #[test]
    fn test_regular_entries_kept() {
        let filter = PathFilter::new();
        assert!(!filter.is_ignored(Path::new("2023")));
        assert!(!filter.is_ignored(Path::new("2023/A题_信号发生器.pdf")));
        assert!(!filter.is_ignored(Path::new("综合测评/2021年试题.pdf")));
        assert!(!filter.is_ignored(Path::new("README.md")));
    }
}
