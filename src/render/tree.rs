//! README Tree Rendering
//!
//! Renders a directory into an ASCII tree with box-drawing connectors,
//! wrapped in a fenced code block with a trailing summary line. The
//! filesystem is consumed lazily via recursive listing; nothing is
//! duplicated into an in-memory tree first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::scanner::PathFilter;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const INDENT: &str = "    ";

struct ChildEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

pub struct TreeRenderer {
    filter: PathFilter,
}

impl TreeRenderer {
    pub fn new(filter: PathFilter) -> Self {
        Self { filter }
    }

    /// Render the tree rooted at `root` as a fenced text block.
    pub fn render(&self, root: &Path) -> String {
        let mut lines = vec!["```".to_string(), ".".to_string()];
        let mut dirs = 0usize;
        let mut files = 0usize;

        if !self.filter.is_ignored(root) {
            self.add_directory(root, "", &mut lines, &mut dirs, &mut files);
        }

        lines.push(String::new());
        lines.push(format!("{dirs} directories, {files} files"));
        lines.push("```".to_string());
        lines.join("\n")
    }

    fn add_directory(
        &self,
        dir: &Path,
        prefix: &str,
        lines: &mut Vec<String>,
        dirs: &mut usize,
        files: &mut usize,
    ) {
        let children = match self.visible_children(dir) {
            Ok(children) => children,
            Err(err) => {
                // Unreadable subtree contributes nothing, no partial listing.
                debug!("skipping unreadable directory {}: {}", dir.display(), err);
                return;
            }
        };

        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            lines.push(format!("{prefix}{connector}{}", child.name));

            if child.is_dir {
                *dirs += 1;
                let extension = if is_last { INDENT } else { PIPE };
                self.add_directory(
                    &child.path,
                    &format!("{prefix}{extension}"),
                    lines,
                    dirs,
                    files,
                );
            } else {
                *files += 1;
            }
        }
    }

    /// Visible children of `dir`: directories before files, then
    /// case-insensitive by name.
    fn visible_children(&self, dir: &Path) -> io::Result<Vec<ChildEntry>> {
        let mut children = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if self.filter.is_ignored(&path) {
                continue;
            }
            children.push(ChildEntry {
                is_dir: path.is_dir(),
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
            });
        }

        children.sort_by_key(|child| (!child.is_dir, child.name.to_lowercase()));
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn renderer() -> TreeRenderer {
        TreeRenderer::new(PathFilter::new())
    }

    // TempDir names start with a dot, which the filter would reject as
    // the render root.
    fn archive_root(tmp: &TempDir) -> PathBuf {
        let root = tmp.path().join("archive");
        fs::create_dir(&root).unwrap();
        root
    }

    #[test]
    fn test_directories_sort_before_files() {
        let tmp = TempDir::new().unwrap();
        let root = archive_root(&tmp);
        fs::create_dir(root.join("b")).unwrap();
        fs::create_dir(root.join("A")).unwrap();
        File::create(root.join("z.txt")).unwrap();

        let text = renderer().render(&root);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "```");
        assert_eq!(lines[1], ".");
        assert_eq!(lines[2], "├── A");
        assert_eq!(lines[3], "├── b");
        assert_eq!(lines[4], "└── z.txt");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "2 directories, 1 files");
        assert_eq!(lines[7], "```");
    }

    #[test]
    fn test_nested_prefixes() {
        let tmp = TempDir::new().unwrap();
        let root = archive_root(&tmp);
        fs::create_dir(root.join("2023")).unwrap();
        File::create(root.join("2023").join("A_题目.pdf")).unwrap();
        File::create(root.join("notes.md")).unwrap();

        let text = renderer().render(&root);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "├── 2023");
        assert_eq!(lines[3], "│   └── A_题目.pdf");
        assert_eq!(lines[4], "└── notes.md");
    }

    #[test]
    fn test_last_visible_entry_gets_terminal_connector() {
        // The ignored backup file sorts last by name but must not steal
        // the terminal connector from the last visible entry.
        let tmp = TempDir::new().unwrap();
        let root = archive_root(&tmp);
        File::create(root.join("a.pdf")).unwrap();
        File::create(root.join("tree.bak")).unwrap();

        let text = renderer().render(&root);
        assert!(text.contains("└── a.pdf"));
        assert!(!text.contains("tree.bak"));
    }

    #[test]
    fn test_ignored_directories_absent() {
        let tmp = TempDir::new().unwrap();
        let root = archive_root(&tmp);
        fs::create_dir(root.join(".git")).unwrap();
        File::create(root.join(".git").join("HEAD")).unwrap();
        fs::create_dir(root.join("2024")).unwrap();

        let text = renderer().render(&root);
        assert!(!text.contains(".git"));
        assert!(text.contains("└── 2024"));
        assert!(text.contains("1 directories, 0 files"));
    }

    #[test]
    fn test_empty_root() {
        let tmp = TempDir::new().unwrap();
        let root = archive_root(&tmp);
        let text = renderer().render(&root);
        assert_eq!(text, "```\n.\n\n0 directories, 0 files\n```");
    }

    #[test]
    fn test_render_is_deterministic() {
        let tmp = TempDir::new().unwrap();
        let root = archive_root(&tmp);
        fs::create_dir(root.join("2022")).unwrap();
        File::create(root.join("2022").join("B_放大器.pdf")).unwrap();
        File::create(root.join("README.md")).unwrap();

        let first = renderer().render(&root);
        let second = renderer().render(&root);
        assert_eq!(first, second);
    }
}
