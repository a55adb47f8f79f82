//! Global Constants
//!
//! Centralized constants for filtering, file naming, and output paths.
//! The tool is deliberately configuration-free: everything tunable lives
//! here as a compiled-in value.

/// Path filtering constants
pub mod filter {
    /// Names excluded from every output.
    ///
    /// Also matched as substrings of the full path, so anything nested
    /// under a denylisted directory is excluded along with it.
    pub const IGNORE_PATTERNS: &[&str] = &[
        ".git",
        ".github",
        "node_modules",
        "__pycache__",
        "tree.bak",
        ".nojekyll",
        "generate_tree.py",
        "index.html",
        "_sidebar.md",
        ".gitignore",
    ];

    /// Dotfiles exempt from the leading-dot rule.
    pub const ALLOWED_DOTFILES: &[&str] = &[".nojekyll"];
}

/// README update constants
pub mod readme {
    /// File rewritten in place with the generated tree.
    pub const README_FILE: &str = "README.md";

    /// Start of the auto-generated region.
    pub const START_MARKER: &str = "<!-- readme-tree start -->";

    /// End of the auto-generated region.
    pub const END_MARKER: &str = "<!-- readme-tree end -->";
}

/// Sidebar generation constants
pub mod sidebar {
    /// Output file, fully overwritten each run.
    pub const SIDEBAR_FILE: &str = "_sidebar.md";

    /// Fallback folder scanned when no year directories sit at the root
    /// ("past exam problems").
    pub const EXAM_ARCHIVE_DIR: &str = "真题";

    /// Cross-year assessment folder, rendered as its own section
    /// ("comprehensive assessment").
    pub const ASSESSMENT_DIR: &str = "综合测评";

    /// Fixed header lines.
    pub const HOME_LINK: &str = "* [**首页**](/)";
    pub const USAGE_LINK: &str = "* [**使用说明**](#使用说明)";

    /// Fallback line for an unreadable year directory.
    pub const YEAR_ACCESS_ERROR: &str = "  * 无法访问此年份的文件";

    /// Fallback line for an unreadable assessment directory.
    pub const ASSESSMENT_ACCESS_ERROR: &str = "  * 无法访问综合测评文件";
}
