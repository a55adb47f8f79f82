//! Document Updating
//!
//! Splices the rendered tree into the README between its marker lines and
//! writes the sidebar file. Failures never propagate past an operation:
//! each one answers with a success flag so a run always reaches its final
//! summary.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::constants::readme::{END_MARKER, README_FILE, START_MARKER};
use crate::constants::sidebar::SIDEBAR_FILE;
use crate::render::{SidebarBuilder, TreeRenderer};
use crate::scanner::PathFilter;
use crate::types::{DocError, Result};

pub struct DocumentUpdater {
    root: PathBuf,
    filter: PathFilter,
}

impl DocumentUpdater {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            filter: PathFilter::new(),
        }
    }

    /// Regenerate the tree block inside `README.md`.
    ///
    /// Returns `false` (after reporting) when the README is missing or the
    /// rewrite fails; both outputs are whole-file overwrites, so a re-run
    /// over an unchanged tree is byte-identical.
    pub fn update_readme(&self) -> bool {
        match self.try_update_readme() {
            Ok(()) => {
                info!("README tree block refreshed");
                true
            }
            Err(err) => {
                warn!("README update failed: {err}");
                false
            }
        }
    }

    fn try_update_readme(&self) -> Result<()> {
        let readme_path = self.root.join(README_FILE);
        if !readme_path.exists() {
            return Err(DocError::MissingReadme { path: readme_path });
        }

        let content = fs::read_to_string(&readme_path)?;
        let tree = TreeRenderer::new(self.filter).render(&self.root);
        fs::write(&readme_path, splice_tree(&content, &tree))?;
        Ok(())
    }

    /// Write the sidebar file, overwriting any existing content.
    pub fn create_sidebar(&self) -> bool {
        match self.try_create_sidebar() {
            Ok(()) => {
                info!("sidebar written");
                true
            }
            Err(err) => {
                warn!("sidebar generation failed: {err}");
                false
            }
        }
    }

    fn try_create_sidebar(&self) -> Result<()> {
        let sidebar = SidebarBuilder::new(self.filter).render(&self.root);
        fs::write(self.root.join(SIDEBAR_FILE), sidebar)?;
        Ok(())
    }
}

/// Replace the region strictly between the markers, or append a fresh
/// marked block when either marker is missing.
fn splice_tree(content: &str, tree: &str) -> String {
    match (content.find(START_MARKER), content.find(END_MARKER)) {
        (Some(start), Some(end)) => {
            let before = &content[..start + START_MARKER.len()];
            let after = &content[end..];
            format!("{before}\n{tree}\n{after}")
        }
        _ => format!("{content}\n\n{START_MARKER}\n{tree}\n{END_MARKER}\n"),
    }
}
