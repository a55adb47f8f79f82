//! Sidebar Command
//!
//! Print the rendered sidebar document to stdout without touching any
//! file.

use std::path::Path;

use crate::render::SidebarBuilder;
use crate::scanner::PathFilter;
use crate::types::Result;

pub fn run(root: &Path) -> Result<()> {
    let sidebar = SidebarBuilder::new(PathFilter::new()).render(root);
    print!("{sidebar}");
    Ok(())
}
