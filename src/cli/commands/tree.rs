//! Tree Command
//!
//! Print the rendered README tree block to stdout without touching any
//! file.

use std::path::Path;

use crate::render::TreeRenderer;
use crate::scanner::PathFilter;
use crate::types::Result;

pub fn run(root: &Path) -> Result<()> {
    let tree = TreeRenderer::new(PathFilter::new()).render(root);
    println!("{tree}");
    Ok(())
}
