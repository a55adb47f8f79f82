pub mod sidebar;
pub mod tree;

pub use sidebar::SidebarBuilder;
pub use tree::TreeRenderer;
