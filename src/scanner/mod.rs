pub mod filter;
pub mod naming;

pub use filter::PathFilter;
pub use naming::{ProblemInfo, ProblemLabel};
