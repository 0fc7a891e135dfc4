//! Name matching against the registry of taken names

pub mod registry;
pub mod similarity;

// Re-export main functionality
pub use registry::{Matcher, Registry, DEFAULT_THRESHOLD};
pub use similarity::similarity;
