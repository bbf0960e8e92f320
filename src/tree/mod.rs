//! Directory tree traversal: listing options and the lazy walker.

pub mod options;
pub mod walker;

pub use options::ListOptions;
pub use walker::{list, UnreadableDir, Walk, WalkerConfig};
