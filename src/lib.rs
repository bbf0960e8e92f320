//! Sift: lazy filesystem listing and line scanning
//!
//! Directory listing with depth limits and filters, single-file grep,
//! recursive content search, line counting, and head/tail extraction. Every
//! operation returns an iterator; nothing past what the caller pulls is read.

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod scan;
pub mod search;
pub mod strict;
pub mod tooling;
pub mod tree;
pub mod types;

pub use error::FsError;
pub use filter::{Filter, FilterSpec};
pub use scan::{grep, grep_with, head, line_count, lines, tail, GrepOptions};
pub use search::{grep_rl, ContentMatches};
pub use tree::{list, ListOptions, UnreadableDir, Walk, WalkerConfig};
pub use types::{Depth, Line, Recursive};
