//! Caller-facing listing options.
//!
//! `ListOptions` is the serializable form accepted from configuration files,
//! environment overrides and the CLI. It is validated into a [`WalkerConfig`]
//! before any filesystem access happens.

use super::walker::{UnreadableDir, WalkerConfig};
use crate::error::FsError;
use crate::filter::{Filter, FilterSpec};
use crate::types::Recursive;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// `true` (unbounded), `false` (no descent) or a depth bound.
    #[serde(default)]
    pub recursive: Recursive,

    #[serde(default)]
    pub filter: Option<FilterSpec>,

    /// Yield directories found at the depth boundary.
    #[serde(default)]
    pub show_dirs: bool,

    #[serde(default = "default_true")]
    pub follow_symlinks: bool,

    #[serde(default)]
    pub on_unreadable_dir: UnreadableDir,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            recursive: Recursive::default(),
            filter: None,
            show_dirs: false,
            follow_symlinks: default_true(),
            on_unreadable_dir: UnreadableDir::default(),
        }
    }
}

impl ListOptions {
    pub fn into_walker_config(self) -> Result<WalkerConfig, FsError> {
        let filter = match self.filter {
            Some(spec) => Filter::try_from(spec)?,
            None => Filter::All,
        };
        Ok(WalkerConfig {
            max_depth: self.recursive.into(),
            filter,
            include_directories: self.show_dirs,
            follow_symlinks: self.follow_symlinks,
            on_unreadable_dir: self.on_unreadable_dir,
        })
    }
}
