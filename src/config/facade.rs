//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::SiftConfig;
use crate::error::FsError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the user config file (if any), then environment overrides.
    pub fn load() -> Result<SiftConfig, FsError> {
        MergeService::load(None)
    }

    /// As [`ConfigLoader::load`], with `path` layered above the user file.
    /// The file must exist.
    pub fn load_from_file(path: &Path) -> Result<SiftConfig, FsError> {
        MergeService::load(Some(path))
    }

    pub fn default() -> SiftConfig {
        SiftConfig::default()
    }
}
