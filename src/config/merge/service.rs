//! MergeService: orchestrates sources, applies merge policy, deserializes to SiftConfig.

use crate::config::sources::{environment, user_file};
use crate::config::SiftConfig;
use crate::error::FsError;
use config::File;
use std::path::Path;
use tracing::debug;

use super::builder_with_defaults;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> user file -> explicit file -> environment (highest).
    pub fn load(explicit: Option<&Path>) -> Result<SiftConfig, FsError> {
        let builder = builder_with_defaults()?;
        let builder = user_file::add_to_builder(builder)?;
        let builder = match explicit {
            Some(path) => {
                debug!(path = %path.display(), "Loading explicit config file");
                builder.add_source(File::from(path).required(true))
            }
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
