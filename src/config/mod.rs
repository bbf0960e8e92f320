//! Configuration
//!
//! `SiftConfig` holds the default listing options and the logging setup.
//! Sources are merged by [`merge::service::MergeService`] in precedence
//! order: built-in defaults, user config file, explicit file, environment.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::tree::ListOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiftConfig {
    #[serde(default)]
    pub list: ListOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}
