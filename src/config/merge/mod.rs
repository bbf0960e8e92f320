//! Merge policy: defaults seeded into the builder before any source.

pub mod service;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

pub(crate) fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("list.recursive", true)?
        .set_default("list.show_dirs", false)?
        .set_default("list.follow_symlinks", true)?
        .set_default("list.on_unreadable_dir", "fail")?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
