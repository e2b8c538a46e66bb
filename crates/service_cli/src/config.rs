//! Configuration resolution for the CLI.

use fx_feed::config::FeedConfig;
use std::path::Path;

use crate::Result;

/// Load `path`, or the defaults when it does not exist; then apply
/// environment overrides and validate.
pub fn resolve(path: &Path) -> Result<FeedConfig> {
    let config = FeedConfig::load_or_default(path)?.with_env_override();
    config.validate()?;
    Ok(config)
}
