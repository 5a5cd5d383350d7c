//! Canonical test configurations.

use std::path::Path;

use crate::infrastructure::config::settings::Config;

/// Default configuration pointing at `database.db` inside `dir`.
pub fn in_dir(dir: &Path) -> Config {
    let mut config = Config::default();
    config.database = dir.join("database.db").display().to_string();
    config
}
