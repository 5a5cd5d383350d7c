//! Path utilities for rollcall.
//!
//! Settings live under `~/.rollcall/`:
//! - `~/.rollcall/config.toml` - main configuration
//!
//! The roster database itself defaults to `database.db` in the working
//! directory; see [`Config::database`](crate::infrastructure::config::settings::Config).

use std::path::PathBuf;

/// Returns the rollcall home directory (`~/.rollcall/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rollcall")
}

/// Returns the default config file path (`~/.rollcall/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_under_rollcall_home() {
        let config = default_config();

        assert!(home_dir().to_string_lossy().contains(".rollcall"));
        assert!(config.starts_with(home_dir()));
        assert_eq!(config.file_name().unwrap(), "config.toml");
    }
}
