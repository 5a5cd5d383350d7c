//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "status": "created",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!("2. Run: rollcall config show -c {}", path.display()));
    Ok(())
}

/// Execute `config show` for the fully resolved `config`.
pub fn execute_show(config: &Config, source: Option<&Path>) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "source": source.map(|p| p.display().to_string()),
            "config": serde_json::to_value(config)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    match source {
        Some(path) => output::field("File", path.display()),
        None => output::field("File", output::muted("(defaults)")),
    }
    output::field("Database", &config.database);

    output::section("Courses");
    for (index, course) in config.roster.courses.as_slice().iter().enumerate() {
        if index == 0 {
            output::note(&format!("- {course} (preselected)"));
        } else {
            output::note(&format!("- {course}"));
        }
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}
