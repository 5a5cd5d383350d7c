//! Command dispatch: resolve configuration, wire the roster, run a handler.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use crate::adapter::inbound::cli::diagnostic::{self, ConfigDiagnostic};
use crate::adapter::inbound::cli::{about, add, config, delete, edit, paths, roster, search};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Run the parsed command line.
///
/// # Errors
/// Returns the first error raised while loading configuration, opening the
/// database or running the command.
pub fn execute(cli: Cli) -> Result<()> {
    if let Some(Commands::Config(ConfigCommand::Init(args))) = &cli.command {
        let path = cli.config.clone().unwrap_or_else(paths::default_config);
        return config::execute_init(&path, args.force);
    }

    let (settings, source) = resolve_config(&cli)?;
    settings.init_logging(cli.verbose);
    debug!(
        database = %settings.database,
        source = ?source,
        "Configuration resolved"
    );

    let command = cli.command.unwrap_or(Commands::List);
    if let Commands::Config(ConfigCommand::Show) = command {
        return config::execute_show(&settings, source.as_deref());
    }
    if let Commands::About = command {
        about::execute();
        return Ok(());
    }

    let controller = bootstrap::build_roster(&settings)?;
    let courses = &settings.roster.courses;
    match command {
        Commands::List => roster::execute(&controller),
        Commands::Add(args) => add::execute(&controller, courses, &args),
        Commands::Search(args) => search::execute(&controller, &args.name),
        Commands::Edit(args) => edit::execute(&controller, courses, &args),
        Commands::Delete(args) => delete::execute(&controller, args.id, args.yes),
        Commands::About | Commands::Config(_) => Ok(()),
    }
}

/// Load configuration and apply overrides.
///
/// An explicit `--config` must exist; the default file is optional. The
/// database path is then taken from `ROLLCALL_DATABASE` and `--db`, in
/// rising order of precedence.
fn resolve_config(cli: &Cli) -> Result<(Config, Option<PathBuf>)> {
    let (mut settings, source) = match &cli.config {
        Some(path) => (load_file(path)?, Some(path.clone())),
        None => {
            let path = paths::default_config();
            if path.exists() {
                (load_file(&path)?, Some(path))
            } else {
                (Config::default(), None)
            }
        }
    };

    settings.apply_env_overrides();
    settings.override_database(cli.db.as_ref().map(|p| p.display().to_string()));
    Ok((settings, source))
}

/// Load `path`, rendering TOML syntax errors against the file content.
fn load_file(path: &Path) -> Result<Config> {
    Config::load(path).map_err(|err| {
        if let Error::Config(ConfigError::Parse(parse)) = &err {
            report_parse_error(path, parse);
        }
        err
    })
}

fn report_parse_error(path: &Path, error: &toml::de::Error) {
    let Ok(content) = std::fs::read_to_string(path) else {
        return;
    };
    let name = path.display().to_string();
    if let Some(diagnostic) = ConfigDiagnostic::from_toml(&name, &content, error) {
        diagnostic::report(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let cli = Cli::parse_from(["rollcall", "--config", missing.to_str().unwrap(), "list"]);

        let result = resolve_config(&cli);

        assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
    }

    #[test]
    fn db_flag_beats_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database = \"from-file.db\"\n").unwrap();
        let cli = Cli::parse_from([
            "rollcall",
            "--config",
            path.to_str().unwrap(),
            "--db",
            "from-flag.db",
        ]);

        let (settings, source) = resolve_config(&cli).unwrap();

        assert_eq!(settings.database, "from-flag.db");
        assert_eq!(source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn config_file_is_used_without_db_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "database = \"from-file.db\"\n[roster]\ncourses = [\"Chemistry\"]\n",
        )
        .unwrap();
        let cli = Cli::parse_from(["rollcall", "--config", path.to_str().unwrap()]);

        let (settings, _) = resolve_config(&cli).unwrap();

        if std::env::var(crate::infrastructure::config::settings::DATABASE_ENV).is_err() {
            assert_eq!(settings.database, "from-file.db");
        }
        assert_eq!(settings.roster.courses.as_slice(), &["Chemistry"]);
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[roster\n").unwrap();

        let result = load_file(&path);

        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
