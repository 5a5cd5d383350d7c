//! Command-line interface definitions.
//!
//! Defines the CLI structure for rollcall using `clap`. Each roster form
//! (add, search, edit, delete) is a subcommand; running without a
//! subcommand lists the roster.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::id::StudentId;

/// Manage a roster of students stored in a local SQLite database
#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the SQLite database file (overrides config and ROLLCALL_DATABASE)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Path to the configuration file [default: ~/.rollcall/config.toml]
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the rollcall CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every student in the roster (default)
    List,

    /// Add a student
    Add(StudentFieldArgs),

    /// Find students by exact name and highlight them in the roster
    Search(SearchArgs),

    /// Edit a student's name, course and mobile number
    Edit(EditArgs),

    /// Delete a student
    Delete(DeleteArgs),

    /// Show information about rollcall
    About,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `rollcall config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
}

/// Editable student fields.
///
/// Fields left out keep their current value (edit) or start blank (add).
/// On a terminal, missing fields are prompted for.
#[derive(Parser, Debug, Default, Clone)]
pub struct StudentFieldArgs {
    /// Student name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Course; must be one of the configured courses
    #[arg(long)]
    pub course: Option<String>,

    /// Mobile number
    #[arg(short, long)]
    pub mobile: Option<String>,
}

impl StudentFieldArgs {
    /// True when no field was given on the command line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.course.is_none() && self.mobile.is_none()
    }
}

/// Arguments for the `search` subcommand.
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Exact, case-sensitive name to look for
    pub name: String,
}

/// Arguments for the `edit` subcommand.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Id of the student to edit
    pub id: StudentId,

    #[command(flatten)]
    pub fields: StudentFieldArgs,
}

/// Arguments for the `delete` subcommand.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Id of the student to delete
    pub id: StudentId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
