//! Handler for the `about` command.

use serde_json::json;

use crate::adapter::inbound::cli::output;

const DESCRIPTION: &str = "rollcall keeps a roster of students (name, course and \
mobile number) in a local SQLite file. Add, search, edit and delete records \
from the command line; every change reloads the roster so what you see is \
what is stored.";

/// Execute `about`.
pub fn execute() {
    if output::is_json() {
        output::json_output(json!({
            "command": "about",
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": DESCRIPTION,
        }));
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::lines(DESCRIPTION);
    output::hint("run `rollcall --help` for the list of commands");
}
