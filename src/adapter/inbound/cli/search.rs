//! Handler for the `search` command.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::roster::{print_roster, TableView};
use crate::application::form::search::SearchForm;
use crate::application::roster::RosterController;
use crate::error::Result;
use crate::port::outbound::store::StudentStore;

/// Execute `search`: show the roster with the matching names marked.
pub fn execute<S: StudentStore>(controller: &RosterController<S>, name: &str) -> Result<()> {
    let mut view = TableView::new();
    controller.reload(&mut view)?;

    let outcome = SearchForm::new(name).submit(controller, view.roster())?;

    if output::is_json() {
        output::json_output(json!({
            "command": "search",
            "query": name,
            "count": outcome.matches.len(),
            "matches": outcome.matches,
            "highlight": outcome.highlight,
        }));
        return Ok(());
    }

    print_roster("search", view.roster(), &outcome.highlight);
    match outcome.matches.len() {
        0 => {
            output::warning(&format!("No student named {}", output::highlight(name)));
            output::hint("names match exactly, including case");
        }
        1 => output::success("1 match"),
        n => output::success(&format!("{n} matches")),
    }
    Ok(())
}
