//! Handler for the `delete` command.

use serde_json::json;

use crate::adapter::inbound::cli::roster::TableView;
use crate::adapter::inbound::cli::{output, prompt};
use crate::application::form::delete::{DELETE_ACKNOWLEDGMENT, DeleteForm, DeleteOutcome};
use crate::application::roster::RosterController;
use crate::domain::id::StudentId;
use crate::error::Result;
use crate::port::inbound::view::Confirm;
use crate::port::outbound::store::StudentStore;

/// Execute `delete`.
///
/// `--yes` answers the confirmation up front. Otherwise the question is put
/// to the terminal; with no terminal the answer is "no".
pub fn execute<S: StudentStore>(
    controller: &RosterController<S>,
    id: StudentId,
    yes: bool,
) -> Result<()> {
    let selected = controller.select(id)?;
    let interactive = prompt::is_interactive();

    if interactive && !yes {
        output::section("Delete Student");
        output::field("Id", selected.id);
        output::field("Name", selected.name());
        output::field("Course", selected.course());
        output::field("Mobile", selected.mobile());
        println!();
    }

    let mut answer = yes;
    let mut terminal = prompt::TerminalConfirm;
    let confirm: &mut dyn Confirm = if yes || !interactive {
        &mut answer
    } else {
        &mut terminal
    };

    let mut view = TableView::new();
    let outcome = DeleteForm::from_selection(&selected).submit(controller, confirm, &mut view)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "delete",
            "status": match outcome {
                DeleteOutcome::Deleted => "deleted",
                DeleteOutcome::Cancelled => "cancelled",
                DeleteOutcome::Missing => "missing",
            },
            "id": id,
        }));
        return Ok(());
    }

    match outcome {
        DeleteOutcome::Deleted => {
            output::success(DELETE_ACKNOWLEDGMENT);
            view.print("delete");
        }
        DeleteOutcome::Missing => {
            output::warning(&format!("Student {id} no longer exists; nothing was deleted"));
            view.print("delete");
        }
        DeleteOutcome::Cancelled => {
            output::warning("Delete cancelled");
            if !interactive {
                output::hint("pass --yes to delete without a terminal");
            }
        }
    }
    Ok(())
}
