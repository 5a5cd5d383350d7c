//! Handler for the `edit` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::EditArgs;
use crate::adapter::inbound::cli::roster::TableView;
use crate::adapter::inbound::cli::{output, prompt};
use crate::application::form::edit::{EditForm, EditOutcome};
use crate::application::roster::RosterController;
use crate::domain::course::CourseList;
use crate::error::Result;
use crate::port::outbound::store::StudentStore;

/// Execute `edit`: select the row, overwrite its fields, reload.
pub fn execute<S: StudentStore>(
    controller: &RosterController<S>,
    courses: &CourseList,
    args: &EditArgs,
) -> Result<()> {
    let selected = controller.select(args.id)?;
    let mut form = EditForm::from_selection(&selected);
    form.details =
        prompt::fill_details(&args.fields, form.details, courses, prompt::is_interactive())?;

    let mut view = TableView::new();
    let id = form.id();
    let details = form.details.clone();
    let outcome = form.submit(controller, &mut view)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "edit",
            "status": match outcome {
                EditOutcome::Updated => "updated",
                EditOutcome::Missing => "missing",
            },
            "id": id,
            "student": details,
        }));
        return Ok(());
    }

    match outcome {
        EditOutcome::Updated => {
            output::success(&format!("Updated student {}", output::highlight(id)));
        }
        EditOutcome::Missing => {
            output::warning(&format!("Student {id} no longer exists; nothing was changed"));
        }
    }
    view.print("edit");
    Ok(())
}
