//! Handler for the `add` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::StudentFieldArgs;
use crate::adapter::inbound::cli::roster::TableView;
use crate::adapter::inbound::cli::{output, prompt};
use crate::application::form::add::AddForm;
use crate::application::roster::RosterController;
use crate::domain::course::CourseList;
use crate::error::Result;
use crate::port::outbound::store::StudentStore;

/// Execute `add`.
pub fn execute<S: StudentStore>(
    controller: &RosterController<S>,
    courses: &CourseList,
    args: &StudentFieldArgs,
) -> Result<()> {
    let mut form = AddForm::new(courses);
    form.details = prompt::fill_details(args, form.details, courses, prompt::is_interactive())?;

    let mut view = TableView::new();
    let details = form.details.clone();
    form.submit(controller, &mut view)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "add",
            "status": "added",
            "student": details,
            "count": view.roster().len(),
        }));
        return Ok(());
    }

    output::success(&format!("Added {}", output::highlight(&details.name)));
    view.print("add");
    Ok(())
}
