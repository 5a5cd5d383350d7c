//! Roster table rendering and the `list` command.

use serde_json::{json, Value};
use tabled::{Table, Tabled};
use tracing::debug;

use crate::adapter::inbound::cli::output;
use crate::application::roster::RosterController;
use crate::domain::roster::{CellRef, Column, Highlight, Roster};
use crate::error::Result;
use crate::port::inbound::view::RosterView;
use crate::port::outbound::store::StudentStore;

#[derive(Tabled)]
struct RosterRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Course")]
    course: String,
    #[tabled(rename = "Mobile")]
    mobile: String,
}

/// Terminal view of the roster.
///
/// Holds whatever the last reload handed it; forms refresh it after every
/// mutation and the command prints it afterwards.
#[derive(Debug, Default)]
pub struct TableView {
    roster: Roster,
}

impl TableView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Print the current roster with nothing marked.
    pub fn print(&self, command: &str) {
        print_roster(command, &self.roster, &Highlight::default());
    }
}

impl RosterView for TableView {
    fn refresh(&mut self, roster: Roster) {
        debug!(rows = roster.len(), "Table view refreshed");
        self.roster = roster;
    }
}

fn cell(roster: &Roster, highlight: &Highlight, row: usize, column: Column) -> String {
    let cell = CellRef::new(row, column);
    let text = roster.cell_text(cell).unwrap_or_default();
    if highlight.contains(cell) {
        output::marked(text)
    } else {
        text.into_owned()
    }
}

/// Render `roster` as a table, marking the cells in `highlight`.
#[must_use]
pub fn render(roster: &Roster, highlight: &Highlight) -> String {
    let rows = (0..roster.len()).map(|row| RosterRow {
        id: cell(roster, highlight, row, Column::Id),
        name: cell(roster, highlight, row, Column::Name),
        course: cell(roster, highlight, row, Column::Course),
        mobile: cell(roster, highlight, row, Column::Mobile),
    });
    Table::new(rows).to_string()
}

/// JSON document for a roster-producing command.
#[must_use]
pub fn roster_json(command: &str, roster: &Roster) -> Value {
    json!({
        "command": command,
        "count": roster.len(),
        "students": roster.rows(),
    })
}

/// Print `roster` as a table, or as one JSON document in `--json` mode.
pub fn print_roster(command: &str, roster: &Roster, highlight: &Highlight) {
    if output::is_json() {
        output::json_output(roster_json(command, roster));
        return;
    }
    if output::is_quiet() {
        return;
    }

    output::section("Students");
    if roster.is_empty() {
        output::note("(no students)");
        return;
    }
    output::lines(&render(roster, highlight));
    output::field("Total", roster.len());
}

/// Execute `list`: reload and print the roster.
pub fn execute<S: StudentStore>(controller: &RosterController<S>) -> Result<()> {
    let mut view = TableView::new();
    controller.reload(&mut view)?;
    view.print("list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::StudentId;
    use crate::domain::student::{Student, StudentDetails};

    fn roster() -> Roster {
        Roster::new(vec![
            Student::new(StudentId::new(1), StudentDetails::new("Ann", "Math", "5551234")),
            Student::new(StudentId::new(2), StudentDetails::new("Bob", "Biology", "")),
        ])
    }

    #[test]
    fn render_shows_headers_and_rows() {
        let table = render(&roster(), &Highlight::default());
        for text in ["Id", "Name", "Course", "Mobile", "Ann", "Biology", "5551234"] {
            assert!(table.contains(text), "missing {text} in\n{table}");
        }
        assert!(!table.contains('*'));
    }

    #[test]
    fn render_marks_highlighted_cells_only() {
        let roster = roster();
        let highlight = roster.highlight_rows(&roster.rows()[..1]);

        let table = render(&roster, &highlight);

        assert!(table.contains("*Ann*"));
        assert!(!table.contains("*Bob*"));
        assert!(!table.contains("*Math*"));
    }

    #[test]
    fn refresh_replaces_the_shown_roster() {
        let mut view = TableView::new();
        assert!(view.roster().is_empty());

        view.refresh(roster());

        assert_eq!(view.roster(), &roster());
    }

    #[test]
    fn json_lists_every_student() {
        let value = roster_json("list", &roster());
        assert_eq!(value["command"], "list");
        assert_eq!(value["count"], 2);
        assert_eq!(value["students"][1]["name"], "Bob");
        assert_eq!(value["students"][1]["mobile"], "");
    }
}
