//! Roster view model.
//!
//! A [`Roster`] is a tabular projection of every stored student. It is
//! rebuilt from storage on each load and never edited in place, so it holds
//! no state of its own beyond the rows it was built from.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use super::id::StudentId;
use super::student::Student;

/// Roster columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Id,
    Name,
    Course,
    Mobile,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Id, Column::Name, Column::Course, Column::Mobile];

    /// Header label shown above the column.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Column::Id => "Id",
            Column::Name => "Name",
            Column::Course => "Course",
            Column::Mobile => "Mobile",
        }
    }

    /// Zero-based position in the table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Address of one cell in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CellRef {
    pub row: usize,
    pub column: Column,
}

impl CellRef {
    #[must_use]
    pub const fn new(row: usize, column: Column) -> Self {
        Self { row, column }
    }
}

/// Set of cells marked as matched by a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Highlight(BTreeSet<CellRef>);

impl Highlight {
    #[must_use]
    pub fn contains(&self, cell: CellRef) -> bool {
        self.0.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Marked cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellRef> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CellRef> for Highlight {
    fn from_iter<I: IntoIterator<Item = CellRef>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// All student records as last loaded from storage, in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    rows: Vec<Student>,
}

impl Roster {
    #[must_use]
    pub fn new(rows: Vec<Student>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Student] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the row holding the record with `id`.
    #[must_use]
    pub fn row_by_id(&self, id: StudentId) -> Option<&Student> {
        self.rows.iter().find(|s| s.id == id)
    }

    /// Displayed text of a cell. The id column renders in decimal.
    #[must_use]
    pub fn cell_text(&self, cell: CellRef) -> Option<Cow<'_, str>> {
        let student = self.rows.get(cell.row)?;
        Some(match cell.column {
            Column::Id => Cow::Owned(student.id.to_string()),
            Column::Name => Cow::Borrowed(student.name()),
            Column::Course => Cow::Borrowed(student.course()),
            Column::Mobile => Cow::Borrowed(student.mobile()),
        })
    }

    /// Mark the name cell of every row that appears in `matches`.
    ///
    /// Matches are joined on id, so a record present in the query result
    /// but missing from this roster marks nothing.
    #[must_use]
    pub fn highlight_rows(&self, matches: &[Student]) -> Highlight {
        let ids: HashSet<StudentId> = matches.iter().map(|s| s.id).collect();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, s)| ids.contains(&s.id))
            .map(|(row, _)| CellRef::new(row, Column::Name))
            .collect()
    }
}
