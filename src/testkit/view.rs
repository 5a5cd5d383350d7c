//! Recording roster view.

use crate::domain::roster::Roster;
use crate::port::inbound::view::RosterView;

/// Keeps every roster it is refreshed with, oldest first.
#[derive(Debug, Default)]
pub struct RecordingView {
    refreshes: Vec<Roster>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of refreshes received.
    pub fn refresh_count(&self) -> usize {
        self.refreshes.len()
    }

    /// The most recent roster, if any refresh happened.
    pub fn last(&self) -> Option<&Roster> {
        self.refreshes.last()
    }
}

impl RosterView for RecordingView {
    fn refresh(&mut self, roster: Roster) {
        self.refreshes.push(roster);
    }
}
