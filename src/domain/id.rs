//! Domain identifier types with proper encapsulation.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Student identifier - newtype over the database-assigned row id.
///
/// Ids are only ever produced by storage; the application never invents one
/// for a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Create a new `StudentId` from a raw row id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw row id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StudentId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

impl FromStr for StudentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_plain_integer() {
        assert_eq!(StudentId::new(7).to_string(), "7");
    }

    #[test]
    fn parses_from_str_with_whitespace() {
        let id: StudentId = " 12 ".parse().unwrap();
        assert_eq!(id, StudentId::new(12));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!("abc".parse::<StudentId>().is_err());
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&StudentId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
