use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a scheduled show.
///
/// Shows created at runtime get a generated identifier; the seed show uses
/// a fixed one (`demo-1`) so it can be recognised after a reset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(String);

impl ShowId {
    /// Creates a show ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh, random show ID.
    pub fn generate() -> Self {
        Self(format!("show-{}", Uuid::new_v4()))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ShowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ShowId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of a theater layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(String);

impl LayoutId {
    /// Creates a layout ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh, random layout ID.
    pub fn generate() -> Self {
        Self(format!("layout-{}", Uuid::new_v4()))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LayoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LayoutId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of a seat within one layout, e.g. `A1`.
///
/// Always the row label immediately followed by the seat number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    /// Derives the seat ID for a seat number within a row.
    pub fn for_seat(row_label: &str, number: u32) -> Self {
        Self(format!("{row_label}{number}"))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SeatId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SeatId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for SeatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a booking record.
///
/// Wraps a UUID so booking IDs can't be mixed up with other identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(Uuid);

impl BookingId {
    /// Creates a new random booking ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
