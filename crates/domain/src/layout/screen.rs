//! Screen size categories.

use serde::{Deserialize, Serialize};

/// Maximum dimensions for a screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Maximum number of rows.
    pub rows: usize,

    /// Default (and maximum) seats per row.
    pub max_seats_per_row: u32,
}

/// Size category of a theater screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScreenSize {
    /// 10 rows of up to 8 seats.
    Small,
    /// 15 rows of up to 10 seats.
    #[default]
    Medium,
    /// 20 rows of up to 12 seats.
    Large,
}

impl ScreenSize {
    /// Returns the dimensions for this screen size.
    pub fn config(&self) -> ScreenConfig {
        match self {
            ScreenSize::Small => ScreenConfig {
                rows: 10,
                max_seats_per_row: 8,
            },
            ScreenSize::Medium => ScreenConfig {
                rows: 15,
                max_seats_per_row: 10,
            },
            ScreenSize::Large => ScreenConfig {
                rows: 20,
                max_seats_per_row: 12,
            },
        }
    }

    /// Default aisle positions for a full-width row: after one third and two thirds.
    pub fn default_aisles(&self) -> Vec<u32> {
        let max = self.config().max_seats_per_row;
        vec![max / 3, max * 2 / 3]
    }

    /// Returns the size name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenSize::Small => "small",
            ScreenSize::Medium => "medium",
            ScreenSize::Large => "large",
        }
    }
}

impl std::fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
