//! Domain error types.

use thiserror::Error;

/// Reasons a layout draft can't be turned into a show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The layout name is empty or blank.
    #[error("Layout name is required")]
    EmptyLayoutName,

    /// The movie name is empty or blank.
    #[error("Movie name is required")]
    EmptyMovieName,

    /// The layout has no rows.
    #[error("Layout needs at least one row")]
    NoRows,
}
