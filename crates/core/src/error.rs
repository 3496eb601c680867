//! Fatal generation failures surfaced to callers.

use thiserror::Error;

/// Generation is all-or-nothing: any error here means no partial grid or
/// placement list was produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A required prototype key is missing from the content catalogs.
    #[error("content catalog is missing a {slot} prototype")]
    Configuration { slot: &'static str },
    /// The partition/room parameters left fewer than two rooms on the grid.
    #[error("only {placed} room(s) fit the current parameters; at least two are required")]
    InsufficientRooms { placed: usize },
}
