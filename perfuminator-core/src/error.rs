//! Recoverable errors surfaced across the presentation boundary.

use thiserror::Error;

use crate::selection::MAX_NOTES;
use crate::session::Screen;

/// Everything a session operation can refuse to do.
///
/// Each variant leaves session state untouched; the message text is what the
/// front end shows the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("you can only select a maximum of {MAX_NOTES} scents")]
    CapacityExceeded,
    #[error("scent '{name}' is not available for selection")]
    InvalidNote { name: String },
    #[error("no palette named '{name}' exists")]
    UnknownPalette { name: String },
    #[error("please select at least one scent before proceeding to checkout")]
    EmptySelection,
    #[error("scent name cannot be empty")]
    EmptyName,
    #[error("scent name can only contain alphabetic characters and spaces")]
    InvalidCharacters,
    #[error("scent name cannot exceed {max} characters")]
    NameTooLong { max: usize },
    #[error("'{operation}' is not available on the {screen} screen")]
    WrongScreen {
        operation: &'static str,
        screen: Screen,
    },
}
