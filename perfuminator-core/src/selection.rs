//! The in-progress pick list: up to three notes, no duplicates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::SessionError;

/// Maximum notes a perfume can combine.
pub const MAX_NOTES: usize = 3;

/// Ordered, bounded set of picked note names.
///
/// Membership in the active palette is the session's business; this type
/// enforces only capacity and uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    notes: SmallVec<[String; MAX_NOTES]>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note name.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` when [`MAX_NOTES`] notes are already picked,
    /// `InvalidNote` when the note is already in the selection. The
    /// selection is unchanged on failure.
    pub fn add(&mut self, name: &str) -> Result<(), SessionError> {
        if self.notes.len() >= MAX_NOTES {
            return Err(SessionError::CapacityExceeded);
        }
        if self.contains(name) {
            return Err(SessionError::InvalidNote {
                name: name.to_string(),
            });
        }
        self.notes.push(name.to_string());
        Ok(())
    }

    /// Drop every pick. Always succeeds.
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// The picked note names in pick order.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.notes.iter().any(|picked| picked == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.notes.len() >= MAX_NOTES
    }
}
