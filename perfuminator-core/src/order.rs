//! Checkout snapshots and perfume name validation.

use serde::{Deserialize, Serialize};

use crate::catalog::ScentProfile;
use crate::error::SessionError;

/// Longest perfume name the checkout form accepts.
pub const NAME_MAX_CHARS: usize = 24;

/// Validate a perfume name, short-circuiting on the first failure.
///
/// Checks run in a fixed order: stripped-empty, then non-alphabetic content
/// (spaces are allowed and ignored), then raw length over
/// [`NAME_MAX_CHARS`]. Length counts the raw input, not the stripped one.
///
/// # Errors
///
/// `EmptyName`, `InvalidCharacters`, or `NameTooLong`.
pub fn validate_name(raw: &str) -> Result<(), SessionError> {
    if raw.trim().is_empty() {
        return Err(SessionError::EmptyName);
    }
    if !raw
        .chars()
        .filter(|c| *c != ' ')
        .all(char::is_alphabetic)
    {
        return Err(SessionError::InvalidCharacters);
    }
    if raw.chars().count() > NAME_MAX_CHARS {
        return Err(SessionError::NameTooLong {
            max: NAME_MAX_CHARS,
        });
    }
    Ok(())
}

/// Frozen checkout candidate: the notes and totals captured the moment the
/// user confirmed checkout. The name is still to be chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOrder {
    pub notes: Vec<String>,
    pub totals: ScentProfile,
}

impl DraftOrder {
    /// Attach a validated name, producing the completed order.
    ///
    /// The raw name is stored verbatim, untrimmed.
    ///
    /// # Errors
    ///
    /// Propagates [`validate_name`] failures; the draft is untouched.
    pub fn finalize(&self, raw_name: &str) -> Result<FinalOrder, SessionError> {
        validate_name(raw_name)?;
        Ok(FinalOrder {
            name: raw_name.to_string(),
            totals: self.totals,
            notes: self.notes.clone(),
        })
    }
}

/// The finished perfume: named, with its frozen profile and note list.
///
/// Nothing mutates this after creation; later selection changes cannot reach
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalOrder {
    pub name: String,
    pub totals: ScentProfile,
    pub notes: Vec<String>,
}
