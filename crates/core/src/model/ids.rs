use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckIdError {
    #[error("deck id cannot be empty")]
    Empty,
}

/// Opaque identifier of a remote deck session.
///
/// The remote API mints these; the client never interprets them beyond
/// putting them back into request paths.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DeckId(String);

impl DeckId {
    /// Creates a new `DeckId`
    ///
    /// # Errors
    ///
    /// Returns `DeckIdError::Empty` if the id is empty. Any other value is kept
    /// byte-for-byte.
    pub fn new(id: impl Into<String>) -> Result<Self, DeckIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DeckIdError::Empty);
        }
        Ok(Self(id))
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeckId({})", self.0)
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
