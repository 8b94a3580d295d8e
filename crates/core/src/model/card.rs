use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("card image url cannot be empty")]
    EmptyImage,
}

/// A single card as reported by the remote deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    code: String,
    image_url: String,
    value: String,
    suit: String,
}

impl Card {
    /// Creates a card from the fields the remote deck reports.
    ///
    /// Only the image is required: it is the one thing the table renders.
    ///
    /// # Errors
    ///
    /// Returns `CardError::EmptyImage` if the image url is blank.
    pub fn new(
        code: impl Into<String>,
        image_url: impl Into<String>,
        value: impl Into<String>,
        suit: impl Into<String>,
    ) -> Result<Self, CardError> {
        let image_url = image_url.into().trim().to_owned();
        if image_url.is_empty() {
            return Err(CardError::EmptyImage);
        }
        Ok(Self {
            code: code.into(),
            image_url,
            value: value.into(),
            suit: suit.into(),
        })
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Human-readable name, e.g. "KING of HEARTS". Falls back to the code.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.value.is_empty(), self.suit.is_empty()) {
            (false, false) => format!("{} of {}", self.value, self.suit),
            _ if !self.code.is_empty() => self.code.clone(),
            _ => "Card".to_string(),
        }
    }
}
