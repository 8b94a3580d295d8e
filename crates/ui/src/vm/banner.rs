use services::DeckSessionError;

/// The single transient error shown above the table.
///
/// Every `show` bumps the generation, so a hide timer scheduled for an older
/// message cannot clear a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<&'static str>,
    generation: u64,
}

impl ErrorBanner {
    /// Show `message`, replacing whatever is visible. Returns the generation to hide later.
    pub fn show(&mut self, message: &'static str) -> u64 {
        self.generation += 1;
        self.message = Some(message);
        self.generation
    }

    /// Hide the banner if it still shows the message from `generation`.
    pub fn hide(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.message
    }
}

#[must_use]
pub fn banner_message(err: &DeckSessionError) -> &'static str {
    match err {
        DeckSessionError::FetchDeck(_) | DeckSessionError::InvalidDeck(_) => {
            "Failed to fetch deck."
        }
        DeckSessionError::Draw(_) => "Failed to draw card.",
        DeckSessionError::MalformedResponse => "Invalid API response.",
        DeckSessionError::NoCardsAvailable => "No cards available.",
        DeckSessionError::Exhausted => "No cards remaining.",
        DeckSessionError::Shuffle(_) => "Failed to shuffle deck.",
        _ => "Something went wrong. Please try again.",
    }
}
