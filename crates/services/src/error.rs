//! Shared error types for the services crate.

use thiserror::Error;

use deck_core::model::DeckIdError;

/// Errors emitted while building a `DeckApiConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid deck api url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("deck api url must be http or https: {0}")]
    UnsupportedScheme(String),
    #[error("deck count must be > 0")]
    InvalidDeckCount,
}

/// Transport-level failures talking to the remote deck API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckApiError {
    #[error("deck api request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("deck api returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `DeckSessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckSessionError {
    #[error("failed to fetch deck")]
    FetchDeck(#[source] DeckApiError),
    #[error("failed to fetch deck")]
    InvalidDeck(#[from] DeckIdError),
    #[error("failed to draw card")]
    Draw(#[source] DeckApiError),
    #[error("invalid api response")]
    MalformedResponse,
    #[error("no cards available")]
    NoCardsAvailable,
    #[error("no cards remaining")]
    Exhausted,
    #[error("failed to shuffle deck")]
    Shuffle(#[source] DeckApiError),
}

impl DeckSessionError {
    /// Whether an active polling loop must stop after this error.
    ///
    /// Transport failures while drawing leave polling running so the next tick
    /// tries again.
    #[must_use]
    pub fn stops_polling(&self) -> bool {
        matches!(
            self,
            Self::Exhausted | Self::MalformedResponse | Self::NoCardsAvailable
        )
    }
}
