use std::sync::Arc;

use deck_core::model::{Card, DeckId, DeckSession};

use crate::deck_api::DeckApi;
use crate::error::DeckSessionError;

/// Runs the deck-session operations against the remote API.
///
/// The service holds no session state of its own. Callers own the
/// `DeckSession` and hand it in, so a cancelled request leaves their copy
/// untouched.
#[derive(Clone)]
pub struct DeckSessionService {
    api: Arc<dyn DeckApi>,
    deck_count: u32,
}

impl DeckSessionService {
    #[must_use]
    pub fn new(api: Arc<dyn DeckApi>, deck_count: u32) -> Self {
        Self { api, deck_count }
    }

    /// Request a fresh, pre-shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns `DeckSessionError::FetchDeck` if the request fails.
    /// Returns `DeckSessionError::InvalidDeck` if the server hands back a blank id.
    pub async fn initialize(&self) -> Result<DeckSession, DeckSessionError> {
        let response = self
            .api
            .new_shuffled_deck(self.deck_count)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "deck request failed");
                DeckSessionError::FetchDeck(err)
            })?;

        let deck_id = DeckId::new(response.deck_id)?;
        tracing::debug!(%deck_id, remaining = response.remaining, "deck ready");
        Ok(DeckSession::new(deck_id, response.remaining))
    }

    /// Draw one card into `session`.
    ///
    /// An exhausted session fails fast without touching the network. On any
    /// error `session` is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `DeckSessionError::Exhausted` when `remaining` is already zero.
    /// Returns `DeckSessionError::MalformedResponse` when the body has no card list,
    /// or has a card but no `remaining` count.
    /// Returns `DeckSessionError::NoCardsAvailable` when the card list is empty.
    /// Returns `DeckSessionError::Draw` for transport or decode failures.
    pub async fn draw(&self, session: &mut DeckSession) -> Result<Card, DeckSessionError> {
        if session.is_exhausted() {
            return Err(DeckSessionError::Exhausted);
        }

        let response = self
            .api
            .draw(session.deck_id(), 1)
            .await
            .map_err(|err| {
                tracing::warn!(deck_id = %session.deck_id(), error = %err, "draw failed");
                DeckSessionError::Draw(err)
            })?;

        // Classified on the card list first; `remaining` only matters once a card came back.
        let cards = response.cards.ok_or(DeckSessionError::MalformedResponse)?;
        let payload = cards
            .into_iter()
            .next()
            .ok_or(DeckSessionError::NoCardsAvailable)?;
        let remaining = response
            .remaining
            .ok_or(DeckSessionError::MalformedResponse)?;
        let card = Card::new(payload.code, payload.image, payload.value, payload.suit)
            .map_err(|_| DeckSessionError::MalformedResponse)?;

        session.apply_draw(card.clone(), remaining);
        tracing::debug!(
            deck_id = %session.deck_id(),
            card = card.code(),
            remaining = session.remaining(),
            "drew card"
        );
        Ok(card)
    }

    /// Reshuffle the existing remote deck and clear the table.
    ///
    /// # Errors
    ///
    /// Returns `DeckSessionError::Shuffle` if the request fails. `session` is unchanged.
    pub async fn shuffle(&self, session: &mut DeckSession) -> Result<(), DeckSessionError> {
        let response = self
            .api
            .reshuffle(session.deck_id())
            .await
            .map_err(|err| {
                tracing::warn!(deck_id = %session.deck_id(), error = %err, "shuffle failed");
                DeckSessionError::Shuffle(err)
            })?;

        session.apply_shuffle(response.remaining);
        tracing::debug!(
            deck_id = %session.deck_id(),
            remaining = session.remaining(),
            "deck reshuffled"
        );
        Ok(())
    }
}
