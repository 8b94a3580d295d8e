use crate::model::card::Card;
use crate::model::ids::DeckId;

/// Client-side view of a remote deck session.
///
/// `remaining` is only ever copied from a server response. The client never
/// decrements or recomputes it locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSession {
    deck_id: DeckId,
    remaining: u32,
    last_card: Option<Card>,
}

impl DeckSession {
    /// Starts a session from the id and count the server reported for a fresh deck.
    #[must_use]
    pub fn new(deck_id: DeckId, remaining: u32) -> Self {
        Self {
            deck_id,
            remaining,
            last_card: None,
        }
    }

    #[must_use]
    pub fn deck_id(&self) -> &DeckId {
        &self.deck_id
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn last_card(&self) -> Option<&Card> {
        self.last_card.as_ref()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Record a successful draw: both the shown card and the count come from the response.
    pub fn apply_draw(&mut self, card: Card, remaining: u32) {
        self.last_card = Some(card);
        self.remaining = remaining;
    }

    /// Record a successful reshuffle. The table is cleared.
    pub fn apply_shuffle(&mut self, remaining: u32) {
        self.last_card = None;
        self.remaining = remaining;
    }
}
