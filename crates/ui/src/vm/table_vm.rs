use deck_core::model::{DeckSession, ShuffleSpeed};

/// The remote request currently in flight, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingRequest {
    Drawing,
    Shuffling,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFaceVm {
    pub image_url: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckTableVm {
    pub card: Option<CardFaceVm>,
    pub remaining_label: String,
    pub polling_label: &'static str,
    pub shuffle_label: &'static str,
    pub can_shuffle: bool,
    pub speed_label: String,
}

#[must_use]
pub fn map_deck_table(
    session: &DeckSession,
    polling_active: bool,
    pending: Option<PendingRequest>,
    speed: ShuffleSpeed,
) -> DeckTableVm {
    let card = session.last_card().map(|card| CardFaceVm {
        image_url: card.image_url().to_string(),
        alt: card.label(),
    });

    let remaining_label = match session.remaining() {
        1 => "1 card remaining".to_string(),
        n => format!("{n} cards remaining"),
    };

    let polling_label = if polling_active {
        "Stop drawing"
    } else {
        "Start drawing"
    };

    let shuffle_label = if pending == Some(PendingRequest::Shuffling) {
        "Shuffling..."
    } else {
        "Shuffle deck"
    };

    DeckTableVm {
        card,
        remaining_label,
        polling_label,
        shuffle_label,
        can_shuffle: pending.is_none(),
        speed_label: format!("Shuffle speed: {} ({} ms)", speed.label(), speed.millis()),
    }
}
