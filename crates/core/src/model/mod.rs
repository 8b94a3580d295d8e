mod card;
mod ids;
mod preferences;
mod session;

pub use card::{Card, CardError};
pub use ids::{DeckId, DeckIdError};
pub use preferences::ShuffleSpeed;
pub use session::DeckSession;
