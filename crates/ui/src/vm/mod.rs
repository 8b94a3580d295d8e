mod banner;
mod table_vm;
mod timer_slot;

pub use banner::{ErrorBanner, banner_message};
pub use table_vm::{CardFaceVm, DeckTableVm, PendingRequest, map_deck_table};
pub use timer_slot::TimerSlot;
