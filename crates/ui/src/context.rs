use std::sync::Arc;

use services::DeckSessionService;

pub trait UiApp: Send + Sync {
    fn deck_sessions(&self) -> Arc<DeckSessionService>;

    /// Where decks come from, shown in the footer.
    fn api_label(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    deck_sessions: Arc<DeckSessionService>,
    api_label: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            deck_sessions: app.deck_sessions(),
            api_label: app.api_label(),
        }
    }

    #[must_use]
    pub fn deck_sessions(&self) -> Arc<DeckSessionService> {
        Arc::clone(&self.deck_sessions)
    }

    #[must_use]
    pub fn api_label(&self) -> &str {
        &self.api_label
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
