use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{DeckApi, DeckApiConfig, DeckSessionService, HttpDeckApi};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// Draw cards from a remote deck-of-cards API.
#[derive(Debug, Parser)]
#[command(name = "deck-table", version)]
struct Args {
    /// Base url of the deck API (overrides `DECK_API_BASE_URL`).
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Number of standard decks shuffled together (overrides `DECK_API_DECK_COUNT`).
    #[arg(long, value_name = "N")]
    deck_count: Option<u32>,

    /// Log filter, e.g. `debug` or `services=trace`. Falls back to `RUST_LOG`, then `info`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

impl Args {
    fn api_config(&self) -> Result<DeckApiConfig, services::ConfigError> {
        let from_env = DeckApiConfig::from_env()?;
        if self.api_url.is_none() && self.deck_count.is_none() {
            return Ok(from_env);
        }
        DeckApiConfig::new(
            self.api_url.as_deref().unwrap_or(from_env.base_url()),
            self.deck_count.unwrap_or(from_env.deck_count()),
        )
    }
}

struct DesktopApp {
    deck_sessions: Arc<DeckSessionService>,
    api_label: String,
}

impl UiApp for DesktopApp {
    fn deck_sessions(&self) -> Arc<DeckSessionService> {
        Arc::clone(&self.deck_sessions)
    }

    fn api_label(&self) -> String {
        self.api_label.clone()
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let config = args.api_config()?;
    tracing::info!(
        base_url = config.base_url(),
        deck_count = config.deck_count(),
        "starting deck table"
    );

    let api: Arc<dyn DeckApi> = Arc::new(HttpDeckApi::new(config.clone()));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        deck_sessions: Arc::new(DeckSessionService::new(api, config.deck_count())),
        api_label: config.base_url().to_string(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Deck Table")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
