#![forbid(unsafe_code)]

pub mod config;
pub mod deck_api;
pub mod deck_session_service;
pub mod error;

pub use config::DeckApiConfig;
pub use deck_api::{CardPayload, DeckApi, DrawResponse, HttpDeckApi, NewDeckResponse, ShuffleResponse};
pub use deck_session_service::DeckSessionService;
pub use error::{ConfigError, DeckApiError, DeckSessionError};
