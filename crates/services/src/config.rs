use std::env;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckApiConfig {
    base_url: Url,
    deck_count: u32,
}

impl DeckApiConfig {
    /// Build a config from raw values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the url does not parse, is not http(s), or the
    /// deck count is zero.
    pub fn new(base_url: &str, deck_count: u32) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            raw: base_url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base_url.to_string()));
        }
        if deck_count == 0 {
            return Err(ConfigError::InvalidDeckCount);
        }
        Ok(Self {
            base_url: parsed,
            deck_count,
        })
    }

    /// Read `DECK_API_BASE_URL` and `DECK_API_DECK_COUNT`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("DECK_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let deck_count = match env::var("DECK_API_DECK_COUNT") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidDeckCount)?,
            Err(_) => 1,
        };
        Self::new(&base_url, deck_count)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    #[must_use]
    pub fn deck_count(&self) -> u32 {
        self.deck_count
    }

    /// Join path segments onto the base url, keeping the trailing slash the API expects.
    ///
    /// Each segment is percent-encoded, so a deck id can never add or climb path levels.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // http(s) urls always have a path; `new` rejects every other scheme.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }
        url
    }
}
