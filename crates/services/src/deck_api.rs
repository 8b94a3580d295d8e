use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use deck_core::model::DeckId;

use crate::config::DeckApiConfig;
use crate::error::DeckApiError;

/// Response to `GET /deck/new/shuffle/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewDeckResponse {
    pub deck_id: String,
    pub remaining: u32,
}

/// Response to `GET /deck/{id}/draw/`.
///
/// Both fields stay optional so every 2xx JSON body parses. Whether the body
/// is usable is decided by the caller: a missing card list is told apart from
/// an empty hand, and neither needs `remaining` to be classified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DrawResponse {
    #[serde(default)]
    pub cards: Option<Vec<CardPayload>>,
    #[serde(default)]
    pub remaining: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardPayload {
    #[serde(default)]
    pub code: String,
    pub image: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub suit: String,
}

/// Response to `GET /deck/{id}/shuffle/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShuffleResponse {
    pub remaining: u32,
}

/// Remote deck-of-cards API. All deck state lives on the server.
#[async_trait]
pub trait DeckApi: Send + Sync {
    async fn new_shuffled_deck(&self, deck_count: u32) -> Result<NewDeckResponse, DeckApiError>;

    async fn draw(&self, deck_id: &DeckId, count: u32) -> Result<DrawResponse, DeckApiError>;

    async fn reshuffle(&self, deck_id: &DeckId) -> Result<ShuffleResponse, DeckApiError>;
}

/// `DeckApi` over HTTP.
#[derive(Clone)]
pub struct HttpDeckApi {
    client: Client,
    config: DeckApiConfig,
}

impl HttpDeckApi {
    #[must_use]
    pub fn new(config: DeckApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, DeckApiError> {
        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(DeckApiError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DeckApi for HttpDeckApi {
    async fn new_shuffled_deck(&self, deck_count: u32) -> Result<NewDeckResponse, DeckApiError> {
        let url = self.config.endpoint(&["deck", "new", "shuffle"]);
        self.get_json(url, &[("deck_count", deck_count.to_string())])
            .await
    }

    async fn draw(&self, deck_id: &DeckId, count: u32) -> Result<DrawResponse, DeckApiError> {
        let url = self.config.endpoint(&["deck", deck_id.as_str(), "draw"]);
        self.get_json(url, &[("count", count.to_string())]).await
    }

    async fn reshuffle(&self, deck_id: &DeckId) -> Result<ShuffleResponse, DeckApiError> {
        let url = self.config.endpoint(&["deck", deck_id.as_str(), "shuffle"]);
        self.get_json(url, &[]).await
    }
}
