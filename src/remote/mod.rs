//! HTTP implementation of the menu gateway.
//!
//! The app's content — menu, comments, favorites — is served as JSON
//! collections under a single base URL. This client fetches and decodes
//! them; the domain store turns the results into slice transitions.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::{Comment, Dish, DishId};
use crate::ports::{FetchError, MenuGateway};

/// Menu gateway backed by the remote JSON service.
#[derive(Debug, Clone)]
pub struct HttpMenuGateway {
    client: Client,
    base_url: String,
}

impl HttpMenuGateway {
    /// Build a gateway for the given service root, e.g. `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(url = %url, "Fetching");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MenuGateway for HttpMenuGateway {
    async fn fetch_dishes(&self) -> Result<Vec<Dish>, FetchError> {
        self.fetch_json("dishes").await
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, FetchError> {
        self.fetch_json("comments").await
    }

    async fn fetch_favorites(&self) -> Result<Vec<DishId>, FetchError> {
        self.fetch_json("favorites").await
    }
}
