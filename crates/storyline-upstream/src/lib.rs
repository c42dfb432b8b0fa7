//! Storyline Upstream — `reqwest`-backed client for the platform API.

use async_trait::async_trait;
use serde::Deserialize;

use storyline_core::directory::PlayerDirectory;
use storyline_core::error::DomainError;
use storyline_core::player::Player;

/// Body of the upstream credential check.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    correct: bool,
}

/// `PlayerDirectory` implementation that talks to the platform's public
/// HTTP API.
#[derive(Debug, Clone)]
pub struct HttpPlayerDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPlayerDirectory {
    /// Creates a client for the given API base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, DomainError> {
        self.client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(upstream_err)?
            .json()
            .await
            .map_err(upstream_err)
    }
}

fn upstream_err(err: reqwest::Error) -> DomainError {
    DomainError::Upstream(err.to_string())
}

#[async_trait]
impl PlayerDirectory for HttpPlayerDirectory {
    async fn verify_credential(&self, name: &str, token: &str) -> Result<bool, DomainError> {
        let url = format!("{}/verify/{name}/{token}", self.base_url);
        let body: VerifyResponse = self.get_json(url).await?;
        Ok(body.correct)
    }

    async fn fetch_player(&self, key: &str) -> Result<Player, DomainError> {
        let url = format!("{}/player/{key}", self.base_url);
        self.get_json(url).await
    }
}
