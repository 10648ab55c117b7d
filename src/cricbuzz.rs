use crate::config::ApiConfig;
use crate::error::CricError;
use crate::verbose::Timer;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::fmt;

/// Which per-format stats table to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Batting,
    Bowling,
}

impl StatKind {
    pub fn as_path(self) -> &'static str {
        match self {
            StatKind::Batting => "batting",
            StatKind::Bowling => "bowling",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// The four read-only player endpoints. Responses are handed back as raw JSON.
pub trait PlayerApi {
    fn search_players(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Value, CricError>> + Send;

    fn player_profile(
        &self,
        player_id: &str,
    ) -> impl std::future::Future<Output = Result<Value, CricError>> + Send;

    fn player_career(
        &self,
        player_id: &str,
    ) -> impl std::future::Future<Output = Result<Value, CricError>> + Send;

    fn player_stats(
        &self,
        player_id: &str,
        kind: StatKind,
    ) -> impl std::future::Future<Output = Result<Value, CricError>> + Send;
}

pub struct CricbuzzClient {
    config: ApiConfig,
    client: Client,
}

impl CricbuzzClient {
    pub fn new(mut config: ApiConfig) -> Self {
        let trimmed_len = config.base_url.trim_end_matches('/').len();
        config.base_url.truncate(trimmed_len);
        Self {
            config,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/stats/v1/player{}", self.config.base_url, path)
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, CricError> {
        let url = self.url(path);
        let timer = Timer::start();

        let resp = self
            .client
            .get(&url)
            .query(query)
            .header("x-rapidapi-key", self.config.key.expose_secret())
            .header("x-rapidapi-host", &self.config.host)
            .send()
            .await
            .map_err(|e| CricError::Connection {
                message: format!("request to {} failed: {}", url, e),
            })?;

        let status = resp.status();
        tracing::debug!(%url, status = status.as_u16(), elapsed_ms = timer.elapsed_ms(), "cricbuzz response");
        if !status.is_success() {
            return Err(map_http_error(status));
        }

        resp.json::<Value>().await.map_err(|e| CricError::Api {
            message: format!("malformed response from {}: {}", url, e),
        })
    }
}

pub fn map_http_error(status: StatusCode) -> CricError {
    match status.as_u16() {
        401 => CricError::Auth {
            message: "API key rejected".to_string(),
        },
        403 => CricError::Auth {
            message: "API key not subscribed to the Cricbuzz API".to_string(),
        },
        429 => CricError::Api {
            message: "rate limited by the API".to_string(),
        },
        code => CricError::Api {
            message: format!("HTTP error: {}", code),
        },
    }
}

impl PlayerApi for CricbuzzClient {
    async fn search_players(&self, name: &str) -> Result<Value, CricError> {
        self.get_json("/search", &[("plrN", name)]).await
    }

    async fn player_profile(&self, player_id: &str) -> Result<Value, CricError> {
        self.get_json(&format!("/{}", player_id), &[]).await
    }

    async fn player_career(&self, player_id: &str) -> Result<Value, CricError> {
        self.get_json(&format!("/{}/career", player_id), &[]).await
    }

    async fn player_stats(&self, player_id: &str, kind: StatKind) -> Result<Value, CricError> {
        self.get_json(&format!("/{}/{}", player_id, kind), &[]).await
    }
}
