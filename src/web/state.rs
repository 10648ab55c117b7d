use crate::config::AppConfig;
use crate::console::QueryConsole;
use crate::cricbuzz::CricbuzzClient;
use crate::db::mysql::MySqlBackend;
use crate::error::CricError;
use std::sync::Arc;

/// Shared, read-only server state. Connections and clients are built per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn console(&self) -> Result<QueryConsole<MySqlBackend>, CricError> {
        let db = self.config.require_database()?.clone();
        Ok(QueryConsole::new(
            MySqlBackend::new(db),
            self.config.row_limit,
            self.config.query_timeout_secs,
        ))
    }

    pub fn cricbuzz(&self) -> Result<CricbuzzClient, CricError> {
        Ok(CricbuzzClient::new(self.config.require_api()?.clone()))
    }
}
