use thiserror::Error;

#[derive(Debug, Error)]
pub enum CricError {
    #[error("connection: {message}")]
    Connection { message: String },

    #[error("query: {message}")]
    Query { message: String },

    #[error("timeout: query timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("config: {message}")]
    Config { message: String },

    #[error("auth: {message}")]
    Auth { message: String },

    #[error("api: {message}")]
    Api { message: String },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("format: {message}")]
    Format { message: String },
}

impl CricError {
    /// Short category label, matching the prefix of the display form.
    pub fn category(&self) -> &'static str {
        match self {
            CricError::Connection { .. } => "connection",
            CricError::Query { .. } => "query",
            CricError::Timeout { .. } => "timeout",
            CricError::Config { .. } => "config",
            CricError::Auth { .. } => "auth",
            CricError::Api { .. } => "api",
            CricError::Io(_) => "io",
            CricError::Format { .. } => "format",
        }
    }
}
