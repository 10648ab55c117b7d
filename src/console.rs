use crate::catalog;
use crate::db::{Backend, QueryResult};
use crate::error::CricError;
use crate::validation;
use crate::verbose::Timer;

/// What a run produced: the rows plus an optional read-only warning.
#[derive(Debug)]
pub struct RunOutcome {
    pub result: QueryResult,
    pub warning: Option<String>,
}

/// Runs catalog or hand-written SQL against one backend.
///
/// Connection details live in the backend, handed in at construction.
pub struct QueryConsole<B> {
    backend: B,
    row_limit: Option<usize>,
    timeout_secs: Option<u64>,
}

impl<B: Backend> QueryConsole<B> {
    pub fn new(backend: B, row_limit: Option<usize>, timeout_secs: Option<u64>) -> Self {
        Self {
            backend,
            row_limit,
            timeout_secs,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run the catalog entry `id` as written.
    pub async fn run_entry(&self, id: &str) -> Result<RunOutcome, CricError> {
        let entry = catalog::get(id).ok_or_else(|| CricError::Config {
            message: format!("unknown catalog query '{}' (expected Q1..Q{})", id, catalog::entries().len()),
        })?;
        tracing::info!(id = entry.id, title = entry.title, "running catalog query");
        self.run_sql(entry.sql()).await
    }

    /// Send `sql` verbatim. Blank input is rejected before any connection is made.
    pub async fn run_sql(&self, sql: &str) -> Result<RunOutcome, CricError> {
        if sql.trim().is_empty() {
            return Err(CricError::Config {
                message: "no SQL provided — pick a catalog query or enter one".to_string(),
            });
        }

        let warning = match validation::classify(sql) {
            validation::Classification::Unparsed { detail } => {
                tracing::debug!(%detail, "sql not understood by the MySQL dialect parser, sending as-is");
                None
            }
            other => other.warning(),
        };
        if let Some(ref w) = warning {
            tracing::warn!(warning = %w, "executing statement that is not read-only");
        }

        let timer = Timer::start();
        let result = self
            .backend
            .execute(sql, self.row_limit, self.timeout_secs)
            .await?;
        tracing::info!(
            elapsed_ms = timer.elapsed_ms(),
            rows = result.rows.len(),
            columns = result.columns.len(),
            "query complete"
        );

        Ok(RunOutcome { result, warning })
    }
}
