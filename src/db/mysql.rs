use crate::config::DatabaseConfig;
use crate::db::{Backend, CellValue, ColumnMeta, QueryResult};
use crate::error::CricError;
use odbc_api::buffers::{BufferDesc, ColumnarAnyBuffer};
use odbc_api::{
    ColumnDescription, ConnectionOptions, Cursor, DataType, Environment, ResultSetMetadata,
};
use secrecy::ExposeSecret;

const BATCH_SIZE: usize = 500;
const LOGIN_TIMEOUT_SECS: u32 = 30;
/// Buffer size for columns whose type reports no length.
const DEFAULT_TEXT_LEN: usize = 4096;
/// Upper bound on a single text cell; longer values fail the fetch.
const MAX_TEXT_LEN: usize = 64 * 1024;

/// MySQL reached through its ODBC driver. One connection per `execute` call.
pub struct MySqlBackend {
    config: DatabaseConfig,
}

impl MySqlBackend {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    pub fn connection_string(&self) -> String {
        let cfg = &self.config;
        let mut parts = vec![
            format!("Driver={{{}}}", cfg.driver),
            format!("Server={}", cfg.host),
            format!("Port={}", cfg.port),
            format!("UID={}", cfg.user),
            format!(
                "PWD={}",
                odbc_api::escape_attribute_value(cfg.password.expose_secret())
            ),
        ];

        if let Some(ref db) = cfg.database {
            parts.push(format!("Database={}", db));
        }

        parts.join(";") + ";"
    }
}

impl Backend for MySqlBackend {
    async fn execute(
        &self,
        sql: &str,
        limit: Option<usize>,
        timeout_secs: Option<u64>,
    ) -> Result<QueryResult, CricError> {
        let conn_str = self.connection_string();
        let host = self.config.host.clone();

        // odbc-api environments and connections are not Send
        let sql = sql.to_string();
        tokio::task::spawn_blocking(move || -> Result<QueryResult, CricError> {
            let env = Environment::new().map_err(|e| CricError::Connection {
                message: format!("ODBC environment error: {}", e),
            })?;

            let conn = env
                .connect_with_connection_string(
                    &conn_str,
                    ConnectionOptions {
                        login_timeout_sec: Some(LOGIN_TIMEOUT_SECS),
                        ..Default::default()
                    },
                )
                .map_err(|e| CricError::Connection {
                    message: format!("cannot connect to MySQL at {}: {}", host, e),
                })?;

            let cursor = conn
                .execute(&sql, (), timeout_secs.map(|s| s as usize))
                .map_err(|e| execution_error(e, timeout_secs))?;

            // Statements without a result set (USE, SET, ...) come back empty
            let Some(mut cursor) = cursor else {
                return Ok(QueryResult::default());
            };

            let num_cols = cursor.num_result_cols().map_err(|e| CricError::Query {
                message: format!("failed to get column count: {}", e),
            })? as usize;

            let mut columns = Vec::with_capacity(num_cols);
            let mut buffer_descs = Vec::with_capacity(num_cols);

            for i in 1..=num_cols as u16 {
                let mut col_desc = ColumnDescription::default();
                cursor
                    .describe_col(i, &mut col_desc)
                    .map_err(|e| CricError::Query {
                        message: format!("failed to describe column {}: {}", i, e),
                    })?;

                let name = col_desc.name_to_string().map_err(|e| CricError::Query {
                    message: format!("failed to decode column name {}: {}", i, e),
                })?;

                columns.push(ColumnMeta {
                    name,
                    type_name: normalize_odbc_type(&format!("{:?}", col_desc.data_type)),
                });

                // Everything is fetched as text so rendering never has to know the SQL type
                buffer_descs.push(BufferDesc::Text {
                    max_str_len: text_buffer_len(&col_desc.data_type),
                });
            }

            let buffer = ColumnarAnyBuffer::try_from_descs(BATCH_SIZE, buffer_descs)
                .map_err(|e| CricError::Query {
                    message: format!("failed to create buffer: {}", e),
                })?;

            let mut row_set_cursor =
                cursor.bind_buffer(buffer).map_err(|e| CricError::Query {
                    message: format!("failed to bind buffer: {}", e),
                })?;

            let mut rows: Vec<Vec<CellValue>> = Vec::new();
            let mut truncated = false;

            while let Some(batch) = row_set_cursor
                .fetch_with_truncation_check(true)
                .map_err(fetch_error)?
            {
                for row_idx in 0..batch.num_rows() {
                    if let Some(lim) = limit
                        && rows.len() >= lim
                    {
                        truncated = true;
                        break;
                    }

                    let mut row = Vec::with_capacity(num_cols);
                    for col_idx in 0..num_cols {
                        let cell = batch
                            .column(col_idx)
                            .as_text_view()
                            .and_then(|view| view.get(row_idx))
                            .map(|bytes| CellValue::Text(String::from_utf8_lossy(bytes).into_owned()))
                            .unwrap_or(CellValue::Null);
                        row.push(cell);
                    }
                    rows.push(row);
                }

                if truncated {
                    break;
                }
            }

            Ok(QueryResult {
                columns,
                rows,
                truncated,
            })
        })
        .await
        .map_err(|e| CricError::Query {
            message: format!("task join error: {}", e),
        })?
    }
}

/// Bytes to reserve per cell: the column's UTF-8 width, capped at `MAX_TEXT_LEN`.
pub fn text_buffer_len(data_type: &DataType) -> usize {
    data_type
        .utf8_len()
        .map(|len| len.get())
        .unwrap_or(DEFAULT_TEXT_LEN)
        .min(MAX_TEXT_LEN)
}

/// Truncated cells surface as a query error instead of a silently shortened value.
pub fn fetch_error(err: odbc_api::Error) -> CricError {
    match err {
        odbc_api::Error::TooLargeValueForBuffer {
            indicator,
            buffer_index,
        } => {
            let size = indicator
                .map(|n| format!("{} bytes", n))
                .unwrap_or_else(|| "unknown size".to_string());
            CricError::Query {
                message: format!(
                    "value in column {} ({}) does not fit the {}-byte text buffer; select a shorter expression",
                    buffer_index + 1,
                    size,
                    MAX_TEXT_LEN
                ),
            }
        }
        other => CricError::Query {
            message: format!("fetch error: {}", other),
        },
    }
}

/// SQLSTATE HYT00 is the driver reporting that the statement timeout fired.
fn execution_error(err: odbc_api::Error, timeout_secs: Option<u64>) -> CricError {
    let message = err.to_string();
    match timeout_secs {
        Some(seconds) if message.contains("HYT00") => CricError::Timeout { seconds },
        _ => CricError::Query {
            message: format!("query execution failed: {}", message),
        },
    }
}

/// Reduce an ODBC `DataType` debug string to its bare SQL type name.
///
/// `Varchar { length: Some(20) }` becomes `VARCHAR`, `Integer` becomes `INTEGER`.
pub fn normalize_odbc_type(debug_name: &str) -> String {
    let bare = debug_name
        .split(|c: char| c == ' ' || c == '{' || c == '(')
        .next()
        .unwrap_or(debug_name);
    let upper = bare.to_ascii_uppercase();
    if upper.is_empty() { "UNKNOWN".to_string() } else { upper }
}
