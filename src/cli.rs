use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cricstats",
    about = "Cricket statistics dashboard: SQL analytics and Cricbuzz player lookup"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short = 'c', long, global = true, env = "CRICSTATS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit debug diagnostics to stderr
    #[arg(short = 'v', long, global = true, env = "CRICSTATS_VERBOSE")]
    pub verbose: bool,

    /// Disable credential masking
    #[arg(long, global = true, env = "CRICSTATS_SHOW_SECRETS")]
    pub show_secrets: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the browser dashboard
    Serve(ServeArgs),

    /// List the query catalog
    Queries,

    /// Run a catalog query or custom SQL
    Run(RunArgs),

    /// List base tables in the configured database
    Tables,

    /// Show the first rows of a table
    Preview(PreviewArgs),

    /// Describe a table's columns
    Columns(ColumnsArgs),

    /// Search players by name
    Search(SearchArgs),

    /// Show a player's profile, rankings, career and stats
    Player(PlayerArgs),

    /// Print the resolved configuration
    Config,
}

/// Database and API connection settings shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// MySQL host
    #[arg(long, global = true, env = "DB_HOST")]
    pub db_host: Option<String>,

    /// MySQL port (default: 3306)
    #[arg(long, global = true, env = "DB_PORT")]
    pub db_port: Option<u16>,

    /// MySQL user
    #[arg(long, global = true, env = "DB_USER")]
    pub db_user: Option<String>,

    /// MySQL password
    #[arg(long, global = true, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, global = true, env = "DB_NAME")]
    pub db_name: Option<String>,

    /// ODBC driver name
    #[arg(long, global = true, env = "DB_DRIVER")]
    pub db_driver: Option<String>,

    /// RapidAPI key for the Cricbuzz API
    #[arg(long, global = true, env = "RAPIDAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// RapidAPI host header
    #[arg(long, global = true, env = "RAPIDAPI_HOST")]
    pub api_host: Option<String>,

    /// Cricbuzz API base URL
    #[arg(long, global = true, env = "CRICSTATS_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Max rows to return (default: unlimited)
    #[arg(short = 'l', long = "limit", global = true, env = "CRICSTATS_ROW_LIMIT")]
    pub row_limit: Option<usize>,

    /// Query timeout in seconds (default: driver default)
    #[arg(short = 't', long, global = true, env = "CRICSTATS_TIMEOUT")]
    pub timeout: Option<u64>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen address
    #[arg(long, env = "CRICSTATS_HOST")]
    pub host: Option<String>,

    /// Listen port (default: 8501)
    #[arg(short = 'p', long, env = "CRICSTATS_PORT")]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Catalog query id (e.g. Q3)
    pub id: Option<String>,

    /// Custom SQL text (overrides the catalog entry)
    #[arg(long)]
    pub sql: Option<String>,

    /// Read SQL from file
    #[arg(short = 'f', long = "file", conflicts_with = "sql")]
    pub sql_file: Option<PathBuf>,

    /// Write results to file (.toon, .txt or .csv) instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Table name
    pub table: String,
}

#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// Table name
    pub table: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Player name or fragment
    pub name: String,
}

#[derive(Args, Debug)]
pub struct PlayerArgs {
    /// Cricbuzz player id
    pub id: String,

    /// Face image id from a search result, used when the profile has no image
    #[arg(long)]
    pub face_image_id: Option<String>,
}
