use crate::cli::ConnectionArgs;
use crate::error::CricError;
use directories::ProjectDirs;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_DRIVER: &str = "MySQL ODBC 8.0 Unicode Driver";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_API_BASE_URL: &str = "https://cricbuzz-cricket.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "cricbuzz-cricket.p.rapidapi.com";
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8501;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub database: Option<DatabaseConfig>,
    pub api: Option<ApiConfig>,
    pub server: ServerConfig,
    pub row_limit: Option<usize>,
    pub query_timeout_secs: Option<u64>,
    pub verbose: bool,
    pub show_secrets: bool,
}

/// MySQL connection target.
#[derive(Debug)]
pub struct DatabaseConfig {
    pub driver: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub database: Option<String>,
}

impl Clone for DatabaseConfig {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver.clone(),
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: clone_secret(&self.password),
            database: self.database.clone(),
        }
    }
}

/// Cricbuzz (RapidAPI) endpoint and key.
#[derive(Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub host: String,
    pub key: SecretString,
}

impl Clone for ApiConfig {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            host: self.host.clone(),
            key: clone_secret(&self.key),
        }
    }
}

/// Address the dashboard listens on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

impl ServerConfig {
    /// Apply `serve` flag overrides on top of the loaded values.
    pub fn apply(&mut self, host: Option<&str>, port: Option<u16>) {
        if let Some(host) = non_empty(host) {
            self.host = host.to_string();
        }
        if let Some(port) = port {
            self.port = port;
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Database settings, or the error the SQL flows surface when they are missing.
    pub fn require_database(&self) -> Result<&DatabaseConfig, CricError> {
        self.database.as_ref().ok_or_else(|| CricError::Config {
            message: "database credentials missing — set DB_HOST, DB_USER and DB_PASSWORD \
                      (and DB_NAME) or configure [database]"
                .to_string(),
        })
    }

    /// API settings, or the error the player flows surface when the key is missing.
    pub fn require_api(&self) -> Result<&ApiConfig, CricError> {
        self.api.as_ref().ok_or_else(|| CricError::Config {
            message: "RAPIDAPI_KEY not found — set it in the environment or a .env file, \
                      or configure [api] key"
                .to_string(),
        })
    }
}

pub fn clone_secret(secret: &SecretString) -> SecretString {
    SecretString::from(secret.expose_secret().to_string())
}

// --- TOML config file structs ---

#[derive(Debug, Deserialize, Default)]
struct TomlConfig {
    #[serde(default)]
    defaults: TomlDefaults,
    #[serde(default)]
    database: TomlDatabase,
    #[serde(default)]
    api: TomlApi,
    #[serde(default)]
    server: TomlServer,
}

#[derive(Debug, Deserialize, Default)]
struct TomlDefaults {
    row_limit: Option<usize>,
    timeout: Option<u64>,
    verbose: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlDatabase {
    driver: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    user: Option<String>,
    password: Option<String>,
    password_env: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlApi {
    key: Option<String>,
    key_env: Option<String>,
    host: Option<String>,
    base_url: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlServer {
    host: Option<String>,
    port: Option<u16>,
}

/// A config file location, and whether the user asked for it.
struct ResolvedConfigPath {
    path: PathBuf,
    /// true if given via --config or CRICSTATS_CONFIG
    explicit: bool,
}

/// Resolve the config file path: --config flag (or its env var) > platform default.
fn resolve_config_path(cli_config: Option<&PathBuf>) -> Option<ResolvedConfigPath> {
    if let Some(path) = cli_config {
        return Some(ResolvedConfigPath {
            path: path.clone(),
            explicit: true,
        });
    }
    ProjectDirs::from("", "", "cricstats").map(|dirs| ResolvedConfigPath {
        path: dirs.config_dir().join("config.toml"),
        explicit: false,
    })
}

fn load_toml_config(resolved: Option<&ResolvedConfigPath>) -> Result<TomlConfig, CricError> {
    let resolved = match resolved {
        Some(r) => r,
        None => return Ok(TomlConfig::default()),
    };

    if !resolved.path.exists() {
        if resolved.explicit {
            return Err(CricError::Config {
                message: format!("config file not found: {}", resolved.path.display()),
            });
        }
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(&resolved.path).map_err(|e| CricError::Config {
        message: format!("cannot read config file {}: {}", resolved.path.display(), e),
    })?;

    toml::from_str(&content).map_err(|e| CricError::Config {
        message: format!("invalid config file {}: {}", resolved.path.display(), e),
    })
}

/// Treat blank strings as unset.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Read an env var, treating empty values as unset.
pub fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Resolve a secret from a direct value, then an env-var indirection, then the file value.
fn resolve_secret(
    direct: Option<&str>,
    env_key: Option<&str>,
    file_value: Option<&str>,
) -> Option<SecretString> {
    if let Some(val) = non_empty(direct) {
        return Some(SecretString::from(val.to_string()));
    }
    if let Some(val) = non_empty(env_key).and_then(env_non_empty) {
        return Some(SecretString::from(val));
    }
    non_empty(file_value).map(|val| SecretString::from(val.to_string()))
}

fn pick(cli: Option<&str>, file: Option<&str>) -> Option<String> {
    non_empty(cli).or(non_empty(file)).map(str::to_string)
}

/// Build the AppConfig: CLI flags (which clap already fills from env) > TOML > defaults.
pub fn load(
    args: &ConnectionArgs,
    verbose: bool,
    show_secrets: bool,
    config_path: Option<&PathBuf>,
) -> Result<AppConfig, CricError> {
    let resolved_path = resolve_config_path(config_path);
    let toml_config = load_toml_config(resolved_path.as_ref())?;

    let database = build_database(args, &toml_config.database);
    let api = build_api(args, &toml_config.api);

    let server = ServerConfig {
        host: non_empty(toml_config.server.host.as_deref())
            .unwrap_or(DEFAULT_SERVER_HOST)
            .to_string(),
        port: toml_config.server.port.unwrap_or(DEFAULT_SERVER_PORT),
    };

    // row_limit: CLI/ENV > TOML > unlimited
    let row_limit = args.row_limit.or(toml_config.defaults.row_limit);
    // timeout: CLI/ENV > TOML > driver default
    let query_timeout_secs = args.timeout.or(toml_config.defaults.timeout);
    let verbose = verbose || toml_config.defaults.verbose.unwrap_or(false);

    Ok(AppConfig {
        database,
        api,
        server,
        row_limit,
        query_timeout_secs,
        verbose,
        show_secrets,
    })
}

fn build_database(args: &ConnectionArgs, file: &TomlDatabase) -> Option<DatabaseConfig> {
    let host = pick(args.db_host.as_deref(), file.host.as_deref())?;
    let user = pick(args.db_user.as_deref(), file.user.as_deref())?;
    let password = resolve_secret(
        args.db_password.as_deref(),
        file.password_env.as_deref(),
        file.password.as_deref(),
    )?;

    Some(DatabaseConfig {
        driver: pick(args.db_driver.as_deref(), file.driver.as_deref())
            .unwrap_or_else(|| DEFAULT_DRIVER.to_string()),
        host,
        port: args.db_port.or(file.port).unwrap_or(DEFAULT_DB_PORT),
        user,
        password,
        database: pick(args.db_name.as_deref(), file.name.as_deref()),
    })
}

fn build_api(args: &ConnectionArgs, file: &TomlApi) -> Option<ApiConfig> {
    let key = resolve_secret(
        args.api_key.as_deref(),
        file.key_env.as_deref(),
        file.key.as_deref(),
    )?;

    let base_url = pick(args.api_base_url.as_deref(), file.base_url.as_deref())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    Some(ApiConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        host: pick(args.api_host.as_deref(), file.host.as_deref())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
        key,
    })
}
