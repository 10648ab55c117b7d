use secrecy::{ExposeSecret, SecretString};

use crate::config::AppConfig;

/// Format a secret value, respecting the show_secrets flag.
pub fn format_secret(secret: &SecretString, show_secrets: bool) -> String {
    if show_secrets {
        secret.expose_secret().to_string()
    } else {
        "[REDACTED]".to_string()
    }
}

/// Format an optional secret value.
pub fn format_optional_secret(secret: Option<&SecretString>, show_secrets: bool) -> String {
    match secret {
        Some(s) => format_secret(s, show_secrets),
        None => "(not set)".to_string(),
    }
}

/// The resolved configuration as display pairs, secrets masked unless `show_secrets`.
pub fn describe_config(config: &AppConfig) -> Vec<(&'static str, String)> {
    let show = config.show_secrets;
    let unset = || "(not set)".to_string();
    let db = config.database.as_ref();
    let api = config.api.as_ref();

    vec![
        ("db_driver", db.map(|d| d.driver.clone()).unwrap_or_else(unset)),
        ("db_host", db.map(|d| d.host.clone()).unwrap_or_else(unset)),
        ("db_port", db.map(|d| d.port.to_string()).unwrap_or_else(unset)),
        ("db_user", db.map(|d| d.user.clone()).unwrap_or_else(unset)),
        ("db_password", format_optional_secret(db.map(|d| &d.password), show)),
        (
            "db_name",
            db.and_then(|d| d.database.clone()).unwrap_or_else(unset),
        ),
        ("api_base_url", api.map(|a| a.base_url.clone()).unwrap_or_else(unset)),
        ("api_host", api.map(|a| a.host.clone()).unwrap_or_else(unset)),
        ("api_key", format_optional_secret(api.map(|a| &a.key), show)),
        ("server", config.server.bind_addr()),
        (
            "row_limit",
            config
                .row_limit
                .map(|l| l.to_string())
                .unwrap_or_else(|| "unlimited".to_string()),
        ),
        (
            "timeout",
            config
                .query_timeout_secs
                .map(|t| format!("{}s", t))
                .unwrap_or_else(|| "driver default".to_string()),
        ),
        ("verbose", config.verbose.to_string()),
    ]
}
