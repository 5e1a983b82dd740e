use crate::app_config::{AppConfig, DEFAULT_DAWA_BASE_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let dawa_base_url = parse_base_url(
        "ADDRPICK_DAWA_BASE_URL",
        &or_default("ADDRPICK_DAWA_BASE_URL", DEFAULT_DAWA_BASE_URL),
    )?
    .unwrap_or_else(|| DEFAULT_DAWA_BASE_URL.to_string());

    let elnet_proxy_base = parse_base_url(
        "ADDRPICK_ELNET_PROXY_BASE",
        &or_default("ADDRPICK_ELNET_PROXY_BASE", ""),
    )?;

    let log_level = or_default("ADDRPICK_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("ADDRPICK_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("ADDRPICK_USER_AGENT", "addrpick/0.1 (address-search)");

    let result_rows = parse_usize("ADDRPICK_RESULT_ROWS", "8")?;
    if result_rows == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ADDRPICK_RESULT_ROWS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        dawa_base_url,
        elnet_proxy_base,
        log_level,
        request_timeout_secs,
        user_agent,
        result_rows,
    })
}

/// Trims a base URL and rejects anything that is not `http(s)`.
///
/// Blank input maps to `None`.
fn parse_base_url(var: &str, raw: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected an http(s) URL, got \"{trimmed}\""),
        });
    }
    Ok(Some(trimmed.trim_end_matches('/').to_string()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
