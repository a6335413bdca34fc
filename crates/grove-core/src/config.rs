use crate::app_config::AppConfig;
use crate::ConfigError;

/// Default remote API base. The storefront talks to a single third-party
/// endpoint family; everything else derives from this root.
const DEFAULT_API_BASE_URL: &str = "https://openapi.programming-hero.com/api";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The core parsing/validation logic is decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let api_base_url = or_default("GROVE_API_BASE_URL", DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string();
    if api_base_url.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "GROVE_API_BASE_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let http_timeout_secs = parse_u64("GROVE_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("GROVE_USER_AGENT", "grove/0.1 (plant-storefront)");
    let page_size = parse_usize("GROVE_PAGE_SIZE", "9")?;
    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GROVE_PAGE_SIZE".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let log_level = or_default("GROVE_LOG_LEVEL", "info");

    Ok(AppConfig {
        api_base_url,
        http_timeout_secs,
        user_agent,
        page_size,
        log_level,
    })
}
