/// Runtime configuration, loaded from the environment by
/// [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote catalog API, without a trailing slash.
    pub api_base_url: String,
    /// Per-request timeout for catalog fetches.
    pub http_timeout_secs: u64,
    pub user_agent: String,
    /// Display page size: catalog pages are truncated to this many items.
    pub page_size: usize,
    pub log_level: String,
}
