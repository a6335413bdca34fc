use thiserror::Error;

pub mod app_config;
pub mod cart;
pub mod config;
pub mod item;

pub use app_config::AppConfig;
pub use cart::{CartLine, CartState};
pub use config::{load_app_config, load_app_config_from_env};
pub use item::{CatalogItem, Category, CategoryId};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
