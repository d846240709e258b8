use thiserror::Error;

/// nbstore 統一エラー型
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Registry request failed: {url} (status: {status})")]
    RegistryApi { status: u16, url: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid form: {0}")]
    InvalidForm(String),

    #[error("Plugin not found: {0}")]
    PluginNotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
