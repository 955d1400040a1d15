use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("unsupported locale `{0}` (expected `en` or `ar`)")]
    UnknownLocale(String),
    #[error("unsupported theme `{0}` (expected `light` or `dark`)")]
    UnknownTheme(String),
    #[error("preference file {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preference file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}
