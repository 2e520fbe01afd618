use thiserror::Error;

#[derive(Error, Debug)]
pub enum PsiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("score store is unreadable: {0}")]
    StoreParse(String),

    #[error("upstream report error: {0}")]
    Upstream(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PsiError>;
