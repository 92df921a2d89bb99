use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Duplicate post {field}: {value}")]
    DuplicatePost { field: &'static str, value: String },

    #[error("Reveal threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
