use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailzError {
    #[error("Email not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Failed to generate email: {0}")]
    Generation(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Could not open inbox: {0}")]
    Navigation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MailzError>;
