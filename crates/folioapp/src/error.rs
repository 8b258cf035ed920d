use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl FolioError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        FolioError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        FolioError::Invalid(message.into())
    }
}

impl From<confique::Error> for FolioError {
    fn from(err: confique::Error) -> Self {
        FolioError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
