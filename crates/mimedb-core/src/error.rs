use thiserror::Error;

#[derive(Error, Debug)]
pub enum MimeError {
    #[error("no mapping found for '{input}'")]
    NotFound { input: String },

    #[error("invalid content-type resolved from '{input}'")]
    InvalidType { input: String },

    #[error("invalid mime database: {message}")]
    InvalidDatabase { message: String },

    #[error(transparent)]
    Database(#[from] serde_json::Error),
}

impl MimeError {
    pub(crate) fn not_found(input: &str) -> Self {
        MimeError::NotFound {
            input: input.to_string(),
        }
    }

    /// `true` when the error only means "no mapping", which callers are
    /// expected to handle as an ordinary outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MimeError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, MimeError>;
