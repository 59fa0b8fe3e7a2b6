use thiserror::Error;

/// Application error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("Usage source unavailable: {reason}")]
    SourceUnavailable { reason: String },
}

// For Tauri command returns - converts UsageError to String
impl From<UsageError> for String {
    fn from(e: UsageError) -> Self {
        e.to_string()
    }
}
