//! Error types

/// Rejection of a phone login submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("phone number does not match the expected format")]
    InvalidPhoneFormat,
}

/// Failure to answer the "is logged in" question
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session query failed: {0}")]
    Query(String),

    #[error("Token store unavailable: {0}")]
    Store(String),

    #[error("Session query returned no data")]
    NoData,
}
