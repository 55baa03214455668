//! # Session Errors
//!
//! Errors surfaced to front ends. Rejections wrap the kernel's
//! [`BoxError`]; export failures wrap `serde_json`.

use box_kernel::BoxError;
use thiserror::Error;

/// Errors that can occur while handling session requests.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The parameters were rejected; nothing was recorded.
    #[error(transparent)]
    Rejected(#[from] BoxError),

    /// History or scene could not be serialized.
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_is_transparent() {
        let err = SessionError::from(BoxError::ZeroK);
        assert_eq!(err.to_string(), BoxError::ZeroK.to_string());
    }
}
