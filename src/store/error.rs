//! Store error types
//!
//! The store has exactly one domain error: a lookup or delete against an
//! identification with no current entry.

use bytes::Bytes;
use std::fmt;

/// Errors surfaced by store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The identification has no entry in the store
    NotFound {
        /// The missing identification, rendered for display
        identification: String,
    },
}

impl StoreError {
    /// Build a `NotFound` error for a raw identification key
    ///
    /// Keys are opaque bytes; they are rendered as lossy UTF-8 here, the same
    /// way the web layer echoes them.
    pub(crate) fn not_found(key: &Bytes) -> Self {
        StoreError::NotFound {
            identification: String::from_utf8_lossy(key).into_owned(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { identification } => {
                write!(f, "identification '{}' has nothing stored", identification)
            }
        }
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found(&Bytes::from("test-agent"));
        assert_eq!(
            err.to_string(),
            "identification 'test-agent' has nothing stored"
        );
    }

    #[test]
    fn test_not_found_message_empty_key() {
        let err = StoreError::not_found(&Bytes::new());
        assert_eq!(err.to_string(), "identification '' has nothing stored");
    }

    #[test]
    fn test_non_utf8_key_rendered_lossy() {
        let err = StoreError::not_found(&Bytes::from_static(b"agent-\xff"));
        assert_eq!(
            err.to_string(),
            "identification 'agent-\u{fffd}' has nothing stored"
        );
    }
}
