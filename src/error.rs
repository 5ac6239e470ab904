//! Error types for the finledger core.

/// Convenience alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, FinLedgerError>;

/// All errors that can occur when using the finledger core.
#[derive(Debug, thiserror::Error)]
pub enum FinLedgerError {
    /// The HTTP request itself failed (connection, timeout, TLS).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Category override backend failed.
    #[error("override store error: {0}")]
    Store(Box<dyn core::error::Error + Send + Sync>),

    /// The client builder was finished without an API key.
    #[error("no API key was provided to the client builder")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_from_serde_json() {
        let serde_err = serde_json::from_str::<String>("not json").unwrap_err();
        let err = FinLedgerError::from(serde_err);
        assert!(matches!(err, FinLedgerError::Serialization(_)));
        assert!(err.to_string().contains("serialization error"));
    }

    #[test]
    fn error_api_display() {
        let err = FinLedgerError::Api {
            status: 404,
            message: "account not found".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("account not found"));
    }

    #[test]
    fn error_store_display() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = FinLedgerError::Store(Box::new(inner));
        let msg = err.to_string();
        assert!(msg.contains("override store error"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn error_missing_api_key_display() {
        let err = FinLedgerError::MissingApiKey;
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FinLedgerError>();
    }
}
