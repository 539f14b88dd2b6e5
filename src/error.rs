//! Error types for the barcode sheet library.
//!
//! This module defines all error types that can occur while configuring,
//! laying out, and serializing a barcode sheet.

/// Result type alias for barcode sheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a barcode sheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Inconsistent builder configuration, caught before any rendering work
    #[error("Invalid sheet configuration: {0}")]
    Validation(String),

    /// A margin edge was negative
    #[error("Sheet margin {edge} cannot be negative: {value}")]
    Margin {
        /// Which edge failed (left/right/top/bottom)
        edge: &'static str,
        /// The offending value in points
        value: f32,
    },

    /// Symbol encoding error
    #[error("Barcode encoding error: {0}")]
    Encode(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = Error::Validation("Row count must be greater than 0".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid sheet configuration"));
        assert!(msg.contains("Row count"));
    }

    #[test]
    fn test_margin_error_message() {
        let err = Error::Margin {
            edge: "left",
            value: -3.0,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("left"));
        assert!(msg.contains("-3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
