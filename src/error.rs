use thiserror::Error;

/// Errors from calls against the clinic backend.
///
/// Every REST operation surfaces one of these; nothing is retried. The
/// caller converts them into user notifications at the call site.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Cannot reach clinic backend at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Scheduling conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Invalid response payload: {0}")]
    Decode(String),

    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("Invalid appointment status: {0}")]
    InvalidStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_names_base_url() {
        let err = ApiError::Connection("http://localhost:8080".into());
        assert!(err.to_string().contains("http://localhost:8080"));
    }

    #[test]
    fn http_error_carries_status_and_message() {
        let err = ApiError::Http {
            status: 500,
            message: "internal error".into(),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("internal error"));
    }

    #[test]
    fn conflict_error_carries_server_message() {
        let err = ApiError::Conflict("dentist already booked at this time".into());
        assert!(err.to_string().contains("already booked"));
    }
}
