//! Fetch Errors
//!
//! One taxonomy for every remote or browser lookup the form performs.

/// Common result type for lookups and submission
pub type FetchResult<T> = Result<T, FetchError>;

/// Why a lookup or the submission failed
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Request never produced a response
    Network(String),
    /// Response with a non-2xx status
    Status { status: u16, text: String },
    /// Response body did not match the expected shape
    Decode(String),
    /// User refused the geolocation prompt
    PermissionDenied,
    /// Browser capability missing or position unavailable
    Unavailable(String),
}

impl FetchError {
    /// Failures the user can fix by retrying later
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status { status, text } => write!(f, "HTTP {}: {}", status, text),
            FetchError::Decode(msg) => write!(f, "Parse error: {}", msg),
            FetchError::PermissionDenied => write!(f, "Location permission denied"),
            FetchError::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_status() {
        let err = FetchError::Status { status: 404, text: "Not Found".to_string() };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_transient_kinds() {
        assert!(FetchError::Network("offline".into()).is_transient());
        assert!(FetchError::Status { status: 503, text: String::new() }.is_transient());
        assert!(!FetchError::Status { status: 400, text: String::new() }.is_transient());
        assert!(!FetchError::PermissionDenied.is_transient());
    }
}
