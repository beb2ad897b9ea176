// crates/folio-core/src/error.rs
// Error types shared by the fetcher, config loader and transports

use thiserror::Error;

/// Main error type for folio-core
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("request cancelled")]
    Cancelled,
}

/// Convenience type alias for Result using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Cancellation is a teardown signal, not a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FolioError::Cancelled)
    }
}

impl From<url::ParseError> for FolioError {
    fn from(err: url::ParseError) -> Self {
        FolioError::InvalidUrl(err.to_string())
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::Config(err.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FolioError::Http {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => FolioError::Transport(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = FolioError::Http { status: 404, url: "https://api.github.com/users/x".to_string() };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("/users/x"));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_cancelled_is_distinguished() {
        assert!(FolioError::Cancelled.is_cancelled());
        assert!(!FolioError::Transport("reset".to_string()).is_cancelled());
    }

    #[test]
    fn test_json_error_from() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FolioError = parse_err.into();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn test_url_error_from() {
        let err: FolioError = url::Url::parse("not a url").unwrap_err().into();
        assert!(err.to_string().contains("invalid URL"));
    }
}
