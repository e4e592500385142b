//! Weather lookup error types.

use thiserror::Error;

/// Failure of a weather lookup.
///
/// Only two kinds reach callers: the city was not recognised, or anything
/// else went wrong between us and the API.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

/// What went wrong talking to the weather API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Stored without its request URL, which carries the API key
    #[error("Network error: {0}")]
    Transport(reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Decode(String),
}

/// Coarse classification used by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Upstream,
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Upstream(_) => ErrorKind::Upstream,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url())
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        Self::Upstream(UpstreamError::from(e))
    }
}

/// Rejected city input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("City name is empty")]
    Empty,

    #[error("City name must be at least {min} characters")]
    TooShort { min: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            WeatherError::NotFound("Atlantis".into()).kind(),
            ErrorKind::NotFound
        );

        let status = WeatherError::from(UpstreamError::Status {
            status: 503,
            body: "down".into(),
        });
        assert_eq!(status.kind(), ErrorKind::Upstream);
        assert!(!status.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = WeatherError::Upstream(UpstreamError::Status {
            status: 401,
            body: "Invalid API key".into(),
        });
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("Invalid API key"));

        assert!(WeatherError::NotFound("Atlantis".into())
            .to_string()
            .contains("Atlantis"));
    }

    #[test]
    fn test_query_error_display() {
        assert_eq!(
            QueryError::TooShort { min: 2 }.to_string(),
            "City name must be at least 2 characters"
        );
    }
}
