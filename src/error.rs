use thiserror::Error;

/// Why a fetch could not produce a fresh JSON payload.
#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl FetchCause {
    /// Classifies a transport-level reqwest error.
    pub fn from_request_error(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connection(e.to_string())
        } else {
            Self::Request(e)
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported league: {league}")]
    UnsupportedLeague { league: String },

    #[error("Failed to fetch {cache_key} from {url}: {cause}")]
    Fetch {
        cause: FetchCause,
        url: String,
        cache_key: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create an unsupported league error
    pub fn unsupported_league(league: impl Into<String>) -> Self {
        Self::UnsupportedLeague {
            league: league.into(),
        }
    }

    /// Create a fetch error carrying the request context
    pub fn fetch(cause: FetchCause, url: impl Into<String>, cache_key: impl Into<String>) -> Self {
        Self::Fetch {
            cause,
            url: url.into(),
            cache_key: cache_key.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if error is retryable (network issues, server errors, rate limits)
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Fetch { cause, .. } => match cause {
                FetchCause::Timeout | FetchCause::Connection(_) => true,
                FetchCause::Status { status, .. } => *status == 429 || *status >= 500,
                _ => false,
            },
            _ => false,
        }
    }

    /// Cache key of a failed fetch, if this is one
    pub fn cache_key(&self) -> Option<&str> {
        match self {
            AppError::Fetch { cache_key, .. } => Some(cache_key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_league_helper() {
        let error = AppError::unsupported_league("XFL");
        assert!(matches!(error, AppError::UnsupportedLeague { .. }));
        assert_eq!(error.to_string(), "Unsupported league: XFL");
    }

    #[test]
    fn test_fetch_error_display() {
        let error = AppError::fetch(
            FetchCause::Status {
                status: 503,
                reason: "Service Unavailable".to_string(),
            },
            "https://api.example.com/baseball/mlb/news",
            "mlb-news",
        );
        assert_eq!(
            error.to_string(),
            "Failed to fetch mlb-news from https://api.example.com/baseball/mlb/news: HTTP 503: Service Unavailable"
        );
        assert_eq!(error.cache_key(), Some("mlb-news"));
    }

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_is_retryable() {
        let retryable = [
            FetchCause::Timeout,
            FetchCause::Connection("refused".to_string()),
            FetchCause::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            },
            FetchCause::Status {
                status: 429,
                reason: "Too Many Requests".to_string(),
            },
        ];
        for cause in retryable {
            assert!(AppError::fetch(cause, "u", "k").is_retryable());
        }

        let not_found = AppError::fetch(
            FetchCause::Status {
                status: 404,
                reason: "Not Found".to_string(),
            },
            "u",
            "k",
        );
        assert!(!not_found.is_retryable());
        assert!(!AppError::unsupported_league("XFL").is_retryable());
    }

    #[test]
    fn test_parse_cause_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let cause: FetchCause = json_error.into();
        assert!(matches!(cause, FetchCause::Parse(_)));
        assert!(!AppError::fetch(cause, "u", "k").is_retryable());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let toml_error = toml::from_str::<serde_json::Value>("invalid = [toml").unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }
}
