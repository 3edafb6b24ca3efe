//! Gateway-wide constants and default configuration values

/// Default base path of the ESPN site API
pub const DEFAULT_API_BASE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("sports_gateway/", env!("CARGO_PKG_VERSION"));

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for every cached response (5 minutes)
    pub const RESPONSE_SECONDS: u64 = 300;
}

/// Normalization limits
pub mod limits {
    /// News feeds are cut to this many articles
    pub const MAX_NEWS_ARTICLES: usize = 10;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API base URL override
    pub const API_BASE_URL: &str = "SPORTS_API_BASE_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "SPORTS_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "SPORTS_HTTP_TIMEOUT";

    /// Environment variable for cache TTL in seconds
    pub const CACHE_TTL: &str = "SPORTS_CACHE_TTL";
}
