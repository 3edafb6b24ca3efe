pub mod fetch_utils;
pub mod http_client;
pub mod urls;
mod core;

// Re-export URL routing
pub use urls::*;
// Re-export the fetch policy
pub use fetch_utils::{FetchOptions, fetch_with_cache};
pub use http_client::create_http_client_with_timeout;
// Re-export the gateway
pub use core::SportsApi;
