//! Centralized constants for the default endpoint, UA and credentials.

/// Identifies the crate to the API.
pub(crate) const USER_AGENT: &str = concat!("marketstack-rs/", env!("CARGO_PKG_VERSION"));

/// Marketstack v1 API base (endpoint name is appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.marketstack.com/v1/";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "MARKETSTACK_API_KEY";

/// Value a key carries until the caller supplies a real one.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

/// Overall request timeout used when the builder is not told otherwise.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
