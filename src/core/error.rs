use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Validation variants are returned synchronously by the call that received the
/// offending input, before any network I/O takes place.
#[derive(Debug, Error)]
pub enum MsError {
    /// The endpoint name is not one of the known Marketstack endpoints.
    #[error("endpoint not supported: {0}")]
    InvalidEndpoint(String),

    /// A date was not `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
    #[error("date must be in YYYY-MM-DD or ISO-8601 (YYYY-MM-DDTHH:MM:SS) format, got {0:?}")]
    InvalidDateFormat(String),

    /// Sort direction was neither `asc` nor `desc`.
    #[error("sort parameter must be 'asc' or 'desc', got {0:?}")]
    InvalidSort(String),

    /// `limit` outside `1..=1000`.
    #[error("limit parameter must be between 1 and 1000, got {0}")]
    InvalidLimit(i64),

    /// `offset` outside `0..=1000`.
    #[error("offset parameter must be between 0 and 1000, got {0}")]
    InvalidOffset(i64),

    /// The endpoint does not accept the requested modifier.
    #[error("feature \"{feature}\" is not supported for the \"{endpoint}\" endpoint")]
    UnsupportedFeature {
        /// The modifier that was requested (e.g. `latest`, `search`).
        feature: &'static str,
        /// The endpoint it was requested on.
        endpoint: &'static str,
    },

    /// A date range was set twice, or mixed with a single positional date.
    #[error("date_from and date_to cannot be specified more than once")]
    DuplicateDateRange,

    /// A resource builder was asked for an illegal combination of options.
    #[error("conflicting request options: {0}")]
    Conflict(String),

    /// The API key is missing or still the placeholder value.
    #[error("client misconfigured: {0}")]
    MisconfiguredClient(String),

    /// A connection, DNS or protocol level failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error {status}: {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The upstream error code, when the error envelope carried one.
        code: Option<String>,
        /// The upstream error message, or a generic one.
        message: String,
    },

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not in the expected shape.
    #[error("data format unexpected or missing field: {0}")]
    Data(String),

    /// Alert or client configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for MsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e)
        } else {
            Self::Transport(e)
        }
    }
}

impl From<serde_json::Error> for MsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(format!("json parse error: {e}"))
    }
}
