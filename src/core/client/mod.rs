//! Public client surface + builder.
//! Defaults (base URL, UA, placeholder key) live in `constants`.

mod constants;

pub use constants::{API_KEY_ENV, PLACEHOLDER_API_KEY};

use crate::core::MsError;
use constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use reqwest::Client;
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Holds the configured HTTP client, base URL and API key.
///
/// Resource builders clone the client when they are created, so a key set with
/// [`MarketstackClient::set_api_key`] only applies to builders constructed afterwards.
#[derive(Clone)]
pub struct MarketstackClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for MarketstackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarketstackClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key_set", &self.has_api_key())
            .finish_non_exhaustive()
    }
}

impl MarketstackClient {
    /// Create a new builder.
    pub fn builder() -> MarketstackClientBuilder {
        MarketstackClientBuilder::default()
    }

    /// Build a client whose key comes from `MARKETSTACK_API_KEY`.
    ///
    /// A `.env` file in the working directory is loaded first when present. If the
    /// variable is unset the key stays the placeholder and requests are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_env() -> Result<Self, MsError> {
        dotenvy::dotenv().ok();
        let mut builder = Self::builder();
        if let Ok(key) = env::var(API_KEY_ENV) {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    /// Replace the API key used by builders created from now on.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    /// Whether a real (non-placeholder, non-empty) key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }

    /// The API base, e.g. `https://api.marketstack.com/v1/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn ensure_configured(&self) -> Result<(), MsError> {
        if self.has_api_key() {
            Ok(())
        } else {
            Err(MsError::MisconfiguredClient(format!(
                "API key is not set; set {API_KEY_ENV} or call set_api_key"
            )))
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct MarketstackClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl MarketstackClientBuilder {
    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base (e.g., a mock server in tests).
    ///
    /// A trailing slash is added when missing so endpoint names join underneath it.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the overall request timeout. Default: 30s.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn build(self) -> Result<MarketstackClient, MsError> {
        let mut base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(MarketstackClient {
            http,
            base_url,
            api_key: self
                .api_key
                .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string()),
        })
    }
}
