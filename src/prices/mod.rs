//! End-of-day and intraday price builders.

use crate::core::builder::{paging_methods, series_methods, terminal_methods};
use crate::core::{DateInput, Endpoint, EodBar, MarketstackClient, MsError, Request};

/// Bar size for intraday data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntradayInterval {
    M1,
    M5,
    M10,
    M15,
    M30,
    H1,
    H3,
    H6,
    H12,
    H24,
}

impl IntradayInterval {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "1min",
            Self::M5 => "5min",
            Self::M10 => "10min",
            Self::M15 => "15min",
            Self::M30 => "30min",
            Self::H1 => "1hour",
            Self::H3 => "3hour",
            Self::H6 => "6hour",
            Self::H12 => "12hour",
            Self::H24 => "24hour",
        }
    }
}

/// A builder for end-of-day price requests (`/eod`).
///
/// # Example
///
/// ```no_run
/// # use marketstack_rs::{EndOfDay, MarketstackClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MarketstackClient::from_env()?;
/// let bars = EndOfDay::new(&client, "AAPL").latest()?.fetch_bars().await?;
/// println!("{bars:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EndOfDay {
    req: Request,
}

impl EndOfDay {
    /// Creates a builder for one or more comma-separated symbols.
    pub fn new(client: &MarketstackClient, symbols: impl Into<String>) -> Self {
        let mut req = Request::new(client, Endpoint::Eod);
        req.set_symbols(symbols);
        Self { req }
    }

    /// Restricts results to one exchange (MIC).
    #[must_use]
    pub fn exchange(mut self, mic: impl Into<String>) -> Self {
        self.req.set_exchange(mic);
        self
    }

    series_methods!();
    paging_methods!();

    /// Requests only the most recent bar (`/eod/latest`).
    ///
    /// # Errors
    ///
    /// Fails if a single date was already pinned.
    pub fn latest(mut self) -> Result<Self, MsError> {
        self.req.latest()?;
        Ok(self)
    }

    /// Requests the bar for one date (`/eod/<date>`).
    ///
    /// # Errors
    ///
    /// Fails on a malformed date, with [`MsError::DuplicateDateRange`] if a date or range
    /// was already set, or with [`MsError::Conflict`] after [`EndOfDay::latest`].
    pub fn historical(mut self, date: impl Into<DateInput>) -> Result<Self, MsError> {
        self.req.historical(date.into(), None)?;
        Ok(self)
    }

    /// Requests bars between two dates via `date_from`/`date_to`.
    ///
    /// # Errors
    ///
    /// Fails on a malformed date, or with [`MsError::DuplicateDateRange`] if either bound
    /// or a single date was already set.
    pub fn historical_range(
        mut self,
        from: impl Into<DateInput>,
        to: impl Into<DateInput>,
    ) -> Result<Self, MsError> {
        self.req.historical(from.into(), Some(to.into()))?;
        Ok(self)
    }

    terminal_methods!();

    /// Executes the request and returns typed price bars.
    ///
    /// # Errors
    ///
    /// See `Request::execute`; also fails if a record is not a price bar.
    pub async fn fetch_bars(&self) -> Result<Vec<EodBar>, MsError> {
        self.req.execute().await?.deserialize_records()
    }
}

/// A builder for intraday price requests (`/intraday`).
#[derive(Debug, Clone)]
pub struct Intraday {
    req: Request,
}

impl Intraday {
    /// Creates a builder for one or more comma-separated symbols.
    pub fn new(client: &MarketstackClient, symbols: impl Into<String>) -> Self {
        let mut req = Request::new(client, Endpoint::Intraday);
        req.set_symbols(symbols);
        Self { req }
    }

    /// Restricts results to one exchange (MIC).
    #[must_use]
    pub fn exchange(mut self, mic: impl Into<String>) -> Self {
        self.req.set_exchange(mic);
        self
    }

    /// Sets the bar size.
    #[must_use]
    pub fn interval(mut self, interval: IntradayInterval) -> Self {
        self.req.set_param("interval", interval.as_str());
        self
    }

    series_methods!();
    paging_methods!();

    /// Requests only the most recent bar (`/intraday/latest`).
    ///
    /// # Errors
    ///
    /// Fails if a single date was already pinned.
    pub fn latest(mut self) -> Result<Self, MsError> {
        self.req.latest()?;
        Ok(self)
    }

    /// Requests bars for one date (`/intraday/<date>`).
    ///
    /// # Errors
    ///
    /// Same rules as [`EndOfDay::historical`].
    pub fn historical(mut self, date: impl Into<DateInput>) -> Result<Self, MsError> {
        self.req.historical(date.into(), None)?;
        Ok(self)
    }

    /// Requests bars between two dates or date-times.
    ///
    /// # Errors
    ///
    /// Same rules as [`EndOfDay::historical_range`].
    pub fn historical_range(
        mut self,
        from: impl Into<DateInput>,
        to: impl Into<DateInput>,
    ) -> Result<Self, MsError> {
        self.req.historical(from.into(), Some(to.into()))?;
        Ok(self)
    }

    terminal_methods!();

    /// Executes the request and returns typed price bars.
    ///
    /// # Errors
    ///
    /// See `Request::execute`; also fails if a record is not a price bar.
    pub async fn fetch_bars(&self) -> Result<Vec<EodBar>, MsError> {
        self.req.execute().await?.deserialize_records()
    }
}
