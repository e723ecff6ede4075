//! The `/tickers` builder: ticker reference data and per-ticker sub-resources.
//!
//! Every chained call validates the complete proposed state and returns a new builder;
//! the builder it was called on is left untouched, so a rejected call never disturbs a
//! previously valid request.

use crate::core::request::PointInTime;
use crate::core::validate::validate_date;
use crate::core::{DateInput, Endpoint, MarketstackClient, MsError, Request, Response, Table};

/// Which sub-resource of a ticker is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TickerResource {
    /// The ticker itself (or the ticker list when no symbol is set).
    #[default]
    Info,
    Splits,
    Dividends,
    Eod,
    Intraday,
}

impl TickerResource {
    const fn segment(self) -> Option<&'static str> {
        match self {
            Self::Info => None,
            Self::Splits => Some("splits"),
            Self::Dividends => Some("dividends"),
            Self::Eod => Some("eod"),
            Self::Intraday => Some("intraday"),
        }
    }
}

/// Flag-style construction, one field per toggle.
///
/// [`Tickers::with_options`] rejects flag combinations that cannot form one request.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct TickersOptions {
    pub symbol: Option<String>,
    pub exchange: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub splits: bool,
    pub dividends: bool,
    pub eod: bool,
    pub intraday: bool,
    pub date: Option<DateInput>,
    pub latest: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TickerState {
    symbol: Option<String>,
    resource: TickerResource,
    at: PointInTime,
}

impl TickerState {
    fn select(&mut self, resource: TickerResource) -> Result<(), MsError> {
        if self.resource != TickerResource::Info && self.resource != resource {
            return Err(MsError::Conflict(
                "splits, dividends, eod and intraday cannot be specified together".into(),
            ));
        }
        self.resource = resource;
        Ok(())
    }

    fn pin(&mut self, at: PointInTime) -> Result<(), MsError> {
        let clash = matches!(
            (&self.at, &at),
            (PointInTime::Latest, PointInTime::Date(_)) | (PointInTime::Date(_), PointInTime::Latest)
        );
        if clash {
            return Err(MsError::Conflict(
                "a date and latest cannot be specified at the same time".into(),
            ));
        }
        self.at = at;
        Ok(())
    }

    fn validate(&self) -> Result<(), MsError> {
        if self.symbol.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(MsError::Conflict("symbol must not be empty".into()));
        }
        if self.symbol.is_none() && (self.resource != TickerResource::Info || self.at != PointInTime::Any)
        {
            return Err(MsError::Conflict(
                "symbol must be set before splits, dividends, eod, intraday, a date or latest"
                    .into(),
            ));
        }
        match (self.resource, &self.at) {
            (TickerResource::Intraday, PointInTime::Date(_)) => Err(MsError::Conflict(
                "a date cannot be specified with intraday; use a date range instead".into(),
            )),
            (TickerResource::Splits | TickerResource::Dividends, at) if *at != PointInTime::Any => {
                Err(MsError::Conflict(
                    "splits and dividends cannot be specified with a date or latest".into(),
                ))
            }
            (TickerResource::Info, PointInTime::Latest) => Err(MsError::Conflict(
                "eod or intraday must be specified when latest is specified".into(),
            )),
            _ => Ok(()),
        }
    }
}

/// A builder for ticker requests (`/tickers[/{symbol}[/{resource}[/{date}|/latest]]]`).
///
/// # Example
///
/// ```no_run
/// # use marketstack_rs::{MarketstackClient, Tickers};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MarketstackClient::from_env()?;
/// let eod = Tickers::new(&client)
///     .symbol("AAPL")?
///     .eod()?
///     .historical("2023-01-03")?
///     .execute()
///     .await?;
/// println!("{eod:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Tickers {
    req: Request,
    state: TickerState,
}

impl Tickers {
    /// Creates a builder for the ticker list.
    pub fn new(client: &MarketstackClient) -> Self {
        Self {
            req: Request::new(client, Endpoint::Tickers),
            state: TickerState::default(),
        }
    }

    /// Creates a builder from flag-style options.
    ///
    /// # Errors
    ///
    /// Returns [`MsError::Conflict`] when more than one sub-resource is flagged, when
    /// both `date` and `latest` are set, or when the flags break any rule enforced by
    /// the chained methods; parameter errors as for the individual setters.
    pub fn with_options(client: &MarketstackClient, opts: TickersOptions) -> Result<Self, MsError> {
        let mut out = Self::new(client);
        if let Some(mic) = opts.exchange {
            out.req.set_exchange(mic);
        }
        if let Some(q) = opts.search.as_deref() {
            out.req.set_search(q)?;
        }
        if let Some(n) = opts.limit {
            out.req.set_limit(n)?;
        }
        if let Some(n) = opts.offset {
            out.req.set_offset(n)?;
        }

        let flagged = [
            (opts.splits, TickerResource::Splits),
            (opts.dividends, TickerResource::Dividends),
            (opts.eod, TickerResource::Eod),
            (opts.intraday, TickerResource::Intraday),
        ];

        let mut state = TickerState {
            symbol: opts.symbol,
            ..TickerState::default()
        };
        for (_, resource) in flagged.iter().filter(|(on, _)| *on) {
            state.select(*resource)?;
        }
        if let Some(date) = opts.date {
            state.pin(PointInTime::Date(validate_date(date)?))?;
        }
        if opts.latest {
            state.pin(PointInTime::Latest)?;
        }
        state.validate()?;

        out.state = state;
        out.rebuild();
        Ok(out)
    }

    /// Sets the ticker symbol.
    ///
    /// # Errors
    ///
    /// Propagates any rule violation of the resulting state.
    pub fn symbol(&self, symbol: impl Into<String>) -> Result<Self, MsError> {
        let symbol = symbol.into();
        self.transition(|st| {
            st.symbol = Some(symbol);
            Ok(())
        })
    }

    /// Selects the split history of the symbol.
    ///
    /// # Errors
    ///
    /// [`MsError::Conflict`] without a symbol, with another sub-resource, or with a date
    /// or latest.
    pub fn splits(&self) -> Result<Self, MsError> {
        self.transition(|st| st.select(TickerResource::Splits))
    }

    /// Selects the dividend history of the symbol.
    ///
    /// # Errors
    ///
    /// Same as [`Tickers::splits`].
    pub fn dividends(&self) -> Result<Self, MsError> {
        self.transition(|st| st.select(TickerResource::Dividends))
    }

    /// Selects end-of-day prices of the symbol.
    ///
    /// # Errors
    ///
    /// [`MsError::Conflict`] without a symbol or with another sub-resource.
    pub fn eod(&self) -> Result<Self, MsError> {
        self.transition(|st| st.select(TickerResource::Eod))
    }

    /// Selects intraday prices of the symbol.
    ///
    /// # Errors
    ///
    /// [`MsError::Conflict`] without a symbol, with another sub-resource, or with a
    /// specific date.
    pub fn intraday(&self) -> Result<Self, MsError> {
        self.transition(|st| st.select(TickerResource::Intraday))
    }

    /// Appends the `latest` marker.
    ///
    /// # Errors
    ///
    /// [`MsError::Conflict`] unless eod or intraday is selected, or if a date is set.
    pub fn latest(&self) -> Result<Self, MsError> {
        self.transition(|st| st.pin(PointInTime::Latest))
    }

    /// Pins the request to one date, replacing any earlier date.
    ///
    /// # Errors
    ///
    /// [`MsError::InvalidDateFormat`] on a malformed date; [`MsError::Conflict`] if the
    /// state does not allow a date.
    pub fn historical(&self, date: impl Into<DateInput>) -> Result<Self, MsError> {
        let date = validate_date(date)?;
        self.transition(|st| st.pin(PointInTime::Date(date)))
    }

    /// Restricts results to one exchange (MIC).
    #[must_use]
    pub fn exchange(&self, mic: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.req.set_exchange(mic);
        next
    }

    /// Free-text search over ticker names and symbols.
    ///
    /// # Errors
    ///
    /// Never fails for this endpoint; kept fallible like the other parameter setters.
    pub fn search(&self, query: &str) -> Result<Self, MsError> {
        let mut next = self.clone();
        next.req.set_search(query)?;
        Ok(next)
    }

    /// # Errors
    ///
    /// Returns [`MsError::InvalidLimit`] outside `1..=1000`.
    pub fn limit(&self, limit: i64) -> Result<Self, MsError> {
        let mut next = self.clone();
        next.req.set_limit(limit)?;
        Ok(next)
    }

    /// # Errors
    ///
    /// Returns [`MsError::InvalidOffset`] outside `0..=1000`.
    pub fn offset(&self, offset: i64) -> Result<Self, MsError> {
        let mut next = self.clone();
        next.req.set_offset(offset)?;
        Ok(next)
    }

    /// The selected sub-resource; `Info` when none was chosen.
    pub fn resource(&self) -> TickerResource {
        self.state.resource
    }

    /// The request this builder will send.
    pub fn request(&self) -> &Request {
        &self.req
    }

    /// # Errors
    ///
    /// See [`Request::execute`].
    pub async fn execute(&self) -> Result<Response, MsError> {
        self.req.execute().await
    }

    /// # Errors
    ///
    /// See [`Request::execute`].
    pub async fn fetch_table(&self) -> Result<Table, MsError> {
        self.req.fetch_table().await
    }

    fn transition(
        &self,
        apply: impl FnOnce(&mut TickerState) -> Result<(), MsError>,
    ) -> Result<Self, MsError> {
        let mut state = self.state.clone();
        apply(&mut state)?;
        state.validate()?;

        let mut next = self.clone();
        next.state = state;
        next.rebuild();
        Ok(next)
    }

    fn rebuild(&mut self) {
        self.req.reset_target();
        if let Some(sym) = &self.state.symbol {
            self.req.push_segment(sym.clone());
        }
        if let Some(seg) = self.state.resource.segment() {
            self.req.push_segment(seg);
        }
        if let Some(seg) = self.state.at.segment() {
            self.req.push_segment(seg.to_string());
        }
    }
}
