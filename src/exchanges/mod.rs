//! The `/exchanges` builder: exchange reference data and per-exchange listings.

use crate::core::request::PointInTime;
use crate::core::validate::validate_date;
use crate::core::{DateInput, Endpoint, MarketstackClient, MsError, Request, Response, Table};

/// Which sub-resource of an exchange is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExchangeResource {
    /// The exchange itself (or the exchange list when no MIC is set).
    #[default]
    Info,
    Tickers,
    Eod,
    Intraday,
}

impl ExchangeResource {
    const fn segment(self) -> Option<&'static str> {
        match self {
            Self::Info => None,
            Self::Tickers => Some("tickers"),
            Self::Eod => Some("eod"),
            Self::Intraday => Some("intraday"),
        }
    }
}

/// Flag-style construction, one field per toggle.
#[derive(Debug, Clone, Default)]
pub struct ExchangesOptions {
    pub mic: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub tickers: bool,
    pub eod: bool,
    pub intraday: bool,
    pub date: Option<DateInput>,
    pub latest: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ExchangeState {
    mic: Option<String>,
    resource: ExchangeResource,
    at: PointInTime,
}

impl ExchangeState {
    fn select(&mut self, resource: ExchangeResource) -> Result<(), MsError> {
        if self.resource != ExchangeResource::Info && self.resource != resource {
            return Err(MsError::Conflict(
                "tickers, eod and intraday cannot be specified together".into(),
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
        if self.mic.as_deref().is_some_and(|m| m.trim().is_empty()) {
            return Err(MsError::Conflict("mic must not be empty".into()));
        }
        if self.mic.is_none()
            && (self.resource != ExchangeResource::Info || self.at != PointInTime::Any)
        {
            return Err(MsError::Conflict(
                "mic must be set before tickers, eod, intraday, a date or latest".into(),
            ));
        }
        if self.at == PointInTime::Any {
            return Ok(());
        }
        match self.resource {
            ExchangeResource::Eod | ExchangeResource::Intraday => Ok(()),
            ExchangeResource::Tickers => Err(MsError::Conflict(
                "tickers cannot be specified with a date or latest".into(),
            )),
            ExchangeResource::Info => Err(MsError::Conflict(
                "eod or intraday must be specified when a date or latest is specified".into(),
            )),
        }
    }
}

/// A builder for exchange requests (`/exchanges[/{mic}[/{resource}[/{date}|/latest]]]`).
#[derive(Debug, Clone)]
pub struct Exchanges {
    req: Request,
    state: ExchangeState,
}

impl Exchanges {
    /// Creates a builder for the exchange list.
    pub fn new(client: &MarketstackClient) -> Self {
        Self {
            req: Request::new(client, Endpoint::Exchanges),
            state: ExchangeState::default(),
        }
    }

    /// Creates a builder from flag-style options.
    ///
    /// # Errors
    ///
    /// Returns [`MsError::Conflict`] when more than one sub-resource is flagged, when
    /// both `date` and `latest` are set, or when the flags break any other rule;
    /// parameter errors as for the individual setters.
    pub fn with_options(
        client: &MarketstackClient,
        opts: ExchangesOptions,
    ) -> Result<Self, MsError> {
        let mut out = Self::new(client);
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
            (opts.tickers, ExchangeResource::Tickers),
            (opts.eod, ExchangeResource::Eod),
            (opts.intraday, ExchangeResource::Intraday),
        ];

        let mut state = ExchangeState {
            mic: opts.mic,
            ..ExchangeState::default()
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

    /// Sets the exchange by MIC (e.g. `XNAS`).
    ///
    /// # Errors
    ///
    /// Propagates any rule violation of the resulting state.
    pub fn exchange(&self, mic: impl Into<String>) -> Result<Self, MsError> {
        let mic = mic.into();
        self.transition(|st| {
            st.mic = Some(mic);
            Ok(())
        })
    }

    /// Selects the tickers listed on the exchange.
    ///
    /// # Errors
    ///
    /// [`MsError::Conflict`] without a MIC, with another sub-resource, or with a date or
    /// latest.
    pub fn tickers(&self) -> Result<Self, MsError> {
        self.transition(|st| st.select(ExchangeResource::Tickers))
    }

    /// Selects end-of-day prices on the exchange.
    ///
    /// # Errors
    ///
    /// [`MsError::Conflict`] without a MIC or with another sub-resource.
    pub fn eod(&self) -> Result<Self, MsError> {
        self.transition(|st| st.select(ExchangeResource::Eod))
    }

    /// Selects intraday prices on the exchange.
    ///
    /// # Errors
    ///
    /// [`MsError::Conflict`] without a MIC or with another sub-resource.
    pub fn intraday(&self) -> Result<Self, MsError> {
        self.transition(|st| st.select(ExchangeResource::Intraday))
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
    /// [`MsError::InvalidDateFormat`] on a malformed date; [`MsError::Conflict`] unless
    /// eod or intraday is selected, or if latest is set.
    pub fn historical(&self, date: impl Into<DateInput>) -> Result<Self, MsError> {
        let date = validate_date(date)?;
        self.transition(|st| st.pin(PointInTime::Date(date)))
    }

    /// Free-text search over exchange names.
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
    pub fn resource(&self) -> ExchangeResource {
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
        apply: impl FnOnce(&mut ExchangeState) -> Result<(), MsError>,
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
        if let Some(mic) = &self.state.mic {
            self.req.push_segment(mic.clone());
        }
        if let Some(seg) = self.state.resource.segment() {
            self.req.push_segment(seg);
        }
        if let Some(seg) = self.state.at.segment() {
            self.req.push_segment(seg.to_string());
        }
    }
}
