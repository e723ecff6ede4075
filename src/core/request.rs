//! The request core shared by every resource builder.
//!
//! A [`Request`] owns the endpoint, the ordered path suffix and the query parameters.
//! Builders mutate it through validating setters and call [`Request::execute`] to issue
//! the single GET.

use std::collections::BTreeMap;

use serde_json::Value;
use url::Url;

use crate::core::validate::{
    validate_date, validate_limit, validate_offset, validate_search, DateInput,
};
use crate::core::{Endpoint, Feature, MarketstackClient, MsError, Response, Sort, Table};

const ACCESS_KEY: &str = "access_key";
const DATE_FROM: &str = "date_from";
const DATE_TO: &str = "date_to";

/// Which point in time a request is pinned to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PointInTime {
    /// No date segment; the API returns its default window.
    #[default]
    Any,
    /// A single validated date segment.
    Date(String),
    /// The `/latest` marker.
    Latest,
}

impl PointInTime {
    pub(crate) fn segment(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Date(d) => Some(d),
            Self::Latest => Some("latest"),
        }
    }
}

/// Everything that determines one HTTP request: endpoint, path suffix and parameters.
#[derive(Debug, Clone)]
pub struct Request {
    client: MarketstackClient,
    endpoint: Endpoint,
    segments: Vec<String>,
    params: BTreeMap<String, String>,
    at: PointInTime,
}

impl Request {
    pub(crate) fn new(client: &MarketstackClient, endpoint: Endpoint) -> Self {
        let mut params = BTreeMap::new();
        params.insert(ACCESS_KEY.to_string(), client.api_key().to_string());
        Self {
            client: client.clone(),
            endpoint,
            segments: Vec::new(),
            params,
            at: PointInTime::Any,
        }
    }

    /// The endpoint this request targets.
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Query parameters, `access_key` included.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// One query parameter, if set.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Path segments appended after the endpoint name.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The request target without query string, e.g. `.../v1/eod/latest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL cannot carry path segments.
    pub fn target(&self) -> Result<Url, MsError> {
        let mut url = self.client.base_url().join(self.endpoint.as_str())?;
        url.path_segments_mut()
            .map_err(|()| MsError::Data("base URL cannot carry path segments".into()))?
            .extend(&self.segments);
        Ok(url)
    }

    /// The full request URL including the query string.
    ///
    /// # Errors
    ///
    /// See [`Request::target`].
    pub fn url(&self) -> Result<Url, MsError> {
        let mut url = self.target()?;
        url.query_pairs_mut().extend_pairs(&self.params);
        Ok(url)
    }

    /* ---------------- path state ---------------- */

    /// Drops every accumulated path segment so the target is rebuilt from scratch.
    pub(crate) fn reset_target(&mut self) {
        self.segments.clear();
    }

    pub(crate) fn push_segment(&mut self, seg: impl Into<String>) {
        self.segments.push(seg.into());
    }

    /// Appends `/latest`. Calling it twice is a no-op.
    pub(crate) fn latest(&mut self) -> Result<(), MsError> {
        self.endpoint.require(Feature::Latest)?;
        if let PointInTime::Date(_) = self.at {
            return Err(MsError::Conflict(
                "a specific date and latest cannot be specified at the same time".into(),
            ));
        }
        self.at = PointInTime::Latest;
        self.rebuild_point_in_time();
        Ok(())
    }

    /// Pins the request to one date (`to` absent) or sets a date range.
    pub(crate) fn historical(
        &mut self,
        from: DateInput,
        to: Option<DateInput>,
    ) -> Result<(), MsError> {
        self.endpoint.require(Feature::Historical)?;
        let from = validate_date(from)?;
        let to = to.map(validate_date).transpose()?;

        if self.has_date_range() || matches!(self.at, PointInTime::Date(_)) {
            return Err(MsError::DuplicateDateRange);
        }

        match to {
            None => {
                if self.at == PointInTime::Latest {
                    return Err(MsError::Conflict(
                        "a specific date and latest cannot be specified at the same time".into(),
                    ));
                }
                self.at = PointInTime::Date(from);
                self.rebuild_point_in_time();
            }
            Some(to) => {
                self.params.insert(DATE_FROM.to_string(), from);
                self.params.insert(DATE_TO.to_string(), to);
            }
        }
        Ok(())
    }

    fn rebuild_point_in_time(&mut self) {
        self.reset_target();
        if let Some(seg) = self.at.segment().map(str::to_string) {
            self.push_segment(seg);
        }
    }

    fn has_date_range(&self) -> bool {
        self.params.contains_key(DATE_FROM) || self.params.contains_key(DATE_TO)
    }

    /* ---------------- shared parameters ---------------- */

    pub(crate) fn set_symbols(&mut self, symbols: impl Into<String>) {
        self.params.insert("symbols".into(), symbols.into());
    }

    pub(crate) fn set_exchange(&mut self, mic: impl Into<String>) {
        self.params.insert("exchange".into(), mic.into());
    }

    pub(crate) fn set_sort(&mut self, sort: Sort) {
        self.params.insert("sort".into(), sort.as_str().into());
    }

    pub(crate) fn set_date_from(&mut self, date: DateInput) -> Result<(), MsError> {
        self.set_range_bound(DATE_FROM, date)
    }

    pub(crate) fn set_date_to(&mut self, date: DateInput) -> Result<(), MsError> {
        self.set_range_bound(DATE_TO, date)
    }

    fn set_range_bound(&mut self, key: &str, date: DateInput) -> Result<(), MsError> {
        let date = validate_date(date)?;
        if matches!(self.at, PointInTime::Date(_)) {
            return Err(MsError::DuplicateDateRange);
        }
        self.params.insert(key.to_string(), date);
        Ok(())
    }

    pub(crate) fn set_limit(&mut self, limit: i64) -> Result<(), MsError> {
        let limit = validate_limit(limit)?;
        self.params.insert("limit".into(), limit.to_string());
        Ok(())
    }

    pub(crate) fn set_offset(&mut self, offset: i64) -> Result<(), MsError> {
        let offset = validate_offset(offset)?;
        self.params.insert("offset".into(), offset.to_string());
        Ok(())
    }

    pub(crate) fn set_search(&mut self, query: &str) -> Result<(), MsError> {
        let query = validate_search(query, self.endpoint)?;
        self.params.insert("search".into(), query);
        Ok(())
    }

    pub(crate) fn set_param(&mut self, key: &str, value: impl Into<String>) {
        self.params.insert(key.to_string(), value.into());
    }

    /* ---------------- execution ---------------- */

    /// Issues the GET and decodes the body.
    ///
    /// Only the first page of a paginated listing is returned.
    ///
    /// # Errors
    ///
    /// - [`MsError::MisconfiguredClient`] if the key is unset; no request is sent.
    /// - [`MsError::Timeout`] / [`MsError::Transport`] on network failure.
    /// - [`MsError::Api`] on a non-2xx status.
    /// - [`MsError::Data`] if the body is not JSON.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(endpoint = %self.endpoint, path = ?self.segments))
    )]
    pub async fn execute(&self) -> Result<Response, MsError> {
        self.client.ensure_configured()?;

        let url = self.target()?;
        let resp = self
            .client
            .http()
            .get(url)
            .query(&self.params)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let response = Response::from_body(&body)?;

        #[cfg(feature = "tracing")]
        {
            if let Response::Page(page) = &response
                && page.has_more()
            {
                tracing::warn!(
                    total = ?page.pagination.total,
                    count = ?page.pagination.count,
                    "only the first page of results was fetched"
                );
            }
        }

        Ok(response)
    }

    /// Executes the request and lays the records out as a [`Table`].
    ///
    /// # Errors
    ///
    /// Same as [`Request::execute`].
    pub async fn fetch_table(&self) -> Result<Table, MsError> {
        Ok(self.execute().await?.to_table())
    }
}

fn api_error(status: u16, body: &str) -> MsError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let node = parsed.as_ref().and_then(|v| v.get("error"));

    let message = node
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| format!("HTTP {status}: no error message"), str::to_string);

    let code = node.and_then(|e| e.get("code")).and_then(|c| match c {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    });

    MsError::Api {
        status,
        code,
        message,
    }
}
