use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{MsError, Table};

/// Paging block returned alongside list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl Pagination {
    /// Whether the API holds records beyond this page.
    ///
    /// Only the first page is ever fetched; callers wanting the rest must issue a new
    /// request with a larger `offset`.
    pub fn has_more(&self) -> bool {
        match (self.total, self.count) {
            (Some(total), Some(count)) => self.offset.unwrap_or(0) + count < total,
            _ => false,
        }
    }
}

/// One page of homogeneous records.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub pagination: Pagination,
    pub data: Vec<Value>,
}

impl Page {
    /// Whether the API holds records beyond this page.
    pub fn has_more(&self) -> bool {
        self.pagination.has_more()
    }

    /// Deserializes every record into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`MsError::Data`] if any record does not match `T`.
    pub fn records<T: DeserializeOwned>(&self) -> Result<Vec<T>, MsError> {
        self.data
            .iter()
            .map(|v| serde_json::from_value(v.clone()).map_err(MsError::from))
            .collect()
    }
}

/// A decoded API response.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The body carried a `pagination` block; this holds its `data` records.
    Page(Page),
    /// Any other body, as decoded.
    Single(Value),
}

impl Response {
    pub(crate) fn from_body(body: &str) -> Result<Self, MsError> {
        let mut value: Value = serde_json::from_str(body)?;

        // An empty `pagination` object marks no paging at all.
        let paged = match value.get("pagination") {
            None | Some(Value::Null) => false,
            Some(Value::Object(block)) => !block.is_empty(),
            Some(_) => true,
        };
        if !paged {
            return Ok(Self::Single(value));
        }

        let pagination = serde_json::from_value::<Pagination>(value["pagination"].take())
            .map_err(|e| MsError::Data(format!("malformed pagination block: {e}")))?;

        // Nested listings (e.g. `/tickers/{symbol}/eod`) page an object, not a list.
        let data = match value.get_mut("data").map(Value::take) {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => vec![other],
        };

        Ok(Self::Page(Page { pagination, data }))
    }

    /// The records carried by this response.
    ///
    /// A page yields its `data`; a bare array yields its items; any other single
    /// value is treated as one record.
    pub fn records(&self) -> &[Value] {
        match self {
            Self::Page(p) => &p.data,
            Self::Single(Value::Array(items)) => items,
            Self::Single(v) => std::slice::from_ref(v),
        }
    }

    /// The page, if the response was paginated.
    pub fn as_page(&self) -> Option<&Page> {
        match self {
            Self::Page(p) => Some(p),
            Self::Single(_) => None,
        }
    }

    /// Deserializes the records into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`MsError::Data`] if any record does not match `T`.
    pub fn deserialize_records<T: DeserializeOwned>(&self) -> Result<Vec<T>, MsError> {
        self.records()
            .iter()
            .map(|v| serde_json::from_value(v.clone()).map_err(MsError::from))
            .collect()
    }

    /// Tabular view of the records. An empty page gives an empty table.
    pub fn to_table(&self) -> Table {
        Table::from_records(self.records())
    }
}

/// One end-of-day (or intraday) price bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EodBar {
    pub symbol: String,
    #[serde(default)]
    pub exchange: Option<String>,
    pub date: String,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub adj_close: Option<f64>,
}

impl EodBar {
    /// Parses `date` (`2024-01-02T00:00:00+0000`).
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        parse_api_timestamp(&self.date)
    }
}

/// One stock split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub symbol: String,
    pub date: String,
    pub split_factor: f64,
}

/// One dividend payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dividend {
    pub symbol: String,
    pub date: String,
    pub dividend: f64,
}

pub(crate) fn parse_api_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .ok()
}
