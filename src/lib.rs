//! marketstack-rs: fluent client for the Marketstack market-data API.
//!
//! Each endpoint family has a builder that assembles the request path and query
//! parameters, validating every option at the call that sets it. A terminal
//! `execute()` performs one GET and returns the decoded [`Response`].
//!
//! ```no_run
//! use marketstack_rs::{EndOfDay, MarketstackClient, Tickers};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), marketstack_rs::MsError> {
//! let client = MarketstackClient::builder().api_key("your-key").build()?;
//!
//! let latest = EndOfDay::new(&client, "AAPL").latest()?.execute().await?;
//! let splits = Tickers::new(&client).symbol("AAPL")?.splits()?.fetch_table().await?;
//! # let _ = (latest, splits);
//! # Ok(())
//! # }
//! ```
//!
//! Only the first page of a paginated listing is fetched; [`Page::has_more`] reports
//! whether more records exist.

pub mod core;

pub mod actions;
pub mod alert;
pub mod exchanges;
pub mod prices;
pub mod reference;
pub mod tickers;

pub use crate::core::validate::{
    validate_date, validate_endpoint, validate_limit, validate_offset, validate_search,
    validate_sort,
};
pub use crate::core::{
    DateInput, Dividend, Endpoint, EodBar, Feature, MarketstackClient, MarketstackClientBuilder,
    MsError, Page, Pagination, PointInTime, Request, Response, Sort, Split, Table,
};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;

pub use actions::{Dividends, Splits};
pub use alert::{AlertConfig, AlertOutcome, AlertRule, AlertWatcher, Notifier, WatchHandle};
pub use exchanges::{ExchangeResource, Exchanges, ExchangesOptions};
pub use prices::{EndOfDay, Intraday, IntradayInterval};
pub use reference::{Currencies, Timezones};
pub use tickers::{TickerResource, Tickers, TickersOptions};
