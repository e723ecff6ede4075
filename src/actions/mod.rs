//! Corporate action builders: splits and dividends.

use crate::core::builder::{paging_methods, series_methods, terminal_methods};
use crate::core::{Dividend, Endpoint, MarketstackClient, MsError, Request, Split};

/// A builder for split history (`/splits`).
#[derive(Debug, Clone)]
pub struct Splits {
    req: Request,
}

impl Splits {
    /// Creates a builder for one or more comma-separated symbols.
    pub fn new(client: &MarketstackClient, symbols: impl Into<String>) -> Self {
        let mut req = Request::new(client, Endpoint::Splits);
        req.set_symbols(symbols);
        Self { req }
    }

    series_methods!();
    paging_methods!();
    terminal_methods!();

    /// Executes the request and returns typed splits.
    ///
    /// # Errors
    ///
    /// See `Request::execute`.
    pub async fn fetch_splits(&self) -> Result<Vec<Split>, MsError> {
        self.req.execute().await?.deserialize_records()
    }
}

/// A builder for dividend history (`/dividends`).
#[derive(Debug, Clone)]
pub struct Dividends {
    req: Request,
}

impl Dividends {
    /// Creates a builder for one or more comma-separated symbols.
    pub fn new(client: &MarketstackClient, symbols: impl Into<String>) -> Self {
        let mut req = Request::new(client, Endpoint::Dividends);
        req.set_symbols(symbols);
        Self { req }
    }

    series_methods!();
    paging_methods!();
    terminal_methods!();

    /// Executes the request and returns typed dividends.
    ///
    /// # Errors
    ///
    /// See `Request::execute`.
    pub async fn fetch_dividends(&self) -> Result<Vec<Dividend>, MsError> {
        self.req.execute().await?.deserialize_records()
    }
}
