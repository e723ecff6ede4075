//! Reference listings that only page: currencies and timezones.

use crate::core::builder::{paging_methods, terminal_methods};
use crate::core::{Endpoint, MarketstackClient, Request};

/// A builder for the supported currency list (`/currencies`).
#[derive(Debug, Clone)]
pub struct Currencies {
    req: Request,
}

impl Currencies {
    pub fn new(client: &MarketstackClient) -> Self {
        Self {
            req: Request::new(client, Endpoint::Currencies),
        }
    }

    paging_methods!();
    terminal_methods!();
}

/// A builder for the supported timezone list (`/timezones`).
#[derive(Debug, Clone)]
pub struct Timezones {
    req: Request,
}

impl Timezones {
    pub fn new(client: &MarketstackClient) -> Self {
        Self {
            req: Request::new(client, Endpoint::Timezones),
        }
    }

    paging_methods!();
    terminal_methods!();
}
