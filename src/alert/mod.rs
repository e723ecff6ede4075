//! End-of-day price alerts built on the [`EndOfDay`](crate::EndOfDay) builder.
//!
//! A rule fires when the most recent close of its symbol is at or above its threshold.
//! Delivery is left to a [`Notifier`] supplied by the caller.

mod config;
mod watcher;

pub use config::{AlertConfig, AlertRule};
pub use watcher::{AlertWatcher, WatchHandle};

use crate::core::{EodBar, MarketstackClient, MsError, Sort};
use crate::prices::EndOfDay;

/// Receives alert notifications.
pub trait Notifier: Send + Sync {
    /// Deliver one notification.
    ///
    /// # Errors
    ///
    /// Implementations report delivery failures; the watcher records them as
    /// [`AlertOutcome::Failed`] and carries on.
    fn notify(&self, title: &str, message: &str) -> Result<(), MsError>;
}

/// What happened when one rule was checked.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertOutcome {
    /// The rule is disabled.
    Skipped { symbol: String },
    /// The API returned no bars for the symbol.
    NoData { symbol: String },
    /// Latest close is under the threshold.
    Below {
        symbol: String,
        price: f64,
        threshold: f64,
    },
    /// Latest close reached the threshold and a notification was sent.
    Triggered {
        symbol: String,
        price: f64,
        threshold: f64,
    },
    /// Fetching or notifying failed.
    Failed { symbol: String, error: String },
}

impl AlertOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            Self::Skipped { symbol }
            | Self::NoData { symbol }
            | Self::Below { symbol, .. }
            | Self::Triggered { symbol, .. }
            | Self::Failed { symbol, .. } => symbol,
        }
    }
}

/// Fetches the most recent end-of-day bar that carries a close.
///
/// # Errors
///
/// Propagates request errors from [`EndOfDay::fetch_bars`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn latest_close(
    client: &MarketstackClient,
    symbol: &str,
) -> Result<Option<EodBar>, MsError> {
    let bars = EndOfDay::new(client, symbol)
        .sort(Sort::Desc)
        .fetch_bars()
        .await?;

    Ok(bars
        .into_iter()
        .filter(|b| b.close.is_some())
        .max_by(|a, b| {
            a.timestamp()
                .cmp(&b.timestamp())
                .then_with(|| a.date.cmp(&b.date))
        }))
}

/// Checks one rule and notifies when it fires.
///
/// # Errors
///
/// Propagates request errors and notifier failures.
pub async fn check_rule(
    client: &MarketstackClient,
    rule: &AlertRule,
    notifier: &dyn Notifier,
) -> Result<AlertOutcome, MsError> {
    let symbol = rule.symbol.clone();
    if !rule.enabled {
        return Ok(AlertOutcome::Skipped { symbol });
    }

    let Some(price) = latest_close(client, &rule.symbol)
        .await?
        .and_then(|bar| bar.close)
    else {
        return Ok(AlertOutcome::NoData { symbol });
    };

    if price < rule.threshold {
        return Ok(AlertOutcome::Below {
            symbol,
            price,
            threshold: rule.threshold,
        });
    }

    notifier.notify(
        &format!("{symbol} Alert"),
        &format!("{symbol} has reached {price:.2}"),
    )?;

    Ok(AlertOutcome::Triggered {
        symbol,
        price,
        threshold: rule.threshold,
    })
}
