use std::sync::Arc;
use std::time::Duration;

use tokio::{
    select,
    sync::{mpsc, oneshot},
    task::JoinHandle,
    time::interval,
};

use super::{check_rule, AlertOutcome, AlertRule, Notifier};
use crate::core::{MarketstackClient, MsError};

/// A handle for a running watcher task.
pub struct WatchHandle {
    join: JoinHandle<()>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl WatchHandle {
    /// Ask the watcher to stop after the current pass and wait for it to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.join.await;
    }

    /// Immediately abort the background task.
    pub fn abort(self) {
        self.join.abort();
    }
}

/// Periodically checks a set of alert rules.
pub struct AlertWatcher {
    client: MarketstackClient,
    rules: Vec<AlertRule>,
    interval: Duration,
}

impl AlertWatcher {
    /// Start from an existing client (cloned internally). Default cadence: 1 hour.
    pub fn new(client: &MarketstackClient) -> Self {
        Self {
            client: client.clone(),
            rules: Vec::new(),
            interval: Duration::from_secs(3600),
        }
    }

    /// Watch these rules (replaces).
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = AlertRule>,
    {
        self.rules = rules.into_iter().collect();
        self
    }

    /// Add a single rule.
    #[must_use]
    pub fn add_rule(mut self, rule: AlertRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Poll interval.
    #[must_use]
    pub const fn interval(mut self, dur: Duration) -> Self {
        self.interval = dur;
        self
    }

    /// Checks every rule once, in order.
    ///
    /// A failing symbol yields [`AlertOutcome::Failed`]; the remaining rules are still
    /// checked.
    pub async fn run_once(&self, notifier: &dyn Notifier) -> Vec<AlertOutcome> {
        let mut out = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let outcome = match check_rule(&self.client, rule, notifier).await {
                Ok(o) => o,
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(symbol = %rule.symbol, error = %e, "alert check failed");
                    AlertOutcome::Failed {
                        symbol: rule.symbol.clone(),
                        error: e.to_string(),
                    }
                }
            };
            out.push(outcome);
        }
        out
    }

    /// Start polling in the background. Returns a handle and a receiver of outcomes.
    ///
    /// The first pass runs immediately. Dropping the receiver stops the task after the
    /// pass in progress.
    ///
    /// # Errors
    ///
    /// Returns [`MsError::Config`] when no rules are set or the interval is zero, and
    /// [`MsError::MisconfiguredClient`] when the client has no API key.
    pub fn start(
        self,
        notifier: Arc<dyn Notifier>,
    ) -> Result<(WatchHandle, mpsc::Receiver<AlertOutcome>), MsError> {
        if self.rules.is_empty() {
            return Err(MsError::Config("watcher: at least one rule required".into()));
        }
        if self.interval.is_zero() {
            return Err(MsError::Config("watcher: interval must be non-zero".into()));
        }
        self.client.ensure_configured()?;

        let (tx, rx) = mpsc::channel::<AlertOutcome>(256);
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let join = tokio::spawn(async move {
            let mut ticker = interval(self.interval);
            loop {
                select! {
                    _ = ticker.tick() => {
                        for outcome in self.run_once(notifier.as_ref()).await {
                            if tx.send(outcome).await.is_err() {
                                return;
                            }
                        }
                    }
                    _ = &mut stop_rx => {
                        break;
                    }
                }
            }
        });

        Ok((
            WatchHandle {
                join,
                stop_tx: Some(stop_tx),
            },
            rx,
        ))
    }
}
