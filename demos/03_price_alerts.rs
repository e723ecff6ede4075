//! Checks end-of-day closes against thresholds from `alerts.toml`.
//!
//! Run with: cargo run --example 03_price_alerts --features tracing-subscriber -- alerts.toml [--watch]

use std::sync::Arc;
use std::time::Duration;

use marketstack_rs::{AlertConfig, AlertOutcome, AlertWatcher, MarketstackClient, MsError, Notifier};

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), MsError> {
        println!("🚨 {title}: {message}");
        Ok(())
    }
}

fn report(outcome: &AlertOutcome) {
    match outcome {
        AlertOutcome::Below { symbol, price, threshold } => {
            println!("{symbol} current price: {price:.2} (threshold {threshold:.2})");
        }
        AlertOutcome::Triggered { symbol, price, .. } => {
            println!("{symbol} current price: {price:.2} (alerted)");
        }
        AlertOutcome::NoData { symbol } => println!("No data found for {symbol}"),
        AlertOutcome::Skipped { symbol } => println!("{symbol}: alert disabled"),
        AlertOutcome::Failed { symbol, error } => {
            println!("Failed to retrieve price for {symbol}: {error}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "alerts.toml".into());
    let watch = args.any(|a| a == "--watch");

    let config = AlertConfig::from_path(&path)?;
    let client = MarketstackClient::from_env()?;
    let watcher = AlertWatcher::new(&client)
        .rules(config.rules)
        .interval(Duration::from_secs(15 * 60));

    if !watch {
        for outcome in watcher.run_once(&ConsoleNotifier).await {
            report(&outcome);
        }
        return Ok(());
    }

    let (handle, mut rx) = watcher.start(Arc::new(ConsoleNotifier))?;
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            println!("Stopping watcher.");
            handle.stop().await;
        }
        () = async {
            while let Some(outcome) = rx.recv().await {
                report(&outcome);
            }
        } => {}
    }

    Ok(())
}
