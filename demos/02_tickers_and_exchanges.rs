use marketstack_rs::{Exchanges, MarketstackClient, MsError, Tickers};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = MarketstackClient::from_env()?;

    let apple = Tickers::new(&client).symbol("AAPL")?;
    println!("{:?}", apple.execute().await?);

    // Each call returns a new builder, so `apple` can be reused.
    let eod_day = apple.eod()?.historical("2023-01-03")?;
    println!("GET {}", eod_day.request().target()?);
    println!("{:?}", eod_day.execute().await?);

    let splits = apple.splits()?.fetch_table().await?;
    println!("{} splits", splits.len());

    // Rejected before any request is made.
    match apple.splits()?.latest() {
        Err(MsError::Conflict(msg)) => println!("rejected: {msg}"),
        other => println!("unexpected: {other:?}"),
    }

    let nasdaq_latest = Exchanges::new(&client).exchange("XNAS")?.eod()?.latest()?;
    println!("GET {}", nasdaq_latest.request().target()?);

    let listed = Exchanges::new(&client)
        .exchange("XNAS")?
        .tickers()?
        .limit(20)?
        .fetch_table()
        .await?;
    println!("{:?}", listed.column("symbol"));

    Ok(())
}
