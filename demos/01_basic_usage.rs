use marketstack_rs::{Currencies, Dividends, EndOfDay, Intraday, IntradayInterval, MarketstackClient, Sort};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads MARKETSTACK_API_KEY (a .env file is honoured).
    let client = MarketstackClient::from_env()?;

    println!("--- Latest end-of-day bar ---");
    for bar in EndOfDay::new(&client, "AAPL").latest()?.fetch_bars().await? {
        println!("{} {}: close {:?}", bar.date, bar.symbol, bar.close);
    }

    println!("\n--- January 2024 closes ---");
    let table = EndOfDay::new(&client, "AAPL,MSFT")
        .sort(Sort::Asc)
        .historical_range("2024-01-01", "2024-01-31")?
        .limit(100)?
        .fetch_table()
        .await?;
    println!("{} rows, columns: {:?}", table.len(), table.columns());

    println!("\n--- Hourly intraday bars ---");
    let resp = Intraday::new(&client, "AAPL")
        .interval(IntradayInterval::H1)
        .limit(10)?
        .execute()
        .await?;
    if let Some(page) = resp.as_page() {
        println!("{} bars (more available: {})", page.data.len(), page.has_more());
    }

    println!("\n--- Dividends since 2020 ---");
    for d in Dividends::new(&client, "KO").date_from("2020-01-01")?.fetch_dividends().await? {
        println!("{} {} {}", d.date, d.symbol, d.dividend);
    }

    println!("\n--- Currencies ---");
    let currencies = Currencies::new(&client).limit(5)?.fetch_table().await?;
    println!("{:?}", currencies.column("code"));

    Ok(())
}
