//! Example demonstrating Polars `DataFrame` integration.
//!
//! Run with: cargo run --example 04_polars_dataframes --features dataframe

use marketstack_rs::{EndOfDay, MarketstackClient, Sort, ToDataFrame};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = MarketstackClient::from_env()?;

    let resp = EndOfDay::new(&client, "GLDM")
        .sort(Sort::Desc)
        .limit(30)?
        .execute()
        .await?;

    let df = resp.to_dataframe()?;
    println!("DataFrame shape: {:?}", df.shape());
    println!("{}", df.head(Some(5)));

    Ok(())
}
