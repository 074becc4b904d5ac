//! Print the account summary, open positions and recent orders.
//!
//! ```sh
//! T212_API_KEY=... T212_API_SECRET=... cargo run --example account_summary
//! ```
//!
//! Set `T212_ENV=live` to use the real-money account.

use futures_util::StreamExt;
use tracing_subscriber::EnvFilter;
use trading212_rs::api::HistoryQuery;
use trading212_rs::{Credentials, Environment, Trading212Client};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let credentials = Credentials::new(
        std::env::var("T212_API_KEY")?,
        std::env::var("T212_API_SECRET")?,
    );
    let environment = match std::env::var("T212_ENV").as_deref() {
        Ok("live") => Environment::Live,
        _ => Environment::Demo,
    };

    let client = Trading212Client::new(credentials, environment)?;

    let summary = client.account().summary().await?;
    let account = &summary.data;
    println!(
        "Account {:?} ({}): total {:?} {}",
        account.id,
        environment,
        account.total_value,
        account.currency.as_deref().unwrap_or("")
    );
    if let Some(cash) = &account.cash {
        println!("  available to trade: {:?}", cash.available_to_trade);
    }
    println!(
        "  rate limit: {:?}/{:?} left, resets at {:?}",
        summary.rate_limit.remaining,
        summary.rate_limit.limit,
        summary.rate_limit.reset_at()
    );

    let positions = client.positions().list().await?;
    println!("\n{} open positions", positions.data.len());
    for position in &positions.data {
        println!(
            "  {:<16} qty {:>10} @ {:?}",
            position.ticker().unwrap_or("?"),
            position.quantity.unwrap_or_default(),
            position.current_price
        );
    }

    println!("\nLast 10 filled orders");
    let mut history = client
        .history()
        .orders_stream(HistoryQuery::new().limit(10))
        .take(10);
    while let Some(item) = history.next().await {
        let item = item?;
        if let (Some(order), Some(fill)) = (item.order, item.fill) {
            println!(
                "  {:<16} {:?} at {:?}",
                order.ticker.unwrap_or_default(),
                fill.quantity,
                fill.price
            );
        }
    }

    client.close();
    Ok(())
}
