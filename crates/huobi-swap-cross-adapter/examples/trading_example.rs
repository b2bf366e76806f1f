/*
[INPUT]:  API keys from the environment and order parameters
[OUTPUT]: Order placement/cancellation payloads
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use huobi_swap_cross_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: Trading operations (signed requests)
///
/// Set HUOBI_ACCESS_KEY and HUOBI_SECRET_KEY before running.
#[tokio::main]
async fn main() {
    println!("=== Huobi USDT Swap Trading Example ===\n");

    let (Ok(access_key), Ok(secret_key)) = (
        std::env::var("HUOBI_ACCESS_KEY"),
        std::env::var("HUOBI_SECRET_KEY"),
    ) else {
        eprintln!("HUOBI_ACCESS_KEY and HUOBI_SECRET_KEY must be set");
        return;
    };

    let client = match HuobiSwapCrossClient::new(Credentials::new(access_key, secret_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let order = NewOrderRequest::limit(
        "BTC-USDT",
        Decimal::from_str("10000").unwrap_or_default(),
        1,
        Direction::Buy,
        Offset::Open,
        5,
    )
    .with_client_order_id(1001);
    println!("\nPlacing order: {:?}", order);

    match client.create_order(&order).await {
        Ok(placed) => println!("✓ Order placed: {}", placed),
        Err(HuobiError::Api(err)) => {
            println!("✗ Rejected (code {:?}): {:?}", err.err_code(), err.err_msg())
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nCancelling all BTC-USDT orders...");
    match client.revoke_order_all("BTC-USDT").await {
        Ok(result) => println!("✓ Cancelled: {}", result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
