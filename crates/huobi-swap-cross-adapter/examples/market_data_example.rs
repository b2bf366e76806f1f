/*
[INPUT]:  Contract code (e.g., "BTC-USDT")
[OUTPUT]: Market data (contract info, depth, funding rate)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use huobi_swap_cross_adapter::*;

/// Example: Query market data
///
/// Public endpoints are sent unsigned, so the credentials may be empty.
#[tokio::main]
async fn main() {
    println!("=== Huobi USDT Swap Market Data Example ===\n");

    let client = match HuobiSwapCrossClient::new(Credentials::new("", "")) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.host());

    let contract_code = "BTC-USDT";

    println!("Querying contract info for {}...", contract_code);
    match client.get_swap_info(Some(contract_code)).await {
        Ok(info) => println!("✓ Contract info: {}", info),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying depth for {}...", contract_code);
    match client.get_orderbook(contract_code).await {
        Ok(depth) => println!("✓ Depth: {}", depth),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying 1min klines for {}...", contract_code);
    match client
        .get_klines(contract_code, KlinePeriod::OneMinute, Some(5), None, None)
        .await
    {
        Ok(klines) => println!("✓ Klines: {}", klines),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying funding rate for {}...", contract_code);
    match client.get_funding_rate(contract_code).await {
        Ok(rate) => println!("✓ Funding rate: {}", rate),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
