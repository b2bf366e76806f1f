/*
[INPUT]:  Parsed CLI subcommand and a configured client
[OUTPUT]: Success payload of the invoked endpoint
[POS]:    Command layer - maps subcommands to adapter endpoints
[UPDATE]: When exposing more endpoints on the command line
*/

use clap::Subcommand;
use huobi_swap_cross_adapter::{HuobiSwapCrossClient, Result};
use serde_json::Value;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Contract specifications
    ContractInfo {
        #[arg(long)]
        contract_code: Option<String>,
    },
    /// Current funding rate
    FundingRate {
        #[arg(long)]
        contract_code: String,
    },
    /// Order book snapshot
    Depth {
        #[arg(long)]
        contract_code: String,
    },
    /// Cross margin account assets
    Account {
        #[arg(long)]
        margin_account: Option<String>,
    },
    /// Open positions
    Positions {
        #[arg(long)]
        contract_code: Option<String>,
    },
    /// Open orders
    OpenOrders {
        #[arg(long)]
        contract_code: String,
        #[arg(long)]
        page_index: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Cancel every open order of a contract
    CancelAll {
        #[arg(long)]
        contract_code: String,
    },
}

impl Command {
    /// Whether the command needs signed requests
    pub fn is_private(&self) -> bool {
        !matches!(
            self,
            Command::ContractInfo { .. } | Command::FundingRate { .. } | Command::Depth { .. }
        )
    }

    pub async fn run(&self, client: &HuobiSwapCrossClient) -> Result<Value> {
        match self {
            Command::ContractInfo { contract_code } => {
                client.get_swap_info(contract_code.as_deref()).await
            }
            Command::FundingRate { contract_code } => client.get_funding_rate(contract_code).await,
            Command::Depth { contract_code } => client.get_orderbook(contract_code).await,
            Command::Account { margin_account } => {
                client.get_asset_info(margin_account.as_deref()).await
            }
            Command::Positions { contract_code } => {
                client.get_position(contract_code.as_deref()).await
            }
            Command::OpenOrders {
                contract_code,
                page_index,
                page_size,
            } => {
                client
                    .get_open_orders(contract_code, *page_index, *page_size)
                    .await
            }
            Command::CancelAll { contract_code } => client.revoke_order_all(contract_code).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_parse_open_orders() {
        let cli = TestCli::try_parse_from([
            "test",
            "open-orders",
            "--contract-code",
            "BTC-USDT",
            "--page-size",
            "20",
        ])
        .expect("parse");

        assert_eq!(
            cli.command,
            Command::OpenOrders {
                contract_code: "BTC-USDT".to_string(),
                page_index: None,
                page_size: Some(20),
            }
        );
        assert!(cli.command.is_private());
    }

    #[test]
    fn test_parse_public_command() {
        let cli = TestCli::try_parse_from(["test", "contract-info"]).expect("parse");
        assert_eq!(cli.command, Command::ContractInfo { contract_code: None });
        assert!(!cli.command.is_private());
    }

    #[test]
    fn test_required_contract_code() {
        assert!(TestCli::try_parse_from(["test", "cancel-all"]).is_err());
    }
}
