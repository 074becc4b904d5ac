//! Account summary models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cash breakdown of the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cash {
    /// Free cash that can be used to place orders
    pub available_to_trade: Option<Decimal>,
    /// Uninvested cash held inside pies
    pub in_pies: Option<Decimal>,
    /// Cash blocked by pending orders
    pub reserved_for_orders: Option<Decimal>,
}

/// Investment breakdown of the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investments {
    /// Current market value of all holdings
    pub current_value: Option<Decimal>,
    /// Realized profit or loss
    pub realized_profit_loss: Option<Decimal>,
    /// Total cost basis of the holdings
    pub total_cost: Option<Decimal>,
    /// Unrealized profit or loss
    pub unrealized_profit_loss: Option<Decimal>,
}

/// Top-level summary of the trading account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Cash breakdown
    pub cash: Option<Cash>,
    /// Account currency (ISO 4217)
    pub currency: Option<String>,
    /// Account identifier
    pub id: Option<i64>,
    /// Investment breakdown
    pub investments: Option<Investments>,
    /// Cash plus investments
    pub total_value: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_account_summary() {
        let json = r#"{
            "cash": {"availableToTrade": 1000.0, "inPies": 50.0, "reservedForOrders": 100.0},
            "currency": "GBP",
            "id": 123456,
            "investments": {
                "currentValue": 5000.0,
                "realizedProfitLoss": 200.0,
                "totalCost": 4800.0,
                "unrealizedProfitLoss": 200.0
            },
            "totalValue": 6000.0
        }"#;

        let summary: AccountSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.currency.as_deref(), Some("GBP"));
        assert_eq!(summary.id, Some(123456));
        assert_eq!(summary.total_value, Some(dec!(6000)));

        let cash = summary.cash.unwrap();
        assert_eq!(cash.available_to_trade, Some(dec!(1000)));
        assert_eq!(cash.in_pies, Some(dec!(50)));

        let investments = summary.investments.unwrap();
        assert_eq!(investments.total_cost, Some(dec!(4800)));
    }

    #[test]
    fn test_empty_object_is_all_none() {
        let summary: AccountSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary, AccountSummary::default());
        assert!(summary.cash.is_none());
    }
}
