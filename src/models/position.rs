//! Open position models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::instrument::Instrument;

/// Effect of a position on the account wallet, in account currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionWalletImpact {
    /// Account currency
    pub currency: Option<String>,
    /// Current market value
    pub current_value: Option<Decimal>,
    /// Profit or loss caused by FX moves
    pub fx_impact: Option<Decimal>,
    /// Cost basis
    pub total_cost: Option<Decimal>,
    /// Unrealized profit or loss
    pub unrealized_profit_loss: Option<Decimal>,
}

/// An open equity position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Average price paid per share, in instrument currency
    pub average_price_paid: Option<Decimal>,
    /// When the position was opened
    pub created_at: Option<DateTime<Utc>>,
    /// Latest price, in instrument currency
    pub current_price: Option<Decimal>,
    /// Instrument held
    pub instrument: Option<Instrument>,
    /// Total quantity held
    pub quantity: Option<Decimal>,
    /// Quantity not locked by pending orders or pies
    pub quantity_available_for_trading: Option<Decimal>,
    /// Quantity held inside pies
    pub quantity_in_pies: Option<Decimal>,
    /// Wallet effect
    pub wallet_impact: Option<PositionWalletImpact>,
}

impl Position {
    /// Ticker of the held instrument, if reported.
    pub fn ticker(&self) -> Option<&str> {
        self.instrument.as_ref().and_then(|i| i.ticker.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_position() {
        let json = r#"{
            "averagePricePaid": 150.25,
            "createdAt": "2024-01-10T09:00:00Z",
            "currentPrice": 175.50,
            "instrument": {"currency": "USD", "ticker": "AAPL_US_EQ"},
            "quantity": 5.0,
            "quantityAvailableForTrading": 5.0,
            "quantityInPies": 0.0,
            "walletImpact": {
                "currency": "GBP",
                "currentValue": 877.50,
                "fxImpact": 10.0,
                "totalCost": 751.25,
                "unrealizedProfitLoss": 126.25
            }
        }"#;

        let position: Position = serde_json::from_str(json).unwrap();
        assert_eq!(position.quantity, Some(dec!(5.0)));
        assert_eq!(position.average_price_paid, Some(dec!(150.25)));
        assert_eq!(position.current_price, Some(dec!(175.5)));
        assert_eq!(position.quantity_in_pies, Some(dec!(0)));
        assert_eq!(position.ticker(), Some("AAPL_US_EQ"));

        let impact = position.wallet_impact.unwrap();
        assert_eq!(impact.currency.as_deref(), Some("GBP"));
        assert_eq!(impact.unrealized_profit_loss, Some(dec!(126.25)));
    }
}
