//! Order models for placing and inspecting equity orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::*;
use super::instrument::Instrument;
use super::primitives::OrderId;

/// An equity order as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// When the order was created
    pub created_at: Option<DateTime<Utc>>,
    /// Currency of the order value
    pub currency: Option<String>,
    /// Whether the order may execute outside regular hours
    pub extended_hours: Option<bool>,
    /// Quantity filled so far
    pub filled_quantity: Option<Decimal>,
    /// Value filled so far
    pub filled_value: Option<Decimal>,
    /// Order identifier
    pub id: Option<i64>,
    /// Where the order was placed from
    pub initiated_from: Option<OrderInitiatedFrom>,
    /// Instrument being traded
    pub instrument: Option<Instrument>,
    /// Limit price, for limit and stop-limit orders
    pub limit_price: Option<Decimal>,
    /// Ordered quantity; negative for sells
    pub quantity: Option<Decimal>,
    /// Buy or sell
    pub side: Option<OrderSide>,
    /// Current status
    pub status: Option<OrderStatus>,
    /// Stop price, for stop and stop-limit orders
    pub stop_price: Option<Decimal>,
    /// Quantity or value sizing
    pub strategy: Option<OrderStrategy>,
    /// Trading 212 ticker
    pub ticker: Option<String>,
    /// Time validity
    pub time_in_force: Option<TimeValidity>,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    /// Ordered value, for value orders
    pub value: Option<Decimal>,
}

impl Order {
    /// Get the order id as a strongly-typed value.
    pub fn order_id(&self) -> Option<OrderId> {
        self.id.map(OrderId::new)
    }
}

/// A tax or fee charged on a fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tax {
    /// When it was charged
    pub charged_at: Option<DateTime<Utc>>,
    /// Charge currency
    pub currency: Option<String>,
    /// Kind of tax or fee
    pub name: Option<TaxName>,
    /// Amount charged
    pub quantity: Option<Decimal>,
}

/// Effect of a fill on the account wallet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillWalletImpact {
    /// Account currency
    pub currency: Option<String>,
    /// FX rate applied
    pub fx_rate: Option<Decimal>,
    /// Net cash movement
    pub net_value: Option<Decimal>,
    /// Realised profit or loss
    pub realised_profit_loss: Option<Decimal>,
    /// Taxes and fees charged
    pub taxes: Option<Vec<Tax>>,
}

/// An execution against an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Execution time
    pub filled_at: Option<DateTime<Utc>>,
    /// Fill identifier
    pub id: Option<i64>,
    /// Execution price
    pub price: Option<Decimal>,
    /// Executed quantity
    pub quantity: Option<Decimal>,
    /// Venue type
    pub trading_method: Option<FillTradingMethod>,
    /// Kind of fill
    #[serde(rename = "type")]
    pub fill_type: Option<FillType>,
    /// Wallet effect
    pub wallet_impact: Option<FillWalletImpact>,
}

/// Request body for a market order.
///
/// # Example
///
/// ```
/// use trading212_rs::models::MarketOrderRequest;
/// use rust_decimal_macros::dec;
///
/// let request = MarketOrderRequest::new("AAPL_US_EQ", dec!(1)).extended_hours(true);
/// assert!(request.extended_hours);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    /// Trading 212 ticker
    pub ticker: String,
    /// Quantity; negative to sell
    pub quantity: Decimal,
    /// Allow execution outside regular hours
    #[serde(default)]
    pub extended_hours: bool,
}

impl MarketOrderRequest {
    /// Create a regular-hours market order.
    pub fn new(ticker: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            quantity,
            extended_hours: false,
        }
    }

    /// Allow or forbid execution outside regular hours.
    pub fn extended_hours(mut self, enabled: bool) -> Self {
        self.extended_hours = enabled;
        self
    }
}

/// Request body for a limit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    /// Trading 212 ticker
    pub ticker: String,
    /// Quantity; negative to sell
    pub quantity: Decimal,
    /// Limit price
    pub limit_price: Decimal,
    /// How long the order stays active
    #[serde(default)]
    pub time_validity: TimeValidity,
}

impl LimitOrderRequest {
    /// Create a day limit order.
    pub fn new(ticker: impl Into<String>, quantity: Decimal, limit_price: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            quantity,
            limit_price,
            time_validity: TimeValidity::Day,
        }
    }

    /// Set the time validity.
    pub fn time_validity(mut self, validity: TimeValidity) -> Self {
        self.time_validity = validity;
        self
    }
}

/// Request body for a stop order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderRequest {
    /// Trading 212 ticker
    pub ticker: String,
    /// Quantity; negative to sell
    pub quantity: Decimal,
    /// Stop trigger price
    pub stop_price: Decimal,
    /// How long the order stays active
    #[serde(default)]
    pub time_validity: TimeValidity,
}

impl StopOrderRequest {
    /// Create a day stop order.
    pub fn new(ticker: impl Into<String>, quantity: Decimal, stop_price: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            quantity,
            stop_price,
            time_validity: TimeValidity::Day,
        }
    }

    /// Set the time validity.
    pub fn time_validity(mut self, validity: TimeValidity) -> Self {
        self.time_validity = validity;
        self
    }
}

/// Request body for a stop-limit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLimitOrderRequest {
    /// Trading 212 ticker
    pub ticker: String,
    /// Quantity; negative to sell
    pub quantity: Decimal,
    /// Limit price once triggered
    pub limit_price: Decimal,
    /// Stop trigger price
    pub stop_price: Decimal,
    /// How long the order stays active
    #[serde(default)]
    pub time_validity: TimeValidity,
}

impl StopLimitOrderRequest {
    /// Create a day stop-limit order.
    pub fn new(
        ticker: impl Into<String>,
        quantity: Decimal,
        limit_price: Decimal,
        stop_price: Decimal,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            quantity,
            limit_price,
            stop_price,
            time_validity: TimeValidity::Day,
        }
    }

    /// Set the time validity.
    pub fn time_validity(mut self, validity: TimeValidity) -> Self {
        self.time_validity = validity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const ORDER_JSON: &str = r#"{
        "createdAt": "2024-01-15T10:30:00Z",
        "currency": "GBP",
        "extendedHours": false,
        "filledQuantity": 0.0,
        "id": 987654321,
        "initiatedFrom": "API",
        "instrument": {
            "currency": "USD",
            "isin": "US0378331005",
            "name": "Apple Inc.",
            "ticker": "AAPL_US_EQ"
        },
        "quantity": 1.0,
        "side": "BUY",
        "status": "NEW",
        "strategy": "QUANTITY",
        "ticker": "AAPL_US_EQ",
        "type": "MARKET"
    }"#;

    #[test]
    fn test_deserialize_order() {
        let order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(order.order_id(), Some(OrderId::new(987654321)));
        assert_eq!(order.order_type, Some(OrderType::Market));
        assert_eq!(order.side, Some(OrderSide::Buy));
        assert_eq!(order.status, Some(OrderStatus::New));
        assert_eq!(order.strategy, Some(OrderStrategy::Quantity));
        assert_eq!(order.initiated_from, Some(OrderInitiatedFrom::Api));
        assert_eq!(order.quantity, Some(dec!(1)));
        assert!(order.created_at.is_some());
        assert!(order.limit_price.is_none());
        assert_eq!(
            order.instrument.unwrap().ticker.as_deref(),
            Some("AAPL_US_EQ")
        );
    }

    #[test]
    fn test_parse_twice_is_equal() {
        let first: Order = serde_json::from_str(ORDER_JSON).unwrap();
        let second: Order = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let order: Order =
            serde_json::from_str(r#"{"id": 1, "brandNewField": {"nested": true}}"#).unwrap();
        assert_eq!(order.id, Some(1));
    }

    #[test]
    fn test_market_order_request_serializes_camel_case() {
        let request = MarketOrderRequest::new("AAPL_US_EQ", dec!(1.0));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["ticker"], "AAPL_US_EQ");
        assert_eq!(value["quantity"], serde_json::json!(1.0));
        assert_eq!(value["extendedHours"], false);
    }

    #[test]
    fn test_stop_limit_request_defaults_to_day() {
        let request = StopLimitOrderRequest::new("TSLA_US_EQ", dec!(-2), dec!(190.5), dec!(195));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["timeValidity"], "DAY");
        assert_eq!(value["limitPrice"], serde_json::json!(190.5));
        assert_eq!(value["stopPrice"], serde_json::json!(195.0));
        assert_eq!(value["quantity"], serde_json::json!(-2.0));
    }
}
