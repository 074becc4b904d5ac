//! Historical orders, dividends, transactions and CSV export models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{DividendType, ReportStatus, TransactionType};
use super::instrument::Instrument;
use super::order::{Fill, Order};

/// A past order together with its fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalOrder {
    /// Execution details, absent for unfilled orders
    pub fill: Option<Fill>,
    /// The order
    pub order: Option<Order>,
}

/// A paid dividend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDividendItem {
    /// Amount paid, in account currency
    pub amount: Option<Decimal>,
    /// Amount paid, in EUR
    pub amount_in_euro: Option<Decimal>,
    /// Account currency
    pub currency: Option<String>,
    /// Gross amount per share, in instrument currency
    pub gross_amount_per_share: Option<Decimal>,
    /// Instrument that paid the dividend
    pub instrument: Option<Instrument>,
    /// Payment date
    pub paid_on: Option<DateTime<Utc>>,
    /// Shares held at the record date
    pub quantity: Option<Decimal>,
    /// Broker reference
    pub reference: Option<String>,
    /// Trading 212 ticker
    pub ticker: Option<String>,
    /// Instrument currency
    pub ticker_currency: Option<String>,
    /// Kind of dividend
    #[serde(rename = "type")]
    pub dividend_type: Option<DividendType>,
}

/// A cash movement on the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryTransactionItem {
    /// Amount moved
    pub amount: Option<Decimal>,
    /// Currency of the amount
    pub currency: Option<String>,
    /// When it happened
    pub date_time: Option<DateTime<Utc>>,
    /// Broker reference
    pub reference: Option<String>,
    /// Kind of movement
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
}

/// Sections to include in a CSV export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDataIncluded {
    /// Include dividends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_dividends: Option<bool>,
    /// Include interest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_interest: Option<bool>,
    /// Include orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_orders: Option<bool>,
    /// Include transactions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_transactions: Option<bool>,
}

impl ReportDataIncluded {
    /// Include every section.
    pub fn all() -> Self {
        Self {
            include_dividends: Some(true),
            include_interest: Some(true),
            include_orders: Some(true),
            include_transactions: Some(true),
        }
    }
}

/// Request body for a CSV export.
///
/// # Example
///
/// ```
/// use trading212_rs::models::{PublicReportRequest, ReportDataIncluded};
///
/// let request = PublicReportRequest {
///     data_included: Some(ReportDataIncluded::all()),
///     ..Default::default()
/// };
/// let json = serde_json::to_value(&request).unwrap();
/// assert!(json.get("timeFrom").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicReportRequest {
    /// Sections to include
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_included: Option<ReportDataIncluded>,
    /// Start of the reporting window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_from: Option<DateTime<Utc>>,
    /// End of the reporting window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to: Option<DateTime<Utc>>,
}

/// A requested CSV export and its state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    /// Sections included
    pub data_included: Option<ReportDataIncluded>,
    /// Download link, once finished
    pub download_link: Option<String>,
    /// Report identifier
    pub report_id: Option<i64>,
    /// Processing state
    pub status: Option<ReportStatus>,
    /// Start of the reporting window
    pub time_from: Option<DateTime<Utc>>,
    /// End of the reporting window
    pub time_to: Option<DateTime<Utc>>,
}

/// Acknowledgement of a queued CSV export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnqueuedReportResponse {
    /// Identifier to look the report up with
    pub report_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FillTradingMethod, FillType};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_historical_order_fill() {
        let json = r#"{
            "order": {"id": 987654321, "ticker": "AAPL_US_EQ", "type": "MARKET"},
            "fill": {
                "filledAt": "2024-01-15T10:30:05Z",
                "id": 111222333,
                "price": 175.50,
                "quantity": 1.0,
                "tradingMethod": "OTC",
                "type": "TRADE",
                "walletImpact": {
                    "currency": "GBP",
                    "fxRate": 0.79,
                    "netValue": -138.65,
                    "realisedProfitLoss": 0.0,
                    "taxes": []
                }
            }
        }"#;

        let item: HistoricalOrder = serde_json::from_str(json).unwrap();
        let fill = item.fill.unwrap();
        assert_eq!(fill.price, Some(dec!(175.5)));
        assert_eq!(fill.trading_method, Some(FillTradingMethod::Otc));
        assert_eq!(fill.fill_type, Some(FillType::Trade));
        let impact = fill.wallet_impact.unwrap();
        assert_eq!(impact.fx_rate, Some(dec!(0.79)));
        assert_eq!(impact.net_value, Some(dec!(-138.65)));
        assert_eq!(impact.taxes, Some(vec![]));
        assert_eq!(item.order.unwrap().ticker.as_deref(), Some("AAPL_US_EQ"));
    }

    #[test]
    fn test_deserialize_dividend() {
        let json = r#"{
            "amount": 12.50,
            "amountInEuro": 14.30,
            "currency": "GBP",
            "grossAmountPerShare": 0.25,
            "paidOn": "2024-01-12T00:00:00Z",
            "quantity": 50.0,
            "reference": "DIV-REF-001",
            "ticker": "AAPL_US_EQ",
            "tickerCurrency": "USD",
            "type": "ORDINARY"
        }"#;

        let dividend: HistoryDividendItem = serde_json::from_str(json).unwrap();
        assert_eq!(dividend.amount, Some(dec!(12.5)));
        assert_eq!(dividend.dividend_type, Some(DividendType::Ordinary));
        assert_eq!(
            dividend.paid_on,
            Some(Utc.with_ymd_and_hms(2024, 1, 12, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_deserialize_transaction() {
        let json = r#"{
            "amount": 500.0,
            "currency": "GBP",
            "dateTime": "2024-01-05T12:00:00Z",
            "reference": "DEP-REF-001",
            "type": "DEPOSIT"
        }"#;

        let tx: HistoryTransactionItem = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, Some(dec!(500)));
        assert_eq!(tx.transaction_type, Some(TransactionType::Deposit));
        assert!(tx.date_time.is_some());
    }

    #[test]
    fn test_report_request_omits_unset_fields() {
        let request = PublicReportRequest {
            data_included: Some(ReportDataIncluded {
                include_orders: Some(true),
                ..Default::default()
            }),
            time_from: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            time_to: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["dataIncluded"], serde_json::json!({"includeOrders": true}));
        assert!(value.get("timeFrom").is_some());
        assert!(value.get("timeTo").is_none());
    }

    #[test]
    fn test_deserialize_report() {
        let json = r#"{
            "reportId": 42,
            "status": "Finished",
            "downloadLink": "https://example.com/report.csv",
            "dataIncluded": {"includeOrders": true, "includeDividends": false}
        }"#;

        let report: ReportResponse = serde_json::from_str(json).unwrap();
        assert_eq!(report.report_id, Some(42));
        assert_eq!(report.status, Some(ReportStatus::Finished));
        let included = report.data_included.unwrap();
        assert_eq!(included.include_orders, Some(true));
        assert_eq!(included.include_dividends, Some(false));
        assert_eq!(included.include_interest, None);
    }
}
