//! Pie (bucket) models.
//!
//! The pies endpoints are deprecated by Trading 212; the models are kept so
//! existing pies can still be inspected and managed.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{DividendCashAction, InstrumentIssueName, IssueSeverity, PieStatus};
use super::primitives::PieId;

/// Price-averaged investment result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    /// Amount invested
    pub price_avg_invested_value: Option<Decimal>,
    /// Absolute result
    pub price_avg_result: Option<Decimal>,
    /// Result as a coefficient of the invested value
    pub price_avg_result_coef: Option<Decimal>,
    /// Current value
    pub price_avg_value: Option<Decimal>,
}

/// Dividends received by a pie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendDetails {
    /// Total dividends gained
    pub gained: Option<Decimal>,
    /// Paid out as cash
    pub in_cash: Option<Decimal>,
    /// Reinvested
    pub reinvested: Option<Decimal>,
}

/// Problem affecting an instrument in a pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentIssue {
    /// Issue kind
    pub name: Option<InstrumentIssueName>,
    /// Issue severity
    pub severity: Option<IssueSeverity>,
}

/// Pie settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSettings {
    /// When the pie was created
    pub creation_date: Option<DateTime<Utc>>,
    /// Dividend handling
    pub dividend_cash_action: Option<DividendCashAction>,
    /// Target date
    pub end_date: Option<DateTime<Utc>>,
    /// Target value
    pub goal: Option<Decimal>,
    /// Icon name
    pub icon: Option<String>,
    /// Pie identifier
    pub id: Option<i64>,
    /// Initial investment
    pub initial_investment: Option<Decimal>,
    /// Target weight per ticker
    pub instrument_shares: Option<HashMap<String, Decimal>>,
    /// Pie name
    pub name: Option<String>,
    /// Public sharing URL
    pub public_url: Option<String>,
}

/// State of one instrument inside a pie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieInstrumentResult {
    /// Current weight
    pub current_share: Option<Decimal>,
    /// Target weight
    pub expected_share: Option<Decimal>,
    /// Known problems
    pub issues: Option<Vec<InstrumentIssue>>,
    /// Quantity held
    pub owned_quantity: Option<Decimal>,
    /// Investment result
    pub result: Option<InvestmentResult>,
    /// Trading 212 ticker
    pub ticker: Option<String>,
}

/// A pie with its settings and instruments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieDetails {
    /// Instruments held
    pub instruments: Option<Vec<PieInstrumentResult>>,
    /// Pie settings
    pub settings: Option<PieSettings>,
}

impl PieDetails {
    /// Get the pie id as a strongly-typed value.
    pub fn pie_id(&self) -> Option<PieId> {
        self.settings.as_ref().and_then(|s| s.id).map(PieId::new)
    }
}

/// Summary entry returned when listing pies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSummary {
    /// Uninvested cash
    pub cash: Option<Decimal>,
    /// Dividends received
    pub dividend_details: Option<DividendDetails>,
    /// Pie identifier
    pub id: Option<i64>,
    /// Progress towards the goal, 0 to 1
    pub progress: Option<Decimal>,
    /// Investment result
    pub result: Option<InvestmentResult>,
    /// Progress status
    pub status: Option<PieStatus>,
}

/// Request body to create or update a pie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieRequest {
    /// Dividend handling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_cash_action: Option<DividendCashAction>,
    /// Target date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Target value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Decimal>,
    /// Icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Target weight per ticker; weights must sum to 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument_shares: Option<HashMap<String, Decimal>>,
    /// Pie name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request body to duplicate a pie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicatePieRequest {
    /// Icon of the copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Name of the copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pie_request_omits_unset_fields() {
        let request = PieRequest {
            name: Some("Tech".to_string()),
            instrument_shares: Some(HashMap::from([
                ("AAPL_US_EQ".to_string(), dec!(0.5)),
                ("MSFT_US_EQ".to_string(), dec!(0.5)),
            ])),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(value["name"], "Tech");
        assert_eq!(value["instrumentShares"]["AAPL_US_EQ"], serde_json::json!(0.5));
        assert!(!object.contains_key("goal"));
        assert!(!object.contains_key("dividendCashAction"));
    }

    #[test]
    fn test_deserialize_pie_details() {
        let json = r#"{
            "instruments": [{
                "currentShare": 0.48,
                "expectedShare": 0.5,
                "issues": [{"name": "PRICE_TOO_LOW", "severity": "INFORMATIVE"}],
                "ownedQuantity": 3.2,
                "ticker": "AAPL_US_EQ"
            }],
            "settings": {
                "dividendCashAction": "REINVEST",
                "goal": 10000,
                "id": 77,
                "instrumentShares": {"AAPL_US_EQ": 0.5, "MSFT_US_EQ": 0.5},
                "name": "Tech"
            }
        }"#;

        let details: PieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.pie_id(), Some(PieId::new(77)));
        let settings = details.settings.unwrap();
        assert_eq!(settings.dividend_cash_action, Some(DividendCashAction::Reinvest));
        assert_eq!(settings.instrument_shares.unwrap()["MSFT_US_EQ"], dec!(0.5));

        let instruments = details.instruments.unwrap();
        let issues = instruments[0].issues.as_ref().unwrap();
        assert_eq!(issues[0].name, Some(InstrumentIssueName::PriceTooLow));
        assert_eq!(issues[0].severity, Some(IssueSeverity::Informative));
    }

    #[test]
    fn test_deserialize_pie_summary() {
        let json = r#"{"cash": 12.3, "id": 77, "progress": 0.42, "status": "ON_TRACK"}"#;
        let summary: PieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.status, Some(PieStatus::OnTrack));
        assert_eq!(summary.progress, Some(dec!(0.42)));
    }
}
