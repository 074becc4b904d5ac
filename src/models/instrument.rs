//! Instrument and exchange metadata models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{InstrumentType, TimeEventType};

/// Short instrument reference embedded in orders, positions and history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Trading currency
    pub currency: Option<String>,
    /// ISIN code
    pub isin: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Trading 212 ticker, e.g. `AAPL_US_EQ`
    pub ticker: Option<String>,
}

/// An instrument available for trading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradableInstrument {
    /// When the instrument was listed on the platform
    pub added_on: Option<DateTime<Utc>>,
    /// Trading currency
    pub currency_code: Option<String>,
    /// Whether extended hours trading is available
    pub extended_hours: Option<bool>,
    /// ISIN code
    pub isin: Option<String>,
    /// Maximum quantity that may be held
    pub max_open_quantity: Option<Decimal>,
    /// Display name
    pub name: Option<String>,
    /// Short display name
    pub short_name: Option<String>,
    /// Trading 212 ticker
    pub ticker: Option<String>,
    /// Instrument type
    #[serde(rename = "type")]
    pub instrument_type: Option<InstrumentType>,
    /// Working schedule this instrument trades on
    pub working_schedule_id: Option<i64>,
}

/// A single open/close event of a working schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEvent {
    /// When the event happens
    pub date: Option<DateTime<Utc>>,
    /// What happens
    #[serde(rename = "type")]
    pub event_type: Option<TimeEventType>,
}

/// Trading hours of an exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingSchedule {
    /// Schedule identifier
    pub id: Option<i64>,
    /// Ordered session events
    pub time_events: Option<Vec<TimeEvent>>,
}

/// An exchange and its working schedules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    /// Exchange identifier
    pub id: Option<i64>,
    /// Exchange name
    pub name: Option<String>,
    /// Working schedules
    pub working_schedules: Option<Vec<WorkingSchedule>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tradable_instrument() {
        let json = r#"{
            "addedOn": "2020-01-01T00:00:00Z",
            "currencyCode": "USD",
            "extendedHours": true,
            "isin": "US0378331005",
            "maxOpenQuantity": 10000.0,
            "name": "Apple Inc.",
            "shortName": "AAPL",
            "ticker": "AAPL_US_EQ",
            "type": "STOCK",
            "workingScheduleId": 1
        }"#;

        let instrument: TradableInstrument = serde_json::from_str(json).unwrap();
        assert_eq!(instrument.ticker.as_deref(), Some("AAPL_US_EQ"));
        assert_eq!(instrument.instrument_type, Some(InstrumentType::Stock));
        assert_eq!(instrument.currency_code.as_deref(), Some("USD"));
        assert_eq!(instrument.extended_hours, Some(true));
    }

    #[test]
    fn test_deserialize_exchange_schedules() {
        let json = r#"{
            "id": 1,
            "name": "NASDAQ",
            "workingSchedules": [{
                "id": 1,
                "timeEvents": [
                    {"date": "2024-01-15T14:30:00Z", "type": "OPEN"},
                    {"date": "2024-01-15T21:00:00Z", "type": "CLOSE"}
                ]
            }]
        }"#;

        let exchange: Exchange = serde_json::from_str(json).unwrap();
        assert_eq!(exchange.name.as_deref(), Some("NASDAQ"));
        let schedules = exchange.working_schedules.unwrap();
        assert_eq!(schedules.len(), 1);
        let events = schedules[0].time_events.as_ref().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, Some(TimeEventType::Open));
        assert_eq!(events[1].event_type, Some(TimeEventType::Close));
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let instrument = TradableInstrument {
            instrument_type: Some(InstrumentType::Etf),
            ..Default::default()
        };
        let value = serde_json::to_value(&instrument).unwrap();
        assert_eq!(value["type"], "ETF");
        assert!(value.get("instrumentType").is_none());
    }
}
