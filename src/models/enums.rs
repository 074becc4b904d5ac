//! Enumeration types for the Trading 212 API.
//!
//! Enums that only ever arrive from the server carry an `Unknown` catch-all
//! so new values do not break deserialization. Enums that are sent in
//! requests are closed.

use serde::{Deserialize, Serialize};

/// Current status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Held locally, not yet sent
    Local,
    /// Sent, awaiting confirmation
    Unconfirmed,
    /// Confirmed by the broker
    Confirmed,
    /// Working on the market
    New,
    /// Cancel has been requested
    Cancelling,
    /// Order cancelled
    Cancelled,
    /// Some quantity filled
    PartiallyFilled,
    /// Order completely filled
    Filled,
    /// Order rejected
    Rejected,
    /// Replace has been requested
    Replacing,
    /// Order replaced
    Replaced,
    /// Unknown status (forward-compatibility)
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns `true` if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Cancelled
                | OrderStatus::Filled
                | OrderStatus::Rejected
                | OrderStatus::Replaced
        )
    }
}

/// Order type specifying how the order should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Execute at the specified price or better
    Limit,
    /// Becomes a market order once the stop price trades
    Stop,
    /// Execute immediately at the market price
    Market,
    /// Becomes a limit order once the stop price trades
    StopLimit,
    /// Unknown type (forward-compatibility)
    #[serde(other)]
    Unknown,
}

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy
    Buy,
    /// Sell
    Sell,
    /// Unknown side (forward-compatibility)
    #[serde(other)]
    Unknown,
}

/// Whether an order was sized by quantity or by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStrategy {
    /// Sized in shares
    Quantity,
    /// Sized in account currency
    Value,
    /// Unknown strategy (forward-compatibility)
    #[serde(other)]
    Unknown,
}

/// Where an order was placed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderInitiatedFrom {
    /// Public API
    Api,
    /// iOS app
    Ios,
    /// Android app
    Android,
    /// Web platform
    Web,
    /// Broker system
    System,
    /// Pie auto-invest
    Autoinvest,
    /// Unknown source (forward-compatibility)
    #[serde(other)]
    Unknown,
}

/// How long an order remains active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeValidity {
    /// Expires at the end of the trading day
    #[default]
    Day,
    /// Remains active until filled or cancelled
    GoodTillCancel,
}

/// Venue a fill was executed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillTradingMethod {
    /// Traded on a trading venue
    Totv,
    /// Over the counter
    Otc,
    /// Unknown method (forward-compatibility)
    #[serde(other)]
    Unknown,
}

/// Kind of fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillType {
    /// Regular trade
    Trade,
    /// Stock split
    StockSplit,
    /// Stock distribution
    StockDistribution,
    /// Free of payment transfer
    Fop,
    /// Free of payment correction
    FopCorrection,
    /// Custom stock distribution
    CustomStockDistribution,
    /// Equity rights
    EquityRights,
    /// Unknown fill type (forward-compatibility)
    #[serde(other)]
    Unknown,
}

/// Tax or fee charged on a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxName {
    /// Turnover commission
    CommissionTurnover,
    /// FX conversion fee
    CurrencyConversionFee,
    /// FINRA trading activity fee
    FinraFee,
    /// French financial transaction tax
    FrenchTransactionTax,
    /// UK panel on takeovers levy
    PtmLevy,
    /// UK stamp duty
    StampDuty,
    /// UK stamp duty reserve tax
    StampDutyReserveTax,
    /// Generic transaction fee
    TransactionFee,
    /// Unknown tax (forward-compatibility)
    #[serde(other)]
    Unknown,
}

/// Type of tradable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentType {
    /// Cryptocurrency
    Cryptocurrency,
    /// Exchange traded fund
    Etf,
    /// Foreign exchange
    Forex,
    /// Futures contract
    Futures,
    /// Index
    Index,
    /// Common stock
    Stock,
    /// Warrant
    Warrant,
    /// Crypto asset
    Crypto,
    /// Contingent value right
    Cvr,
    /// Corporate action
    Corpact,
    /// Unknown instrument type (forward-compatibility)
    #[serde(other)]
    Unknown,
}

/// Event in an exchange working schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeEventType {
    /// Market opens
    Open,
    /// Market closes
    Close,
    /// Intraday break starts
    BreakStart,
    /// Intraday break ends
    BreakEnd,
    /// Pre-market session opens
    PreMarketOpen,
    /// After-hours session opens
    AfterHoursOpen,
    /// After-hours session closes
    AfterHoursClose,
    /// Overnight session opens
    OvernightOpen,
    /// Unknown event (forward-compatibility)
    #[serde(other)]
    Unknown,
}

/// Kind of dividend payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DividendType {
    /// Ordinary dividend
    Ordinary,
    /// Bonus dividend
    Bonus,
    /// Property income distribution
    PropertyIncome,
    /// Return of capital
    ReturnOfCapitalNonUs,
    /// Demerger
    Demerger,
    /// Interest
    Interest,
    /// Capital gains distribution
    CapitalGainsDistributionNonUs,
    /// Tax exempt distribution
    TaxExempted,
    /// Other or unknown dividend type
    #[serde(other)]
    Other,
}

/// Cash movement type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Money withdrawn
    Withdraw,
    /// Money deposited
    Deposit,
    /// Fee charged
    Fee,
    /// Internal transfer
    Transfer,
    /// Other transaction type
    #[serde(other)]
    Other,
}

/// Processing state of a CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Waiting to be processed
    Queued,
    /// Being processed
    Processing,
    /// Generation in progress
    Running,
    /// Cancelled
    Canceled,
    /// Generation failed
    Failed,
    /// Ready for download
    Finished,
    /// Unknown status (forward-compatibility)
    #[serde(other)]
    Unknown,
}

impl ReportStatus {
    /// Returns `true` once the report will not change any more.
    pub fn is_done(&self) -> bool {
        matches!(
            self,
            ReportStatus::Finished | ReportStatus::Failed | ReportStatus::Canceled
        )
    }
}

/// What a pie does with received dividends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DividendCashAction {
    /// Reinvest into the pie
    Reinvest,
    /// Pay out to free cash
    ToAccountCash,
}

/// Problem affecting an instrument held in a pie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentIssueName {
    /// Delisted from the exchange
    Delisted,
    /// Trading suspended
    Suspended,
    /// No longer tradable on the platform
    NoLongerTradable,
    /// Position exceeds the maximum size
    MaxPositionSizeExceeded,
    /// Position approaches the maximum size
    ApproachingMaxPositionSize,
    /// Requires an appropriateness test
    ComplexInstrumentAppTestRequired,
    /// Price too low to trade
    PriceTooLow,
    /// Unknown issue (forward-compatibility)
    #[serde(other)]
    Unknown,
}

/// Severity of an instrument issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueSeverity {
    /// Cannot be resolved
    Irreversible,
    /// May resolve itself
    Reversible,
    /// Informational only
    Informative,
    /// Unknown severity (forward-compatibility)
    #[serde(other)]
    Unknown,
}

/// Progress of a pie towards its goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PieStatus {
    /// Ahead of schedule
    Ahead,
    /// On track
    OnTrack,
    /// Behind schedule
    Behind,
    /// Unknown status (forward-compatibility)
    #[serde(other)]
    Unknown,
}
