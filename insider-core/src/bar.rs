use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading period of a single instrument.
///
/// Produced by the market-data collaborator (which owns network retrieval
/// and numeric coercion); the indicator engine only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Trading day, the sort key of the series.
    pub day: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest traded price of the period.
    pub high: f64,
    /// Lowest traded price of the period.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
    /// Absolute close-over-close change reported by the data feed.
    #[serde(default)]
    pub price_change: f64,
    /// Percentage close-over-close change reported by the data feed.
    #[serde(default)]
    pub percent_change: f64,
}
