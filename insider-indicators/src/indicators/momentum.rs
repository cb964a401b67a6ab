//! Momentum family: MI, RC and MTM.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::smoothing::{rolling_mean, shift, wilder_smooth};

/// Smoothed n-day close difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `wilder(close - close[t-n], n)`.
    pub mi: Vec<f64>,
}

/// Price rate of change and its smoothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `close / close[t-n]`.
    pub rc: Vec<f64>,
    /// `wilder(rc shifted by 1, n)`.
    pub arc: Vec<f64>,
}

/// Raw momentum and its moving average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MtmTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `close - close[t-n]`.
    pub mtm: Vec<f64>,
    /// `rolling_mean(mtm, m)`.
    pub mtmma: Vec<f64>,
}

/// MI: Wilder-smoothed n-day close change.
pub fn mi(series: &BarSeries, n: usize) -> Result<MiTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("MI", n));
    }
    let closes = series.closes();
    let lagged = shift(&closes, n);
    let changes: Vec<f64> = closes
        .iter()
        .zip(&lagged)
        .map(|(close, lag)| close - lag)
        .collect();
    Ok(MiTable {
        days: series.days(),
        mi: wilder_smooth(&changes, n)?,
    })
}

/// RC: the n-day price ratio, plus its one-bar-lagged Wilder smoothing.
pub fn rc(series: &BarSeries, n: usize) -> Result<RcTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("RC", n));
    }
    let closes = series.closes();
    let lagged = shift(&closes, n);
    let ratio: Vec<f64> = closes
        .iter()
        .zip(&lagged)
        .map(|(close, lag)| close / lag)
        .collect();
    let arc = wilder_smooth(&shift(&ratio, 1), n)?;
    Ok(RcTable {
        days: series.days(),
        rc: ratio,
        arc,
    })
}

/// MTM: raw momentum over `n` bars, averaged over `m`.
pub fn mtm(series: &BarSeries, n: usize, m: usize) -> Result<MtmTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("MTM", n));
    }
    if m == 0 {
        return Err(IndicatorError::invalid_period("MTM", m));
    }
    let closes = series.closes();
    let lagged = shift(&closes, n);
    let mtm: Vec<f64> = closes
        .iter()
        .zip(&lagged)
        .map(|(close, lag)| close - lag)
        .collect();
    let mtmma = rolling_mean(&mtm, m);
    Ok(MtmTable {
        days: series.days(),
        mtm,
        mtmma,
    })
}
