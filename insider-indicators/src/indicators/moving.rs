//! Moving-average family: MA, MD, EMA and the ENV envelope.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::smoothing::{ewma_span, rolling_mean, rolling_std_pop};

/// Rolling mean of the close column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `rolling_mean(close, n)`.
    pub ma: Vec<f64>,
}

/// Rolling population standard deviation of the close column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MdTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `rolling_std_pop(close, n)`.
    pub md: Vec<f64>,
}

/// Span-based exponential moving average of the close column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmaTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `ewma_span(close, n)`.
    pub ema: Vec<f64>,
}

/// Envelope lines at fixed offsets around the moving average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `ma(n) * 1.06`.
    pub up: Vec<f64>,
    /// `ma(n) * 0.94`.
    pub down: Vec<f64>,
}

/// Moving average of the close over `n` periods.
pub fn ma(series: &BarSeries, n: usize) -> Result<MaTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("MA", n));
    }
    Ok(MaTable {
        days: series.days(),
        ma: rolling_mean(&series.closes(), n),
    })
}

/// Moving (population) standard deviation of the close over `n` periods.
pub fn md(series: &BarSeries, n: usize) -> Result<MdTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("MD", n));
    }
    Ok(MdTable {
        days: series.days(),
        md: rolling_std_pop(&series.closes(), n),
    })
}

/// Exponential moving average of the close with span `n`.
pub fn ema(series: &BarSeries, n: usize) -> Result<EmaTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("EMA", n));
    }
    Ok(EmaTable {
        days: series.days(),
        ema: ewma_span(&series.closes(), n)?,
    })
}

/// Envelope: the `n`-period moving average shifted 6% up and down.
pub fn env(series: &BarSeries, n: usize) -> Result<EnvTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("ENV", n));
    }
    let middle = rolling_mean(&series.closes(), n);
    Ok(EnvTable {
        days: series.days(),
        up: middle.iter().map(|value| value * 1.06).collect(),
        down: middle.iter().map(|value| value * 0.94).collect(),
    })
}
