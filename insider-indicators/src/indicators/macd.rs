//! Moving Average Convergence Divergence.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::smoothing::ewma_span;

/// MACD columns: the fast/slow EMA difference, its smoothing, and the bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `ema(fast) - ema(slow)`.
    pub diff: Vec<f64>,
    /// `ewma_span(diff, signal)`.
    pub dea: Vec<f64>,
    /// `2 * (diff - dea)`.
    pub macd: Vec<f64>,
}

/// MACD over the close column.
pub fn macd(
    series: &BarSeries,
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdTable, IndicatorError> {
    let (diff, dea, macd) = macd_columns("MACD", &series.closes(), fast, slow, signal)?;
    Ok(MacdTable {
        days: series.days(),
        diff,
        dea,
        macd,
    })
}

/// The MACD recursion over an arbitrary column; shared with VMACD.
pub(crate) fn macd_columns(
    indicator: &'static str,
    values: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>), IndicatorError> {
    for period in [fast, slow, signal] {
        if period == 0 {
            return Err(IndicatorError::invalid_period(indicator, period));
        }
    }

    let fast_ema = ewma_span(values, fast)?;
    let slow_ema = ewma_span(values, slow)?;
    let diff: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let dea = ewma_span(&diff, signal)?;
    let macd: Vec<f64> = diff
        .iter()
        .zip(&dea)
        .map(|(diff, dea)| 2.0 * (diff - dea))
        .collect();
    Ok((diff, dea, macd))
}
