//! Volume indicators: VMA, VMACD, VSTD, VRSI, VOSC and OBV.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::macd::macd_columns;
use crate::indicators::rsi::{rsi_column, RsiTable};
use crate::smoothing::{rolling_mean, rolling_std_pop};

/// Rolling mean of the volume column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmaTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `rolling_mean(volume, n)`.
    pub vma: Vec<f64>,
}

/// MACD recursion applied to volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmacdTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `ema(volume, fast) - ema(volume, slow)`.
    pub diff: Vec<f64>,
    /// `ewma_span(diff, signal)`.
    pub dea: Vec<f64>,
    /// `2 * (diff - dea)`.
    pub macd: Vec<f64>,
}

/// Rolling population standard deviation of volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VstdTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `rolling_std_pop(volume, n)`.
    pub vstd: Vec<f64>,
}

/// Volume oscillator between a short and a long volume average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoscTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `100 * (vma(short) - vma(long)) / vma(short)`.
    pub vosc: Vec<f64>,
}

/// On-balance volume running sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObvTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `obv[t] = obv[t-1] + sign(close[t] - close[t-1]) * volume[t]`.
    pub obv: Vec<f64>,
}

/// Moving average of volume over `n` periods.
pub fn vma(series: &BarSeries, n: usize) -> Result<VmaTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("VMA", n));
    }
    Ok(VmaTable {
        days: series.days(),
        vma: rolling_mean(&series.volumes(), n),
    })
}

/// MACD over the volume column.
pub fn vmacd(
    series: &BarSeries,
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<VmacdTable, IndicatorError> {
    let (diff, dea, macd) = macd_columns("VMACD", &series.volumes(), fast, slow, signal)?;
    Ok(VmacdTable {
        days: series.days(),
        diff,
        dea,
        macd,
    })
}

/// Population standard deviation of volume over `n` periods.
pub fn vstd(series: &BarSeries, n: usize) -> Result<VstdTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("VSTD", n));
    }
    Ok(VstdTable {
        days: series.days(),
        vstd: rolling_std_pop(&series.volumes(), n),
    })
}

/// RSI recursion over the volume column.
pub fn vrsi(series: &BarSeries, n: usize) -> Result<RsiTable, IndicatorError> {
    Ok(RsiTable {
        days: series.days(),
        rsi: rsi_column("VRSI", &series.volumes(), n)?,
    })
}

/// Volume oscillator between the `short`- and `long`-period averages.
pub fn vosc(series: &BarSeries, short: usize, long: usize) -> Result<VoscTable, IndicatorError> {
    if short == 0 {
        return Err(IndicatorError::invalid_period("VOSC", short));
    }
    if long == 0 {
        return Err(IndicatorError::invalid_period("VOSC", long));
    }
    let volumes = series.volumes();
    let fast = rolling_mean(&volumes, short);
    let slow = rolling_mean(&volumes, long);
    Ok(VoscTable {
        days: series.days(),
        vosc: fast
            .iter()
            .zip(&slow)
            .map(|(fast, slow)| 100.0 * (fast - slow) / fast)
            .collect(),
    })
}

/// On-balance volume: a running, sign-gated volume sum starting at zero.
pub fn obv(series: &BarSeries) -> ObvTable {
    let closes = series.closes();
    let volumes = series.volumes();
    let mut obv = Vec::with_capacity(closes.len());
    let mut running = 0.0;
    for t in 0..closes.len() {
        if t > 0 {
            let change = closes[t] - closes[t - 1];
            if change > 0.0 {
                running += volumes[t];
            } else if change < 0.0 {
                running -= volumes[t];
            }
        }
        obv.push(running);
    }
    ObvTable {
        days: series.days(),
        obv,
    }
}
