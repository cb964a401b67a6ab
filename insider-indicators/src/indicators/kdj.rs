//! KDJ stochastic oscillator.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::smoothing::{clip_0_100, rolling_max, rolling_min, SmoothMethod};

/// KDJ columns, each clipped to `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KdjTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// Smoothed RSV.
    pub k: Vec<f64>,
    /// Smoothed K.
    pub d: Vec<f64>,
    /// `3K - 2D`.
    pub j: Vec<f64>,
}

/// KDJ over an `n`-day stochastic window, smoothed with the given method.
///
/// The raw RSV can leave `[0, 100]` (or be infinite when the window's
/// high equals its low); after smoothing, all three columns are clipped
/// back into range, with NaN warm-up positions preserved.
pub fn kdj(
    series: &BarSeries,
    n: usize,
    method: SmoothMethod,
) -> Result<KdjTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("KDJ", n));
    }

    let closes = series.closes();
    let lowest = rolling_min(&series.lows(), n);
    let highest = rolling_max(&series.highs(), n);

    let rsv: Vec<f64> = (0..closes.len())
        .map(|t| (closes[t] - lowest[t]) / (highest[t] - lowest[t]) * 100.0)
        .collect();

    let k = method.apply(&rsv, 3)?;
    let d = method.apply(&k, 3)?;
    let j: Vec<f64> = k.iter().zip(&d).map(|(k, d)| 3.0 * k - 2.0 * d).collect();

    Ok(KdjTable {
        days: series.days(),
        k: k.into_iter().map(clip_0_100).collect(),
        d: d.into_iter().map(clip_0_100).collect(),
        j: j.into_iter().map(clip_0_100).collect(),
    })
}
