//! DMI directional movement system.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::atr::true_ranges;
use crate::smoothing::{rolling_mean, shift};

/// Directional indicators plus trend-strength columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmiTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `100 * mean(+DM, n) / atr(n)`.
    pub pdi: Vec<f64>,
    /// `100 * mean(-DM, n) / atr(n)`.
    pub mdi: Vec<f64>,
    /// `100 * mean(|pdi - mdi|, n) / (pdi + mdi)`.
    pub adx: Vec<f64>,
    /// `(adx + adx[t-n]) / 2`.
    pub adxr: Vec<f64>,
}

/// DMI over `n` bars.
///
/// The directional deltas gate on both sign and dominance: an up-move
/// only counts when it beats the down-move, and vice versa, so at most
/// one of +DM/-DM is nonzero per bar.
pub fn dmi(series: &BarSeries, n: usize) -> Result<DmiTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("DMI", n));
    }

    let highs = series.highs();
    let lows = series.lows();
    let len = highs.len();

    let mut plus_dm = vec![0.0; len];
    let mut minus_dm = vec![0.0; len];
    for t in 1..len {
        let up = highs[t] - highs[t - 1];
        let down = lows[t - 1] - lows[t];
        if up > down && up > 0.0 {
            plus_dm[t] = up;
        }
        if down > up && down > 0.0 {
            minus_dm[t] = down;
        }
    }

    let atr = rolling_mean(&true_ranges(series), n);
    let scaled = |raw: &[f64]| -> Vec<f64> {
        rolling_mean(raw, n)
            .iter()
            .zip(&atr)
            .map(|(mean, atr)| 100.0 * mean / atr)
            .collect()
    };
    let pdi = scaled(&plus_dm);
    let mdi = scaled(&minus_dm);

    let spread: Vec<f64> = pdi
        .iter()
        .zip(&mdi)
        .map(|(pdi, mdi)| (pdi - mdi).abs())
        .collect();
    // The spread is averaged first, then divided by the current
    // pdi + mdi, so adx lags the directional lines by one window.
    let adx: Vec<f64> = rolling_mean(&spread, n)
        .iter()
        .zip(pdi.iter().zip(&mdi))
        .map(|(mean, (pdi, mdi))| 100.0 * mean / (pdi + mdi))
        .collect();
    let lagged_adx = shift(&adx, n);
    let adxr: Vec<f64> = adx
        .iter()
        .zip(&lagged_adx)
        .map(|(adx, lag)| (adx + lag) / 2.0)
        .collect();

    Ok(DmiTable {
        days: series.days(),
        pdi,
        mdi,
        adx,
        adxr,
    })
}
