//! ADTM dynamic buy/sell momentum index.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::smoothing::{rolling_mean, rolling_sum};

/// ADTM oscillator and its moving average, both in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdtmTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `(stm - sbm) / max(stm, sbm)`, 0 when the sums tie.
    pub adtm: Vec<f64>,
    /// `rolling_mean(adtm, m)`.
    pub adtmma: Vec<f64>,
}

/// ADTM over an `n`-bar sum window, averaged over `m` bars.
pub fn adtm(series: &BarSeries, n: usize, m: usize) -> Result<AdtmTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("ADTM", n));
    }
    if m == 0 {
        return Err(IndicatorError::invalid_period("ADTM", m));
    }

    let opens = series.opens();
    let highs = series.highs();
    let lows = series.lows();
    let len = opens.len();

    let mut dtm = vec![0.0; len];
    let mut dbm = vec![0.0; len];
    for t in 0..len {
        let open_change = if t == 0 {
            f64::NAN
        } else {
            opens[t] - opens[t - 1]
        };
        // NaN comparisons are false, so the first bar lands in the else
        // arms: dtm = 0 and dbm spans the full open-to-low range.
        dtm[t] = if open_change > 0.0 {
            (highs[t] - opens[t]).max(opens[t] - lows[t])
        } else {
            0.0
        };
        dbm[t] = if open_change >= 0.0 {
            0.0
        } else {
            opens[t] - lows[t]
        };
    }

    let stm = rolling_sum(&dtm, n);
    let sbm = rolling_sum(&dbm, n);

    let adtm: Vec<f64> = stm
        .iter()
        .zip(&sbm)
        .map(|(&stm, &sbm)| {
            if stm.is_nan() || sbm.is_nan() {
                f64::NAN
            } else if stm > sbm {
                (stm - sbm) / stm
            } else if stm < sbm {
                (stm - sbm) / sbm
            } else {
                0.0
            }
        })
        .collect();
    let adtmma = rolling_mean(&adtm, m);

    Ok(AdtmTable {
        days: series.days(),
        adtm,
        adtmma,
    })
}
