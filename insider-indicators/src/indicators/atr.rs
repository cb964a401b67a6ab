//! Average True Range.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::smoothing::rolling_mean;

/// True range and its moving average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtrTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `max(|high - low|, |close[t-1] - high|, |close[t-1] - low|)`.
    pub tr: Vec<f64>,
    /// `rolling_mean(tr, n)`.
    pub atr: Vec<f64>,
}

/// ATR over `n` bars.
///
/// The true range needs the previous close, so `tr[0]` is NaN and the
/// averaged column stays undefined through position `n` (one bar later
/// than a plain rolling mean).
pub fn atr(series: &BarSeries, n: usize) -> Result<AtrTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("ATR", n));
    }
    let tr = true_ranges(series);
    let atr = rolling_mean(&tr, n);
    Ok(AtrTable {
        days: series.days(),
        tr,
        atr,
    })
}

/// The true-range column; shared with DMI.
pub(crate) fn true_ranges(series: &BarSeries) -> Vec<f64> {
    let highs = series.highs();
    let lows = series.lows();
    let closes = series.closes();
    let mut tr = vec![f64::NAN; closes.len()];
    for t in 1..closes.len() {
        let previous_close = closes[t - 1];
        tr[t] = (highs[t] - lows[t])
            .abs()
            .max((previous_close - highs[t]).abs())
            .max((previous_close - lows[t]).abs());
    }
    tr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testing::ohlc_series;

    fn sample() -> BarSeries {
        ohlc_series(&[
            (10.0, 11.0, 9.0, 10.0),
            (10.0, 12.0, 10.0, 11.0),
            (11.0, 11.5, 8.0, 9.0),
            (9.0, 10.0, 8.5, 9.5),
        ])
    }

    #[test]
    fn gaps_widen_the_true_range() {
        let tr = true_ranges(&sample());
        assert!(tr[0].is_nan());
        // Bar 1: max(2, |10-12|, |10-10|) = 2.
        assert_eq!(tr[1], 2.0);
        // Bar 2: max(3.5, |11-11.5|, |11-8|) = 3.5.
        assert_eq!(tr[2], 3.5);
    }

    #[test]
    fn average_waits_one_extra_bar() {
        let table = atr(&sample(), 2).unwrap();
        // The window at position 1 still contains the NaN tr[0].
        assert!(table.atr[1].is_nan());
        assert_eq!(table.atr[2], (2.0 + 3.5) / 2.0);
    }

    #[test]
    fn rejects_zero_window() {
        assert!(atr(&sample(), 0).is_err());
    }
}
