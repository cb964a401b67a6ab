//! CDP contrarian operation levels.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::smoothing::{rolling_mean, shift};

/// The CDP pivot and its four derived trading levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdpTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// Previous bar's typical price `(high + low + close) / 3`.
    pub cdp: Vec<f64>,
    /// Highest level: `mean(cdp + prev_high - prev_low, n)`.
    pub ah: Vec<f64>,
    /// Near-high level: `mean(2 * cdp - prev_low, n)`.
    pub nh: Vec<f64>,
    /// Lowest level: `mean(cdp - prev_high + prev_low, n)`.
    pub al: Vec<f64>,
    /// Near-low level: `mean(2 * cdp - prev_high, n)`.
    pub nl: Vec<f64>,
}

/// CDP levels averaged over `n` bars (conventionally 1).
pub fn cdp(series: &BarSeries, n: usize) -> Result<CdpTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("CDP", n));
    }

    let highs = series.highs();
    let lows = series.lows();
    let closes = series.closes();
    let len = closes.len();

    let typical: Vec<f64> = (0..len)
        .map(|t| (highs[t] + lows[t] + closes[t]) / 3.0)
        .collect();
    let cdp_line = shift(&typical, 1);
    let prev_high = shift(&highs, 1);
    let prev_low = shift(&lows, 1);

    let averaged = |f: &dyn Fn(f64, f64, f64) -> f64| -> Vec<f64> {
        let combined: Vec<f64> = (0..len)
            .map(|t| f(cdp_line[t], prev_high[t], prev_low[t]))
            .collect();
        rolling_mean(&combined, n)
    };

    Ok(CdpTable {
        days: series.days(),
        ah: averaged(&|cdp, high, low| cdp + high - low),
        nh: averaged(&|cdp, _, low| 2.0 * cdp - low),
        al: averaged(&|cdp, high, low| cdp - high + low),
        nl: averaged(&|cdp, high, _| 2.0 * cdp - high),
        cdp: cdp_line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testing::ohlc_series;

    #[test]
    fn levels_order_from_low_to_high() {
        let series = ohlc_series(&[
            (10.0, 12.0, 9.0, 11.0),
            (11.0, 13.0, 10.0, 12.0),
        ]);
        let table = cdp(&series, 1).unwrap();
        assert!(table.cdp[0].is_nan());
        let expected_cdp = (12.0 + 9.0 + 11.0) / 3.0;
        assert!((table.cdp[1] - expected_cdp).abs() < 1e-10);
        // ah > nh > cdp > nl > al for a bar with real range.
        assert!(table.ah[1] > table.nh[1]);
        assert!(table.nh[1] > table.cdp[1]);
        assert!(table.cdp[1] > table.nl[1]);
        assert!(table.nl[1] > table.al[1]);
    }

    #[test]
    fn first_position_is_undefined() {
        let series = ohlc_series(&[(10.0, 12.0, 9.0, 11.0), (11.0, 13.0, 10.0, 12.0)]);
        let table = cdp(&series, 1).unwrap();
        for column in [&table.ah, &table.nh, &table.al, &table.nl] {
            assert!(column[0].is_nan());
            assert!(!column[1].is_nan());
        }
    }

    #[test]
    fn rejects_zero_window() {
        let series = ohlc_series(&[(1.0, 2.0, 0.5, 1.5)]);
        assert!(cdp(&series, 0).is_err());
    }
}
