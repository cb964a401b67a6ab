//! Band indicators: BOLL and BBIBOLL.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::smoothing::{rolling_mean, rolling_std_pop};

/// Bollinger bands around the n-period moving average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `ma(n)`.
    pub middle: Vec<f64>,
    /// `middle + 2 * md(n)`.
    pub up: Vec<f64>,
    /// `middle - 2 * md(n)`.
    pub down: Vec<f64>,
}

/// Bull-bear index bands: the BBI center line with `m`-sigma envelopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BbibollTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `(ma(3) + ma(6) + ma(12) + ma(24)) / 4`.
    pub bbiboll: Vec<f64>,
    /// `bbiboll + m * rolling_std_pop(bbiboll, n)`.
    pub upr: Vec<f64>,
    /// `bbiboll - m * rolling_std_pop(bbiboll, n)`.
    pub dwn: Vec<f64>,
}

/// BOLL with the conventional two-sigma envelopes.
pub fn boll(series: &BarSeries, n: usize) -> Result<BollTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("BOLL", n));
    }
    let closes = series.closes();
    let middle = rolling_mean(&closes, n);
    let deviation = rolling_std_pop(&closes, n);
    let up: Vec<f64> = middle
        .iter()
        .zip(&deviation)
        .map(|(mean, dev)| mean + 2.0 * dev)
        .collect();
    let down: Vec<f64> = middle
        .iter()
        .zip(&deviation)
        .map(|(mean, dev)| mean - 2.0 * dev)
        .collect();
    Ok(BollTable {
        days: series.days(),
        middle,
        up,
        down,
    })
}

/// BBIBOLL: the four-average BBI line with `m`-sigma bands over `n` bars.
///
/// The center line averages the 3/6/12/24-bar moving averages, so it is
/// undefined until 24 bars of history exist; the bands need `n` defined
/// center values on top of that.
pub fn bbiboll(series: &BarSeries, n: usize, m: f64) -> Result<BbibollTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("BBIBOLL", n));
    }
    if !m.is_finite() || m < 0.0 {
        return Err(IndicatorError::invalid_parameter("BBIBOLL", "m", m));
    }

    let closes = series.closes();
    let averages: Vec<Vec<f64>> = [3, 6, 12, 24]
        .iter()
        .map(|&window| rolling_mean(&closes, window))
        .collect();
    let bbiboll: Vec<f64> = (0..closes.len())
        .map(|t| averages.iter().map(|column| column[t]).sum::<f64>() / 4.0)
        .collect();

    let deviation = rolling_std_pop(&bbiboll, n);
    let upr: Vec<f64> = bbiboll
        .iter()
        .zip(&deviation)
        .map(|(center, dev)| center + m * dev)
        .collect();
    let dwn: Vec<f64> = bbiboll
        .iter()
        .zip(&deviation)
        .map(|(center, dev)| center - m * dev)
        .collect();

    Ok(BbibollTable {
        days: series.days(),
        bbiboll,
        upr,
        dwn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testing::close_series;

    #[test]
    fn constant_series_collapses_the_bands() {
        let series = close_series(&[8.0; 10]);
        let table = boll(&series, 4).unwrap();
        for t in 3..10 {
            assert_eq!(table.middle[t], 8.0);
            assert_eq!(table.up[t], 8.0);
            assert_eq!(table.down[t], 8.0);
        }
        assert!(table.middle[2].is_nan());
    }

    #[test]
    fn bands_are_symmetric_around_the_middle() {
        let series = close_series(&[10.0, 12.0, 11.0, 14.0, 13.0, 15.0]);
        let table = boll(&series, 3).unwrap();
        for t in 2..6 {
            let spread_up = table.up[t] - table.middle[t];
            let spread_down = table.middle[t] - table.down[t];
            assert!((spread_up - spread_down).abs() < 1e-10);
            assert!(spread_up >= 0.0);
        }
    }

    #[test]
    fn bbiboll_needs_the_longest_average_plus_the_band_window() {
        let closes: Vec<f64> = (0..30).map(|t| 10.0 + t as f64 * 0.1).collect();
        let series = close_series(&closes);
        let table = bbiboll(&series, 3, 6.0).unwrap();
        // Center defined from position 23 (24-bar MA), bands from 25.
        assert!(table.bbiboll[22].is_nan());
        assert!(!table.bbiboll[23].is_nan());
        assert!(table.upr[24].is_nan());
        assert!(!table.upr[25].is_nan());
        assert!(table.upr[25] >= table.dwn[25]);
    }

    #[test]
    fn rejects_bad_parameters() {
        let series = close_series(&[1.0]);
        assert!(bbiboll(&series, 0, 6.0).is_err());
        assert!(bbiboll(&series, 11, -1.0).is_err());
        assert!(bbiboll(&series, 11, f64::NAN).is_err());
        assert!(boll(&series, 0).is_err());
    }
}
