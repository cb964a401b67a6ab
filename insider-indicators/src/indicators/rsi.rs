//! Relative Strength Index over close (RSI) or volume (VRSI).

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::smoothing::wilder_smooth;

/// A single RSI column; shared by RSI and VRSI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// `wilder(gains, n) / wilder(|changes|, n) * 100`.
    pub rsi: Vec<f64>,
}

/// RSI of the close column.
pub fn rsi(series: &BarSeries, n: usize) -> Result<RsiTable, IndicatorError> {
    Ok(RsiTable {
        days: series.days(),
        rsi: rsi_column("RSI", &series.closes(), n)?,
    })
}

/// The RSI recursion over an arbitrary column.
///
/// A window that never moves leaves both smoothers at zero; the `0/0`
/// ratio stays NaN rather than being defaulted to 0 or 50.
pub(crate) fn rsi_column(
    indicator: &'static str,
    values: &[f64],
    n: usize,
) -> Result<Vec<f64>, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period(indicator, n));
    }

    let mut gains = vec![f64::NAN; values.len()];
    let mut magnitudes = vec![f64::NAN; values.len()];
    for t in 1..values.len() {
        let change = values[t] - values[t - 1];
        gains[t] = change.max(0.0);
        magnitudes[t] = change.abs();
    }

    let smoothed_gains = wilder_smooth(&gains, n)?;
    let smoothed_magnitudes = wilder_smooth(&magnitudes, n)?;
    Ok(smoothed_gains
        .iter()
        .zip(&smoothed_magnitudes)
        .map(|(gain, magnitude)| gain / magnitude * 100.0)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testing::close_series;

    #[test]
    fn rallies_score_above_fifty() {
        let series = close_series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let table = rsi(&series, 3).unwrap();
        // Every change is a gain, so the ratio is exactly 100.
        for value in &table.rsi[1..] {
            assert!((value - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn first_position_is_undefined() {
        let series = close_series(&[1.0, 2.0]);
        let table = rsi(&series, 3).unwrap();
        // Both smoothers seed from a coerced 0, leaving 0/0.
        assert!(table.rsi[0].is_nan());
    }

    #[test]
    fn flat_series_stays_undefined() {
        let series = close_series(&[5.0; 6]);
        let table = rsi(&series, 3).unwrap();
        assert!(table.rsi.iter().all(|value| value.is_nan()));
    }

    #[test]
    fn mixed_moves_land_between_the_extremes() {
        let series = close_series(&[10.0, 12.0, 11.0, 13.0, 12.5]);
        let table = rsi(&series, 3).unwrap();
        let last = *table.rsi.last().unwrap();
        assert!(last > 0.0 && last < 100.0);
    }

    #[test]
    fn rejects_zero_period() {
        let series = close_series(&[1.0]);
        assert!(rsi(&series, 0).is_err());
    }
}
