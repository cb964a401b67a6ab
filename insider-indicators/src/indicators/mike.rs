//! MIKE pressure/support lines.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::smoothing::{rolling_max, rolling_min};

/// The six MIKE lines: three pressure levels above, three supports below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MikeTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// Weak resistance: `2 * typ - lv`.
    pub wr: Vec<f64>,
    /// Medium resistance: `typ + hv - lv`.
    pub mr: Vec<f64>,
    /// Strong resistance: `2 * hv - lv`.
    pub sr: Vec<f64>,
    /// Weak support: `2 * typ - hv`.
    pub ws: Vec<f64>,
    /// Medium support: `typ - hv + lv`.
    pub ms: Vec<f64>,
    /// Strong support: `2 * lv - hv`.
    pub ss: Vec<f64>,
}

/// MIKE over an `n`-bar high/low window.
pub fn mike(series: &BarSeries, n: usize) -> Result<MikeTable, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("MIKE", n));
    }

    let highs = series.highs();
    let lows = series.lows();
    let closes = series.closes();

    let typical: Vec<f64> = (0..closes.len())
        .map(|t| (highs[t] + lows[t] + closes[t]) / 3.0)
        .collect();
    let hv = rolling_max(&highs, n);
    let lv = rolling_min(&lows, n);

    let line = |f: &dyn Fn(f64, f64, f64) -> f64| -> Vec<f64> {
        (0..typical.len())
            .map(|t| f(typical[t], hv[t], lv[t]))
            .collect()
    };

    Ok(MikeTable {
        days: series.days(),
        wr: line(&|typ, _, lv| 2.0 * typ - lv),
        mr: line(&|typ, hv, lv| typ + hv - lv),
        sr: line(&|_, hv, lv| 2.0 * hv - lv),
        ws: line(&|typ, hv, _| 2.0 * typ - hv),
        ms: line(&|typ, hv, lv| typ - hv + lv),
        ss: line(&|_, hv, lv| 2.0 * lv - hv),
    })
}
