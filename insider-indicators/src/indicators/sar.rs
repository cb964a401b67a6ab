//! Parabolic SAR reversal indicator.
//!
//! Unlike every other indicator in this crate, SAR is path-dependent:
//! each bar's value depends on the entire preceding trend run, so it is
//! computed as a strict left-to-right fold over the series with no
//! windowing.

use chrono::NaiveDate;
use insider_core::BarSeries;
use serde::{Deserialize, Serialize};

const INITIAL_AF: f64 = 0.02;
const AF_STEP: f64 = 0.02;
const MAX_AF: f64 = 0.2;

/// Display color for a bar's trend, as charting frontends expect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendColor {
    /// Uptrend.
    Red,
    /// Downtrend.
    Green,
}

/// SAR value, trend flag and display color per bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarTable {
    /// Trading days, aligned with the input series.
    pub days: Vec<NaiveDate>,
    /// The stop-and-reverse level.
    pub sar: Vec<f64>,
    /// `true` while in an uptrend.
    pub trend: Vec<bool>,
    /// Red for uptrend bars, green for downtrend bars.
    pub color: Vec<TrendColor>,
}

/// Accumulator threaded through the fold.
#[derive(Debug, Clone, Copy)]
struct SarState {
    /// `true` = uptrend.
    trend: bool,
    /// Acceleration factor, stepped on new extremes, reset on reversal.
    af: f64,
    /// Running high of the uptrend, or running low of the downtrend.
    extreme_point: f64,
    prev_sar: f64,
}

impl SarState {
    fn seed(first_high: f64, first_close: f64) -> Self {
        Self {
            trend: true,
            af: INITIAL_AF,
            extreme_point: first_high,
            prev_sar: first_close,
        }
    }

    /// Advances one bar, returning the emitted SAR value.
    fn step(&mut self, high: f64, low: f64) -> f64 {
        let candidate = self.prev_sar + self.af * (self.extreme_point - self.prev_sar);
        let emitted = if self.trend {
            if low < candidate {
                // Price fell through the rising SAR: reverse, emitting
                // the former uptrend high.
                let former_extreme = self.extreme_point;
                self.trend = false;
                self.extreme_point = low;
                self.af = INITIAL_AF;
                former_extreme
            } else {
                if high > self.extreme_point {
                    self.extreme_point = high;
                    self.af = (self.af + AF_STEP).min(MAX_AF);
                }
                candidate
            }
        } else if high > candidate {
            let former_extreme = self.extreme_point;
            self.trend = true;
            self.extreme_point = high;
            self.af = INITIAL_AF;
            former_extreme
        } else {
            if low < self.extreme_point {
                self.extreme_point = low;
                self.af = (self.af + AF_STEP).min(MAX_AF);
            }
            candidate
        };
        self.prev_sar = emitted;
        emitted
    }
}

/// SAR over the whole series.
///
/// The fold starts in an uptrend with the first bar's high as the
/// extreme point and the first bar's close as the seed SAR. Infallible:
/// SAR takes no window parameter, and an empty series yields an empty
/// table.
pub fn sar(series: &BarSeries) -> SarTable {
    let days = series.days();
    let len = series.len();
    let mut sar_column = Vec::with_capacity(len);
    let mut trend_column = Vec::with_capacity(len);
    let mut color_column = Vec::with_capacity(len);

    if let Some(first) = series.get(0) {
        let mut state = SarState::seed(first.high, first.close);
        sar_column.push(first.close);
        trend_column.push(state.trend);
        color_column.push(TrendColor::Red);

        for bar in &series.bars()[1..] {
            let emitted = state.step(bar.high, bar.low);
            sar_column.push(emitted);
            trend_column.push(state.trend);
            color_column.push(if state.trend {
                TrendColor::Red
            } else {
                TrendColor::Green
            });
        }
    }

    SarTable {
        days,
        sar: sar_column,
        trend: trend_column,
        color: color_column,
    }
}
