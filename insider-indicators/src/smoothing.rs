//! Rolling-window and exponential smoothing primitives.
//!
//! Every transform is aligned with its input: position `t` of the output
//! is derived from positions `..=t` of the input, and positions without
//! enough history hold `f64::NAN`. Rolling transforms scan each window
//! explicitly rather than keeping a running sum, so a NaN in the input
//! poisons exactly the windows that contain it and nothing after.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;

/// Arithmetic mean over a trailing window of `n` values.
///
/// Positions `< n - 1` are NaN; so is any window containing a NaN.
pub fn rolling_mean(values: &[f64], n: usize) -> Vec<f64> {
    rolling(values, n, |window| {
        window.iter().sum::<f64>() / n as f64
    })
}

/// Population standard deviation (divisor `n`) over a trailing window.
pub fn rolling_std_pop(values: &[f64], n: usize) -> Vec<f64> {
    rolling(values, n, |window| {
        let mean = window.iter().sum::<f64>() / n as f64;
        let variance = window
            .iter()
            .map(|value| {
                let deviation = value - mean;
                deviation * deviation
            })
            .sum::<f64>()
            / n as f64;
        variance.sqrt()
    })
}

/// Sum over a trailing window of `n` values.
pub fn rolling_sum(values: &[f64], n: usize) -> Vec<f64> {
    rolling(values, n, |window| window.iter().sum())
}

/// Minimum over a trailing window of `n` values.
pub fn rolling_min(values: &[f64], n: usize) -> Vec<f64> {
    rolling(values, n, |window| {
        window.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

/// Maximum over a trailing window of `n` values.
pub fn rolling_max(values: &[f64], n: usize) -> Vec<f64> {
    rolling(values, n, |window| {
        window.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Exponential moving average parameterized by an effective span.
///
/// `alpha = 2 / (n + 1)`, seeded from the first finite input. Leading
/// NaNs stay NaN without consuming the seed. An interior NaN emits the
/// held smoothed value while its weight keeps decaying by `1 - alpha`,
/// so the next finite input is renormalized against the shrunken prior
/// weight instead of resetting the recursion.
pub fn ewma_span(values: &[f64], n: usize) -> Result<Vec<f64>, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("EWMA", n));
    }
    Ok(ewm(values, 2.0 / (n as f64 + 1.0)))
}

/// Wilder's exponential smoothing: `alpha = 1 / n`, NaN inputs coerced
/// to zero before the recursion.
///
/// Historically named "SMA" in the formula sheets this library follows,
/// but it is an exponential recursion, not a simple moving average; the
/// RSI family, KDJ, MI and RC all depend on this exact behavior.
pub fn wilder_smooth(values: &[f64], n: usize) -> Result<Vec<f64>, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::invalid_period("SMA", n));
    }
    let coerced: Vec<f64> = values
        .iter()
        .map(|value| if value.is_nan() { 0.0 } else { *value })
        .collect();
    Ok(ewm(&coerced, 1.0 / n as f64))
}

/// Lags a column by `n` positions, filling the head with NaN.
pub fn shift(values: &[f64], n: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    for t in n..values.len() {
        out[t] = values[t - n];
    }
    out
}

/// Clamps to `[0, 100]` while preserving NaN.
///
/// `f64::min`/`f64::max` silently discard NaN operands, which would turn
/// an undefined KDJ warm-up value into a defined one; this helper keeps
/// the undefined positions undefined.
pub fn clip_0_100(value: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// The two recursive smoothers an indicator may be parameterized with.
///
/// `Sma` keeps the historical name used at the parameter boundary; it
/// selects [`wilder_smooth`], not an arithmetic mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmoothMethod {
    /// Wilder's recursion (`alpha = 1/n`), externally named `sma`.
    Sma,
    /// Span-based EWMA (`alpha = 2/(n+1)`).
    Ema,
}

impl SmoothMethod {
    /// Applies the selected smoother to a column.
    pub fn apply(self, values: &[f64], n: usize) -> Result<Vec<f64>, IndicatorError> {
        match self {
            Self::Sma => wilder_smooth(values, n),
            Self::Ema => ewma_span(values, n),
        }
    }
}

impl FromStr for SmoothMethod {
    type Err = IndicatorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "sma" => Ok(Self::Sma),
            "ema" => Ok(Self::Ema),
            other => Err(IndicatorError::unknown_smoothing(other)),
        }
    }
}

fn rolling(values: &[f64], n: usize, fold: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if n == 0 || values.len() < n {
        return out;
    }
    for end in (n - 1)..values.len() {
        let window = &values[end + 1 - n..=end];
        if window.iter().all(|value| !value.is_nan()) {
            out[end] = fold(window);
        }
    }
    out
}

fn ewm(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    // (smoothed value, its decayed weight); None until the seed arrives.
    let mut state: Option<(f64, f64)> = None;
    for (t, &value) in values.iter().enumerate() {
        match state {
            None => {
                if !value.is_nan() {
                    state = Some((value, 1.0));
                    out[t] = value;
                }
            }
            Some((mean, weight)) => {
                let weight = weight * (1.0 - alpha);
                if value.is_nan() {
                    // A gap emits the held value but keeps decaying its
                    // weight, so the next finite input counts for more
                    // the longer the gap.
                    state = Some((mean, weight));
                    out[t] = mean;
                } else {
                    let next = (weight * mean + alpha * value) / (weight + alpha);
                    state = Some((next, 1.0));
                    out[t] = next;
                }
            }
        }
    }
    out
}
