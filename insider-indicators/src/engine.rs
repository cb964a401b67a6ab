//! Engine facade: parameter validation and indicator dispatch.
//!
//! The facade is the only surface external collaborators call. It checks
//! every parameter against the indicator's fixed vocabulary before any
//! arithmetic runs, then hands back the indicator's typed table
//! unmodified; there is no caching, no retry, and no hidden
//! configuration.

use std::str::FromStr;

use insider_core::BarSeries;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IndicatorError;
use crate::indicators;
use crate::indicators::{
    AdtmTable, AtrTable, BbibollTable, BollTable, CdpTable, DmiTable, EmaTable, EnvTable,
    KdjTable, MaTable, MacdTable, MdTable, MiTable, MikeTable, MtmTable, ObvTable, RcTable,
    RsiTable, SarTable, VmaTable, VmacdTable, VoscTable, VstdTable,
};
use crate::smoothing::SmoothMethod;

/// The six named MIKE lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MikeLine {
    /// Weak resistance.
    Wr,
    /// Medium resistance.
    Mr,
    /// Strong resistance.
    Sr,
    /// Weak support.
    Ws,
    /// Medium support.
    Ms,
    /// Strong support.
    Ss,
}

impl MikeLine {
    /// The full vocabulary, in display order.
    pub const ALL: [Self; 6] = [Self::Wr, Self::Mr, Self::Sr, Self::Ws, Self::Ms, Self::Ss];
}

impl FromStr for MikeLine {
    type Err = IndicatorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "wr" => Ok(Self::Wr),
            "mr" => Ok(Self::Mr),
            "sr" => Ok(Self::Sr),
            "ws" => Ok(Self::Ws),
            "ms" => Ok(Self::Ms),
            "ss" => Ok(Self::Ss),
            other => Err(IndicatorError::unknown_line("MIKE", other)),
        }
    }
}

/// The five named CDP lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CdpLine {
    /// Highest level.
    Ah,
    /// Near-high level.
    Nh,
    /// The pivot itself.
    Cdp,
    /// Lowest level.
    Al,
    /// Near-low level.
    Nl,
}

impl CdpLine {
    /// The full vocabulary, in display order.
    pub const ALL: [Self; 5] = [Self::Ah, Self::Nh, Self::Cdp, Self::Al, Self::Nl];
}

impl FromStr for CdpLine {
    type Err = IndicatorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "ah" => Ok(Self::Ah),
            "nh" => Ok(Self::Nh),
            "cdp" => Ok(Self::Cdp),
            "al" => Ok(Self::Al),
            "nl" => Ok(Self::Nl),
            other => Err(IndicatorError::unknown_line("CDP", other)),
        }
    }
}

/// One indicator request with its explicit parameters.
///
/// There is deliberately no global configuration: every window, smoothing
/// method and line subset travels with the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "indicator", rename_all = "lowercase")]
pub enum IndicatorSpec {
    /// Moving average of the close.
    Ma {
        /// Window length.
        n: usize,
    },
    /// Moving standard deviation of the close.
    Md {
        /// Window length.
        n: usize,
    },
    /// Exponential moving average of the close.
    Ema {
        /// Span.
        n: usize,
    },
    /// MACD over the close.
    Macd {
        /// Fast EMA span.
        fast: usize,
        /// Slow EMA span.
        slow: usize,
        /// Signal EMA span.
        signal: usize,
    },
    /// KDJ stochastic oscillator.
    Kdj {
        /// Stochastic window.
        n: usize,
        /// Smoother for the K and D lines.
        method: SmoothMethod,
    },
    /// RSI of the close.
    Rsi {
        /// Smoothing period.
        n: usize,
    },
    /// RSI of the volume.
    Vrsi {
        /// Smoothing period.
        n: usize,
    },
    /// Envelope around the moving average.
    Env {
        /// Window length.
        n: usize,
    },
    /// Smoothed n-day momentum.
    Mi {
        /// Lag and smoothing period.
        n: usize,
    },
    /// MIKE pressure/support lines.
    Mike {
        /// High/low window.
        n: usize,
        /// Line names the caller is interested in. Parsing into
        /// [`MikeLine`] is the validation; the computed table always
        /// carries all six lines.
        lines: Vec<MikeLine>,
    },
    /// ADTM buy/sell momentum.
    Adtm {
        /// Sum window.
        n: usize,
        /// Average window.
        m: usize,
    },
    /// Price rate of change.
    Rc {
        /// Lag and smoothing period.
        n: usize,
    },
    /// Bollinger bands.
    Boll {
        /// Window length.
        n: usize,
    },
    /// Bull-bear index bands.
    Bbiboll {
        /// Deviation window.
        n: usize,
        /// Deviation multiplier.
        m: f64,
    },
    /// Average true range.
    Atr {
        /// Window length.
        n: usize,
    },
    /// CDP contrarian levels.
    Cdp {
        /// Average window.
        n: usize,
        /// Line names the caller is interested in. Parsing into
        /// [`CdpLine`] is the validation; the computed table always
        /// carries all five lines.
        lines: Vec<CdpLine>,
    },
    /// Raw momentum with a moving average.
    Mtm {
        /// Momentum lag.
        n: usize,
        /// Average window.
        m: usize,
    },
    /// Directional movement system.
    Dmi {
        /// Window length.
        n: usize,
    },
    /// Moving average of the volume.
    Vma {
        /// Window length.
        n: usize,
    },
    /// MACD over the volume.
    Vmacd {
        /// Fast EMA span.
        fast: usize,
        /// Slow EMA span.
        slow: usize,
        /// Signal EMA span.
        signal: usize,
    },
    /// Moving standard deviation of the volume.
    Vstd {
        /// Window length.
        n: usize,
    },
    /// Volume oscillator.
    Vosc {
        /// Short average window.
        short: usize,
        /// Long average window.
        long: usize,
    },
    /// On-balance volume.
    Obv,
    /// Parabolic stop-and-reverse.
    Sar,
}

impl IndicatorSpec {
    /// Stable name of the requested indicator, for logging and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ma { .. } => "MA",
            Self::Md { .. } => "MD",
            Self::Ema { .. } => "EMA",
            Self::Macd { .. } => "MACD",
            Self::Kdj { .. } => "KDJ",
            Self::Rsi { .. } => "RSI",
            Self::Vrsi { .. } => "VRSI",
            Self::Env { .. } => "ENV",
            Self::Mi { .. } => "MI",
            Self::Mike { .. } => "MIKE",
            Self::Adtm { .. } => "ADTM",
            Self::Rc { .. } => "RC",
            Self::Boll { .. } => "BOLL",
            Self::Bbiboll { .. } => "BBIBOLL",
            Self::Atr { .. } => "ATR",
            Self::Cdp { .. } => "CDP",
            Self::Mtm { .. } => "MTM",
            Self::Dmi { .. } => "DMI",
            Self::Vma { .. } => "VMA",
            Self::Vmacd { .. } => "VMACD",
            Self::Vstd { .. } => "VSTD",
            Self::Vosc { .. } => "VOSC",
            Self::Obv => "OBV",
            Self::Sar => "SAR",
        }
    }
}

/// A computed indicator table, one variant per indicator schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "indicator", rename_all = "lowercase")]
pub enum IndicatorResult {
    /// Moving average table.
    Ma(MaTable),
    /// Moving standard deviation table.
    Md(MdTable),
    /// Exponential moving average table.
    Ema(EmaTable),
    /// MACD table.
    Macd(MacdTable),
    /// KDJ table.
    Kdj(KdjTable),
    /// RSI table over the close.
    Rsi(RsiTable),
    /// RSI table over the volume.
    Vrsi(RsiTable),
    /// Envelope table.
    Env(EnvTable),
    /// MI table.
    Mi(MiTable),
    /// MIKE table.
    Mike(MikeTable),
    /// ADTM table.
    Adtm(AdtmTable),
    /// Rate-of-change table.
    Rc(RcTable),
    /// Bollinger bands table.
    Boll(BollTable),
    /// BBIBOLL table.
    Bbiboll(BbibollTable),
    /// Average true range table.
    Atr(AtrTable),
    /// CDP table.
    Cdp(CdpTable),
    /// Momentum table.
    Mtm(MtmTable),
    /// DMI table.
    Dmi(DmiTable),
    /// Volume moving average table.
    Vma(VmaTable),
    /// Volume MACD table.
    Vmacd(VmacdTable),
    /// Volume standard deviation table.
    Vstd(VstdTable),
    /// Volume oscillator table.
    Vosc(VoscTable),
    /// On-balance volume table.
    Obv(ObvTable),
    /// SAR table.
    Sar(SarTable),
}

/// Computes one indicator over the series.
///
/// A pure function of `(series, spec)`: parameter validation happens
/// before any column is touched, and the returned table is exactly what
/// the indicator produced.
pub fn compute(series: &BarSeries, spec: &IndicatorSpec) -> Result<IndicatorResult, IndicatorError> {
    debug!(
        indicator = spec.name(),
        bars = series.len(),
        "computing indicator"
    );
    match spec {
        IndicatorSpec::Ma { n } => indicators::ma(series, *n).map(IndicatorResult::Ma),
        IndicatorSpec::Md { n } => indicators::md(series, *n).map(IndicatorResult::Md),
        IndicatorSpec::Ema { n } => indicators::ema(series, *n).map(IndicatorResult::Ema),
        IndicatorSpec::Macd { fast, slow, signal } => {
            indicators::macd(series, *fast, *slow, *signal).map(IndicatorResult::Macd)
        }
        IndicatorSpec::Kdj { n, method } => {
            indicators::kdj(series, *n, *method).map(IndicatorResult::Kdj)
        }
        IndicatorSpec::Rsi { n } => indicators::rsi(series, *n).map(IndicatorResult::Rsi),
        IndicatorSpec::Vrsi { n } => indicators::vrsi(series, *n).map(IndicatorResult::Vrsi),
        IndicatorSpec::Env { n } => indicators::env(series, *n).map(IndicatorResult::Env),
        IndicatorSpec::Mi { n } => indicators::mi(series, *n).map(IndicatorResult::Mi),
        IndicatorSpec::Mike { n, .. } => indicators::mike(series, *n).map(IndicatorResult::Mike),
        IndicatorSpec::Adtm { n, m } => {
            indicators::adtm(series, *n, *m).map(IndicatorResult::Adtm)
        }
        IndicatorSpec::Rc { n } => indicators::rc(series, *n).map(IndicatorResult::Rc),
        IndicatorSpec::Boll { n } => indicators::boll(series, *n).map(IndicatorResult::Boll),
        IndicatorSpec::Bbiboll { n, m } => {
            indicators::bbiboll(series, *n, *m).map(IndicatorResult::Bbiboll)
        }
        IndicatorSpec::Atr { n } => indicators::atr(series, *n).map(IndicatorResult::Atr),
        IndicatorSpec::Cdp { n, .. } => indicators::cdp(series, *n).map(IndicatorResult::Cdp),
        IndicatorSpec::Mtm { n, m } => indicators::mtm(series, *n, *m).map(IndicatorResult::Mtm),
        IndicatorSpec::Dmi { n } => indicators::dmi(series, *n).map(IndicatorResult::Dmi),
        IndicatorSpec::Vma { n } => indicators::vma(series, *n).map(IndicatorResult::Vma),
        IndicatorSpec::Vmacd { fast, slow, signal } => {
            indicators::vmacd(series, *fast, *slow, *signal).map(IndicatorResult::Vmacd)
        }
        IndicatorSpec::Vstd { n } => indicators::vstd(series, *n).map(IndicatorResult::Vstd),
        IndicatorSpec::Vosc { short, long } => {
            indicators::vosc(series, *short, *long).map(IndicatorResult::Vosc)
        }
        IndicatorSpec::Obv => Ok(IndicatorResult::Obv(indicators::obv(series))),
        IndicatorSpec::Sar => Ok(IndicatorResult::Sar(indicators::sar(series))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testing::close_series;

    #[test]
    fn dispatches_to_the_requested_indicator() {
        let series = close_series(&[10.0, 11.0, 9.0, 12.0, 13.0]);
        let result = compute(&series, &IndicatorSpec::Ma { n: 2 }).unwrap();
        match result {
            IndicatorResult::Ma(table) => {
                assert_eq!(&table.ma[1..], &[10.5, 10.0, 10.5, 12.5]);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn surfaces_validation_errors_before_computing() {
        let series = close_series(&[1.0, 2.0]);
        let err = compute(&series, &IndicatorSpec::Boll { n: 0 }).unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidPeriod { .. }));
    }

    #[test]
    fn line_vocabularies_parse_and_reject() {
        assert_eq!("wr".parse::<MikeLine>().unwrap(), MikeLine::Wr);
        assert_eq!("cdp".parse::<CdpLine>().unwrap(), CdpLine::Cdp);
        assert!(matches!(
            "xx".parse::<MikeLine>(),
            Err(IndicatorError::UnknownLine { .. })
        ));
        assert!(matches!(
            "middle".parse::<CdpLine>(),
            Err(IndicatorError::UnknownLine { .. })
        ));
        assert_eq!(MikeLine::ALL.len(), 6);
        assert_eq!(CdpLine::ALL.len(), 5);
    }

    #[test]
    fn line_subsets_validate_without_narrowing_the_table() {
        let series = close_series(&[10.0, 11.0, 9.0, 12.0, 13.0]);
        let result = compute(
            &series,
            &IndicatorSpec::Mike {
                n: 2,
                lines: vec![MikeLine::Wr],
            },
        )
        .unwrap();
        // The subset is a typed request hint; the table stays complete.
        match result {
            IndicatorResult::Mike(table) => {
                for column in [&table.wr, &table.mr, &table.sr, &table.ws, &table.ms, &table.ss] {
                    assert_eq!(column.len(), series.len());
                }
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn spec_round_trips_through_serde() {
        let spec = IndicatorSpec::Kdj {
            n: 9,
            method: SmoothMethod::Sma,
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: IndicatorSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
