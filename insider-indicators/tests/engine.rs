//! End-to-end coverage of the engine facade: every indicator dispatches,
//! every table stays aligned with the input series, and results cross
//! the serialization boundary intact.

use chrono::{Days, NaiveDate};
use insider_core::{Bar, BarSeries};
use insider_indicators::{compute, IndicatorResult, IndicatorSpec, SmoothMethod};

fn sample_series(len: usize) -> BarSeries {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let bars: Vec<Bar> = (0..len)
        .map(|t| {
            // A deterministic wiggle so every indicator sees both
            // advancing and declining bars.
            let base = 20.0 + (t as f64 * 0.7).sin() * 3.0 + t as f64 * 0.05;
            Bar {
                day: start + Days::new(t as u64),
                open: base - 0.2,
                high: base + 1.0,
                low: base - 1.0,
                close: base,
                volume: 10_000.0 + (t as f64 * 1.3).cos() * 2_000.0,
                price_change: 0.0,
                percent_change: 0.0,
            }
        })
        .collect();
    BarSeries::new(bars).unwrap()
}

fn all_specs() -> Vec<IndicatorSpec> {
    vec![
        IndicatorSpec::Ma { n: 5 },
        IndicatorSpec::Md { n: 5 },
        IndicatorSpec::Ema { n: 5 },
        IndicatorSpec::Macd {
            fast: 12,
            slow: 26,
            signal: 9,
        },
        IndicatorSpec::Kdj {
            n: 9,
            method: SmoothMethod::Sma,
        },
        IndicatorSpec::Rsi { n: 6 },
        IndicatorSpec::Vrsi { n: 6 },
        IndicatorSpec::Env { n: 14 },
        IndicatorSpec::Mi { n: 12 },
        IndicatorSpec::Mike {
            n: 12,
            lines: Vec::new(),
        },
        IndicatorSpec::Adtm { n: 23, m: 8 },
        IndicatorSpec::Rc { n: 30 },
        IndicatorSpec::Boll { n: 26 },
        IndicatorSpec::Bbiboll { n: 11, m: 6.0 },
        IndicatorSpec::Atr { n: 14 },
        IndicatorSpec::Cdp {
            n: 1,
            lines: Vec::new(),
        },
        IndicatorSpec::Mtm { n: 6, m: 5 },
        IndicatorSpec::Dmi { n: 14 },
        IndicatorSpec::Vma { n: 5 },
        IndicatorSpec::Vmacd {
            fast: 12,
            slow: 26,
            signal: 9,
        },
        IndicatorSpec::Vstd { n: 5 },
        IndicatorSpec::Vosc { short: 12, long: 26 },
        IndicatorSpec::Obv,
        IndicatorSpec::Sar,
    ]
}

fn first_column_len(result: &IndicatorResult) -> usize {
    match result {
        IndicatorResult::Ma(t) => t.ma.len(),
        IndicatorResult::Md(t) => t.md.len(),
        IndicatorResult::Ema(t) => t.ema.len(),
        IndicatorResult::Macd(t) => t.macd.len(),
        IndicatorResult::Kdj(t) => t.k.len(),
        IndicatorResult::Rsi(t) | IndicatorResult::Vrsi(t) => t.rsi.len(),
        IndicatorResult::Env(t) => t.up.len(),
        IndicatorResult::Mi(t) => t.mi.len(),
        IndicatorResult::Mike(t) => t.wr.len(),
        IndicatorResult::Adtm(t) => t.adtm.len(),
        IndicatorResult::Rc(t) => t.rc.len(),
        IndicatorResult::Boll(t) => t.middle.len(),
        IndicatorResult::Bbiboll(t) => t.bbiboll.len(),
        IndicatorResult::Atr(t) => t.atr.len(),
        IndicatorResult::Cdp(t) => t.cdp.len(),
        IndicatorResult::Mtm(t) => t.mtm.len(),
        IndicatorResult::Dmi(t) => t.adx.len(),
        IndicatorResult::Vma(t) => t.vma.len(),
        IndicatorResult::Vmacd(t) => t.macd.len(),
        IndicatorResult::Vstd(t) => t.vstd.len(),
        IndicatorResult::Vosc(t) => t.vosc.len(),
        IndicatorResult::Obv(t) => t.obv.len(),
        IndicatorResult::Sar(t) => t.sar.len(),
    }
}

#[test]
fn every_indicator_dispatches_and_stays_aligned() {
    let series = sample_series(120);
    for spec in all_specs() {
        let result = compute(&series, &spec).unwrap_or_else(|err| {
            panic!("{} failed to dispatch: {err}", spec.name());
        });
        assert_eq!(
            first_column_len(&result),
            series.len(),
            "{} misaligned",
            spec.name()
        );
    }
}

#[test]
fn windows_longer_than_the_series_yield_all_nan_not_errors() {
    let series = sample_series(3);
    let result = compute(&series, &IndicatorSpec::Boll { n: 26 }).unwrap();
    match result {
        IndicatorResult::Boll(table) => {
            assert!(table.middle.iter().all(|value| value.is_nan()));
            assert!(table.up.iter().all(|value| value.is_nan()));
        }
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn warmup_prefix_is_nan_then_finite() {
    let series = sample_series(40);
    let result = compute(&series, &IndicatorSpec::Ma { n: 10 }).unwrap();
    let IndicatorResult::Ma(table) = result else {
        panic!("wrong variant");
    };
    assert!(table.ma[..9].iter().all(|value| value.is_nan()));
    assert!(table.ma[9..].iter().all(|value| value.is_finite()));
}

#[test]
fn concurrent_calls_share_the_series_immutably() {
    let series = std::sync::Arc::new(sample_series(80));
    let handles: Vec<_> = [5usize, 10, 20, 60]
        .into_iter()
        .map(|n| {
            let series = std::sync::Arc::clone(&series);
            std::thread::spawn(move || compute(&series, &IndicatorSpec::Ma { n }).unwrap())
        })
        .collect();
    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(first_column_len(&result), 80);
    }
}

#[test]
fn results_serialize_for_the_charting_boundary() {
    let series = sample_series(30);
    let result = compute(&series, &IndicatorSpec::Sar).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"indicator\":\"sar\""));
    assert!(json.contains("\"red\"") || json.contains("\"green\""));
    let back: IndicatorResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
