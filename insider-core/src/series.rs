use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::bar::Bar;
use crate::error::{SeriesError, SeriesResult};

/// An ordered, immutable sequence of [`Bar`]s indexed 0..N-1 by position.
///
/// Construction validates that `day` is strictly increasing; every
/// windowing and shifting operation downstream references the positional
/// index, so a duplicate or out-of-order day would corrupt every derived
/// column at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl<'de> Deserialize<'de> for BarSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Deserialized series go through the same validation as
        // constructed ones.
        let bars = Vec::<Bar>::deserialize(deserializer)?;
        Self::new(bars).map_err(serde::de::Error::custom)
    }
}

impl BarSeries {
    /// Builds a series after checking day monotonicity.
    pub fn new(bars: Vec<Bar>) -> SeriesResult<Self> {
        for (position, pair) in bars.windows(2).enumerate() {
            if pair[1].day <= pair[0].day {
                return Err(SeriesError::NonMonotonicDays {
                    position: position + 1,
                });
            }
        }
        Ok(Self { bars })
    }

    /// Number of bars in the series.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the series holds no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar at the given position, if any.
    pub fn get(&self, position: usize) -> Option<&Bar> {
        self.bars.get(position)
    }

    /// All bars in positional order.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// The `day` column.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|bar| bar.day).collect()
    }

    /// The `open` column.
    pub fn opens(&self) -> Vec<f64> {
        self.column(|bar| bar.open)
    }

    /// The `high` column.
    pub fn highs(&self) -> Vec<f64> {
        self.column(|bar| bar.high)
    }

    /// The `low` column.
    pub fn lows(&self) -> Vec<f64> {
        self.column(|bar| bar.low)
    }

    /// The `close` column.
    pub fn closes(&self) -> Vec<f64> {
        self.column(|bar| bar.close)
    }

    /// The `volume` column.
    pub fn volumes(&self) -> Vec<f64> {
        self.column(|bar| bar.volume)
    }

    fn column(&self, extract: impl Fn(&Bar) -> f64) -> Vec<f64> {
        self.bars.iter().map(extract).collect()
    }
}
