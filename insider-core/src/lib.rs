#![deny(missing_docs)]
//! Core OHLCV data model shared by the Insider indicator engine.
//!
//! The types here are deliberately dumb: a [`Bar`] is one trading period
//! as delivered by the market-data collaborator, and a [`BarSeries`] is a
//! validated, immutable, positionally-indexed sequence of bars. All
//! indicator arithmetic lives in `insider-indicators`.

mod bar;
mod error;
mod series;

pub use bar::Bar;
pub use error::{SeriesError, SeriesResult};
pub use series::BarSeries;
