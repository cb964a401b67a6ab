#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

//! Batch technical indicators with NaN warm-up semantics.

/// Parameter validation and indicator dispatch.
pub mod engine;
/// Error type for invalid parameters.
pub mod error;
/// Built-in indicator implementations.
pub mod indicators;
/// Rolling and exponential smoothing primitives.
pub mod smoothing;

/// Re-export of the facade surface to make the crate easy to consume.
pub use crate::engine::{compute, CdpLine, IndicatorResult, IndicatorSpec, MikeLine};
/// Re-export of the error type.
pub use crate::error::IndicatorError;
/// Re-export of the smoothing-method vocabulary.
pub use crate::smoothing::SmoothMethod;
