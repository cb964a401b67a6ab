use thiserror::Error;

/// Error type surfaced by indicator parameter validation.
///
/// Insufficient history is deliberately absent: a window longer than the
/// series is not an error, it yields an all-NaN column.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    /// A window parameter was zero.
    #[error("{indicator}: period must be a positive integer, got {period}")]
    InvalidPeriod {
        /// Indicator or primitive that rejected the period.
        indicator: &'static str,
        /// The offending value.
        period: usize,
    },
    /// A non-window parameter was out of range.
    #[error("{indicator}: invalid value {value} for parameter `{name}`")]
    InvalidParameter {
        /// Indicator that rejected the parameter.
        indicator: &'static str,
        /// Parameter name.
        name: &'static str,
        /// The offending value, rendered for the message.
        value: String,
    },
    /// A smoothing method outside the `sma`/`ema` vocabulary.
    #[error("unknown smoothing method `{given}`, only sma and ema are allowed")]
    UnknownSmoothing {
        /// The unrecognized method name.
        given: String,
    },
    /// A requested line name outside an indicator's fixed vocabulary.
    #[error("{indicator}: unknown line `{line}`")]
    UnknownLine {
        /// Indicator whose vocabulary was consulted.
        indicator: &'static str,
        /// The unrecognized line name.
        line: String,
    },
}

impl IndicatorError {
    /// Builds an [`IndicatorError::InvalidPeriod`].
    pub fn invalid_period(indicator: &'static str, period: usize) -> Self {
        Self::InvalidPeriod { indicator, period }
    }

    /// Builds an [`IndicatorError::InvalidParameter`].
    pub fn invalid_parameter(
        indicator: &'static str,
        name: &'static str,
        value: impl ToString,
    ) -> Self {
        Self::InvalidParameter {
            indicator,
            name,
            value: value.to_string(),
        }
    }

    /// Builds an [`IndicatorError::UnknownSmoothing`].
    pub fn unknown_smoothing(given: impl Into<String>) -> Self {
        Self::UnknownSmoothing {
            given: given.into(),
        }
    }

    /// Builds an [`IndicatorError::UnknownLine`].
    pub fn unknown_line(indicator: &'static str, line: impl Into<String>) -> Self {
        Self::UnknownLine {
            indicator,
            line: line.into(),
        }
    }
}
