// Copyright 2025 the ChartAxes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for axis construction.

use thiserror::Error;

/// Errors surfaced while building an axis.
///
/// Everything else that can go wrong during axis construction (empty series,
/// degenerate domains, absent secondary axes) is a normal, non-error branch
/// and is modeled with `Option` or a synthesized default instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AxisError {
    /// The serialized axis type is not one of the recognized values.
    ///
    /// This indicates a contract violation in the chart definition handed to
    /// us by the caller, not a recoverable runtime condition.
    #[error("unknown axis type: {0}")]
    UnknownAxisType(String),

    /// A log-scale measure axis would have to represent negative values.
    ///
    /// This is a user-facing configuration error: the chosen scale is invalid
    /// for the data.
    #[error("cannot represent negative values on a log scale; please disable log scale")]
    NegativeValueOnLogScale,
}
