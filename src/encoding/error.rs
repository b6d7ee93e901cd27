// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for black-boxing and partition enumeration.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BlackBoxError>;

/// Errors raised while resolving, validating or encoding series.
///
/// Every error is detected before any output is written, so a failed call
/// never leaves a partially encoded result behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackBoxError {
    /// The series tensor has a rank other than 1, 2 or 3.
    #[error("Unsupported series rank {rank}: expected 1, 2 or 3 dimensions")]
    Shape {
        /// Rank of the rejected tensor
        rank: usize,
    },

    /// A series or row axis of the tensor has length zero.
    #[error("Series tensor has an empty {axis} axis")]
    EmptyAxis {
        /// Name of the empty axis ("series" or "row")
        axis: &'static str,
    },

    /// An auxiliary vector does not match the inferred number of series.
    #[error("Shape mismatch: `{parameter}` has length {actual}, expected {expected}")]
    ShapeMismatch {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Number of series inferred from the tensor
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Mutually exclusive parameters were supplied together.
    #[error("Conflicting arguments: {message}")]
    ArgumentConflict {
        /// Which parameters conflict
        message: String,
    },

    /// The window configuration leaves no valid output positions.
    #[error(
        "Window does not fit: series length {length} with max history {history} and max future {future}"
    )]
    Range {
        /// Time length of the series
        length: usize,
        /// Largest history length requested
        history: usize,
        /// Largest future length requested
        future: usize,
    },

    /// A sample lies outside the alphabet of its series.
    #[error("Sample {value} at series {series}, row {row}, time {time} is outside base {base}")]
    Domain {
        /// Series index
        series: usize,
        /// Ensemble row index
        row: usize,
        /// Time index
        time: usize,
        /// Offending value
        value: i32,
        /// Base of the series
        base: i32,
    },

    /// The combined radix does not fit the integer budget of the output codes.
    #[error("Encoding overflow: combined radix exceeds {radix_budget}")]
    EncodingOverflow {
        /// Largest radix an output code may use
        radix_budget: u64,
    },

    /// A base or window length is out of its legal range.
    #[error("Invalid `{parameter}` at position {index}: {value}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Position within the parameter vector
        index: usize,
        /// Rejected value
        value: i64,
    },

    /// An argument that must be positive was not.
    #[error("Invalid argument: {message}")]
    Argument {
        /// Description of what's wrong with the argument
        message: String,
    },
}

impl BlackBoxError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(parameter: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            parameter,
            expected,
            actual,
        }
    }

    /// Create an ArgumentConflict error.
    pub fn argument_conflict(message: impl Into<String>) -> Self {
        Self::ArgumentConflict {
            message: message.into(),
        }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(parameter: &'static str, index: usize, value: i64) -> Self {
        Self::InvalidParameter {
            parameter,
            index,
            value,
        }
    }

    /// Create an Argument error.
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument {
            message: message.into(),
        }
    }
}
