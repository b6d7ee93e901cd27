// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config;
pub mod error;
pub mod partition;
pub mod series;
pub mod shape;
pub mod traits;
pub mod utils;
pub mod window;

use ndarray::ArrayD;

pub use config::{BlackBoxConfig, EncodeMode};
pub use error::{BlackBoxError, Result};
pub use partition::{PartitionGroupEncoder, PartitionedSeries};
pub use series::SeriesData;
pub use shape::{ResolvedShape, ShapeRequest, ShapeResolver};
pub use traits::SymbolEncoder;
pub use window::WindowEncoder;

/// Result of a black-boxing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlackBoxed {
    /// Output of sliding-window encoding
    Windowed(ArrayD<i32>),
    /// Output of partition encoding, with the base of each block
    Partitioned(PartitionedSeries),
}

impl BlackBoxed {
    /// Encoded series, regardless of mode.
    pub fn codes(&self) -> &ArrayD<i32> {
        match self {
            BlackBoxed::Windowed(codes) => codes,
            BlackBoxed::Partitioned(parts) => &parts.codes,
        }
    }

    /// Block bases, present only for partition encoding.
    pub fn bases(&self) -> Option<&[i32]> {
        match self {
            BlackBoxed::Windowed(_) => None,
            BlackBoxed::Partitioned(parts) => Some(&parts.bases),
        }
    }
}

/// Black-boxing of discrete time series
///
/// This struct provides static methods that resolve the shape of the input,
/// fill in default parameters and run the matching encoder.
pub struct BlackBox;

impl BlackBox {
    /// Black-boxes series with pivot-aligned sliding windows
    ///
    /// # Arguments
    ///
    /// * `series` - Rank 1, 2 or 3 tensor of non-negative samples
    /// * `base` - Alphabet size per series; inferred as `max + 1` if `None`
    /// * `history` - Past samples per series including the current one (`k_i >= 1`)
    /// * `future` - Upcoming samples per series (`l_i >= 0`)
    ///
    /// Vectors of length 1 apply to every series. On rank-2 input the length of
    /// the first supplied vector decides whether rows are ensemble members of a
    /// single series (length 1) or separate series.
    ///
    /// # Returns
    ///
    /// One code per retained time step, shaped `(out_len)` or `(v, out_len)`
    pub fn encode_windows(
        series: impl Into<SeriesData>,
        base: Option<&[i32]>,
        history: Option<&[usize]>,
        future: Option<&[usize]>,
    ) -> Result<ArrayD<i32>> {
        let series = series.into();
        let request = ShapeRequest {
            base,
            history,
            future,
            partition: None,
        };
        let shape = ShapeResolver::resolve(&series, &request)?;
        WindowEncoder::new().encode(&series, &shape)
    }

    /// Black-boxes the series of each block of a partitioning
    ///
    /// # Arguments
    ///
    /// * `series` - Rank 1, 2 or 3 tensor of non-negative samples
    /// * `base` - Alphabet size per series; inferred as `max + 1` if `None`
    /// * `partition` - Block index of every series
    ///
    /// # Returns
    ///
    /// The codes of each block and the combined base of each block
    pub fn encode_partitions(
        series: impl Into<SeriesData>,
        base: Option<&[i32]>,
        partition: &[usize],
    ) -> Result<PartitionedSeries> {
        let series = series.into();
        let request = ShapeRequest {
            base,
            history: None,
            future: None,
            partition: Some(partition),
        };
        let shape = ShapeResolver::resolve(&series, &request)?;
        PartitionGroupEncoder::new(partition).encode(&series, &shape)
    }

    /// Black-boxes series according to a configuration
    pub fn encode(series: impl Into<SeriesData>, config: &BlackBoxConfig) -> Result<BlackBoxed> {
        let base = config.base.as_deref();
        match &config.mode {
            EncodeMode::Window { history, future } => {
                Self::encode_windows(series, base, history.as_deref(), future.as_deref())
                    .map(BlackBoxed::Windowed)
            }
            EncodeMode::Partition(partition) => {
                Self::encode_partitions(series, base, partition).map(BlackBoxed::Partitioned)
            }
        }
    }

    /// Black-boxes series with optional windows or an optional partitioning
    ///
    /// `parts` cannot be combined with `history` or `future`.
    pub fn black_box(
        series: impl Into<SeriesData>,
        base: Option<&[i32]>,
        history: Option<&[usize]>,
        future: Option<&[usize]>,
        parts: Option<&[usize]>,
    ) -> Result<BlackBoxed> {
        match parts {
            None => Self::encode_windows(series, base, history, future).map(BlackBoxed::Windowed),
            Some(_) if history.is_some() => Err(BlackBoxError::argument_conflict(
                "cannot provide both `history` and `parts`",
            )),
            Some(_) if future.is_some() => Err(BlackBoxError::argument_conflict(
                "cannot provide both `future` and `parts`",
            )),
            Some(parts) => {
                Self::encode_partitions(series, base, parts).map(BlackBoxed::Partitioned)
            }
        }
    }
}
