// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, Array3, ArrayD, ArrayView1, Axis, Ix1, Ix2, Ix3};

use crate::encoding::error::{BlackBoxError, Result};

/// Rank-tagged series tensor accepted by the encoders.
///
/// - `Rank1`: a single series of length `w`
/// - `Rank2`: either `v` ensemble rows of one series or `u` series without
///   ensemble, decided by the shape resolver
/// - `Rank3`: `[series, row, time]`, unambiguous
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    /// One series
    Rank1(Array1<i32>),
    /// Rows of a single series, or several series
    Rank2(Array2<i32>),
    /// Series x ensemble rows x time
    Rank3(Array3<i32>),
}

impl From<Array1<i32>> for SeriesData {
    fn from(array: Array1<i32>) -> Self {
        SeriesData::Rank1(array)
    }
}

impl From<Array2<i32>> for SeriesData {
    fn from(array: Array2<i32>) -> Self {
        SeriesData::Rank2(array)
    }
}

impl From<Array3<i32>> for SeriesData {
    fn from(array: Array3<i32>) -> Self {
        SeriesData::Rank3(array)
    }
}

impl From<Vec<i32>> for SeriesData {
    fn from(values: Vec<i32>) -> Self {
        SeriesData::Rank1(Array1::from(values))
    }
}

impl TryFrom<ArrayD<i32>> for SeriesData {
    type Error = BlackBoxError;

    fn try_from(array: ArrayD<i32>) -> Result<Self> {
        let rank = array.ndim();
        match rank {
            1 => Ok(SeriesData::Rank1(
                array.into_dimensionality::<Ix1>().map_err(|_| BlackBoxError::Shape { rank })?,
            )),
            2 => Ok(SeriesData::Rank2(
                array.into_dimensionality::<Ix2>().map_err(|_| BlackBoxError::Shape { rank })?,
            )),
            3 => Ok(SeriesData::Rank3(
                array.into_dimensionality::<Ix3>().map_err(|_| BlackBoxError::Shape { rank })?,
            )),
            _ => Err(BlackBoxError::Shape { rank }),
        }
    }
}

impl SeriesData {
    /// Number of dimensions of the wrapped tensor.
    pub fn rank(&self) -> usize {
        match self {
            SeriesData::Rank1(_) => 1,
            SeriesData::Rank2(_) => 2,
            SeriesData::Rank3(_) => 3,
        }
    }

    /// Shape of the wrapped tensor.
    pub fn shape(&self) -> &[usize] {
        match self {
            SeriesData::Rank1(a) => a.shape(),
            SeriesData::Rank2(a) => a.shape(),
            SeriesData::Rank3(a) => a.shape(),
        }
    }

    /// Largest sample in the whole tensor, `None` if empty.
    pub fn max(&self) -> Option<i32> {
        match self {
            SeriesData::Rank1(a) => a.iter().copied().max(),
            SeriesData::Rank2(a) => a.iter().copied().max(),
            SeriesData::Rank3(a) => a.iter().copied().max(),
        }
    }

    /// Largest sample of each leading-axis slice (row of a rank-2 tensor,
    /// series block of a rank-3 tensor).
    pub fn max_per_leading(&self) -> Vec<Option<i32>> {
        match self {
            SeriesData::Rank1(a) => vec![a.iter().copied().max()],
            SeriesData::Rank2(a) => a
                .axis_iter(Axis(0))
                .map(|row| row.iter().copied().max())
                .collect(),
            SeriesData::Rank3(a) => a
                .axis_iter(Axis(0))
                .map(|block| block.iter().copied().max())
                .collect(),
        }
    }
}

/// Read-only view of a tensor in canonical `[series, row, time]` layout.
///
/// Built from a [`SeriesData`] after shape resolution; no samples are copied.
#[derive(Debug, Clone, Copy)]
pub struct SeriesView<'a> {
    data: &'a SeriesData,
    layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Rank 1: one series, one row
    Single,
    /// Rank 2 read as `[row, time]` of one series
    Rows,
    /// Rank 2 read as `[series, time]` with one row
    Series,
    /// Rank 3 `[series, row, time]`
    Full,
}

impl<'a> SeriesView<'a> {
    /// View a rank-2 tensor as rows of one series when `rows_are_ensemble`,
    /// otherwise as several series. Ignored for rank 1 and rank 3.
    pub(crate) fn new(data: &'a SeriesData, rows_are_ensemble: bool) -> Self {
        let layout = match data {
            SeriesData::Rank1(_) => Layout::Single,
            SeriesData::Rank2(_) if rows_are_ensemble => Layout::Rows,
            SeriesData::Rank2(_) => Layout::Series,
            SeriesData::Rank3(_) => Layout::Full,
        };
        Self { data, layout }
    }

    /// Time series of `series` for ensemble `row`.
    pub fn lane(&self, series: usize, row: usize) -> ArrayView1<'a, i32> {
        match (self.data, self.layout) {
            (SeriesData::Rank1(a), _) => a.view(),
            (SeriesData::Rank2(a), Layout::Rows) => a.row(row),
            (SeriesData::Rank2(a), _) => a.row(series),
            (SeriesData::Rank3(a), _) => a.index_axis(Axis(0), series).index_axis_move(Axis(0), row),
        }
    }
}
