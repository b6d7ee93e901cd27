// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::debug;

use crate::encoding::config::{DEFAULT_FUTURE, DEFAULT_HISTORY, MAX_RADIX};
use crate::encoding::error::{BlackBoxError, Result};
use crate::encoding::series::{SeriesData, SeriesView};

/// Auxiliary vectors actually supplied by the caller.
///
/// The first supplied vector in the order `base`, `history`, `future`,
/// `partition` decides how a rank-2 tensor is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeRequest<'a> {
    pub base: Option<&'a [i32]>,
    pub history: Option<&'a [usize]>,
    pub future: Option<&'a [usize]>,
    pub partition: Option<&'a [usize]>,
}

impl ShapeRequest<'_> {
    /// Length class of the vector that disambiguates rank-2 input.
    pub fn aux_length(&self) -> AuxLength {
        let len = self
            .base
            .map(<[i32]>::len)
            .or(self.history.map(<[usize]>::len))
            .or(self.future.map(<[usize]>::len))
            .or(self.partition.map(<[usize]>::len));
        match len {
            None => AuxLength::Absent,
            Some(1) => AuxLength::One,
            Some(_) => AuxLength::Many,
        }
    }
}

/// Length class of the deciding auxiliary vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxLength {
    Absent,
    One,
    Many,
}

/// How the axes of a tensor map onto `(u, v, w)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Rank 1: `u = 1, v = 1`
    Single,
    /// Rank 2 read as ensemble rows of one series: `u = 1, (v, w) = shape`
    EnsembleRows,
    /// Rank 2 read as independent series: `v = 1, (u, w) = shape`
    IndependentSeries,
    /// Rank 3: `(u, v, w) = shape`
    Full,
}

/// Decision table from `(rank, aux length)` to an axis orientation.
pub fn orientation(rank: usize, aux: AuxLength) -> Result<Orientation> {
    match (rank, aux) {
        (1, _) => Ok(Orientation::Single),
        (2, AuxLength::One) => Ok(Orientation::EnsembleRows),
        (2, AuxLength::Many) => Ok(Orientation::IndependentSeries),
        (2, AuxLength::Absent) => Ok(Orientation::IndependentSeries),
        (3, _) => Ok(Orientation::Full),
        (rank, _) => Err(BlackBoxError::Shape { rank }),
    }
}

/// Canonical shape and fully materialized per-series parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedShape {
    /// Number of series combined into each code
    pub u: usize,
    /// Number of ensemble rows per series
    pub v: usize,
    /// Time length
    pub w: usize,
    pub orientation: Orientation,
    /// Alphabet size of each series (`u` entries)
    pub base: Vec<i32>,
    /// History length of each series (`u` entries)
    pub history: Vec<usize>,
    /// Future length of each series (`u` entries)
    pub future: Vec<usize>,
}

impl ResolvedShape {
    /// View `series` in `[series, row, time]` layout according to this shape.
    pub fn view<'a>(&self, series: &'a SeriesData) -> SeriesView<'a> {
        SeriesView::new(series, self.orientation == Orientation::EnsembleRows)
    }
}

/// Infers `(u, v, w)` and fills in missing bases, histories and futures.
pub struct ShapeResolver;

impl ShapeResolver {
    pub fn resolve(series: &SeriesData, request: &ShapeRequest<'_>) -> Result<ResolvedShape> {
        if let (Some(history), Some(future)) = (request.history, request.future) {
            if history.len() != future.len() && history.len() != 1 && future.len() != 1 {
                return Err(BlackBoxError::argument_conflict(format!(
                    "`history` has length {} but `future` has length {}",
                    history.len(),
                    future.len()
                )));
            }
        }

        let orientation = orientation(series.rank(), request.aux_length())?;
        let shape = series.shape();
        let (u, v, w) = match orientation {
            Orientation::Single => (1, 1, shape[0]),
            Orientation::EnsembleRows => (1, shape[0], shape[1]),
            Orientation::IndependentSeries => (shape[0], 1, shape[1]),
            Orientation::Full => (shape[0], shape[1], shape[2]),
        };
        if u == 0 {
            return Err(BlackBoxError::EmptyAxis { axis: "series" });
        }
        if v == 0 {
            return Err(BlackBoxError::EmptyAxis { axis: "row" });
        }

        let history = broadcast("history", request.history, u, DEFAULT_HISTORY)?;
        let future = broadcast("future", request.future, u, DEFAULT_FUTURE)?;
        if let Some((index, &k)) = history.iter().enumerate().find(|&(_, &k)| k < 1) {
            return Err(BlackBoxError::invalid_parameter("history", index, k as i64));
        }
        if let Some(partition) = request.partition {
            if partition.len() != u {
                return Err(BlackBoxError::shape_mismatch("partition", u, partition.len()));
            }
        }

        if w == 0 {
            return Err(BlackBoxError::Range {
                length: 0,
                history: history.iter().copied().max().unwrap_or(DEFAULT_HISTORY),
                future: future.iter().copied().max().unwrap_or(DEFAULT_FUTURE),
            });
        }

        let base = match request.base {
            Some(base) => broadcast("base", Some(base), u, 1)?,
            None => infer_base(series, u)?,
        };
        if let Some((index, &b)) = base.iter().enumerate().find(|&(_, &b)| b < 1) {
            return Err(BlackBoxError::invalid_parameter("base", index, b as i64));
        }

        debug!(u, v, w, ?orientation, ?base, "resolved series shape");

        Ok(ResolvedShape {
            u,
            v,
            w,
            orientation,
            base,
            history,
            future,
        })
    }
}

/// Expand an optional per-series vector to `u` entries.
///
/// A length-1 vector is repeated for every series.
fn broadcast<T: Copy>(
    parameter: &'static str,
    values: Option<&[T]>,
    u: usize,
    default: T,
) -> Result<Vec<T>> {
    match values {
        None => Ok(vec![default; u]),
        Some(values) if values.len() == u => Ok(values.to_vec()),
        Some([value]) => Ok(vec![*value; u]),
        Some(values) => Err(BlackBoxError::shape_mismatch(parameter, u, values.len())),
    }
}

/// Base of each series as its largest observed value plus one.
///
/// A single series takes the maximum over the whole tensor; otherwise each
/// leading-axis slice is reduced on its own.
fn infer_base(series: &SeriesData, u: usize) -> Result<Vec<i32>> {
    let maxima = if u == 1 {
        vec![series.max()]
    } else {
        series.max_per_leading()
    };
    maxima
        .into_iter()
        .map(|max| match max {
            Some(max) => max
                .checked_add(1)
                .map(|b| b.max(1))
                .ok_or(BlackBoxError::EncodingOverflow {
                    radix_budget: MAX_RADIX,
                }),
            None => Ok(1),
        })
        .collect()
}
