// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array3, ArrayD, Axis};
use tracing::{debug, trace};

use crate::encoding::config::{MAX_RADIX, PARTITION_WINDOW};
use crate::encoding::error::{BlackBoxError, Result};
use crate::encoding::series::SeriesData;
use crate::encoding::shape::ResolvedShape;
use crate::encoding::traits::SymbolEncoder;
use crate::encoding::utils::radix::{combined_radix, place_values, validate_domain, window_radix};

/// Block-wise black-boxed series together with the base of each block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedSeries {
    /// Codes shaped `(M, v, w)`; the `v` axis is dropped when `v == 1` and
    /// the `M` axis when there is a single block.
    pub codes: ArrayD<i32>,
    /// Combined base of each block: the product of its members' bases.
    pub bases: Vec<i32>,
}

/// Joint encoding of the current sample of every series in each block of a partitioning.
///
/// `partition[i]` names the block of series `i`; there are `max(partition) + 1`
/// blocks, and every block index must be below the number of series. Members
/// of a block are packed big-endian in series order. A block index with no
/// members has base 1 and codes of 0.
#[derive(Debug, Clone, Copy)]
pub struct PartitionGroupEncoder<'a> {
    partition: &'a [usize],
}

impl<'a> PartitionGroupEncoder<'a> {
    pub fn new(partition: &'a [usize]) -> Self {
        Self { partition }
    }

    /// Number of blocks, `max(partition) + 1`.
    pub fn n_blocks(&self) -> usize {
        self.partition
            .iter()
            .copied()
            .max()
            .map_or(0, |m| m.saturating_add(1))
    }

    /// Series indices assigned to `block`, in order.
    fn members(&self, block: usize) -> Vec<usize> {
        self.partition
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p == block)
            .map(|(i, _)| i)
            .collect()
    }
}

impl SymbolEncoder for PartitionGroupEncoder<'_> {
    type Output = PartitionedSeries;

    fn encode(&self, series: &SeriesData, shape: &ResolvedShape) -> Result<PartitionedSeries> {
        if self.partition.len() != shape.u {
            return Err(BlackBoxError::shape_mismatch(
                "partition",
                shape.u,
                self.partition.len(),
            ));
        }
        if let Some((index, &p)) = self
            .partition
            .iter()
            .enumerate()
            .find(|&(_, &p)| p >= shape.u)
        {
            return Err(BlackBoxError::invalid_parameter(
                "partition",
                index,
                i64::try_from(p).unwrap_or(i64::MAX),
            ));
        }
        let n_blocks = self.n_blocks();

        // Per block: member series, their place values and the block base.
        let mut blocks = Vec::with_capacity(n_blocks);
        for block in 0..n_blocks {
            let members = self.members(block);
            let radices = members
                .iter()
                .map(|&i| {
                    window_radix(shape.base[i], PARTITION_WINDOW).ok_or(
                        BlackBoxError::EncodingOverflow {
                            radix_budget: MAX_RADIX,
                        },
                    )
                })
                .collect::<Result<Vec<u64>>>()?;
            let base = combined_radix(&radices)?;
            let place = place_values(&radices);
            trace!(block, ?members, base, "partition block");
            blocks.push((members, place, base));
        }

        let view = shape.view(series);
        validate_domain(&view, &shape.base, shape.v)?;

        debug!(
            u = shape.u,
            v = shape.v,
            w = shape.w,
            n_blocks,
            "encoding partition blocks"
        );

        let mut out = Array3::<i32>::zeros((n_blocks, shape.v, shape.w));
        for (block, (members, place, _)) in blocks.iter().enumerate() {
            for row in 0..shape.v {
                for (&i, &weight) in members.iter().zip(place.iter()) {
                    let lane = view.lane(i, row);
                    for (t, &x) in lane.iter().enumerate() {
                        out[(block, row, t)] += (x as u64 * weight) as i32;
                    }
                }
            }
        }

        // Block bases are bounded by MAX_RADIX, so they fit in i32.
        let bases = blocks.iter().map(|(_, _, base)| *base as i32).collect();

        let mut codes = out.into_dyn();
        if shape.v == 1 {
            codes = codes.index_axis_move(Axis(1), 0);
        }
        if n_blocks == 1 {
            codes = codes.index_axis_move(Axis(0), 0);
        }

        Ok(PartitionedSeries { codes, bases })
    }
}
