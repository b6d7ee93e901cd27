// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::iter::FusedIterator;

use tracing::debug;

use crate::encoding::error::{BlackBoxError, Result};

/// Enumerate every partitioning of `n` items.
///
/// Partitionings are restricted growth strings: `a[0] = 0` and
/// `a[i] <= 1 + max(a[..i])`. Item `i` belongs to block `a[i]`. They come in
/// lexicographic order, from the single block `0, 0, ..., 0` to the `n`
/// singletons `0, 1, ..., n - 1`; there are `bell_number(n)` of them.
///
/// Fails if `n < 1`.
pub fn partitionings(n: usize) -> Result<Partitionings> {
    Partitionings::new(n)
}

/// Lazy iterator over the restricted growth strings of length `n`.
///
/// Each item is an owned copy of the internal buffer. The iterator holds its
/// own state, so independent iterators can run in parallel.
#[derive(Debug, Clone)]
pub struct Partitionings {
    rgs: Vec<usize>,
    /// `limits[i] = 1 + max(rgs[..i])`: the largest value `rgs[i]` may take.
    limits: Vec<usize>,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Exhausted,
}

impl Partitionings {
    pub fn new(n: usize) -> Result<Self> {
        if n < 1 {
            return Err(BlackBoxError::argument(
                "number of items to partition must be positive, non-zero",
            ));
        }
        let mut limits = vec![1; n];
        limits[0] = 0;
        debug!(n, "enumerating partitionings");
        Ok(Self {
            rgs: vec![0; n],
            limits,
            state: State::Fresh,
        })
    }

    /// Number of items being partitioned.
    pub fn n(&self) -> usize {
        self.rgs.len()
    }

    /// Most recently emitted partitioning.
    pub fn current(&self) -> &[usize] {
        &self.rgs
    }

    /// Step to the next restricted growth string in place.
    fn advance(&mut self) -> bool {
        let n = self.rgs.len();
        let Some(i) = (1..n).rev().find(|&i| self.rgs[i] < self.limits[i]) else {
            return false;
        };
        self.rgs[i] += 1;
        let limit = self.limits[i].max(self.rgs[i] + 1);
        for j in i + 1..n {
            self.rgs[j] = 0;
            self.limits[j] = limit;
        }
        true
    }
}

impl Iterator for Partitionings {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        match self.state {
            State::Fresh => {
                self.state = State::Running;
                Some(self.rgs.clone())
            }
            State::Running => {
                if self.advance() {
                    Some(self.rgs.clone())
                } else {
                    self.state = State::Exhausted;
                    None
                }
            }
            State::Exhausted => None,
        }
    }
}

impl FusedIterator for Partitionings {}

/// Advance a restricted growth string to its successor in place.
///
/// Returns the number of blocks of the new partitioning, or `None` (leaving
/// `rgs` untouched) if `rgs` was already the last one, `0, 1, ..., n - 1`.
pub fn next_partitioning(rgs: &mut [usize]) -> Option<usize> {
    let n = rgs.len();
    let mut limits = vec![0; n];
    let mut running_max = 0;
    for i in 1..n {
        running_max = running_max.max(rgs[i - 1]);
        limits[i] = running_max + 1;
    }

    let i = (1..n).rev().find(|&i| rgs[i] < limits[i])?;
    rgs[i] += 1;
    rgs[i + 1..].fill(0);
    Some(limits[i].max(rgs[i] + 1))
}

/// Number of partitionings of `n` labeled items, or `None` if it overflows `u64`.
///
/// Computed with the Bell triangle, whose row `i` ends in the Bell number
/// `B(i + 1)`; `bell_number(0) == 1`.
pub fn bell_number(n: usize) -> Option<u64> {
    if n == 0 {
        return Some(1);
    }
    let mut row: Vec<u64> = vec![1];
    for _ in 1..n {
        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(*row.last()?);
        for &x in row.iter() {
            let value = next.last()?.checked_add(x)?;
            next.push(value);
        }
        row = next;
    }
    row.last().copied()
}
