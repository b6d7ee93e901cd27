// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::encoding::config::{DEFAULT_FUTURE, DEFAULT_HISTORY};
use crate::encoding::error::{BlackBoxError, Result};

/// Pivot-aligned window geometry shared by every row of a multivariate encoding.
///
/// With `K = max(k_i)` the pivot of output step `t` sits at absolute time
/// `t + K - 1`. Series `i` reads `k_i` samples ending at the pivot followed by
/// `l_i` samples after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotWindows {
    /// Number of output steps
    pub out_len: usize,
    /// Absolute start time of each series' window at output step 0
    pub starts: Vec<usize>,
    /// Number of samples in each series' window (`k_i + l_i`)
    pub widths: Vec<usize>,
}

impl PivotWindows {
    pub fn new(length: usize, history: &[usize], future: &[usize]) -> Result<Self> {
        let max_history = history.iter().copied().max().unwrap_or(DEFAULT_HISTORY);
        let max_future = future.iter().copied().max().unwrap_or(DEFAULT_FUTURE);
        let out_of_range = BlackBoxError::Range {
            length,
            history: max_history,
            future: max_future,
        };

        let span = match max_history.checked_add(max_future) {
            Some(span) if span <= length => span,
            _ => return Err(out_of_range),
        };
        let out_len = length - span + 1;

        let starts = history.iter().map(|&k| max_history - k).collect();
        // Every width is bounded by `span`, so these sums cannot wrap.
        let widths = history
            .iter()
            .zip(future.iter())
            .map(|(&k, &l)| k + l)
            .collect();

        Ok(Self {
            out_len,
            starts,
            widths,
        })
    }

    /// Absolute time range read by `series` at output step `t`.
    pub fn window(&self, series: usize, t: usize) -> std::ops::Range<usize> {
        let start = self.starts[series] + t;
        start..start + self.widths[series]
    }
}
