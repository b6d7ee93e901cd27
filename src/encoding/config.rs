// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// History length used for every series when none is given.
pub const DEFAULT_HISTORY: usize = 1;

/// Future length used for every series when none is given.
pub const DEFAULT_FUTURE: usize = 0;

/// Window length of every series in partition mode: the current instant only.
pub const PARTITION_WINDOW: usize = 1;

/// Largest radix (number of distinct codes) an output code may span.
///
/// Codes are stored as `i32`, so the product of all per-series radices must
/// not exceed `i32::MAX`.
pub const MAX_RADIX: u64 = i32::MAX as u64;

/// How the series are combined.
///
/// Sliding windows and partition grouping are mutually exclusive, so they are
/// separate variants rather than independent optional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeMode {
    /// Pivot-aligned sliding windows of `history` past and `future` upcoming samples.
    Window {
        /// Per-series history lengths (`k_i >= 1`), [`DEFAULT_HISTORY`] if absent
        history: Option<Vec<usize>>,
        /// Per-series future lengths (`l_i >= 0`), [`DEFAULT_FUTURE`] if absent
        future: Option<Vec<usize>>,
    },
    /// Joint code of the current sample of every series in each block.
    Partition(Vec<usize>),
}

impl Default for EncodeMode {
    fn default() -> Self {
        EncodeMode::Window {
            history: None,
            future: None,
        }
    }
}

/// Full configuration of a black-boxing call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlackBoxConfig {
    /// Per-series alphabet sizes; inferred from the data if absent.
    pub base: Option<Vec<i32>>,
    /// Windowing or partition grouping.
    pub mode: EncodeMode,
}

impl BlackBoxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: impl Into<Vec<i32>>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Set history lengths. Switches a partition configuration back to window mode.
    pub fn with_history(mut self, history: impl Into<Vec<usize>>) -> Self {
        let future = match self.mode {
            EncodeMode::Window { future, .. } => future,
            EncodeMode::Partition(_) => None,
        };
        self.mode = EncodeMode::Window {
            history: Some(history.into()),
            future,
        };
        self
    }

    /// Set future lengths. Switches a partition configuration back to window mode.
    pub fn with_future(mut self, future: impl Into<Vec<usize>>) -> Self {
        let history = match self.mode {
            EncodeMode::Window { history, .. } => history,
            EncodeMode::Partition(_) => None,
        };
        self.mode = EncodeMode::Window {
            history,
            future: Some(future.into()),
        };
        self
    }

    /// Group series by block assignment. Replaces any window lengths.
    pub fn with_partition(mut self, partition: impl Into<Vec<usize>>) -> Self {
        self.mode = EncodeMode::Partition(partition.into());
        self
    }
}
