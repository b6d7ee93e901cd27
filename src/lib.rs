// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # blackbox
//!
//! Symbolic encodings of discrete time series for information-theoretic analysis.
//!
//! ## Quick Start
//!
//! ```rust
//! use blackbox::encoding::BlackBox;
//! use blackbox::partitioning::partitionings;
//! use ndarray::array;
//!
//! // Black-box a single series in time with history length 2
//! let series = array![0, 1, 1, 0, 1, 0, 0, 1];
//! let codes = BlackBox::encode_windows(series, None, Some(&[2][..]), None).unwrap();
//! assert_eq!(codes.as_slice().unwrap(), &[1, 3, 2, 1, 2, 0, 1]);
//!
//! // Every way to group three items
//! let all: Vec<Vec<usize>> = partitionings(3).unwrap().collect();
//! assert_eq!(all.len(), 5);
//! ```
//!
//! ## Black-boxing
//!
//! Black-boxing groups components of a system and treats them as a single
//! entity. Observations of several series (in "space") and of several time
//! steps of each series (in time) are packed into one integer per time step
//! using a big-endian mixed-radix code:
//!
//! | Mode | Input | Output |
//! |------|-------|--------|
//! | Window | series, bases, history `k`, future `l` | one code per retained time step |
//! | Partition | series, bases, block assignment `p` | one code per block and time step, plus block bases |
//!
//! All series are aligned on a shared pivot, so a code at a given output step
//! describes the same instant across every input series.
//!
//! ## Partitionings
//!
//! [`partitioning::Partitionings`] enumerates every set partition of `n` labeled
//! items as a restricted growth string, in canonical order. The number of
//! values produced is the `n`-th Bell number. Each value can be fed straight
//! into [`encoding::BlackBox::encode_partitions`].
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: Factory type `BlackBox` and the `partitionings` generator
//! 2. **Shape Resolution**: Decision table mapping tensor rank and supplied parameters to `(u, v, w)`
//! 3. **Encoders**: `WindowEncoder` and `PartitionGroupEncoder`, both behind `SymbolEncoder`
//! 4. **Utilities**: Mixed-radix packing with overflow checks, pivot-aligned window slicing

pub mod encoding;
pub mod partitioning;

pub use encoding::error::{BlackBoxError, Result};
