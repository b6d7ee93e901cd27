// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Enumeration of set partitions as restricted growth strings.
// A partitioning of N items into M blocks is a sequence p_1..p_N with
// 0 <= p_i < M naming the block of item i, e.g. {{X1}, {X2, X3}} -> (0, 1, 1).

pub mod rgs;

pub use rgs::{Partitionings, bell_number, next_partitioning, partitionings};
