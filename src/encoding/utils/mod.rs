// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Mixed-radix arithmetic and window geometry used by both encoders.

pub mod radix;
pub mod slicing;
