// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::encoding::error::Result;
use crate::encoding::series::SeriesData;
use crate::encoding::shape::ResolvedShape;

/// Interface for encoders that pack resolved series into integer codes.
pub trait SymbolEncoder {
    /// Encoded result type.
    type Output;

    /// Encode `series`, whose axes and parameters have been resolved into `shape`.
    ///
    /// Implementations validate everything before writing any output.
    fn encode(&self, series: &SeriesData, shape: &ResolvedShape) -> Result<Self::Output>;
}
