// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, ArrayD, Axis, s};
use tracing::debug;

use crate::encoding::config::MAX_RADIX;
use crate::encoding::error::{BlackBoxError, Result};
use crate::encoding::series::SeriesData;
use crate::encoding::shape::ResolvedShape;
use crate::encoding::traits::SymbolEncoder;
use crate::encoding::utils::radix::{
    combined_radix, pack_window, place_values, validate_domain, window_radix,
};
use crate::encoding::utils::slicing::PivotWindows;

/// Sliding-window black-boxing of one or more series.
///
/// At each output step the `k_i + l_i` samples of every series around a
/// shared pivot are packed into a single mixed-radix code. Within a series
/// the earliest sample is the most significant digit; across series, series
/// `0` is the most significant.
///
/// The output is `(out_len)` for a single ensemble row and `(v, out_len)`
/// otherwise, with `out_len = w - max(k) - max(l) + 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowEncoder;

impl WindowEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolEncoder for WindowEncoder {
    type Output = ArrayD<i32>;

    fn encode(&self, series: &SeriesData, shape: &ResolvedShape) -> Result<ArrayD<i32>> {
        let windows = PivotWindows::new(shape.w, &shape.history, &shape.future)?;

        let radices = shape
            .base
            .iter()
            .zip(windows.widths.iter())
            .map(|(&b, &width)| {
                window_radix(b, width).ok_or(BlackBoxError::EncodingOverflow {
                    radix_budget: MAX_RADIX,
                })
            })
            .collect::<Result<Vec<u64>>>()?;
        let total = combined_radix(&radices)?;
        let place = place_values(&radices);

        let view = shape.view(series);
        validate_domain(&view, &shape.base, shape.v)?;

        debug!(
            u = shape.u,
            v = shape.v,
            out_len = windows.out_len,
            total_radix = total,
            "encoding sliding windows"
        );

        let mut out = Array2::<i32>::zeros((shape.v, windows.out_len));
        for row in 0..shape.v {
            let lanes: Vec<_> = (0..shape.u).map(|i| view.lane(i, row)).collect();
            for t in 0..windows.out_len {
                let mut code = 0u64;
                for (i, lane) in lanes.iter().enumerate() {
                    let range = windows.window(i, t);
                    let digit = pack_window(lane.slice(s![range]), shape.base[i] as u64);
                    code += digit * place[i];
                }
                // total <= MAX_RADIX, so every code fits in i32
                out[(row, t)] = code as i32;
            }
        }

        if shape.v == 1 {
            Ok(out.index_axis_move(Axis(0), 0).into_dyn())
        } else {
            Ok(out.into_dyn())
        }
    }
}
