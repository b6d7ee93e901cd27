// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;

use crate::encoding::config::MAX_RADIX;
use crate::encoding::error::{BlackBoxError, Result};
use crate::encoding::series::SeriesView;

/// Number of distinct codes of `digits` consecutive samples in base `base`,
/// i.e. `base^digits`, or `None` if it exceeds [`MAX_RADIX`].
pub fn window_radix(base: i32, digits: usize) -> Option<u64> {
    let base = u64::try_from(base).ok()?;
    let mut radix: u64 = 1;
    for _ in 0..digits {
        radix = radix.checked_mul(base).filter(|&r| r <= MAX_RADIX)?;
    }
    Some(radix)
}

/// Product of several radices, or `EncodingOverflow` if it exceeds [`MAX_RADIX`].
pub fn combined_radix(radices: &[u64]) -> Result<u64> {
    radices.iter().try_fold(1u64, |acc, &r| {
        acc.checked_mul(r)
            .filter(|&p| p <= MAX_RADIX)
            .ok_or(BlackBoxError::EncodingOverflow {
                radix_budget: MAX_RADIX,
            })
    })
}

/// Big-endian place values for a mixed-radix number with the given radices.
///
/// The first radix is the most significant digit: `place[i] = radix[i+1] * ... * radix[n-1]`.
/// Callers must have checked the product with [`combined_radix`].
pub fn place_values(radices: &[u64]) -> Vec<u64> {
    let mut place = vec![1u64; radices.len()];
    for i in (0..radices.len().saturating_sub(1)).rev() {
        place[i] = place[i + 1] * radices[i + 1];
    }
    place
}

/// Pack consecutive samples into one code, earliest sample most significant.
pub fn pack_window(window: ArrayView1<'_, i32>, base: u64) -> u64 {
    window
        .iter()
        .fold(0u64, |acc, &x| acc * base + x as u64)
}

/// Check every sample of every `(series, row)` lane against its base.
///
/// Runs over the whole tensor so that no output is produced for invalid input.
pub fn validate_domain(view: &SeriesView<'_>, base: &[i32], v: usize) -> Result<()> {
    for (series, &b) in base.iter().enumerate() {
        for row in 0..v {
            let lane = view.lane(series, row);
            if let Some((time, &value)) = lane
                .iter()
                .enumerate()
                .find(|&(_, &x)| x < 0 || x >= b)
            {
                return Err(BlackBoxError::Domain {
                    series,
                    row,
                    time,
                    value,
                    base: b,
                });
            }
        }
    }
    Ok(())
}
