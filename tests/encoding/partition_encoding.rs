// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use blackbox::encoding::{
    BlackBox, BlackBoxed, PartitionGroupEncoder, SeriesData, ShapeRequest, ShapeResolver,
    SymbolEncoder,
};
use blackbox::partitioning::partitionings;
use ndarray::{Array2, Array3, Axis, array};

use crate::test_helpers::generate_rows;

fn four_series() -> Array2<i32> {
    array![
        [0, 1, 1, 0, 1, 0, 0, 1],
        [1, 0, 0, 1, 1, 0, 1, 0],
        [0, 0, 0, 1, 1, 1, 0, 0],
        [1, 0, 1, 0, 1, 1, 1, 0]
    ]
}

#[test]
fn test_single_block() {
    let parts = BlackBox::encode_partitions(four_series(), None, &[0, 0, 0, 0]).unwrap();
    assert_eq!(parts.codes.shape(), &[8]);
    assert_eq!(
        parts.codes.iter().copied().collect::<Vec<_>>(),
        vec![5, 8, 9, 6, 15, 3, 5, 8]
    );
    assert_eq!(parts.bases, vec![16]);
}

#[test]
fn test_single_block_matches_plain_black_box() {
    let parts = BlackBox::encode_partitions(four_series(), None, &[0, 0, 0, 0]).unwrap();
    let plain = BlackBox::encode_windows(four_series(), None, None, None).unwrap();
    assert_eq!(parts.codes, plain);
}

#[test]
fn test_two_blocks() {
    let parts = BlackBox::encode_partitions(four_series(), None, &[0, 1, 1, 0]).unwrap();
    let expected = array![[1, 2, 3, 0, 3, 1, 1, 2], [2, 0, 0, 3, 3, 1, 2, 0]].into_dyn();
    assert_eq!(parts.codes, expected);
    assert_eq!(parts.bases, vec![4, 4]);
}

#[test]
fn test_singleton_blocks_keep_series_base() {
    let series = array![[0, 1, 2], [1, 0, 1]];
    let parts = BlackBox::encode_partitions(series.clone(), Some(&[3, 2]), &[0, 1]).unwrap();
    assert_eq!(parts.bases, vec![3, 2]);
    assert_eq!(parts.codes, series.into_dyn());
}

#[test]
fn test_block_order_follows_series_order() {
    // series 2 is more significant than series 3 within block 1
    let series = array![[0, 1], [1, 0], [2, 0], [0, 1]];
    let parts = BlackBox::encode_partitions(series, Some(&[2, 2, 3, 2]), &[0, 0, 1, 1]).unwrap();
    assert_eq!(parts.codes, array![[1, 2], [4, 1]].into_dyn());
    assert_eq!(parts.bases, vec![4, 6]);
}

#[test]
fn test_unused_block_index() {
    let series = array![[0, 1], [1, 0], [1, 1]];
    let parts = BlackBox::encode_partitions(series, None, &[0, 2, 0]).unwrap();
    assert_eq!(parts.codes, array![[1, 3], [0, 0], [1, 0]].into_dyn());
    assert_eq!(parts.bases, vec![4, 1, 2]);
}

#[test]
fn test_ensemble_rows_single_block() {
    // (u=2, v=2, w=3)
    let data = Array3::from_shape_vec((2, 2, 3), vec![0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1]).unwrap();
    let parts = BlackBox::encode_partitions(data, None, &[0, 0]).unwrap();
    assert_eq!(parts.codes, array![[1, 3, 2], [2, 0, 1]].into_dyn());
    assert_eq!(parts.bases, vec![4]);
}

#[test]
fn test_ensemble_rows_many_blocks() {
    let data = Array3::from_shape_vec((2, 2, 3), vec![0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1]).unwrap();
    let parts = BlackBox::encode_partitions(data.clone(), None, &[0, 1]).unwrap();
    assert_eq!(parts.codes.shape(), &[2, 2, 3]);
    assert_eq!(parts.codes, data.into_dyn());
    assert_eq!(parts.bases, vec![2, 2]);
}

#[test]
fn test_every_partitioning_preserves_total_base() {
    let bases = [2, 3, 2, 4];
    let data = generate_rows(25, &bases, 11);
    let total: i32 = bases.iter().product();
    let mut count = 0;
    for parts in partitionings(bases.len()).unwrap() {
        let out = BlackBox::encode_partitions(data.clone(), Some(&bases), &parts).unwrap();
        let n_blocks = parts.iter().max().unwrap() + 1;
        assert_eq!(out.bases.len(), n_blocks);
        assert_eq!(out.bases.iter().product::<i32>(), total, "parts {parts:?}");
        for (block, &b) in out.bases.iter().enumerate() {
            let codes = if n_blocks == 1 {
                out.codes.view()
            } else {
                out.codes.index_axis(Axis(0), block)
            };
            assert!(codes.iter().all(|&c| (0..b).contains(&c)));
        }
        count += 1;
    }
    assert_eq!(count, 15);
}

#[test]
fn test_black_box_with_parts() {
    let out = BlackBox::black_box(four_series(), None, None, None, Some(&[0, 1, 1, 0])).unwrap();
    assert!(matches!(out, BlackBoxed::Partitioned(_)));
    assert_eq!(out.bases(), Some(&[4, 4][..]));
}

#[test]
fn test_encoder_used_directly() {
    let series = SeriesData::from(four_series());
    let partition = [1, 0, 0, 1];
    let request = ShapeRequest {
        partition: Some(&partition),
        ..Default::default()
    };
    let shape = ShapeResolver::resolve(&series, &request).unwrap();
    let encoder = PartitionGroupEncoder::new(&partition);
    assert_eq!(encoder.n_blocks(), 2);
    let parts = encoder.encode(&series, &shape).unwrap();
    let expected = array![[2, 0, 0, 3, 3, 1, 2, 0], [1, 2, 3, 0, 3, 1, 1, 2]].into_dyn();
    assert_eq!(parts.codes, expected);
}
