// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use blackbox::encoding::{BlackBox, BlackBoxConfig, BlackBoxed};
use ndarray::{Array1, Array2, Array3, Axis, array};
use rstest::*;

use crate::test_helpers::{generate_rows, generate_series, reference_window_codes};

fn as_vec(codes: &ndarray::ArrayD<i32>) -> Vec<i32> {
    codes.iter().copied().collect()
}

#[rstest]
#[case(vec![0, 1, 1, 0, 1, 1, 0, 0], 2, vec![1, 3, 2, 1, 3, 2, 0])]
#[case(vec![0, 1, 1, 0, 1, 0, 0, 1], 2, vec![1, 3, 2, 1, 2, 0, 1])]
#[case(vec![0, 1, 1, 0, 1, 0, 0, 1], 1, vec![0, 1, 1, 0, 1, 0, 0, 1])]
#[case(vec![0, 1, 1, 0, 1, 0, 0, 1], 3, vec![3, 6, 5, 2, 4, 1])]
#[case(vec![0, 2, 1, 2], 2, vec![2, 7, 5])]
fn test_single_series_history(
    #[case] series: Vec<i32>,
    #[case] k: usize,
    #[case] expected: Vec<i32>,
) {
    let codes = BlackBox::encode_windows(Array1::from(series), None, Some(&[k]), None).unwrap();
    assert_eq!(codes.ndim(), 1);
    assert_eq!(as_vec(&codes), expected);
}

#[test]
fn test_two_series_no_windows() {
    let series = array![[0, 1, 1, 0, 1, 0, 0, 1], [1, 0, 0, 1, 1, 0, 1, 0]];
    let codes = BlackBox::encode_windows(series, None, None, None).unwrap();
    assert_eq!(as_vec(&codes), vec![1, 2, 2, 1, 3, 0, 1, 2]);
}

#[test]
fn test_two_series_mixed_history() {
    let series = array![[0, 1, 1, 0, 1, 1, 0, 0], [0, 0, 1, 1, 0, 1, 0, 1]];
    let codes = BlackBox::encode_windows(series, None, Some(&[2, 1]), None).unwrap();
    assert_eq!(as_vec(&codes), vec![2, 7, 5, 2, 7, 4, 1]);
}

#[test]
fn test_two_series_history_and_future() {
    let series = array![[0, 1, 1, 0, 1, 0, 0, 1], [1, 0, 0, 1, 1, 0, 1, 0]];
    let codes = BlackBox::encode_windows(series, None, Some(&[2, 1]), Some(&[0, 1])).unwrap();
    assert_eq!(as_vec(&codes), vec![4, 13, 11, 6, 9, 2]);
}

#[test]
fn test_future_only_defaults_history_to_one() {
    let series = array![[0, 1, 1, 0], [1, 0, 0, 1]];
    let codes = BlackBox::encode_windows(series, None, None, Some(&[1, 0])).unwrap();
    assert_eq!(as_vec(&codes), vec![3, 6, 4]);
}

#[test]
fn test_explicit_base_larger_than_observed() {
    let codes = BlackBox::encode_windows(array![0, 1, 0, 1], Some(&[3]), Some(&[2]), None).unwrap();
    assert_eq!(as_vec(&codes), vec![1, 3, 1]);
}

#[test]
fn test_base_one_collapses_to_constant() {
    let codes = BlackBox::encode_windows(array![0, 0, 0, 0], Some(&[1]), Some(&[3]), None).unwrap();
    assert_eq!(as_vec(&codes), vec![0, 0]);
}

#[test]
fn test_identity_without_windows() {
    for seed in 0..10 {
        let series = generate_series(50, 2 + seed as i32, seed);
        let codes = BlackBox::encode_windows(series.clone(), None, None, None).unwrap();
        assert_eq!(as_vec(&codes), series.to_vec(), "identity failed for seed {seed}");
    }
}

#[test]
fn test_window_count_law() {
    let series = generate_series(40, 3, 7);
    for k in 1..=12 {
        let codes = BlackBox::encode_windows(series.clone(), None, Some(&[k]), None).unwrap();
        assert_eq!(codes.len(), 40 - k + 1, "window count mismatch for k={k}");
    }
}

#[test]
fn test_future_matches_history() {
    for seed in 0..5 {
        let series = generate_series(60, 4, seed);
        for k in 1..=6 {
            let by_history =
                BlackBox::encode_windows(series.clone(), Some(&[4]), Some(&[k]), None).unwrap();
            let by_future =
                BlackBox::encode_windows(series.clone(), Some(&[4]), None, Some(&[k - 1])).unwrap();
            assert_eq!(by_history, by_future, "history/future mismatch for k={k}");
        }
    }
}

#[rstest]
#[case(&[2, 3, 2], &[1, 2, 3], &[0, 0, 0])]
#[case(&[2, 2], &[3, 1], &[0, 2])]
#[case(&[3, 2, 4], &[1, 1, 1], &[1, 0, 2])]
#[case(&[5], &[4], &[1])]
fn test_matches_reference_encoding(
    #[case] bases: &[i32],
    #[case] history: &[usize],
    #[case] future: &[usize],
) {
    let data = generate_rows(30, bases, 42);
    let rows: Vec<Vec<i32>> = data.axis_iter(Axis(0)).map(|r| r.to_vec()).collect();
    let expected = reference_window_codes(&rows, bases, history, future);

    let series = if bases.len() == 1 {
        blackbox::encoding::SeriesData::from(data.row(0).to_owned())
    } else {
        blackbox::encoding::SeriesData::from(data)
    };
    let codes = BlackBox::encode_windows(series, Some(bases), Some(history), Some(future)).unwrap();
    assert_eq!(as_vec(&codes), expected);
}

#[test]
fn test_ensemble_rows_of_single_series() {
    let series = array![[0, 1, 1, 0], [1, 1, 0, 0]];
    let codes = BlackBox::encode_windows(series, Some(&[2]), Some(&[2]), None).unwrap();
    assert_eq!(codes.shape(), &[2, 3]);
    assert_eq!(as_vec(&codes), vec![1, 3, 2, 3, 2, 0]);
}

#[test]
fn test_ensemble_rows_selected_by_history_length() {
    // history of length 1 reads the rows as replicates of one series
    let series = array![[0, 1, 1, 0], [1, 1, 0, 0]];
    let codes = BlackBox::encode_windows(series, None, Some(&[2]), None).unwrap();
    assert_eq!(codes.shape(), &[2, 3]);
    assert_eq!(as_vec(&codes), vec![1, 3, 2, 3, 2, 0]);
}

#[test]
fn test_rank3_encodes_each_row_independently() {
    let bases = [2, 3];
    let row0 = generate_rows(20, &bases, 1);
    let row1 = generate_rows(20, &bases, 2);
    let mut data = Array3::zeros((2, 2, 20));
    data.index_axis_mut(Axis(1), 0).assign(&row0);
    data.index_axis_mut(Axis(1), 1).assign(&row1);

    let codes = BlackBox::encode_windows(data, Some(&bases), Some(&[2, 1]), Some(&[0, 1])).unwrap();
    assert_eq!(codes.shape(), &[2, 18]);

    for (r, rows) in [row0, row1].into_iter().enumerate() {
        let single: Array2<i32> = rows;
        let expected =
            BlackBox::encode_windows(single, Some(&bases), Some(&[2, 1]), Some(&[0, 1])).unwrap();
        assert_eq!(codes.index_axis(Axis(0), r), expected.view());
    }
}

#[test]
fn test_rank3_broadcasts_length_one_history() {
    let data = Array3::from_shape_vec((2, 1, 4), vec![0, 1, 1, 0, 1, 0, 0, 1]).unwrap();
    let codes = BlackBox::encode_windows(data, None, Some(&[2]), None).unwrap();
    // (x_{t-1} x_t) of series 0 then series 1, all base 2
    assert_eq!(as_vec(&codes), vec![6, 12, 9]);
}

#[test]
fn test_config_window_mode() {
    let config = BlackBoxConfig::new().with_history(vec![2]);
    let out = BlackBox::encode(array![0, 1, 1, 0, 1, 1, 0, 0], &config).unwrap();
    assert!(matches!(out, BlackBoxed::Windowed(_)));
    assert_eq!(out.bases(), None);
    assert_eq!(as_vec(out.codes()), vec![1, 3, 2, 1, 3, 2, 0]);
}

#[test]
fn test_black_box_without_parts_is_windowed() {
    let out = BlackBox::black_box(
        array![[0, 1, 1, 0, 1, 0, 0, 1], [1, 0, 0, 1, 1, 0, 1, 0]],
        None,
        Some(&[2, 1]),
        Some(&[0, 1]),
        None,
    )
    .unwrap();
    assert_eq!(as_vec(out.codes()), vec![4, 13, 11, 6, 9, 2]);
}

#[test]
fn test_largest_radix_within_budget() {
    // 2^30 distinct codes fits the i32 budget
    let series = Array1::from(vec![1; 30]);
    let codes = BlackBox::encode_windows(series, Some(&[2]), Some(&[30]), None).unwrap();
    assert_eq!(as_vec(&codes), vec![(1 << 30) - 1]);
}
