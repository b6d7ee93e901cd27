// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use blackbox::encoding::{BlackBox, BlackBoxConfig};
use blackbox::partitioning::{bell_number, partitionings};
use ndarray::array;

fn main() -> Result<(), blackbox::BlackBoxError> {
    // Two Boolean series observed together
    let series = array![[0, 1, 1, 0, 1, 0, 0, 1], [1, 0, 0, 1, 1, 0, 1, 0]];

    // Black-box in space: (X, Y) as base-4 states
    let joint = BlackBox::encode_windows(series.clone(), None, None, None)?;
    println!("(X,Y):            {joint}");

    // Black-box in time: 2-history of X
    let history = BlackBox::encode_windows(series.row(0).to_owned(), None, Some(&[2]), None)?;
    println!("X^(2):            {history}");

    // Both: (X^(2,0), Y^(1,1))
    let config = BlackBoxConfig::new()
        .with_history(vec![2, 1])
        .with_future(vec![0, 1]);
    let mixed = BlackBox::encode(series.clone(), &config)?;
    println!("(X^(2,0),Y^(1,1)): {}", mixed.codes());

    // Every way to group four series, with the resulting block bases
    let four = array![
        [0, 1, 1, 0, 1, 0, 0, 1],
        [1, 0, 0, 1, 1, 0, 1, 0],
        [0, 0, 0, 1, 1, 1, 0, 0],
        [1, 0, 1, 0, 1, 1, 1, 0]
    ];
    println!("Partitionings of 4 series: {:?}", bell_number(4));
    for parts in partitionings(4)? {
        let boxed = BlackBox::encode_partitions(four.clone(), None, &parts)?;
        println!("  {parts:?} -> bases {:?}", boxed.bases);
    }

    Ok(())
}
