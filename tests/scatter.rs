//! The source rank's sequence is partitioned into contiguous per-rank chunks.

use procgroup::{make_group, Topology};

#[test]
fn chunks_are_contiguous_and_the_last_one_takes_the_remainder() {
    const SIZE: usize = 4;
    let mut group = make_group(SIZE, Topology::Switch).expect("bootstrap");

    // n = 11, p = 4 -> h = 3: chunks of 3, 3, 3, 2.
    let data = if group.rank() == 0 {
        Some((0..11i64).collect())
    } else {
        None
    };
    let mine = group.scatter(0, data).expect("scatter");

    let expected: Vec<i64> = match group.rank() {
        0 => vec![0, 1, 2],
        1 => vec![3, 4, 5],
        2 => vec![6, 7, 8],
        3 => vec![9, 10],
        _ => unreachable!(),
    };

    if group.rank() == 0 {
        assert_eq!(mine, expected);
        let status = group.join().expect("join");
        assert_eq!(status, 0);
    } else {
        std::process::exit(if mine == expected { 0 } else { 1 });
    }
}
