//! Every rank's value lands at its own position in the destination's result.

use procgroup::{make_group, Topology};

#[test]
fn destination_gathers_every_rank_value_in_rank_order() {
    const SIZE: usize = 6;
    const DESTINATION: usize = 2;
    let mut group = make_group(SIZE, Topology::Switch).expect("bootstrap");

    let mine = 100 + group.rank() as i64;
    let result = group.collect(DESTINATION, mine).expect("collect");

    if group.rank() == DESTINATION {
        let expected: Vec<i64> = (0..SIZE as i64).map(|r| 100 + r).collect();
        assert_eq!(result, expected);
        let status = group.join().expect("join");
        assert_eq!(status, 0);
    } else {
        std::process::exit(if result.is_empty() { 0 } else { 1 });
    }
}
