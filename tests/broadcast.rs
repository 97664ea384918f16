//! One rank's value reaches every other rank unchanged.

use procgroup::{make_group, Topology};

#[test]
fn every_rank_ends_up_with_the_source_value() {
    const SIZE: usize = 8;
    const SOURCE: usize = 3;
    let mut group = make_group(SIZE, Topology::Switch).expect("bootstrap");

    let mine = if group.rank() == SOURCE { 4242i64 } else { -1 };
    let result = group.broadcast(SOURCE, mine).expect("broadcast");

    if group.rank() == SOURCE {
        assert_eq!(result, 4242);
        let status = group.join().expect("join");
        assert_eq!(status, 0);
    } else {
        std::process::exit(if result == 4242 { 0 } else { 1 });
    }
}
