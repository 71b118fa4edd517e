use std::collections::{BTreeMap, BTreeSet};

use flotilla::{shape_for, Board};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn fleet(small: usize, line: usize, bent: usize) -> BTreeMap<u8, usize> {
    let mut census = BTreeMap::new();
    if small > 0 {
        census.insert(1, small);
    }
    if line > 0 {
        census.insert(2, line);
    }
    if bent > 0 {
        census.insert(5, bent);
    }
    census
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_invariants(
        seed in any::<u64>(),
        rows in 6usize..=12,
        cols in 6usize..=12,
        small in 0usize..=2,
        line in 0usize..=2,
        bent in 0usize..=1,
    ) {
        let census = fleet(small, line, bent);
        let mut board = Board::new(rows, cols, census.clone());
        let mut rng = SmallRng::seed_from_u64(seed);
        // a dense census on a small board may legitimately exhaust the
        // budget; the board is then unusable and there is nothing to check
        if board.place_ships(&mut rng).is_err() {
            return Ok(());
        }

        // total occupied cells match the census
        let expected: usize = census.iter().map(|(&id, &n)| shape_for(id).len() * n).sum();
        prop_assert_eq!(board.stats().occupied_spaces, expected);

        // bounds, grid/placement agreement, no overlap
        let mut seen = BTreeSet::new();
        for p in board.placements() {
            for &(x, y) in &p.cells {
                prop_assert!(x < cols && y < rows);
                prop_assert_eq!(board.tile(x, y).unwrap(), p.ship_id);
                prop_assert!(seen.insert((x, y)), "cell {:?} used twice", (x, y));
            }
        }

        // no touching across instances, diagonals included
        let placements = board.placements();
        for (i, a) in placements.iter().enumerate() {
            for b in placements.iter().skip(i + 1) {
                for &(ax, ay) in &a.cells {
                    for &(bx, by) in &b.cells {
                        prop_assert!(ax.abs_diff(bx).max(ay.abs_diff(by)) >= 2);
                    }
                }
            }
        }
    }
}
