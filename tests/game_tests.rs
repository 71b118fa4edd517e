use std::collections::BTreeMap;

use flotilla::{default_fleet, size_census, Board, GameEngine, Targeter};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn placed_board(rows: usize, cols: usize, census: BTreeMap<u8, usize>, seed: u64) -> Board {
    let mut board = Board::new(rows, cols, census);
    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..50 {
        if board.place_ships(&mut rng).is_ok() {
            return board;
        }
        board.reset_board();
    }
    panic!("no layout found in 50 attempts");
}

#[test]
fn test_resolve_shot_reports_hit_and_sink() {
    let board = placed_board(10, 10, [(1, 1)].into_iter().collect(), 5);
    let cells = board.placements()[0].cells.clone();
    let mut engine = GameEngine::new(board);

    assert!(!engine.all_sunk());
    let first = engine.resolve_shot(cells[0].0, cells[0].1).unwrap();
    assert!(first.hit);
    assert!(!first.sunk);
    // repeating the shot does not double-count
    let again = engine.resolve_shot(cells[0].0, cells[0].1).unwrap();
    assert!(again.hit && !again.sunk);
    let last = engine.resolve_shot(cells[1].0, cells[1].1).unwrap();
    assert!(last.hit && last.sunk);
    assert!(engine.all_sunk());
}

#[test]
fn test_resolve_shot_miss_and_out_of_bounds() {
    let board = placed_board(10, 10, [(1, 1)].into_iter().collect(), 6);
    let cells = board.placements()[0].cells.clone();
    let mut engine = GameEngine::new(board);

    let water = engine
        .board()
        .grid()
        .coords()
        .find(|c| !cells.contains(c))
        .unwrap();
    let report = engine.resolve_shot(water.0, water.1).unwrap();
    assert!(!report.hit && !report.sunk);
    assert!(engine.resolve_shot(10, 0).is_err());
    assert!(!engine.all_sunk());
}

#[test]
fn test_targeter_sinks_straight_fleet() {
    // straight hulls only: sizes 2, 3 and 4
    let fleet: BTreeMap<u8, usize> = [(1, 1), (2, 1), (3, 1)].into_iter().collect();
    for seed in [1u64, 7, 42] {
        let board = placed_board(10, 10, fleet.clone(), seed);
        let mut engine = GameEngine::new(board);
        let mut targeter = Targeter::new(10, 10, size_census(&fleet));
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut turns = 0;
        while !engine.all_sunk() {
            turns += 1;
            assert!(turns <= 100, "game exceeded the shot budget");
            let (x, y) = targeter.next_attack(&mut rng).expect("shots remain");
            let report = engine.resolve_shot(x, y).unwrap();
            targeter
                .register_attack(x, y, report.hit, report.sunk)
                .unwrap();
        }
        assert!(targeter.all_ships_sunk());
        assert!(targeter.shots_fired() <= 100);
    }
}

#[test]
fn test_polyomino_fleet_game_terminates() {
    let fleet = default_fleet();
    let board = placed_board(10, 10, fleet.clone(), 11);
    let mut engine = GameEngine::new(board);
    let mut targeter = Targeter::new(10, 10, size_census(&fleet));
    let mut rng = SmallRng::seed_from_u64(11);

    let mut turns = 0;
    while !engine.all_sunk() {
        let Some((x, y)) = targeter.next_attack(&mut rng) else {
            break;
        };
        turns += 1;
        assert!(turns <= 100, "more shots than cells");
        let report = engine.resolve_shot(x, y).unwrap();
        targeter
            .register_attack(x, y, report.hit, report.sunk)
            .unwrap();
    }
    assert!(targeter.shots_fired() <= 100);
}
