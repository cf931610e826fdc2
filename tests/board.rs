use std::num::NonZeroUsize;

use minegrid::{
    hit_test, Board, FieldCoordinates, Point, Probe, RevealOutcome, TileGeometry, NEIGHBOR_OFFSETS,
};

/// A fixed, irregular layout: mines wherever `(3x + 5y) % 7 == 0`.
fn scattered([x, y]: FieldCoordinates) -> bool {
    (3 * x + 5 * y) % 7 == 0
}

fn revealed_set(board: &Board) -> Vec<FieldCoordinates> {
    board.cells().filter(|(_, tile)| tile.is_revealed()).map(|(location, _)| location).collect()
}

#[test]
fn adjacency_counts_match_brute_force() {
    let board = Board::generate(11, 7, &mut scattered).unwrap();
    let width = isize::try_from(board.width()).unwrap();
    let height = isize::try_from(board.height()).unwrap();
    for (location, tile) in board.cells() {
        let [x, y] = location;
        assert_eq!(tile.is_mine(), scattered(location));
        let Some(count) = tile.adjacent_mines() else { continue };
        let mut expected = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let (nx, ny) = (x + dx, y + dy);
                if (dx, dy) != (0, 0) && (0..width).contains(&nx) && (0..height).contains(&ny) && scattered([nx, ny]) {
                    expected += 1;
                }
            }
        }
        assert_eq!(count, expected, "count at {location:?}");
    }
    assert!(board.cells().all(|(_, tile)| !tile.is_revealed()));
}

#[test]
fn neighbor_offsets_cover_the_ring() {
    let mut offsets = NEIGHBOR_OFFSETS.to_vec();
    offsets.sort_unstable();
    offsets.dedup();
    assert_eq!(offsets.len(), 8);
    assert!(!offsets.contains(&[0, 0]));
    assert!(offsets.iter().all(|&[dx, dy]| dx.abs() <= 1 && dy.abs() <= 1));
}

#[test]
fn reveal_is_idempotent() {
    for target in [[0, 0], [3, 3], [10, 6], [5, 2]] {
        let mut once = Board::generate(11, 7, &mut scattered).unwrap();
        once.reveal(target);
        let mut twice = once.clone();
        assert_eq!(twice.reveal(target), RevealOutcome::AlreadyRevealed);
        assert_eq!(revealed_set(&twice), revealed_set(&once));
    }
}

#[test]
fn empty_board_floods_completely() {
    let mut board = Board::generate(5, 5, &mut |_: FieldCoordinates| false).unwrap();
    assert_eq!(board.reveal([2, 2]), RevealOutcome::Clearing(NonZeroUsize::new(25).unwrap()));
    assert_eq!(board.count_revealed(), 25);
}

#[test]
fn numbered_tile_does_not_cascade() {
    // 1 1 1
    // 1 * 1
    // 1 1 1
    let mut board = Board::generate(3, 3, &mut |location: FieldCoordinates| location == [1, 1]).unwrap();
    assert!(board.cells().all(|(_, tile)| tile.is_mine() || tile.adjacent_mines() == Some(1)));
    assert!(matches!(board.reveal([2, 2]), RevealOutcome::Number(n) if n.get() == 1));
    assert_eq!(revealed_set(&board), [[2, 2]]);
}

#[test]
fn corner_mine_leaves_far_corner_empty() {
    // * 1 .
    // 1 1 .
    // . . .
    let mut board = Board::generate(3, 3, &mut |location: FieldCoordinates| location == [0, 0]).unwrap();
    assert_eq!(board[[2, 2]].adjacent_mines(), Some(0));
    assert_eq!(board.reveal([2, 2]), RevealOutcome::Clearing(NonZeroUsize::new(8).unwrap()));
    assert!(!board[[0, 0]].is_revealed());
}

#[test]
fn out_of_range_reveals_change_nothing() {
    let mut board = Board::generate(4, 3, &mut scattered).unwrap();
    let before = board.clone();
    assert_eq!(board.reveal([-1, -1]), RevealOutcome::OutOfBounds);
    assert_eq!(board.reveal([4, 3]), RevealOutcome::OutOfBounds);
    assert_eq!(board.reveal([4, 0]), RevealOutcome::OutOfBounds);
    assert_eq!(board.reveal([isize::MIN, isize::MAX]), RevealOutcome::OutOfBounds);
    assert_eq!(board, before);
    assert_eq!(board.probe([-1, -1]), Probe::OutOfBounds);
}

#[test]
fn mine_reveals_alone() {
    // A mine surrounded by empty land: revealing it must not spread.
    let mut board = Board::generate(5, 5, &mut |location: FieldCoordinates| location == [2, 2]).unwrap();
    assert_eq!(board.reveal([2, 2]), RevealOutcome::Mine);
    assert_eq!(revealed_set(&board), [[2, 2]]);
}

#[test]
fn hit_test_maps_tile_edges() {
    let board = Board::generate(4, 3, &mut |_: FieldCoordinates| false).unwrap();
    let geometry = TileGeometry::new(32.0).unwrap();
    let hit = |x, y| hit_test(&board, geometry, Point::new(x, y));
    assert_eq!(hit(5.0, 5.0), Some([0, 0]));
    assert_eq!(hit(31.0, 31.0), Some([0, 0]));
    assert_eq!(hit(32.0, 32.0), Some([1, 1]));
    assert_eq!(hit(127.0, 95.0), Some([3, 2]));
    assert_eq!(hit(128.0, 5.0), None);
    assert_eq!(hit(5.0, 96.0), None);
    assert_eq!(hit(-1.0, 5.0), None);
    assert_eq!(hit(5.0, -0.5), None);
}

#[cfg(feature = "generation")]
#[test]
fn random_boards_are_consistent() {
    use rand::{rngs::StdRng, SeedableRng};
    let mut mines = minegrid::RandomMines::new(StdRng::seed_from_u64(7));
    let board = Board::generate(30, 20, &mut mines).unwrap();
    let rebuilt = Board::from_tiles(board.dimensions(), board.tiles().to_vec()).unwrap();
    assert_eq!(rebuilt, board);
}

#[cfg(feature = "generation")]
#[test]
fn random_boards_hold_about_a_tenth_mines() {
    use rand::{rngs::StdRng, SeedableRng};
    for seed in [1, 2, 3] {
        let board = Board::generate(100, 100, &mut minegrid::RandomMines::new(StdRng::seed_from_u64(seed))).unwrap();
        let mines = board.mine_count();
        assert!((850..=1150).contains(&mines), "seed {seed}: {mines} mines on 100x100");
    }
}
