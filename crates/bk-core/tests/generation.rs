//! End-to-end generation tests: determinism, connectivity, and the
//! persisted contract.

use bk_core::{Cell, GeneratedMap, Grid, MapFile, MapKind, generate};
use proptest::prelude::*;

/// Breadth-first search over path cells, 4-connected.
fn reachable(grid: &Grid, from: (usize, usize)) -> Vec<bool> {
    let (width, height) = (grid.width(), grid.height());
    let mut seen = vec![false; width * height];
    if grid.get(from.0, from.1) != Some(Cell::Path) {
        return seen;
    }

    let mut queue = std::collections::VecDeque::new();
    queue.push_back(from);
    seen[from.1 * width + from.0] = true;

    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in [(0i64, -1i64), (1, 0), (0, 1), (-1, 0)] {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if grid.get(nx, ny) == Some(Cell::Path) && !seen[ny * width + nx] {
                seen[ny * width + nx] = true;
                queue.push_back((nx, ny));
            }
        }
    }
    seen
}

fn is_reachable(grid: &Grid, from: (usize, usize), to: (usize, usize)) -> bool {
    reachable(grid, from)[to.1 * grid.width() + to.0]
}

#[test]
fn maze_scenario_10x10_seed_7() {
    let map = generate(10, 10, Some(7), MapKind::Maze).unwrap();

    assert_eq!(map.grid.width(), 10);
    assert_eq!(map.grid.height(), 10);
    assert_eq!(map.grid.start(), (1, 1));
    assert_eq!(map.grid.end(), (8, 8));
    assert_eq!(map.grid.get(1, 1), Some(Cell::Path));
    assert_eq!(map.grid.get(8, 8), Some(Cell::Path));
}

#[test]
fn maze_even_end_cell_is_the_known_disconnect_case() {
    // On even-sized grids the forced end cell (w-2, h-2) has even
    // coordinates, off the odd node lattice, and neither adjacent cell
    // can be carved by the spanning tree or the interior openings. The
    // override still makes it a path cell; it just stands alone.
    for seed in [0, 7, 42, 1234] {
        let map = generate(10, 10, Some(seed), MapKind::Maze).unwrap();
        assert_eq!(map.grid.get(8, 8), Some(Cell::Path));
        assert!(
            !is_reachable(&map.grid, (1, 1), (8, 8)),
            "seed {seed}: even end cell unexpectedly joined the maze"
        );
    }
}

#[test]
fn maze_odd_end_cell_is_reachable() {
    // Odd-sized grids put the end on the node lattice, so the spanning
    // tree is guaranteed to reach it.
    for seed in [0, 7, 42, 1234] {
        let map = generate(11, 11, Some(seed), MapKind::Maze).unwrap();
        assert!(
            is_reachable(&map.grid, (1, 1), (9, 9)),
            "seed {seed}: end not reachable"
        );
    }
}

#[test]
fn maze_reaches_all_lattice_nodes() {
    let map = generate(31, 25, Some(99), MapKind::Maze).unwrap();
    let seen = reachable(&map.grid, (1, 1));
    for y in (1..24).step_by(2) {
        for x in (1..30).step_by(2) {
            assert!(seen[y * 31 + x], "node ({x},{y}) unreachable");
        }
    }
}

#[test]
fn room_chain_is_connected() {
    for seed in [1, 2, 3, 50] {
        let map = generate(60, 45, Some(seed), MapKind::RoomBased).unwrap();
        let placement = map.placement.as_ref().unwrap();
        assert!(placement.rooms.len() >= 2, "seed {seed} placed too few rooms");

        let first = placement.rooms[0].center();
        let seen = reachable(&map.grid, first);
        for (i, room) in placement.rooms.iter().enumerate() {
            let (cx, cy) = room.center();
            assert!(
                seen[cy * map.grid.width() + cx],
                "seed {seed}: room {i} center unreachable from room 0"
            );
        }
    }
}

#[test]
fn room_based_5x5_degrades_without_error() {
    let map = generate(5, 5, Some(0), MapKind::RoomBased).unwrap();
    let placement = map.placement.unwrap();
    assert!(!placement.met_target());
    assert_eq!(map.grid.get(1, 1), Some(Cell::Path));
    assert_eq!(map.grid.get(3, 3), Some(Cell::Path));
}

#[test]
fn start_and_end_are_distinct() {
    for kind in [MapKind::Maze, MapKind::OpenSpace, MapKind::RoomBased] {
        let map = generate(5, 5, Some(3), kind).unwrap();
        assert_ne!(map.grid.start(), map.grid.end());
    }
}

#[test]
fn persisted_record_matches_contract() {
    let map = generate(14, 9, Some(21), MapKind::RoomBased).unwrap();
    let record = MapFile::from_grid(&map.grid, map.seed);

    assert_eq!(record.width, 14);
    assert_eq!(record.height, 9);
    assert_eq!(record.seed, 21);
    assert_eq!(record.start_pos, [1, 1]);
    assert_eq!(record.end_pos, [12, 7]);
    record.validate().unwrap();
    assert_eq!(record.to_grid().unwrap(), map.grid);
}

fn kind_strategy() -> impl Strategy<Value = MapKind> {
    prop_oneof![
        Just(MapKind::Maze),
        Just(MapKind::OpenSpace),
        Just(MapKind::RoomBased),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_generation_is_deterministic(
        width in 5usize..40,
        height in 5usize..40,
        seed in any::<u64>(),
        kind in kind_strategy(),
    ) {
        let a: GeneratedMap = generate(width, height, Some(seed), kind).unwrap();
        let b = generate(width, height, Some(seed), kind).unwrap();
        prop_assert_eq!(&a.grid, &b.grid);
        prop_assert_eq!(a.seed, b.seed);
    }

    #[test]
    fn prop_dimensions_domain_and_endpoints(
        width in 5usize..40,
        height in 5usize..40,
        seed in any::<u64>(),
        kind in kind_strategy(),
    ) {
        let map = generate(width, height, Some(seed), kind).unwrap();
        let record = MapFile::from_grid(&map.grid, map.seed);

        prop_assert_eq!(record.map.len(), height);
        for row in &record.map {
            prop_assert_eq!(row.len(), width);
            for &cell in row {
                prop_assert!(cell == 0 || cell == 1);
            }
        }

        prop_assert_eq!(map.grid.start(), (1, 1));
        prop_assert_eq!(map.grid.end(), (width - 2, height - 2));
        prop_assert_eq!(map.grid.get(1, 1), Some(Cell::Path));
        prop_assert_eq!(map.grid.get(width - 2, height - 2), Some(Cell::Path));
    }

    #[test]
    fn prop_maze_and_room_borders_stay_walled(
        width in 6usize..40,
        height in 6usize..40,
        seed in any::<u64>(),
        maze in any::<bool>(),
    ) {
        let kind = if maze { MapKind::Maze } else { MapKind::RoomBased };
        let map = generate(width, height, Some(seed), kind).unwrap();

        // The forced end cell (width-2, height-2) touches no border for
        // these sizes, so every border cell must still be a wall.
        for x in 0..width {
            prop_assert_eq!(map.grid.get(x, 0), Some(Cell::Wall));
            prop_assert_eq!(map.grid.get(x, height - 1), Some(Cell::Wall));
        }
        for y in 0..height {
            prop_assert_eq!(map.grid.get(0, y), Some(Cell::Wall));
            prop_assert_eq!(map.grid.get(width - 1, y), Some(Cell::Wall));
        }
    }
}
