use nanorand::{Rng, WyRand};
use tile_astar::prelude::*;

const SQRT_2: Cost = std::f32::consts::SQRT_2;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_map(rng: &mut WyRand, width: usize, height: usize, blocked_percent: u32) -> TileMap {
    TileMap::from_fn(width, height, |_| rng.generate_range(0_u32..100) < blocked_percent).unwrap()
}

/// Plain Dijkstra over every Tile, without any of the bookkeeping of the real Search.
fn dijkstra_cost(
    map: &TileMap,
    start: Point,
    goal: Point,
    diagonal: bool,
    ignore_block: bool,
) -> Option<Cost> {
    let (width, height) = (map.width(), map.height());
    let index = |(x, y): Point| x + y * width;
    let mut dist = vec![Cost::INFINITY; width * height];
    let mut done = vec![false; width * height];
    dist[index(start)] = 0.0;

    loop {
        let mut current = None;
        for i in 0..dist.len() {
            if !done[i] && dist[i].is_finite() && current.map_or(true, |c: usize| dist[i] < dist[c]) {
                current = Some(i);
            }
        }
        let Some(current) = current else {
            return None;
        };
        if current == index(goal) {
            return Some(dist[current]);
        }
        done[current] = true;
        let (cx, cy) = ((current % width) as isize, (current / width) as isize);

        for dx in -1isize..=1 {
            for dy in -1isize..=1 {
                if (dx == 0 && dy == 0) || (!diagonal && dx != 0 && dy != 0) {
                    continue;
                }
                let (nx, ny) = (cx + dx, cy + dy);
                if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
                    continue;
                }
                let next = (nx as usize, ny as usize);
                if !ignore_block && map.is_blocked(next) {
                    continue;
                }
                let step = if dx != 0 && dy != 0 { SQRT_2 } else { 1.0 };
                let i = index(next);
                if dist[current] + step < dist[i] {
                    dist[i] = dist[current] + step;
                }
            }
        }
    }
}

fn assert_valid_path(map: &TileMap, path: &Path, diagonal: bool, ignore_block: bool) {
    let mut cost = 0.0;
    for pair in path.windows(2) {
        let (a, b) = (pair[0].pos(), pair[1].pos());
        let (dx, dy) = (a.0.abs_diff(b.0), a.1.abs_diff(b.1));
        assert!(dx <= 1 && dy <= 1 && dx + dy > 0, "{:?} -> {:?}", a, b);
        assert!(diagonal || dx + dy == 1);
        assert!(ignore_block || !map.is_blocked(b));
        cost += if dx + dy == 2 { SQRT_2 } else { 1.0 };
    }
    assert!((cost - path.cost()).abs() < 1e-3);
}

#[test]
fn matches_dijkstra_moore() {
    init();
    let mut rng = WyRand::new_seed(4);
    for _ in 0..40 {
        let map = random_map(&mut rng, 12, 9, 30);
        let mut astar = AStar::new(map.clone()).unwrap();
        for _ in 0..10 {
            let start = (rng.generate_range(0_usize..12), rng.generate_range(0_usize..9));
            let goal = (rng.generate_range(0_usize..12), rng.generate_range(0_usize..9));
            let steps = astar.find_path(start, goal, false).unwrap();
            let path = astar.path();

            match dijkstra_cost(&map, start, goal, true, false) {
                Some(expected) => {
                    assert_eq!(path.start(), Some(start));
                    assert_eq!(path.goal(), Some(goal));
                    assert_eq!(steps, path.len() - 1);
                    assert!(
                        (path.cost() - expected).abs() < 1e-3,
                        "{} != {} from {:?} to {:?} on\n{}",
                        path.cost(),
                        expected,
                        start,
                        goal,
                        map
                    );
                    assert_valid_path(&map, path, true, false);
                }
                None => {
                    assert_eq!(steps, 0);
                    assert!(path.is_empty());
                }
            }
        }
    }
}

#[test]
fn matches_dijkstra_manhattan() {
    init();
    let mut rng = WyRand::new_seed(11);
    for _ in 0..40 {
        let map = random_map(&mut rng, 10, 10, 25);
        let mut astar = AStar::with_heuristic(map.clone(), Manhattan)
            .unwrap()
            .with_neighborhood(ManhattanNeighborhood::new(10, 10))
            .unwrap();
        for _ in 0..10 {
            let start = (rng.generate_range(0_usize..10), rng.generate_range(0_usize..10));
            let goal = (rng.generate_range(0_usize..10), rng.generate_range(0_usize..10));
            astar.find_path(start, goal, false).unwrap();

            match dijkstra_cost(&map, start, goal, false, false) {
                Some(expected) => {
                    assert_eq!(astar.path().cost(), expected);
                    assert_valid_path(&map, astar.path(), false, false);
                }
                None => assert!(astar.path().is_empty()),
            }
        }
    }
}

#[test]
fn ignore_block_always_finds_a_path() {
    init();
    let mut rng = WyRand::new_seed(7);
    for _ in 0..20 {
        let map = random_map(&mut rng, 8, 8, 60);
        let mut astar = AStar::new(map.clone()).unwrap();
        let start = (rng.generate_range(0_usize..8), rng.generate_range(0_usize..8));
        let goal = (rng.generate_range(0_usize..8), rng.generate_range(0_usize..8));

        let steps = astar.find_path(start, goal, true).unwrap();
        let chebyshev = start.0.abs_diff(goal.0).max(start.1.abs_diff(goal.1));
        assert_eq!(steps, chebyshev);
        assert_valid_path(&map, astar.path(), true, true);

        let expected = dijkstra_cost(&map, start, goal, true, true).unwrap();
        assert!((astar.path().cost() - expected).abs() < 1e-3);
    }
}
