//! Estimates for the remaining Cost of a Path.
//!
//! The [`Heuristic`] guides the Search towards the goal. As long as it never overestimates the
//! real remaining Cost (it is "admissible"), the Path found by [`AStar`](crate::AStar) is a
//! shortest one. A Heuristic that overestimates makes the Search faster, but the Paths may
//! get longer than necessary.
//!
//! | Heuristic       | admissible for                                   |
//! |-----------------|--------------------------------------------------|
//! | [`Euclidean`]   | every Neighborhood in this crate (the default)   |
//! | [`Octile`]      | [`MooreNeighborhood`](crate::neighbors::MooreNeighborhood), tightest for it |
//! | [`Chebyshev`]   | every Neighborhood in this crate                 |
//! | [`Manhattan`]   | [`ManhattanNeighborhood`](crate::neighbors::ManhattanNeighborhood) only |
//! | [`Zero`]        | everything, turns A* into Dijkstra's Algorithm   |

use crate::neighbors::{DIAGONAL_COST, STRAIGHT_COST};
use crate::{Cost, Point};

/// A strategy to estimate the Cost of walking from one Tile to another.
///
/// Any `Fn(Point, Point) -> Cost` can be used as a Heuristic as well:
/// ```
/// use tile_astar::prelude::*;
///
/// let map = TileMap::new(4, 4).unwrap();
/// let mut astar = AStar::with_heuristic(map, |_: Point, _: Point| -> Cost { 0.0 }).unwrap();
///
/// assert_eq!(astar.find_path((0, 0), (3, 3), false).unwrap(), 3);
/// ```
pub trait Heuristic {
	/// Estimates the Cost from `start` to `goal`.
	fn estimate(&self, start: Point, goal: Point) -> Cost;
}

impl<F: Fn(Point, Point) -> Cost> Heuristic for F {
	fn estimate(&self, start: Point, goal: Point) -> Cost {
		self(start, goal)
	}
}

fn deltas(a: Point, b: Point) -> (Cost, Cost) {
	(a.0.abs_diff(b.0) as Cost, a.1.abs_diff(b.1) as Cost)
}

/// The straight-line distance between the two Tile centers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
	fn estimate(&self, start: Point, goal: Point) -> Cost {
		let (dx, dy) = deltas(start, goal);
		(dx * dx + dy * dy).sqrt()
	}
}

/// The sum of the distances along both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
	fn estimate(&self, start: Point, goal: Point) -> Cost {
		let (dx, dy) = deltas(start, goal);
		(dx + dy) * STRAIGHT_COST
	}
}

/// The larger of the distances along both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl Heuristic for Chebyshev {
	fn estimate(&self, start: Point, goal: Point) -> Cost {
		let (dx, dy) = deltas(start, goal);
		dx.max(dy) * STRAIGHT_COST
	}
}

/// The exact Cost on an empty 8-directional Grid: as many diagonal steps as possible, then
/// straight ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Octile;

impl Heuristic for Octile {
	fn estimate(&self, start: Point, goal: Point) -> Cost {
		let (dx, dy) = deltas(start, goal);
		let diagonal = dx.min(dy);
		diagonal * DIAGONAL_COST + (dx.max(dy) - diagonal) * STRAIGHT_COST
	}
}

/// Always estimates 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
	fn estimate(&self, _: Point, _: Point) -> Cost {
		0.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn euclidean() {
		assert_eq!(Euclidean.estimate((0, 0), (3, 4)), 5.0);
		assert_eq!(Euclidean.estimate((3, 4), (0, 0)), 5.0);
		assert_eq!(Euclidean.estimate((2, 2), (2, 2)), 0.0);
	}

	#[test]
	fn manhattan_and_chebyshev() {
		assert_eq!(Manhattan.estimate((3, 1), (0, 0)), 4.0);
		assert_eq!(Chebyshev.estimate((3, 1), (0, 0)), 3.0);
	}

	#[test]
	fn octile() {
		let estimate = Octile.estimate((0, 0), (4, 2));
		assert!((estimate - (2.0 * DIAGONAL_COST + 2.0)).abs() < 1e-5);
	}

	#[test]
	fn ordering_on_moore_grids() {
		// Zero <= Chebyshev <= Euclidean <= Octile for every pair
		for (a, b) in [((0, 0), (5, 2)), ((7, 1), (0, 6)), ((3, 3), (3, 9))] {
			let zero = Zero.estimate(a, b);
			let chebyshev = Chebyshev.estimate(a, b);
			let euclidean = Euclidean.estimate(a, b);
			let octile = Octile.estimate(a, b);
			assert!(zero <= chebyshev);
			assert!(chebyshev <= euclidean);
			assert!(euclidean <= octile + 1e-5);
		}
	}

	#[test]
	fn closures() {
		let h = |a: Point, b: Point| (a.0 + b.0) as Cost;
		assert_eq!(h.estimate((1, 0), (2, 0)), 3.0);
	}
}
