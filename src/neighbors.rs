//! A crate with the most common Neighborhoods

use crate::{Cost, Point};
use std::fmt::Debug;

/// The Cost of a step along one of the 4 cardinal directions
pub const STRAIGHT_COST: Cost = 1.0;
/// The Cost of a diagonal step
pub const DIAGONAL_COST: Cost = std::f32::consts::SQRT_2;

/// Defines how a Path can move along the Grid.
///
/// Different Scenarios may have different constraints as to how a Path may be formed.
/// For example if Agents can only move along the 4 cardinal directions, any Paths generated should
/// reflect that by only containing those steps.
///
/// This Trait is a generalized solution to that problem. It provides a function to query all
/// neighboring Points of an existing Point together with the Cost of stepping there.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-right, ...)
pub trait Neighborhood: Clone + Debug {
	/// Appends all Neighbors of `point` that lie on the Grid to `target`, together with the Cost
	/// of a single step from `point` to that Neighbor.
	///
	/// Note that it is not necessary to check whether the Tile at a Point is blocked or not.
	/// That check is done later. The order of the Neighbors decides which of two equally good
	/// Paths is found, so it has to be the same on every call.
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<(Point, Cost)>);

	/// The `(width, height)` of the Grid this Neighborhood limits its Neighbors to, if any.
	///
	/// [`AStar`](crate::AStar) rejects a Neighborhood whose size differs from the Map, since it
	/// would hide Tiles that are on the Map. Defaults to `None` (not limited).
	fn grid_size(&self) -> Option<(usize, usize)> {
		None
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
	width: usize,
	height: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { width, height }
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<(Point, Cost)>) {
		let (width, height) = (self.width, self.height);

		let iter = [(0isize, -1isize), (1, 0), (0, 1), (-1, 0)]
			.iter()
			.map(move |(dx, dy)| (point.0 as isize + dx, point.1 as isize + dy))
			.filter(move |(x, y)| {
				*x >= 0 && *y >= 0 && (*x as usize) < width && (*y as usize) < height
			})
			.map(|(x, y)| ((x as usize, y as usize), STRAIGHT_COST));

		target.extend(iter);
	}

	fn grid_size(&self) -> Option<(usize, usize)> {
		Some((self.width, self.height))
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
/// Straight steps cost [`STRAIGHT_COST`], diagonal steps cost [`DIAGONAL_COST`].
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MooreNeighborhood {
	width: usize,
	height: usize,
}

impl MooreNeighborhood {
	/// Creates a new MooreNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> MooreNeighborhood {
		MooreNeighborhood { width, height }
	}
}

impl Neighborhood for MooreNeighborhood {
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<(Point, Cost)>) {
		let (width, height) = (self.width, self.height);

		let iter = [
			(0isize, -1isize),
			(1, -1),
			(1, 0),
			(1, 1),
			(0, 1),
			(-1, 1),
			(-1, 0),
			(-1, -1),
		]
		.iter()
		.map(move |&(dx, dy)| {
			let cost = if dx != 0 && dy != 0 {
				DIAGONAL_COST
			} else {
				STRAIGHT_COST
			};
			(point.0 as isize + dx, point.1 as isize + dy, cost)
		})
		.filter(move |(x, y, _)| *x >= 0 && *y >= 0 && (*x as usize) < width && (*y as usize) < height)
		.map(|(x, y, cost)| ((x as usize, y as usize), cost));

		target.extend(iter);
	}

	fn grid_size(&self) -> Option<(usize, usize)> {
		Some((self.width, self.height))
	}
}

/// Returns `true` if the step from `a` to `b` changes both coordinates.
pub fn is_diagonal(a: Point, b: Point) -> bool {
	a.0 != b.0 && a.1 != b.1
}

#[cfg(test)]
fn neighbors_of<N: Neighborhood>(neighborhood: &N, point: Point) -> Vec<(Point, Cost)> {
	let mut target = vec![];
	neighborhood.get_all_neighbors(point, &mut target);
	target
}

#[test]
fn test_manhattan_get_all_neighbors() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(
		neighbors_of(&neighborhood, (0, 2)),
		vec![((0, 1), 1.0), ((1, 2), 1.0), ((0, 3), 1.0)],
	);
}

#[test]
fn test_moore_get_all_neighbors() {
	let neighborhood = MooreNeighborhood::new(5, 5);
	let points: Vec<Point> = neighbors_of(&neighborhood, (0, 2))
		.into_iter()
		.map(|(p, _)| p)
		.collect();
	assert_eq!(points, vec![(0, 1), (1, 1), (1, 2), (1, 3), (0, 3)]);
}

#[test]
fn test_moore_costs() {
	let neighborhood = MooreNeighborhood::new(3, 3);
	for (point, cost) in neighbors_of(&neighborhood, (1, 1)) {
		if is_diagonal((1, 1), point) {
			assert_eq!(cost, DIAGONAL_COST);
		} else {
			assert_eq!(cost, STRAIGHT_COST);
		}
	}
	assert_eq!(neighbors_of(&neighborhood, (1, 1)).len(), 8);
}

#[test]
fn test_appends_to_target() {
	let neighborhood = ManhattanNeighborhood::new(1, 2);
	let mut target = vec![((9, 9), 0.0)];
	neighborhood.get_all_neighbors((0, 0), &mut target);
	assert_eq!(target, vec![((9, 9), 0.0), ((0, 1), 1.0)]);
}

#[test]
fn test_grid_size() {
	assert_eq!(MooreNeighborhood::new(7, 3).grid_size(), Some((7, 3)));
	assert_eq!(ManhattanNeighborhood::new(2, 9).grid_size(), Some((2, 9)));
}
