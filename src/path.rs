use crate::{Cost, PathNode, Point};

/// The result of a Search: the visited Nodes from start to goal.
///
/// Both the start and the goal are part of the Path, so a Path from a Tile to itself contains
/// exactly one Node and zero steps. A Path that wasn't found is empty.
///
/// Dereferences to a slice of [`PathNode`]s:
/// ```
/// use tile_astar::prelude::*;
///
/// let map = TileMap::new(3, 3).unwrap();
/// let mut astar = AStar::new(map).unwrap();
/// astar.find_path((0, 0), (2, 0), false).unwrap();
///
/// let path = astar.path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[1].pos(), (1, 0));
/// assert_eq!(path.iter().map(|node| node.g()).collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
	nodes: Vec<PathNode>,
	cost: Cost,
}

impl Path {
	pub(crate) fn new(nodes: Vec<PathNode>, cost: Cost) -> Path {
		Path { nodes, cost }
	}

	/// The number of steps needed to walk the Path, which is one less than the number of Nodes.
	///
	/// Returns `0` for empty Paths and for Paths from a Tile to itself.
	pub fn steps(&self) -> usize {
		self.nodes.len().saturating_sub(1)
	}

	/// The total Cost of walking the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The first Point of the Path, if any
	pub fn start(&self) -> Option<Point> {
		self.nodes.first().map(PathNode::pos)
	}

	/// The last Point of the Path, if any
	pub fn goal(&self) -> Option<Point> {
		self.nodes.last().map(PathNode::pos)
	}

	/// Iterates over the Points of the Path, from start to goal.
	pub fn points(&self) -> impl DoubleEndedIterator<Item = Point> + ExactSizeIterator + '_ {
		self.nodes.iter().map(PathNode::pos)
	}

	/// Consumes the Path, returning its Nodes.
	pub fn into_nodes(self) -> Vec<PathNode> {
		self.nodes
	}
}

use std::ops::{Deref, Index};

impl Index<usize> for Path {
	type Output = PathNode;
	#[track_caller]
	fn index(&self, index: usize) -> &PathNode {
		&self.nodes[index]
	}
}

impl Deref for Path {
	type Target = [PathNode];
	fn deref(&self) -> &[PathNode] {
		&self.nodes
	}
}

use std::fmt;
impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {:.2}]: ", self.cost)?;
		if self.nodes.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.nodes[0].pos())?;
			for node in self.nodes.iter().skip(1) {
				write!(fmt, " -> {:?}", node.pos())?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	fn path_of(points: &[Point]) -> Path {
		let nodes: Vec<PathNode> = points
			.iter()
			.enumerate()
			.map(|(i, &p)| PathNode::new(p, i as Cost, 0.0, i.checked_sub(1)))
			.collect();
		let cost = nodes.last().map_or(0.0, PathNode::g);
		Path::new(nodes, cost)
	}

	#[test]
	fn path_index() {
		let path = path_of(&[(4, 0), (2, 0), (0, 0)]);

		assert_eq!(path[0].pos(), (4, 0));
		assert_eq!(path[1].pos(), (2, 0));
		assert_eq!(path[2].pos(), (0, 0));
		assert_eq!(path.steps(), 2);
		assert_eq!(path.start(), Some((4, 0)));
		assert_eq!(path.goal(), Some((0, 0)));
	}

	#[test]
	fn path_display() {
		let path = path_of(&[(0, 0), (1, 1), (2, 2)]);

		assert_eq!(
			&format!("{}", path),
			"Path[Cost = 2.00]: (0, 0) -> (1, 1) -> (2, 2)"
		);
	}

	#[test]
	fn path_display_empty() {
		let path = Path::default();

		assert_eq!(&format!("{}", path), "Path[Cost = 0.00]: <empty>");
		assert_eq!(path.steps(), 0);
		assert_eq!(path.start(), None);
	}

	#[test]
	fn single_node() {
		let path = path_of(&[(3, 3)]);
		assert_eq!(path.steps(), 0);
		assert_eq!(path.len(), 1);
		assert_eq!(path.start(), path.goal());
	}
}
