use crate::{Cost, NodeID, Point};

/// One visited Tile of a Search.
///
/// `f` is always `g + h`: the Cost is only ever changed through [`relax`](PathNode::relax),
/// which keeps both in sync and points `parent` at the Node that produced the new `g`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathNode {
	pos: Point,
	g: Cost,
	h: Cost,
	f: Cost,
	parent: Option<NodeID>,
}

impl PathNode {
	pub(crate) fn new(pos: Point, g: Cost, h: Cost, parent: Option<NodeID>) -> PathNode {
		PathNode {
			pos,
			g,
			h,
			f: g + h,
			parent,
		}
	}

	/// A cheaper way to reach this Node was found.
	pub(crate) fn relax(&mut self, g: Cost, parent: NodeID) {
		self.g = g;
		self.f = g + self.h;
		self.parent = Some(parent);
	}

	pub(crate) fn with_parent(mut self, parent: Option<NodeID>) -> PathNode {
		self.parent = parent;
		self
	}

	/// The position of the Tile
	pub fn pos(&self) -> Point {
		self.pos
	}
	/// The x coordinate of the Tile
	pub fn x(&self) -> usize {
		self.pos.0
	}
	/// The y coordinate of the Tile
	pub fn y(&self) -> usize {
		self.pos.1
	}
	/// The Cost of the Path from the start to this Node
	pub fn g(&self) -> Cost {
		self.g
	}
	/// The estimated Cost from this Node to the goal
	pub fn h(&self) -> Cost {
		self.h
	}
	/// `g + h`
	pub fn f(&self) -> Cost {
		self.f
	}
	/// The Node this one was reached from, or `None` for the start.
	///
	/// Inside of a [`Path`](crate::Path) this is the index of the previous step.
	pub fn parent(&self) -> Option<NodeID> {
		self.parent
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn relax_keeps_f_in_sync() {
		let mut node = PathNode::new((2, 3), 4.0, 1.5, Some(0));
		assert_eq!(node.f(), 5.5);

		node.relax(2.5, 7);
		assert_eq!(node.g(), 2.5);
		assert_eq!(node.h(), 1.5);
		assert_eq!(node.f(), 4.0);
		assert_eq!(node.parent(), Some(7));
		assert_eq!((node.x(), node.y()), (2, 3));
	}
}
