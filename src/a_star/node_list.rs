use super::PathNode;
use crate::{Cost, NodeID, Point, PointMap, PointSet};

/// Scratch Storage of a single Search.
///
/// Every Node created during a Search lives in the `nodes` arena until [`release`] is called,
/// so parents stay valid after a Node was closed. The open set is the list of IDs in the order
/// they were first discovered.
///
/// [`release`]: NodeList::release
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeList {
	nodes: slab::Slab<PathNode>,
	open: Vec<NodeID>,
	open_map: PointMap<NodeID>,
	closed: PointSet,
}

impl NodeList {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			nodes: slab::Slab::with_capacity(capacity),
			open: Vec::with_capacity(capacity / 2),
			open_map: PointMap::with_capacity(capacity / 2),
			closed: PointSet::with_capacity(capacity),
		}
	}

	pub fn reserve(&mut self, additional: usize) {
		self.nodes.reserve(additional);
		self.open.reserve(additional / 2);
		self.open_map.reserve(additional / 2);
		self.closed.reserve(additional);
	}

	/// The number of Nodes created since the last release
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn open_len(&self) -> usize {
		self.open.len()
	}

	pub fn closed_len(&self) -> usize {
		self.closed.len()
	}

	/// Appends a new Node to the end of the open set.
	pub fn push_open(&mut self, node: PathNode) -> NodeID {
		debug_assert!(!self.open_map.contains_key(&node.pos()));
		let pos = node.pos();
		let id = self.nodes.insert(node);
		self.open.push(id);
		self.open_map.insert(pos, id);
		id
	}

	pub fn open_id_at(&self, pos: Point) -> Option<NodeID> {
		self.open_map.get(&pos).copied()
	}

	pub fn is_closed(&self, pos: Point) -> bool {
		self.closed.contains(&pos)
	}

	/// Index into the open set of the Node with the lowest `f`.
	///
	/// Of several Nodes with the same `f`, the one that was added first wins.
	pub fn lowest_f(&self) -> Option<usize> {
		let mut best: Option<(usize, Cost)> = None;
		for (index, &id) in self.open.iter().enumerate() {
			let f = self.nodes[id].f();
			match best {
				Some((_, best_f)) if best_f <= f => {}
				_ => best = Some((index, f)),
			}
		}
		best.map(|(index, _)| index)
	}

	/// Moves the Node at `index` of the open set to the closed set.
	#[track_caller]
	pub fn close(&mut self, index: usize) -> NodeID {
		let id = self.open.remove(index);
		let pos = self.nodes[id].pos();
		self.open_map.remove(&pos);
		self.closed.insert(pos);
		id
	}

	/// Follows the parents from `id` back to the start.
	///
	/// The returned Nodes are ordered from the start to `id`, with their parents pointing at
	/// the previous entry.
	pub fn trace_back(&self, id: NodeID) -> Vec<PathNode> {
		let mut steps = vec![];
		let mut current = Some(id);
		while let Some(id) = current {
			let node = self.nodes[id];
			current = node.parent();
			steps.push(node);
		}
		steps.reverse();
		for (i, node) in steps.iter_mut().enumerate() {
			*node = node.with_parent(i.checked_sub(1));
		}
		steps
	}

	/// Drops every Node of the Search, keeping the allocated memory.
	///
	/// Returns the number of released Nodes.
	pub fn release(&mut self) -> usize {
		let released = self.nodes.len();
		self.nodes.clear();
		self.open.clear();
		self.open_map.clear();
		self.closed.clear();
		log::trace!("released {} search nodes", released);
		released
	}
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
	type Output = PathNode;
	#[track_caller]
	fn index(&self, index: NodeID) -> &PathNode {
		&self.nodes[index]
	}
}
impl IndexMut<NodeID> for NodeList {
	#[track_caller]
	fn index_mut(&mut self, index: NodeID) -> &mut PathNode {
		&mut self.nodes[index]
	}
}
