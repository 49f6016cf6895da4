use super::{AStarConfig, NodeList, PathNode};
use crate::heuristic::Heuristic;
use crate::map::GridMap;
use crate::neighbors::{is_diagonal, Neighborhood};
use crate::{Cost, Path, Point};

/// Runs A* from `start` to `goal`. Both have to be on the Map.
///
/// `nodes` and `neighbors` are scratch buffers; `nodes` is released before returning.
/// Returns an empty Path if the goal can't be reached.
#[allow(clippy::too_many_arguments)]
pub(crate) fn a_star_search<M: GridMap, H: Heuristic, N: Neighborhood>(
	map: &M,
	heuristic: &H,
	neighborhood: &N,
	config: &AStarConfig,
	nodes: &mut NodeList,
	neighbors: &mut Vec<(Point, Cost)>,
	start: Point,
	goal: Point,
	ignore_block: bool,
) -> Path {
	debug_assert!(map.in_bounds(start) && map.in_bounds(goal));
	log::debug!(
		"searching path from {:?} to {:?} (ignore_block: {})",
		start,
		goal,
		ignore_block
	);

	nodes.push_open(PathNode::new(start, 0.0, heuristic.estimate(start, goal), None));

	let mut found = None;
	while let Some(index) = nodes.lowest_f() {
		let current_id = nodes.close(index);
		let current = nodes[current_id];
		if current.pos() == goal {
			found = Some(current_id);
			break;
		}

		neighbors.clear();
		neighborhood.get_all_neighbors(current.pos(), neighbors);
		for &(other_pos, step_cost) in neighbors.iter() {
			if !map.in_bounds(other_pos) {
				continue;
			}
			if !ignore_block {
				if map.is_blocked(other_pos) {
					continue;
				}
				if !config.corner_cutting
					&& is_diagonal(current.pos(), other_pos)
					&& cuts_corner(map, current.pos(), other_pos)
				{
					continue;
				}
			}
			if nodes.is_closed(other_pos) {
				continue;
			}

			let other_cost = current.g() + step_cost;
			match nodes.open_id_at(other_pos) {
				Some(other_id) => {
					if other_cost < nodes[other_id].g() {
						nodes[other_id].relax(other_cost, current_id);
					}
				}
				None => {
					let h = heuristic.estimate(other_pos, goal);
					nodes.push_open(PathNode::new(other_pos, other_cost, h, Some(current_id)));
				}
			}
		}
	}

	let expanded = nodes.closed_len();
	let path = match found {
		Some(goal_id) => {
			let cost = nodes[goal_id].g();
			Path::new(nodes.trace_back(goal_id), cost)
		}
		None => Path::default(),
	};

	if path.is_empty() {
		log::debug!(
			"no path from {:?} to {:?} after expanding {} of {} nodes",
			start,
			goal,
			expanded,
			nodes.len()
		);
	} else {
		log::debug!(
			"found path of {} steps with cost {} after expanding {} of {} nodes ({} still open)",
			path.steps(),
			path.cost(),
			expanded,
			nodes.len(),
			nodes.open_len()
		);
	}
	nodes.release();
	path
}

/// A diagonal step from `from` to `to` touches a blocked Tile on one of its sides.
fn cuts_corner<M: GridMap>(map: &M, from: Point, to: Point) -> bool {
	map.is_blocked((to.0, from.1)) || map.is_blocked((from.0, to.1))
}
