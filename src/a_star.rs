use crate::heuristic::{Euclidean, Heuristic};
use crate::map::GridMap;
use crate::neighbors::{MooreNeighborhood, Neighborhood};
use crate::{AStarError, Cost, Path, Point, Result};

mod config;
pub use self::config::AStarConfig;

mod node;
pub use self::node::PathNode;

mod node_list;
use self::node_list::NodeList;

mod search;
use self::search::a_star_search;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use std::fmt;

/// A struct to search shortest Paths on a [`GridMap`] it owns.
///
/// The Search expands Tiles in order of `f = g + h` and always expands the Tile that was
/// discovered first when several have the same `f`, so repeated Searches with the same
/// parameters return the exact same Path.
pub struct AStar<M: GridMap, H: Heuristic = Euclidean, N: Neighborhood = MooreNeighborhood> {
	map: M,
	heuristic: H,
	neighborhood: N,
	config: AStarConfig,
	nodes: NodeList,
	neighbors: Vec<(Point, Cost)>,
	path: Path,
}

impl<M: GridMap> AStar<M> {
	/// Creates a new AStar that takes ownership of `map`.
	///
	/// Uses the [`Euclidean`] Heuristic and the 8-directional [`MooreNeighborhood`].
	///
	/// Fails with [`AStarError::InvalidMap`] if the Map has no Tiles.
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// use tile_astar::prelude::*;
	///
	/// let map = TileMap::new(5, 5).unwrap();
	/// let mut astar = AStar::new(map).unwrap();
	///
	/// assert_eq!(astar.find_path((0, 0), (4, 4), false).unwrap(), 4);
	/// ```
	pub fn new(map: M) -> Result<AStar<M>> {
		AStar::with_heuristic(map, Euclidean)
	}
}

impl<M: GridMap, H: Heuristic> AStar<M, H> {
	/// Creates a new AStar that takes ownership of `map` and estimates remaining distances with
	/// `heuristic`.
	///
	/// The Heuristic has to be admissible (never overestimate the real Cost) for the Paths to be
	/// shortest ones.
	pub fn with_heuristic(map: M, heuristic: H) -> Result<AStar<M, H>> {
		let (width, height) = (map.width(), map.height());
		if width == 0 || height == 0 {
			return Err(AStarError::InvalidMap { width, height });
		}
		let config = AStarConfig::default();
		Ok(AStar {
			map,
			heuristic,
			neighborhood: MooreNeighborhood::new(width, height),
			config,
			nodes: NodeList::with_capacity(config.size_hint),
			neighbors: Vec::with_capacity(8),
			path: Path::default(),
		})
	}
}

impl<M: GridMap, H: Heuristic, N: Neighborhood> AStar<M, H, N> {
	/// Replaces the Neighborhood, which decides how a Path can move along the Grid.
	///
	/// See [`neighbors`](crate::neighbors) for more details.
	///
	/// Fails with [`AStarError::SizeMismatch`] if the Neighborhood was created for a Grid of a
	/// different size than the Map.
	///
	/// ```
	/// use tile_astar::prelude::*;
	///
	/// let astar = AStar::new(TileMap::new(10, 10).unwrap()).unwrap();
	/// assert!(astar.with_neighborhood(MooreNeighborhood::new(4, 4)).is_err());
	/// ```
	pub fn with_neighborhood<N2: Neighborhood>(self, neighborhood: N2) -> Result<AStar<M, H, N2>> {
		let map = (self.map.width(), self.map.height());
		if let Some(size) = neighborhood.grid_size() {
			if size != map {
				return Err(AStarError::SizeMismatch {
					map,
					neighborhood: size,
				});
			}
		}
		Ok(AStar {
			map: self.map,
			heuristic: self.heuristic,
			neighborhood,
			config: self.config,
			nodes: self.nodes,
			neighbors: self.neighbors,
			path: self.path,
		})
	}

	/// Replaces the [`AStarConfig`].
	pub fn with_config(mut self, config: AStarConfig) -> Self {
		self.nodes.reserve(config.size_hint);
		self.config = config;
		self
	}

	/// Searches the shortest Path from `start` to `goal`.
	///
	/// The Path itself replaces the previous one and can be retrieved through
	/// [`path`](AStar::path).
	///
	/// ## Arguments
	/// - `start` - the Tile to start from
	/// - `goal` - the Tile to search a Path to
	/// - `ignore_block` - `true`: blocked Tiles are treated like open ones
	///
	/// ## Returns
	/// The number of steps of the Path.
	/// - `Ok(0)` with an empty Path if the goal can't be reached
	/// - `Ok(0)` with a single Node Path if `start == goal`
	/// - `Err(AStarError::OutOfBounds)` if `start` or `goal` is not on the Map. The Search is
	/// not attempted and the previous Path is discarded.
	///
	/// A blocked start Tile does not stop the Search, but a blocked goal can only be reached
	/// with `ignore_block`.
	///
	/// ## Examples
	/// ```
	/// use tile_astar::prelude::*;
	///
	/// let map: TileMap = "\
	/// 	.#.
	/// 	.#.
	/// 	...".parse().unwrap();
	/// let mut astar = AStar::new(map).unwrap();
	///
	/// assert_eq!(astar.find_path((0, 0), (2, 0), false).unwrap(), 4);
	/// assert_eq!(astar.find_path((0, 0), (2, 0), true).unwrap(), 2);
	/// assert_eq!(astar.find_path((1, 2), (1, 2), false).unwrap(), 0);
	/// assert_eq!(astar.path().len(), 1);
	///
	/// assert!(astar.find_path((0, 0), (3, 0), false).is_err());
	/// assert!(astar.path().is_empty());
	/// ```
	pub fn find_path(&mut self, start: Point, goal: Point, ignore_block: bool) -> Result<usize> {
		self.path = Path::default();
		self.check_bounds(start)?;
		self.check_bounds(goal)?;

		self.path = a_star_search(
			&self.map,
			&self.heuristic,
			&self.neighborhood,
			&self.config,
			&mut self.nodes,
			&mut self.neighbors,
			start,
			goal,
			ignore_block,
		);
		Ok(self.path.steps())
	}

	/// Searches Paths for several `(start, goal)` pairs.
	///
	/// Every Search is independent of the others and of [`find_path`](AStar::find_path): the
	/// stored Path is not changed. Out of bounds Points only fail their own query.
	///
	/// ## Examples
	/// ```
	/// use tile_astar::prelude::*;
	///
	/// let map = TileMap::new(4, 4).unwrap();
	/// let astar = AStar::new(map).unwrap();
	///
	/// let paths = astar.find_paths(&[((0, 0), (3, 3)), ((0, 0), (9, 9))], false);
	///
	/// assert_eq!(paths[0].as_ref().unwrap().steps(), 3);
	/// assert!(paths[1].is_err());
	/// ```
	pub fn find_paths(&self, queries: &[(Point, Point)], ignore_block: bool) -> Vec<Result<Path>> {
		let mut nodes = NodeList::with_capacity(self.config.size_hint);
		let mut neighbors = Vec::with_capacity(8);
		queries
			.iter()
			.map(|&(start, goal)| {
				self.search_with(&mut nodes, &mut neighbors, start, goal, ignore_block)
			})
			.collect()
	}

	/// Same as [`find_paths`](AStar::find_paths), but runs the Searches on the rayon Thread Pool.
	///
	/// The results are in the same order as the queries.
	#[cfg(feature = "parallel")]
	pub fn find_paths_parallel(
		&self,
		queries: &[(Point, Point)],
		ignore_block: bool,
	) -> Vec<Result<Path>>
	where
		M: Sync,
		H: Sync,
		N: Sync,
	{
		queries
			.par_iter()
			.map_init(
				|| (NodeList::with_capacity(self.config.size_hint), Vec::with_capacity(8)),
				|(nodes, neighbors), &(start, goal)| {
					self.search_with(nodes, neighbors, start, goal, ignore_block)
				},
			)
			.collect()
	}

	fn search_with(
		&self,
		nodes: &mut NodeList,
		neighbors: &mut Vec<(Point, Cost)>,
		start: Point,
		goal: Point,
		ignore_block: bool,
	) -> Result<Path> {
		self.check_bounds(start)?;
		self.check_bounds(goal)?;
		Ok(a_star_search(
			&self.map,
			&self.heuristic,
			&self.neighborhood,
			&self.config,
			nodes,
			neighbors,
			start,
			goal,
			ignore_block,
		))
	}

	fn check_bounds(&self, point: Point) -> Result<()> {
		if self.map.in_bounds(point) {
			Ok(())
		} else {
			Err(AStarError::OutOfBounds {
				point,
				width: self.map.width(),
				height: self.map.height(),
			})
		}
	}

	/// The Path found by the last call to [`find_path`](AStar::find_path).
	///
	/// Empty if no Path was found or no Search was done yet.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Estimates the Cost from `start` to `goal` with the Heuristic of this Search.
	///
	/// ```
	/// use tile_astar::prelude::*;
	///
	/// let astar = AStar::new(TileMap::new(5, 5).unwrap()).unwrap();
	/// assert_eq!(astar.heuristic((0, 0), (3, 4)), 5.0);
	/// ```
	pub fn heuristic(&self, start: Point, goal: Point) -> Cost {
		self.heuristic.estimate(start, goal)
	}

	/// The Map this AStar searches on
	pub fn map(&self) -> &M {
		&self.map
	}

	/// Mutable access to the Map, to change Tiles between Searches.
	///
	/// The stored [`Path`] is left as it is, even if it now crosses blocked Tiles.
	pub fn map_mut(&mut self) -> &mut M {
		&mut self.map
	}

	/// Consumes the AStar, returning the Map.
	pub fn into_map(self) -> M {
		self.map
	}

	/// The Neighborhood used to move along the Grid
	pub fn neighborhood(&self) -> &N {
		&self.neighborhood
	}

	/// The [`AStarConfig`] of this Search
	pub fn config(&self) -> &AStarConfig {
		&self.config
	}
}

impl<M, H, N> fmt::Debug for AStar<M, H, N>
where
	M: GridMap + fmt::Debug,
	H: Heuristic,
	N: Neighborhood,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AStar")
			.field("map", &self.map)
			.field("neighborhood", &self.neighborhood)
			.field("config", &self.config)
			.field("path", &self.path)
			.finish_non_exhaustive()
	}
}
