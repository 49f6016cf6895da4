#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find shortest Paths between two Tiles of a static Grid.
//!
//! ## Introduction
//! Tile based games usually need to answer the same question over and over: "how does this
//! agent get from here to there?". This crate answers it with the
//! [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm): Tiles are expanded in the
//! order of `f = g + h`, where `g` is the exact Cost walked so far and `h` is a
//! [`Heuristic`](heuristic::Heuristic) guess of the remaining distance.
//!
//! The Search is done by an [`AStar`] object, which owns the Map it searches on. Between two
//! Tiles of equal priority, the one that was discovered first is always expanded first, so the
//! same query on the same Map always produces the exact same Path.
//!
//! ## Examples
//! Creating the Map and the Search:
//! ```
//! use tile_astar::prelude::*;
//!
//! // '#' = blocked, '.' = open
//! let map: TileMap = "\
//! 	.....
//! 	.###.
//! 	...#.
//! 	.#...
//! 	....."
//! 	.parse()
//! 	.unwrap();
//!
//! let mut astar = AStar::new(map).unwrap();
//! ```
//!
//! ### Pathfinding
//! ```
//! # use tile_astar::prelude::*;
//! # let map: TileMap = "\
//! # 	.....
//! # 	.###.
//! # 	...#.
//! # 	.#...
//! # 	....."
//! # 	.parse()
//! # 	.unwrap();
//! # let mut astar = AStar::new(map).unwrap();
//! // find_path returns the number of steps, 0 means there is no Path
//! let steps = astar.find_path((0, 0), (4, 4), false).unwrap();
//! assert_eq!(steps, 5);
//!
//! let path = astar.path();
//! assert_eq!(path.start(), Some((0, 0)));
//! assert_eq!(path.goal(), Some((4, 4)));
//! ```
//!
//! Blocked Tiles can be ignored, which is useful to check whether a Goal would be reachable
//! if nothing was in the way:
//! ```
//! # use tile_astar::prelude::*;
//! let map: TileMap = "\
//! 	...
//! 	.#.
//! 	..."
//! 	.parse()
//! 	.unwrap();
//! let mut astar = AStar::new(map).unwrap();
//!
//! assert_eq!(astar.find_path((0, 0), (2, 2), false).unwrap(), 3);
//! assert_eq!(astar.find_path((0, 0), (1, 1), false).unwrap(), 0);
//! assert_eq!(astar.find_path((0, 0), (1, 1), true).unwrap(), 1);
//! ```
//!
//! ### Heuristics and Neighborhoods
//! The default Search moves in 8 directions (straight steps cost `1`, diagonal steps cost `√2`)
//! and estimates the remaining distance with the [`Euclidean`](heuristic::Euclidean) distance.
//! Both can be replaced:
//! ```
//! use tile_astar::prelude::*;
//!
//! let map = TileMap::new(5, 5).unwrap();
//! let mut astar = AStar::with_heuristic(map, Manhattan)
//! 	.unwrap()
//! 	.with_neighborhood(ManhattanNeighborhood::new(5, 5))
//! 	.unwrap();
//!
//! assert_eq!(astar.find_path((0, 0), (4, 4), false).unwrap(), 8);
//! ```
//!
//! ### Configuration
//! The last knobs live in an [`AStarConfig`]:
//! ```
//! use tile_astar::prelude::*;
//!
//! let map = TileMap::new(5, 5).unwrap();
//! let astar = AStar::new(map)
//! 	.unwrap()
//! 	.with_config(AStarConfig {
//! 		size_hint: 256,
//! 		..AStarConfig::NO_CORNER_CUTTING
//! 	});
//!
//! assert!(!astar.config().corner_cutting);
//! ```

/// The Type used to reference a Node in the scratch Storage of a Search
pub type NodeID = usize;

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// The Type used for the Cost of walking along a Path
pub type Cost = f32;

pub(crate) type PointMap<V> = hashbrown::HashMap<Point, V>;
pub(crate) type PointSet = hashbrown::HashSet<Point>;

mod a_star;
pub use self::a_star::{AStar, AStarConfig, PathNode};

mod error;
pub use self::error::{AStarError, Result};

pub mod heuristic;

pub mod map;

pub mod neighbors;

mod path;
pub use self::path::Path;

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		heuristic::{Chebyshev, Euclidean, Heuristic, Manhattan, Octile, Zero},
		map::{GridMap, TileMap},
		neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
		AStar, AStarConfig, AStarError, Cost, Path, PathNode, Point,
	};
}
