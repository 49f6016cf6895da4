/// Options for configuring the [`AStar`](crate::AStar) Search
///
/// Default options:
/// ```
/// # use tile_astar::AStarConfig;
/// assert_eq!(
/// 	AStarConfig {
/// 		size_hint: 64,
/// 		corner_cutting: true,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AStarConfig {
	/// The number of Nodes to reserve memory for up front (defaults to `64`)
	///
	/// The memory is kept between Searches, so this only matters for the first few Searches.
	pub size_hint: usize,
	/// `true` (default): diagonal steps are allowed as long as the target Tile is open.
	///
	/// `false`: a diagonal step is only allowed if both Tiles next to it are open as well, so
	/// that Agents don't squeeze past the corners of blocked Tiles.
	///
	/// Only has an effect with Neighborhoods that contain diagonal steps, and is ignored when
	/// blocked Tiles are ignored.
	pub corner_cutting: bool,
}

impl AStarConfig {
	/// an example AStarConfig for Agents that can't walk around corners diagonally
	///
	/// Values:
	/// ```
	/// # use tile_astar::AStarConfig;
	/// assert_eq!(
	/// 	AStarConfig {
	/// 		size_hint: 64,
	/// 		corner_cutting: false,
	/// 	},
	/// 	AStarConfig::NO_CORNER_CUTTING
	/// );
	/// ```
	pub const NO_CORNER_CUTTING: AStarConfig = AStarConfig {
		size_hint: 64,
		corner_cutting: false,
	};
	/// an example AStarConfig for Searches across large Maps
	///
	/// Values:
	/// ```
	/// # use tile_astar::AStarConfig;
	/// assert_eq!(
	/// 	AStarConfig {
	/// 		size_hint: 4096,
	/// 		corner_cutting: true,
	/// 	},
	/// 	AStarConfig::LARGE_MAP
	/// );
	/// ```
	pub const LARGE_MAP: AStarConfig = AStarConfig {
		size_hint: 4096,
		corner_cutting: true,
	};
}

impl Default for AStarConfig {
	fn default() -> AStarConfig {
		AStarConfig {
			size_hint: 64,
			corner_cutting: true,
		}
	}
}
