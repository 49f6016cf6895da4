//! The Maps a Search can run on.
//!
//! A Search only ever asks two things about the Grid: how big it is and whether a Tile is
//! blocked. Anything implementing [`GridMap`] can be searched, [`TileMap`] is a simple
//! ready-to-use implementation.

use crate::{AStarError, Point, Result};
use std::fmt;
use std::str::FromStr;

/// A static Grid of Tiles that are either passable or blocked.
///
/// Implementors only need to answer [`is_blocked`](GridMap::is_blocked) for Points inside of
/// `[0, width) x [0, height)`. The Search checks the bounds before asking.
///
/// ## Examples
/// Searching on a custom Map:
/// ```
/// use tile_astar::prelude::*;
///
/// #[derive(Debug)]
/// struct Corridor;
///
/// impl GridMap for Corridor {
/// 	fn width(&self) -> usize {
/// 		10
/// 	}
/// 	fn height(&self) -> usize {
/// 		1
/// 	}
/// 	fn is_blocked(&self, _: Point) -> bool {
/// 		false
/// 	}
/// }
///
/// let mut astar = AStar::new(Corridor).unwrap();
/// assert_eq!(astar.find_path((0, 0), (9, 0), false).unwrap(), 9);
/// ```
pub trait GridMap {
	/// The number of Tiles along the x axis
	fn width(&self) -> usize;
	/// The number of Tiles along the y axis
	fn height(&self) -> usize;
	/// Returns `true` if the Tile at `point` cannot be walked across.
	fn is_blocked(&self, point: Point) -> bool;

	/// Returns `true` if `point` lies on the Map.
	fn in_bounds(&self, point: Point) -> bool {
		point.0 < self.width() && point.1 < self.height()
	}
}

impl<M: GridMap + ?Sized> GridMap for Box<M> {
	fn width(&self) -> usize {
		(**self).width()
	}
	fn height(&self) -> usize {
		(**self).height()
	}
	fn is_blocked(&self, point: Point) -> bool {
		(**self).is_blocked(point)
	}
	fn in_bounds(&self, point: Point) -> bool {
		(**self).in_bounds(point)
	}
}

/// A [`GridMap`] storing one flag per Tile.
///
/// Can be parsed from a textual Grid, where `#` marks blocked Tiles and `.` marks open ones.
/// Leading and trailing whitespace of every line is ignored.
/// ```
/// use tile_astar::map::{GridMap, TileMap};
///
/// let map: TileMap = "\
/// 	..#
/// 	#..".parse().unwrap();
///
/// assert_eq!((map.width(), map.height()), (3, 2));
/// assert!(map.is_blocked((2, 0)));
/// assert!(map.is_blocked((0, 1)));
/// assert!(!map.is_blocked((1, 1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
	width: usize,
	height: usize,
	blocked: Vec<bool>,
}

impl TileMap {
	/// Creates a new TileMap where every Tile is open.
	///
	/// Fails with [`AStarError::InvalidMap`] if either dimension is 0.
	pub fn new(width: usize, height: usize) -> Result<TileMap> {
		TileMap::from_fn(width, height, |_| false)
	}

	/// Creates a new TileMap, asking `is_blocked` about every Tile.
	pub fn from_fn(
		width: usize,
		height: usize,
		mut is_blocked: impl FnMut(Point) -> bool,
	) -> Result<TileMap> {
		if width == 0 || height == 0 {
			return Err(AStarError::InvalidMap { width, height });
		}
		let mut blocked = Vec::with_capacity(width * height);
		for y in 0..height {
			for x in 0..width {
				blocked.push(is_blocked((x, y)));
			}
		}
		Ok(TileMap {
			width,
			height,
			blocked,
		})
	}

	/// Marks the Tile at `point` as blocked or open.
	///
	/// Fails with [`AStarError::OutOfBounds`] if `point` is not on the Map.
	pub fn set_blocked(&mut self, point: Point, blocked: bool) -> Result<()> {
		let index = self.index(point)?;
		self.blocked[index] = blocked;
		Ok(())
	}

	/// Marks every Tile in `points` as blocked.
	pub fn block_all(&mut self, points: impl IntoIterator<Item = Point>) -> Result<()> {
		for point in points {
			self.set_blocked(point, true)?;
		}
		Ok(())
	}

	/// The number of blocked Tiles on the Map
	pub fn blocked_count(&self) -> usize {
		self.blocked.iter().filter(|b| **b).count()
	}

	fn index(&self, point: Point) -> Result<usize> {
		if self.in_bounds(point) {
			Ok(point.0 + point.1 * self.width)
		} else {
			Err(AStarError::OutOfBounds {
				point,
				width: self.width,
				height: self.height,
			})
		}
	}
}

impl GridMap for TileMap {
	fn width(&self) -> usize {
		self.width
	}
	fn height(&self) -> usize {
		self.height
	}
	#[track_caller]
	fn is_blocked(&self, point: Point) -> bool {
		self.blocked[point.0 + point.1 * self.width]
	}
}

impl FromStr for TileMap {
	type Err = AStarError;

	fn from_str(s: &str) -> Result<TileMap> {
		let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
		let height = rows.len();
		let width = rows.first().map_or(0, |row| row.chars().count());

		let mut blocked = Vec::with_capacity(width * height);
		for (y, row) in rows.iter().enumerate() {
			if row.chars().count() != width {
				return Err(AStarError::ParseMap(format!(
					"row {} has {} tiles, expected {}",
					y,
					row.chars().count(),
					width
				)));
			}
			for (x, c) in row.chars().enumerate() {
				match c {
					'#' => blocked.push(true),
					'.' => blocked.push(false),
					other => {
						return Err(AStarError::ParseMap(format!(
							"unexpected '{}' at ({}, {})",
							other, x, y
						)))
					}
				}
			}
		}

		if width == 0 || height == 0 {
			return Err(AStarError::InvalidMap { width, height });
		}
		Ok(TileMap {
			width,
			height,
			blocked,
		})
	}
}

impl fmt::Display for TileMap {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for row in self.blocked.chunks(self.width) {
			for &blocked in row {
				write!(f, "{}", if blocked { '#' } else { '.' })?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_map_is_invalid() {
		assert_eq!(
			TileMap::new(0, 4),
			Err(AStarError::InvalidMap {
				width: 0,
				height: 4
			})
		);
		assert_eq!(
			"".parse::<TileMap>(),
			Err(AStarError::InvalidMap {
				width: 0,
				height: 0
			})
		);
	}

	#[test]
	fn parse_and_display() {
		let text = "#..\n.#.\n..#\n";
		let map: TileMap = text.parse().unwrap();
		assert_eq!(map.blocked_count(), 3);
		assert!(map.is_blocked((1, 1)));
		assert!(!map.is_blocked((1, 0)));
		assert_eq!(map.to_string(), text);
	}

	#[test]
	fn parse_errors() {
		assert!(matches!(
			"..\n...".parse::<TileMap>(),
			Err(AStarError::ParseMap(_))
		));
		assert!(matches!(
			".x.".parse::<TileMap>(),
			Err(AStarError::ParseMap(_))
		));
	}

	#[test]
	fn set_blocked() {
		let mut map = TileMap::new(3, 2).unwrap();
		map.set_blocked((2, 1), true).unwrap();
		assert!(map.is_blocked((2, 1)));
		assert_eq!(
			map.set_blocked((3, 1), true),
			Err(AStarError::OutOfBounds {
				point: (3, 1),
				width: 3,
				height: 2
			})
		);
		map.block_all([(0, 0), (1, 0)]).unwrap();
		assert_eq!(map.blocked_count(), 3);
	}

	#[test]
	fn bounds() {
		let map = TileMap::new(4, 2).unwrap();
		assert!(map.in_bounds((3, 1)));
		assert!(!map.in_bounds((4, 1)));
		assert!(!map.in_bounds((0, 2)));
	}
}
