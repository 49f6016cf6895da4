use crate::Point;
use std::fmt;

/// A shorthand for Results that fail with an [`AStarError`]
pub type Result<T> = std::result::Result<T, AStarError>;

/// The ways setting up or starting a Search can fail.
///
/// Note that not finding a Path is **not** an Error: [`find_path`](crate::AStar::find_path)
/// returns `Ok(0)` in that case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AStarError {
	/// The Map has no Tiles to search on.
	InvalidMap {
		/// width of the rejected Map
		width: usize,
		/// height of the rejected Map
		height: usize,
	},
	/// A start or goal Point lies outside of the Map.
	OutOfBounds {
		/// the offending Point
		point: Point,
		/// width of the Map
		width: usize,
		/// height of the Map
		height: usize,
	},
	/// A Neighborhood was made for a Grid of a different size than the Map.
	SizeMismatch {
		/// `(width, height)` of the Map
		map: (usize, usize),
		/// `(width, height)` the Neighborhood was created with
		neighborhood: (usize, usize),
	},
	/// A textual Map could not be parsed.
	ParseMap(String),
}

impl fmt::Display for AStarError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AStarError::InvalidMap { width, height } => {
				write!(f, "invalid map: size {}x{} has no tiles", width, height)
			}
			AStarError::OutOfBounds {
				point,
				width,
				height,
			} => write!(
				f,
				"point ({}, {}) is outside of the {}x{} map",
				point.0, point.1, width, height
			),
			AStarError::SizeMismatch { map, neighborhood } => write!(
				f,
				"neighborhood size {}x{} does not match the {}x{} map",
				neighborhood.0, neighborhood.1, map.0, map.1
			),
			AStarError::ParseMap(msg) => write!(f, "could not parse map: {}", msg),
		}
	}
}

impl std::error::Error for AStarError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display() {
		let err = AStarError::OutOfBounds {
			point: (7, 2),
			width: 5,
			height: 5,
		};
		assert_eq!(err.to_string(), "point (7, 2) is outside of the 5x5 map");

		let err = AStarError::InvalidMap {
			width: 0,
			height: 3,
		};
		assert_eq!(err.to_string(), "invalid map: size 0x3 has no tiles");

		let err = AStarError::SizeMismatch {
			map: (10, 10),
			neighborhood: (4, 4),
		};
		assert_eq!(
			err.to_string(),
			"neighborhood size 4x4 does not match the 10x10 map"
		);
	}
}
