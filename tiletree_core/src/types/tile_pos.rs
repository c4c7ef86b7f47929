//! Leaf tile positions in the regular grid at maximum zoom.
//!
//! The grid of depth `d` has `2^d` tiles per side and is centered at the origin:
//! every axis covers `[lo, lo + 2^d)` with `lo = -(2^d / 2)`, so depth `0` holds the single
//! tile `(0, 0)` and depth `d >= 1` covers `[-2^(d-1), 2^(d-1))`.
//!
//! # Examples
//!
//! ```
//! use tiletree_core::TilePos;
//!
//! let pos = TilePos::new(-1, 0) + TilePos::new(2, 3);
//! assert_eq!(pos, TilePos::new(1, 3));
//! assert!(pos.fits_depth(3));
//! assert!(!pos.fits_depth(2));
//! ```

use anyhow::{Result, ensure};
use std::{
	fmt::{self, Debug, Display},
	ops::{Add, AddAssign, Sub, SubAssign},
};

/// Deepest tree supported; tile positions are `i32`.
pub const MAX_DEPTH: u8 = 31;

/// Position of a render tile (a leaf of the tile tree).
///
/// Ordered by `x`, then `y`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Default)]
pub struct TilePos {
	pub x: i32,
	pub y: i32,
}

impl TilePos {
	pub const fn new(x: i32, y: i32) -> TilePos {
		TilePos { x, y }
	}

	/// Returns `true` if this position lies inside the grid of the given depth.
	pub fn fits_depth(&self, depth: u8) -> bool {
		match grid_range(depth) {
			Ok((lo, hi)) => {
				let (x, y) = (i64::from(self.x), i64::from(self.y));
				lo <= x && x < hi && lo <= y && y < hi
			}
			Err(_) => false,
		}
	}

	/// Smallest depth whose grid contains this position.
	pub fn min_depth(&self) -> u8 {
		// every position fits at MAX_DEPTH, so the loop always terminates
		let mut depth = 0;
		while depth < MAX_DEPTH && !self.fits_depth(depth) {
			depth += 1;
		}
		depth
	}
}

/// Returns the half-open range `[lo, hi)` covered on each axis by the grid of `depth`.
///
/// # Errors
/// Returns an error if `depth` exceeds [`MAX_DEPTH`].
pub fn grid_range(depth: u8) -> Result<(i64, i64)> {
	ensure!(depth <= MAX_DEPTH, "depth ({depth}) must be <= {MAX_DEPTH}");
	let size = 1i64 << depth;
	let lo = -(size / 2);
	Ok((lo, lo + size))
}

impl Debug for TilePos {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TilePos({}, {})", self.x, self.y)
	}
}

impl Display for TilePos {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.x, self.y)
	}
}

impl Add for TilePos {
	type Output = TilePos;

	fn add(self, rhs: TilePos) -> TilePos {
		TilePos::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for TilePos {
	type Output = TilePos;

	fn sub(self, rhs: TilePos) -> TilePos {
		TilePos::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl AddAssign for TilePos {
	fn add_assign(&mut self, rhs: TilePos) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl SubAssign for TilePos {
	fn sub_assign(&mut self, rhs: TilePos) {
		self.x -= rhs.x;
		self.y -= rhs.y;
	}
}

impl From<(i32, i32)> for TilePos {
	fn from((x, y): (i32, i32)) -> Self {
		TilePos::new(x, y)
	}
}
