//! Paths from the root of the tile tree to any tile.
//!
//! A [`TilePath`] is a sequence of [`Quadrant`]s. Its length is the zoom level of the tile:
//! the root has the empty path, render tiles have a path as long as the tree's depth.
//!
//! # Examples
//!
//! ```
//! use tiletree_core::{Quadrant, TilePath, TilePos};
//!
//! let path: TilePath = "14".parse().unwrap();
//! assert_eq!(path.depth(), 2);
//! assert_eq!(path.to_tile_pos(2).unwrap(), TilePos::new(-1, -1));
//! assert_eq!(path.parent().unwrap().child(Quadrant::BottomRight), path);
//! ```

use super::{MAX_DEPTH, Quadrant, TilePos, grid_range};
use anyhow::{Context, Result, ensure};
use std::{
	fmt::{self, Debug, Display},
	ops::{Add, AddAssign},
	path::PathBuf,
	str::FromStr,
};

/// Path of a tile in the quadtree, ordered lexicographically.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Default)]
pub struct TilePath {
	path: Vec<Quadrant>,
}

impl TilePath {
	/// The root tile, zoom level `0`.
	pub fn root() -> TilePath {
		TilePath::default()
	}

	pub fn new(path: Vec<Quadrant>) -> TilePath {
		TilePath { path }
	}

	pub fn quadrants(&self) -> &[Quadrant] {
		&self.path
	}

	/// Zoom level of the tile, saturating at `u8::MAX` for paths too long to be in any tree.
	pub fn depth(&self) -> u8 {
		u8::try_from(self.path.len()).unwrap_or(u8::MAX)
	}

	pub fn is_root(&self) -> bool {
		self.path.is_empty()
	}

	pub fn last(&self) -> Option<Quadrant> {
		self.path.last().copied()
	}

	/// Returns the path of the parent tile.
	///
	/// # Errors
	/// Returns an error for the root, which has no parent.
	pub fn parent(&self) -> Result<TilePath> {
		ensure!(!self.is_root(), "the root tile has no parent");
		Ok(TilePath::new(self.path[..self.path.len() - 1].to_vec()))
	}

	/// Returns the path of the ancestor at `depth`, which must not be deeper than this path.
	pub fn ancestor(&self, depth: u8) -> Result<TilePath> {
		ensure!(
			depth as usize <= self.path.len(),
			"ancestor depth ({depth}) must be <= path depth ({})",
			self.path.len()
		);
		Ok(TilePath::new(self.path[..depth as usize].to_vec()))
	}

	/// Returns the path one level deeper, in the given quadrant.
	pub fn child(&self, quadrant: Quadrant) -> TilePath {
		let mut path = Vec::with_capacity(self.path.len() + 1);
		path.extend_from_slice(&self.path);
		path.push(quadrant);
		TilePath { path }
	}

	pub fn push(&mut self, quadrant: Quadrant) {
		self.path.push(quadrant);
	}

	/// The four children, in digit order.
	pub fn children(&self) -> impl Iterator<Item = TilePath> + '_ {
		Quadrant::all().iter().map(|q| self.child(q))
	}

	/// Returns `true` if `other` is this path or lies below it.
	pub fn contains(&self, other: &TilePath) -> bool {
		other.path.starts_with(&self.path)
	}

	/// Converts the path of a render tile to its position.
	///
	/// # Errors
	/// Returns an error if the path's length differs from `depth`.
	pub fn to_tile_pos(&self, depth: u8) -> Result<TilePos> {
		ensure!(
			self.path.len() == depth as usize,
			"tile path {self} has depth {}, but render tiles have depth {depth}",
			self.path.len()
		);
		let (lo, _) = grid_range(depth)?;
		let (mut x, mut y) = (lo, lo);
		for (level, quadrant) in self.path.iter().enumerate() {
			let radius = 1i64 << (depth as usize - level - 1);
			if quadrant.is_right() {
				x += radius;
			}
			if quadrant.is_bottom() {
				y += radius;
			}
		}
		Ok(TilePos::new(x as i32, y as i32))
	}

	/// Returns the path of the render tile at `pos` in a tree of the given depth.
	///
	/// # Errors
	/// Returns an error if `pos` lies outside the grid of `depth`.
	pub fn from_tile_pos(pos: TilePos, depth: u8) -> Result<TilePath> {
		ensure!(pos.fits_depth(depth), "tile {pos} is outside the grid of depth {depth}");
		let (lo, hi) = grid_range(depth)?;
		let (x, y) = (i64::from(pos.x), i64::from(pos.y));
		let (mut x_min, mut y_min, mut size) = (lo, lo, hi - lo);
		let mut path = Vec::with_capacity(depth as usize);
		for _ in 0..depth {
			size /= 2;
			let right = x >= x_min + size;
			let bottom = y >= y_min + size;
			if right {
				x_min += size;
			}
			if bottom {
				y_min += size;
			}
			path.push(Quadrant::from_halves(right, bottom));
		}
		Ok(TilePath { path })
	}

	/// Relative file name of the tile image: one directory per digit but the last,
	/// `base.<extension>` for the root.
	///
	/// ```
	/// use tiletree_core::TilePath;
	/// use std::path::PathBuf;
	///
	/// let path: TilePath = "132".parse().unwrap();
	/// assert_eq!(path.to_file_path("png"), PathBuf::from("1/3/2.png"));
	/// assert_eq!(TilePath::root().to_file_path("png"), PathBuf::from("base.png"));
	/// ```
	pub fn to_file_path(&self, extension: &str) -> PathBuf {
		let Some((last, dirs)) = self.path.split_last() else {
			return PathBuf::from(format!("base.{extension}"));
		};
		let mut file = PathBuf::new();
		for quadrant in dirs {
			file.push(quadrant.digit().to_string());
		}
		file.push(format!("{}.{extension}", last.digit()));
		file
	}
}

impl Display for TilePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for quadrant in &self.path {
			write!(f, "{}", quadrant.digit())?;
		}
		Ok(())
	}
}

impl Debug for TilePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TilePath(\"{self}\")")
	}
}

impl FromStr for TilePath {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let path = s
			.bytes()
			.map(|b| {
				ensure!(b.is_ascii_digit(), "invalid character {:?}", b as char);
				Quadrant::from_digit(b - b'0')
			})
			.collect::<Result<Vec<_>>>()
			.with_context(|| format!("parsing tile path {s:?}"))?;
		ensure!(
			path.len() <= MAX_DEPTH as usize,
			"tile path {s:?} is deeper than {MAX_DEPTH}"
		);
		Ok(TilePath { path })
	}
}

impl Add<Quadrant> for TilePath {
	type Output = TilePath;

	fn add(mut self, quadrant: Quadrant) -> TilePath {
		self.path.push(quadrant);
		self
	}
}

impl Add<Quadrant> for &TilePath {
	type Output = TilePath;

	fn add(self, quadrant: Quadrant) -> TilePath {
		self.child(quadrant)
	}
}

impl AddAssign<Quadrant> for TilePath {
	fn add_assign(&mut self, quadrant: Quadrant) {
		self.path.push(quadrant);
	}
}

impl From<Vec<Quadrant>> for TilePath {
	fn from(path: Vec<Quadrant>) -> Self {
		TilePath { path }
	}
}
