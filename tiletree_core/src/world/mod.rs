//! The world (dataset) side of the tile tree.
//!
//! A [`World`] enumerates its populated chunks together with their last-modified timestamps
//! and the render tiles each chunk is drawn into. How chunks are read from disk is up to
//! the implementation; [`ChunkIndex`] reads a plain text index, [`MemoryWorld`] keeps the
//! chunks in memory.

mod chunk_index;
mod memory;
mod tile_grid;

pub use chunk_index::ChunkIndex;
pub use memory::MemoryWorld;
pub use tile_grid::TileGrid;

use crate::TilePos;
use anyhow::Result;
use std::fmt;

/// Position of a chunk in the world, in chunk units.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug, Default)]
pub struct ChunkPos {
	pub x: i32,
	pub z: i32,
}

impl ChunkPos {
	pub const fn new(x: i32, z: i32) -> ChunkPos {
		ChunkPos { x, z }
	}
}

impl fmt::Display for ChunkPos {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{},{}", self.x, self.z)
	}
}

/// A populated chunk: where it is, when it last changed, which render tiles it covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkEntry {
	pub pos: ChunkPos,
	pub timestamp: i64,
	pub tiles: Vec<TilePos>,
}

/// Source of the chunks a tile set is built from.
pub trait World {
	/// Enumerates every populated chunk. An empty world yields an empty list.
	fn chunks(&self) -> Result<Vec<ChunkEntry>>;
}
