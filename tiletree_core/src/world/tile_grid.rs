use super::ChunkPos;
use crate::TilePos;
use anyhow::{Result, ensure};

/// Top-down projection of chunks onto render tiles.
///
/// A render tile covers `chunks_per_tile × chunks_per_tile` chunks. Chunks closer than
/// `overlap` chunks to the top or left border of their tile are drawn into the neighbouring
/// tiles as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGrid {
	chunks_per_tile: u32,
	overlap: u32,
}

impl TileGrid {
	pub fn new(chunks_per_tile: u32, overlap: u32) -> Result<TileGrid> {
		ensure!(chunks_per_tile > 0, "chunks_per_tile must be > 0");
		ensure!(
			overlap < chunks_per_tile,
			"overlap ({overlap}) must be smaller than chunks_per_tile ({chunks_per_tile})"
		);
		Ok(TileGrid { chunks_per_tile, overlap })
	}

	pub fn chunks_per_tile(&self) -> u32 {
		self.chunks_per_tile
	}

	pub fn overlap(&self) -> u32 {
		self.overlap
	}

	/// The render tile a chunk belongs to.
	pub fn tile_of(&self, chunk: ChunkPos) -> TilePos {
		let size = self.chunks_per_tile as i32;
		TilePos::new(chunk.x.div_euclid(size), chunk.z.div_euclid(size))
	}

	/// Every render tile a chunk is drawn into, its own tile first.
	pub fn tiles_of(&self, chunk: ChunkPos) -> Vec<TilePos> {
		let size = self.chunks_per_tile as i32;
		let overlap = self.overlap as i32;
		let tile = self.tile_of(chunk);
		let left = chunk.x.rem_euclid(size) < overlap;
		let top = chunk.z.rem_euclid(size) < overlap;

		let mut tiles = vec![tile];
		if left {
			tiles.push(tile - TilePos::new(1, 0));
		}
		if top {
			tiles.push(tile - TilePos::new(0, 1));
		}
		if left && top {
			tiles.push(tile - TilePos::new(1, 1));
		}
		tiles
	}
}

impl Default for TileGrid {
	fn default() -> Self {
		TileGrid {
			chunks_per_tile: 4,
			overlap: 0,
		}
	}
}
