use super::{ChunkEntry, ChunkPos, TileGrid, World};
use crate::TilePos;
use anyhow::Result;

/// A world held in memory.
///
/// Useful for tests and for embedding the tile set into a renderer that already knows its
/// chunks.
#[derive(Clone, Debug, Default)]
pub struct MemoryWorld {
	chunks: Vec<ChunkEntry>,
}

impl MemoryWorld {
	pub fn new() -> MemoryWorld {
		MemoryWorld::default()
	}

	/// Adds a chunk projected through `grid`.
	pub fn add_chunk(&mut self, grid: &TileGrid, pos: ChunkPos, timestamp: i64) {
		self.chunks.push(ChunkEntry {
			pos,
			timestamp,
			tiles: grid.tiles_of(pos),
		});
	}

	/// Adds a chunk covering exactly one render tile.
	pub fn add_tile(&mut self, tile: TilePos, timestamp: i64) {
		self.chunks.push(ChunkEntry {
			pos: ChunkPos::new(tile.x, tile.y),
			timestamp,
			tiles: vec![tile],
		});
	}

	pub fn len(&self) -> usize {
		self.chunks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chunks.is_empty()
	}
}

impl World for MemoryWorld {
	fn chunks(&self) -> Result<Vec<ChunkEntry>> {
		Ok(self.chunks.clone())
	}
}

impl<T: Into<TilePos>> FromIterator<(T, i64)> for MemoryWorld {
	fn from_iter<I: IntoIterator<Item = (T, i64)>>(iter: I) -> Self {
		let mut world = MemoryWorld::new();
		for (tile, timestamp) in iter {
			world.add_tile(tile.into(), timestamp);
		}
		world
	}
}
