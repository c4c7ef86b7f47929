//! A world described by a plain text chunk index.
//!
//! Every non-empty line lists one populated chunk as `x,z,timestamp`. Lines starting with
//! `#` are comments.
//!
//! ```text
//! # x,z,timestamp
//! 0,0,1700000000
//! -1,3,1700000512
//! ```

use super::{ChunkEntry, ChunkPos, TileGrid, World};
use anyhow::{Context, Result, bail};
use std::{
	fs::File,
	io::{BufRead, BufReader, Read},
	path::Path,
};

/// Chunks read from a chunk index, projected onto render tiles through a [`TileGrid`].
#[derive(Clone, Debug)]
pub struct ChunkIndex {
	chunks: Vec<ChunkEntry>,
}

impl ChunkIndex {
	pub fn from_path(path: &Path, grid: TileGrid) -> Result<ChunkIndex> {
		let file = File::open(path).with_context(|| format!("opening chunk index {path:?}"))?;
		ChunkIndex::from_reader(BufReader::new(file), grid).with_context(|| format!("reading chunk index {path:?}"))
	}

	pub fn from_reader<R: Read>(reader: R, grid: TileGrid) -> Result<ChunkIndex> {
		let mut chunks = Vec::new();
		for (index, line) in BufReader::new(reader).lines().enumerate() {
			let line = line?;
			let line = line.trim();
			if line.is_empty() || line.starts_with('#') {
				continue;
			}
			let (pos, timestamp) = parse_line(line).with_context(|| format!("error in line {}", index + 1))?;
			chunks.push(ChunkEntry {
				pos,
				timestamp,
				tiles: grid.tiles_of(pos),
			});
		}
		log::debug!("read {} chunks from chunk index", chunks.len());
		Ok(ChunkIndex { chunks })
	}

	pub fn from_string(text: &str, grid: TileGrid) -> Result<ChunkIndex> {
		ChunkIndex::from_reader(text.as_bytes(), grid)
	}
}

fn parse_line(line: &str) -> Result<(ChunkPos, i64)> {
	let fields: Vec<&str> = line.split(',').map(str::trim).collect();
	let [x, z, timestamp] = fields.as_slice() else {
		bail!("expected 3 fields 'x,z,timestamp', found {}", fields.len());
	};
	let x = x.parse().with_context(|| format!("invalid chunk x {x:?}"))?;
	let z = z.parse().with_context(|| format!("invalid chunk z {z:?}"))?;
	let timestamp = timestamp
		.parse()
		.with_context(|| format!("invalid timestamp {timestamp:?}"))?;
	Ok((ChunkPos::new(x, z), timestamp))
}

impl World for ChunkIndex {
	fn chunks(&self) -> Result<Vec<ChunkEntry>> {
		Ok(self.chunks.clone())
	}
}
