use super::Incremental;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::{Path, PathBuf},
};
use tiletree_core::{OutputDir, RequiredBy, TileGrid};

fn default_chunks_per_tile() -> u32 {
	4
}

fn default_image_format() -> String {
	String::from("png")
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Chunk index of the world, one `x,z,timestamp` line per chunk.
	pub world: PathBuf,

	/// Directory of the rendered tile images.
	pub output_dir: PathBuf,

	/// Number of chunks along each side of a render tile.
	#[serde(default = "default_chunks_per_tile")]
	pub chunks_per_tile: u32,

	/// Chunks this close to the top or left border of a render tile are drawn into the neighbours too.
	#[serde(default)]
	pub tile_overlap: u32,

	/// Depth of the tile tree. Defaults to the smallest depth containing every render tile.
	pub depth: Option<u8>,

	/// Number of render workers. Defaults to the number of CPUs.
	pub workers: Option<usize>,

	/// File extension of the tile images.
	#[serde(default = "default_image_format")]
	pub image_format: String,

	/// Which tiles are rendered again.
	#[serde(default)]
	pub incremental: Incremental,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	/// Parses a config file. Relative paths in it are resolved against the file's directory.
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		let mut config =
			Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))?;
		if let Some(base) = path.parent() {
			config.resolve_paths(base);
		}
		Ok(config)
	}

	pub fn resolve_paths(&mut self, base: &Path) {
		self.world = base.join(&self.world);
		self.output_dir = base.join(&self.output_dir);
	}

	pub fn override_optional_workers(&mut self, workers: &Option<usize>) {
		if workers.is_some() {
			self.workers = *workers;
		}
	}

	pub fn override_optional_depth(&mut self, depth: &Option<u8>) {
		if depth.is_some() {
			self.depth = *depth;
		}
	}

	pub fn tile_grid(&self) -> Result<TileGrid> {
		TileGrid::new(self.chunks_per_tile, self.tile_overlap)
	}

	pub fn output(&self) -> OutputDir {
		OutputDir::with_extension(&self.output_dir, &self.image_format)
	}

	pub fn required_by(&self) -> RequiredBy {
		self.incremental.required_by(&self.output())
	}

	pub fn worker_count(&self) -> usize {
		self.workers.unwrap_or_else(num_cpus::get)
	}
}
