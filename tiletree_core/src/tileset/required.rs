//! Incremental rendering: deciding which tiles are stale.
//!
//! Two strategies exist. [`RequiredBy::Timestamp`] compares the chunk timestamps of every render
//! tile against the time of the last successful render. [`RequiredBy::Filetimes`] compares them
//! against the already rendered images instead, which also picks up a partially finished run.
//! In both cases staleness propagates upward only: a composite tile is required if something
//! below it is required.

use super::TileSet;
use crate::{OutputDir, TilePath, TilePos};
use anyhow::Result;
use std::collections::BTreeSet;

/// How the required tiles of a tile set are determined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequiredBy {
	/// Every tile is rendered.
	All,
	/// Render tiles with chunks newer than the given timestamp. `<= 0` renders everything.
	Timestamp(i64),
	/// Render tiles whose image is missing or older than their chunks.
	Filetimes(OutputDir),
}

impl TileSet {
	/// Runs one staleness pass and computes the number of render tiles below each composite tile.
	pub fn scan_required(&mut self, by: &RequiredBy) -> Result<()> {
		match by {
			RequiredBy::All => self.scan_required_by_timestamp(0),
			RequiredBy::Timestamp(last_change) => self.scan_required_by_timestamp(*last_change),
			RequiredBy::Filetimes(output) => self.scan_required_by_filetimes(output),
		}
	}

	/// Marks every render tile as required whose timestamp is newer than `last_change`.
	pub fn scan_required_by_timestamp(&mut self, last_change: i64) -> Result<()> {
		self.clear_required();

		self.required_render_tiles = self
			.render_tiles
			.iter()
			.filter(|tile| last_change <= 0 || self.tile_timestamp(tile).is_none_or(|t| t > last_change))
			.copied()
			.collect();
		self.required_composite_tiles = self.ancestors_of(&self.required_render_tiles)?;
		self.update_containing_render_tiles();

		log::info!(
			"{} of {} render tiles changed since {last_change}",
			self.required_render_tiles.len(),
			self.render_tiles.len()
		);
		Ok(())
	}

	/// Compares the rendered images in `output` with the tile timestamps.
	///
	/// A render tile is required if its image is missing or not newer than its chunks.
	/// A composite tile is also required if its image is missing or older than the image of one
	/// of its children.
	pub fn scan_required_by_filetimes(&mut self, output: &OutputDir) -> Result<()> {
		self.clear_required();

		for tile in &self.render_tiles {
			let path = TilePath::from_tile_pos(*tile, self.depth)?;
			let required = match output.modified(&path)? {
				None => true,
				Some(modified) => self.tile_timestamp(tile).is_none_or(|t| modified <= t),
			};
			if required {
				self.required_render_tiles.insert(*tile);
			}
		}

		let mut required = self.ancestors_of(&self.required_render_tiles)?;
		let mut stale = Vec::new();
		for path in &self.composite_tiles {
			if !required.contains(path) && self.is_composite_stale(output, path)? {
				stale.push(path.clone());
			}
		}
		if !stale.is_empty() {
			log::debug!("{} composite tiles are older than their children", stale.len());
		}
		for path in stale {
			for level in (0..=path.depth()).rev() {
				if !required.insert(path.ancestor(level)?) {
					break;
				}
			}
		}
		self.required_composite_tiles = required;
		self.update_containing_render_tiles();

		log::info!(
			"{} render tiles and {} composite tiles are outdated in {:?}",
			self.required_render_tiles.len(),
			self.required_composite_tiles.len(),
			output.root()
		);
		Ok(())
	}

	fn is_composite_stale(&self, output: &OutputDir, path: &TilePath) -> Result<bool> {
		let Some(modified) = output.modified(path)? else {
			return Ok(true);
		};
		for child in path.children() {
			if !self.has_tile(&child) {
				continue;
			}
			if output.modified(&child)?.is_some_and(|m| m > modified) {
				return Ok(true);
			}
		}
		Ok(false)
	}

	/// All composite tiles above the given render tiles.
	fn ancestors_of(&self, tiles: &BTreeSet<TilePos>) -> Result<BTreeSet<TilePath>> {
		let mut ancestors = BTreeSet::new();
		for tile in tiles {
			let path = TilePath::from_tile_pos(*tile, self.depth)?;
			for level in (0..self.depth).rev() {
				if !ancestors.insert(path.ancestor(level)?) {
					break;
				}
			}
		}
		Ok(ancestors)
	}
}
