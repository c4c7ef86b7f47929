use crate::{MAX_DEPTH, TilePath, TilePos, World};
use anyhow::{Result, ensure};
use std::collections::{BTreeMap, BTreeSet};

/// All tiles of one rendering run.
///
/// The render tiles (leaves of the quadtree) are stored by position, all other tiles
/// (composite tiles) by path. Nothing is linked: parents and children are derived from
/// the paths.
///
/// A tile set is filled by [`scan`](TileSet::scan), then one of the staleness passes decides
/// which tiles are required (see [`RequiredBy`](super::RequiredBy)), and finally
/// [`find_render_tasks`](TileSet::find_render_tasks) splits the required tiles between workers.
#[derive(Clone, Debug, Default)]
pub struct TileSet {
	/// depth needed to contain every render tile
	pub(super) min_depth: u8,
	/// depth of the tree, i.e. the zoom level of the render tiles
	pub(super) depth: u8,

	pub(super) render_tiles: BTreeSet<TilePos>,
	pub(super) required_render_tiles: BTreeSet<TilePos>,
	/// highest chunk timestamp per render tile
	pub(super) tile_timestamps: BTreeMap<TilePos, i64>,

	pub(super) composite_tiles: BTreeSet<TilePath>,
	pub(super) required_composite_tiles: BTreeSet<TilePath>,

	/// number of required render tiles below each composite tile
	pub(super) containing_render_tiles: BTreeMap<TilePath, usize>,
}

impl TileSet {
	pub fn new() -> TileSet {
		TileSet::default()
	}

	/// Creates a tile set and scans the world.
	pub fn from_world(world: &dyn World) -> Result<TileSet> {
		let mut tile_set = TileSet::new();
		tile_set.scan(world)?;
		Ok(tile_set)
	}

	/// Finds the render tiles of a world, the depth needed for them and all composite tiles.
	///
	/// Any previous state is discarded. The required sets stay empty until a staleness pass runs.
	pub fn scan(&mut self, world: &dyn World) -> Result<()> {
		*self = TileSet::new();

		for chunk in world.chunks()? {
			for tile in chunk.tiles {
				ensure!(
					tile.fits_depth(MAX_DEPTH),
					"render tile {tile} of chunk {} is outside the largest supported grid",
					chunk.pos
				);
				self.render_tiles.insert(tile);
				self.tile_timestamps
					.entry(tile)
					.and_modify(|t| *t = (*t).max(chunk.timestamp))
					.or_insert(chunk.timestamp);
			}
		}

		self.min_depth = self.render_tiles.iter().map(TilePos::min_depth).max().unwrap_or(0);
		self.depth = self.min_depth;
		self.find_composite_tiles()?;

		log::info!(
			"found {} render tiles and {} composite tiles, depth {}",
			self.render_tiles.len(),
			self.composite_tiles.len(),
			self.depth
		);
		Ok(())
	}

	fn find_composite_tiles(&mut self) -> Result<()> {
		self.composite_tiles.clear();
		for tile in &self.render_tiles {
			let path = TilePath::from_tile_pos(*tile, self.depth)?;
			// walk up until an ancestor is already known, everything above it is known too
			for level in (0..self.depth).rev() {
				if !self.composite_tiles.insert(path.ancestor(level)?) {
					break;
				}
			}
		}
		Ok(())
	}

	pub(super) fn clear_required(&mut self) {
		self.required_render_tiles.clear();
		self.required_composite_tiles.clear();
		self.containing_render_tiles.clear();
	}

	pub fn min_depth(&self) -> u8 {
		self.min_depth
	}

	pub fn depth(&self) -> u8 {
		self.depth
	}

	/// Changes the depth of the tree, e.g. to render more zoom levels than needed.
	///
	/// The composite tiles are derived again and all required tiles are reset.
	///
	/// # Errors
	/// Returns an error if `depth` is smaller than [`min_depth`](TileSet::min_depth) or too deep.
	pub fn set_depth(&mut self, depth: u8) -> Result<()> {
		ensure!(
			depth >= self.min_depth,
			"depth ({depth}) must not be smaller than the minimum depth ({})",
			self.min_depth
		);
		ensure!(depth <= MAX_DEPTH, "depth ({depth}) must be <= {MAX_DEPTH}");
		if depth != self.depth {
			log::debug!("changing depth from {} to {depth}", self.depth);
			self.depth = depth;
			self.clear_required();
			self.find_composite_tiles()?;
		}
		Ok(())
	}

	/// Returns `true` if the tile exists, be it a render tile or a composite tile.
	pub fn has_tile(&self, path: &TilePath) -> bool {
		if path.depth() == self.depth {
			path
				.to_tile_pos(self.depth)
				.is_ok_and(|pos| self.render_tiles.contains(&pos))
		} else {
			self.composite_tiles.contains(path)
		}
	}

	/// Returns `true` if the tile has to be rendered or composed in this run.
	pub fn is_tile_required(&self, path: &TilePath) -> bool {
		if path.depth() == self.depth {
			path
				.to_tile_pos(self.depth)
				.is_ok_and(|pos| self.required_render_tiles.contains(&pos))
		} else {
			self.required_composite_tiles.contains(path)
		}
	}

	pub fn available_render_tiles(&self) -> &BTreeSet<TilePos> {
		&self.render_tiles
	}

	pub fn available_composite_tiles(&self) -> &BTreeSet<TilePath> {
		&self.composite_tiles
	}

	pub fn required_render_tiles(&self) -> &BTreeSet<TilePos> {
		&self.required_render_tiles
	}

	pub fn required_composite_tiles(&self) -> &BTreeSet<TilePath> {
		&self.required_composite_tiles
	}

	pub fn required_render_tiles_count(&self) -> usize {
		self.required_render_tiles.len()
	}

	pub fn required_composite_tiles_count(&self) -> usize {
		self.required_composite_tiles.len()
	}

	pub fn tile_timestamps(&self) -> &BTreeMap<TilePos, i64> {
		&self.tile_timestamps
	}

	pub fn tile_timestamp(&self, tile: &TilePos) -> Option<i64> {
		self.tile_timestamps.get(tile).copied()
	}

	/// Required composite tiles grouped by depth, deepest level first.
	///
	/// A composite tile can only be composed once its children exist, so the levels have to
	/// be processed in this order.
	pub fn required_composite_levels(&self) -> Vec<(u8, Vec<TilePath>)> {
		let mut levels: BTreeMap<u8, Vec<TilePath>> = BTreeMap::new();
		for path in &self.required_composite_tiles {
			levels.entry(path.depth()).or_default().push(path.clone());
		}
		levels.into_iter().rev().collect()
	}
}
