use super::TileSet;
use crate::TilePath;
use std::cmp::Reverse;

impl TileSet {
	/// Counts the required render tiles below every composite tile.
	///
	/// Deeper tiles are counted first, so every composite tile only has to add up its children.
	pub(super) fn update_containing_render_tiles(&mut self) {
		self.containing_render_tiles.clear();

		let mut composites: Vec<&TilePath> = self.composite_tiles.iter().collect();
		composites.sort_by_key(|path| Reverse(path.depth()));

		for path in composites {
			let mut count = 0;
			for child in path.children() {
				if child.depth() == self.depth {
					if child
						.to_tile_pos(self.depth)
						.is_ok_and(|pos| self.required_render_tiles.contains(&pos))
					{
						count += 1;
					}
				} else if self.required_composite_tiles.contains(&child) {
					count += self.containing_render_tiles.get(&child).copied().unwrap_or(0);
				}
			}
			self.containing_render_tiles.insert(path.clone(), count);
		}
	}

	/// Number of required render tiles at or below a tile.
	pub fn containing_render_tiles(&self, path: &TilePath) -> usize {
		if path.depth() == self.depth {
			usize::from(self.is_tile_required(path))
		} else {
			self.containing_render_tiles.get(path).copied().unwrap_or(0)
		}
	}
}
