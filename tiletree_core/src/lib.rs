//! Bookkeeping of the tile tree of a zoomable map.
//!
//! The map is a quadtree of tiles. Its leaves, the render tiles, are rendered from the chunks
//! of a [`World`]; every other tile is a composite tile, composed from its up to four children.
//! A [`TileSet`] finds the tiles of a world, decides which of them are outdated and splits the
//! work between parallel workers.
//!
//! ```
//! use tiletree_core::*;
//!
//! let world: MemoryWorld = [((-1, -1), 50), ((0, 0), 150)].into_iter().collect();
//! let mut tile_set = TileSet::from_world(&world).unwrap();
//! assert_eq!(tile_set.depth(), 1);
//!
//! tile_set.scan_required(&RequiredBy::Timestamp(100)).unwrap();
//! assert_eq!(tile_set.required_render_tiles_count(), 1);
//!
//! let tasks = tile_set.find_render_tasks(2).unwrap();
//! assert_eq!(tasks.total(), 1);
//! ```

pub mod output;
pub mod tileset;
pub mod types;
pub mod world;

pub use output::OutputDir;
pub use tileset::*;
pub use types::*;
pub use world::*;
