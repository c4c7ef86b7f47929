//! Value types of the tile tree: render tile positions, quadrants and tile paths.

mod quadrant;
pub use quadrant::*;

mod tile_path;
pub use tile_path::*;

mod tile_pos;
pub use tile_pos::*;
