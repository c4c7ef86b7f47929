//! The tile tree of a rendering run: which tiles exist, which are outdated, who renders what.

mod containing;
mod render_tasks;
mod required;
mod tile_set;

pub use render_tasks::RenderTasks;
pub use required::RequiredBy;
pub use tile_set::TileSet;
