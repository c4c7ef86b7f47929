use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tiletree::core::{ChunkIndex, TileGrid, TileSet};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// chunk index of the world, one "x,z,timestamp" line per chunk
	#[arg(required = true, verbatim_doc_comment)]
	index: PathBuf,

	/// number of chunks along each side of a render tile
	#[arg(long, short, value_name = "INT", default_value_t = 4)]
	chunks_per_tile: u32,

	/// chunks this close to the top or left border of a tile are drawn into the neighbours too
	#[arg(long, short, value_name = "INT", default_value_t = 0)]
	overlap: u32,

	/// depth of the tile tree, defaults to the smallest depth containing every tile
	#[arg(long, short, value_name = "INT")]
	depth: Option<u8>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("scan {:?}", arguments.index);

	let grid = TileGrid::new(arguments.chunks_per_tile, arguments.overlap)?;
	let world = ChunkIndex::from_path(&arguments.index, grid)?;
	let mut tile_set = TileSet::from_world(&world)?;
	if let Some(depth) = arguments.depth {
		tile_set.set_depth(depth)?;
	}

	println!("tree depth: {} (min {})", tile_set.depth(), tile_set.min_depth());
	println!("render tiles: {}", tile_set.available_render_tiles().len());
	println!("composite tiles: {}", tile_set.available_composite_tiles().len());

	Ok(())
}
