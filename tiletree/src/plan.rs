//! A render plan: the tiles of a world that have to be rendered again, split between workers.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fmt;
use tiletree_core::{ChunkIndex, RenderTasks, TileSet, World};

#[derive(Clone, Debug)]
pub struct RenderPlan {
	tile_set: TileSet,
	tasks: RenderTasks,
}

impl RenderPlan {
	/// Reads the chunk index named in `config` and plans the rendering of its world.
	pub fn from_config(config: &Config) -> Result<RenderPlan> {
		let grid = config.tile_grid()?;
		let world = ChunkIndex::from_path(&config.world, grid)?;
		RenderPlan::from_world(&world, config)
	}

	pub fn from_world(world: &dyn World, config: &Config) -> Result<RenderPlan> {
		let mut tile_set = TileSet::from_world(world).context("scanning world")?;
		if let Some(depth) = config.depth {
			tile_set
				.set_depth(depth)
				.with_context(|| format!("setting tree depth to {depth}"))?;
		}
		tile_set
			.scan_required(&config.required_by())
			.context("finding required tiles")?;
		let tasks = tile_set.find_render_tasks(config.worker_count())?;
		log::info!(
			"planned {} render tiles for {} workers",
			tasks.total(),
			tasks.workers().len()
		);
		Ok(RenderPlan { tile_set, tasks })
	}

	pub fn tile_set(&self) -> &TileSet {
		&self.tile_set
	}

	pub fn tasks(&self) -> &RenderTasks {
		&self.tasks
	}
}

impl fmt::Display for RenderPlan {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tile_set = &self.tile_set;
		writeln!(f, "tree depth: {} (min {})", tile_set.depth(), tile_set.min_depth())?;
		writeln!(
			f,
			"render tiles: {} of {} required",
			tile_set.required_render_tiles_count(),
			tile_set.available_render_tiles().len()
		)?;
		writeln!(
			f,
			"composite tiles: {} of {} required",
			tile_set.required_composite_tiles_count(),
			tile_set.available_composite_tiles().len()
		)?;
		for (level, paths) in tile_set.required_composite_levels() {
			writeln!(f, "  level {level}: {}", paths.len())?;
		}
		writeln!(f, "partition level: {}", self.tasks.partition_depth())?;
		for (index, subtrees) in self.tasks.workers().iter().enumerate() {
			let paths: Vec<String> = subtrees.keys().map(|path| format!("\"{path}\"")).collect();
			writeln!(
				f,
				"worker {index}: {} tiles [{}]",
				self.tasks.worker_weight(index),
				paths.join(", ")
			)?;
		}
		Ok(())
	}
}
