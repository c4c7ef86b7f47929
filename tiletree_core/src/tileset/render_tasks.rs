//! Splitting the required render tiles between parallel workers.
//!
//! Workers get whole subtrees, so every worker can render the render tiles of a subtree and
//! compose its composite tiles without waiting for anybody else. The subtrees are taken from a
//! single level of the tree (the partition level) and weighted by the number of required render
//! tiles they contain.
//!
//! The subtrees are distributed greedily: heaviest subtree first, always to the worker with the
//! least work so far. This is approximately balanced, not optimal; the difference between the
//! busiest and the idlest worker is at most the weight of the heaviest subtree.

use super::TileSet;
use crate::TilePath;
use anyhow::{Result, ensure};
use itertools::Itertools;
use std::{
	cmp::Reverse,
	collections::{BTreeMap, BinaryHeap},
};

/// Subtrees assigned to each worker, with the number of render tiles they contain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderTasks {
	partition_depth: u8,
	workers: Vec<BTreeMap<TilePath, usize>>,
}

impl RenderTasks {
	/// The tree level the subtrees were taken from.
	pub fn partition_depth(&self) -> u8 {
		self.partition_depth
	}

	pub fn workers(&self) -> &[BTreeMap<TilePath, usize>] {
		&self.workers
	}

	pub fn into_workers(self) -> Vec<BTreeMap<TilePath, usize>> {
		self.workers
	}

	/// Number of render tiles assigned to one worker.
	pub fn worker_weight(&self, worker: usize) -> usize {
		self.workers.get(worker).map_or(0, |tasks| tasks.values().sum())
	}

	/// Number of render tiles assigned to all workers.
	pub fn total(&self) -> usize {
		self.workers.iter().flat_map(|tasks| tasks.values()).sum()
	}
}

impl TileSet {
	/// Number of required tiles on every level of the tree, from the root down to the render tiles.
	pub fn required_tiles_per_level(&self) -> Vec<usize> {
		let mut counts = vec![0; self.depth as usize + 1];
		for path in &self.required_composite_tiles {
			counts[path.depth() as usize] += 1;
		}
		counts[self.depth as usize] = self.required_render_tiles.len();
		counts
	}

	/// Chooses the tree level to split the work at.
	///
	/// This is the shallowest level with at least `worker_count` required tiles containing
	/// required render tiles. If no level has that many, the level with the most of them is used,
	/// the shallowest one on a tie. Composite tiles that are only stale themselves weigh nothing
	/// and are not counted.
	pub fn partition_depth(&self, worker_count: usize) -> Result<u8> {
		ensure!(worker_count > 0, "worker count must be > 0");
		let mut counts = vec![0; self.depth as usize + 1];
		for path in &self.required_composite_tiles {
			if self.containing_render_tiles(path) > 0 {
				counts[path.depth() as usize] += 1;
			}
		}
		counts[self.depth as usize] = self.required_render_tiles.len();
		let level = match counts.iter().position(|&count| count >= worker_count) {
			Some(level) => level,
			None => counts
				.iter()
				.enumerate()
				.rev()
				.max_by_key(|(_, count)| **count)
				.map_or(0, |(level, _)| level),
		};
		Ok(level as u8)
	}

	/// Splits the required render tiles between `worker_count` workers.
	///
	/// The sum of all assigned weights equals [`required_render_tiles_count`](TileSet::required_render_tiles_count).
	/// If there are fewer subtrees than workers, some workers get nothing.
	///
	/// # Errors
	/// Returns an error if `worker_count` is `0`.
	pub fn find_render_tasks(&self, worker_count: usize) -> Result<RenderTasks> {
		let level = self.partition_depth(worker_count)?;
		self.find_render_tasks_at_depth(worker_count, level)
	}

	/// Like [`find_render_tasks`](TileSet::find_render_tasks), but splits at a given level.
	pub fn find_render_tasks_at_depth(&self, worker_count: usize, level: u8) -> Result<RenderTasks> {
		ensure!(worker_count > 0, "worker count must be > 0");
		ensure!(
			level <= self.depth,
			"partition depth ({level}) must be <= tree depth ({})",
			self.depth
		);

		let units = self
			.required_tiles_at_level(level)?
			.into_iter()
			.sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

		let mut workers = vec![BTreeMap::new(); worker_count];
		let mut loads: BinaryHeap<Reverse<(usize, usize)>> = (0..worker_count).map(|i| Reverse((0, i))).collect();
		for (path, weight) in units {
			let Some(Reverse((load, worker))) = loads.pop() else {
				unreachable!("worker count is > 0");
			};
			workers[worker].insert(path, weight);
			loads.push(Reverse((load + weight, worker)));
		}

		let tasks = RenderTasks {
			partition_depth: level,
			workers,
		};
		log::debug!(
			"split {} render tiles at level {level} between {worker_count} workers: {:?}",
			tasks.total(),
			(0..worker_count).map(|i| tasks.worker_weight(i)).collect::<Vec<_>>()
		);
		Ok(tasks)
	}

	fn required_tiles_at_level(&self, level: u8) -> Result<Vec<(TilePath, usize)>> {
		if level == self.depth {
			self.required_render_tiles
				.iter()
				.map(|tile| Ok((TilePath::from_tile_pos(*tile, self.depth)?, 1)))
				.collect()
		} else {
			Ok(self
				.required_composite_tiles
				.iter()
				.filter(|path| path.depth() == level)
				.map(|path| (path.clone(), self.containing_render_tiles(path)))
				.collect())
		}
	}
}
