use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tiletree_core::{ChunkPos, MemoryWorld, TileGrid, TileSet};

/// A square world of `radius * 2` chunks per side, with a few recently changed chunks.
fn large_world(radius: i32) -> MemoryWorld {
	let grid = TileGrid::new(4, 1).unwrap();
	let mut world = MemoryWorld::new();
	for x in -radius..radius {
		for z in -radius..radius {
			let timestamp = if (x * 31 + z * 17) % 97 == 0 { 2000 } else { 1000 };
			world.add_chunk(&grid, ChunkPos::new(x, z), timestamp);
		}
	}
	world
}

fn benchmark_scan(c: &mut Criterion) {
	let world = large_world(256);

	c.bench_function("scan", |b| {
		b.iter(|| TileSet::from_world(black_box(&world)).unwrap());
	});
}

fn benchmark_find_render_tasks(c: &mut Criterion) {
	let world = large_world(256);
	let mut tile_set = TileSet::from_world(&world).unwrap();
	tile_set.scan_required_by_timestamp(1500).unwrap();

	c.bench_function("find_render_tasks", |b| {
		b.iter_batched(
			|| tile_set.clone(),
			|tile_set| black_box(tile_set.find_render_tasks(8).unwrap()),
			BatchSize::LargeInput,
		);
	});
}

criterion_group!(
	name = benches;
	config = Criterion::default().significance_level(0.1).sample_size(15);
	targets = benchmark_scan, benchmark_find_render_tasks
);
criterion_main!(benches);
