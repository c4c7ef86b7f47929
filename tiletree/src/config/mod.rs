//! Configuration of a rendering run.
//!
//! A run is described by a YAML file (`render.yml`):
//!
//! ```yaml
//! world: chunks.csv
//! output_dir: tiles
//! chunks_per_tile: 4
//! workers: 8
//! incremental:
//!   mode: timestamp
//!   last_change: 1700000000
//! ```
//!
//! - [`Config`]: top-level configuration and YAML parser
//! - [`Incremental`]: which tiles are rendered again

mod incremental;
mod main;

pub use incremental::Incremental;
pub use main::Config;
