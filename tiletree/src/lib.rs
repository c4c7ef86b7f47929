//! Planning of incremental, parallel renderings of a tile tree.
//!
//! - [`config`]: YAML configuration of a rendering run
//! - [`plan`]: scans a world and splits the outdated tiles between workers
//!
//! The tile tree bookkeeping itself lives in [`tiletree_core`], re-exported as [`core`].

pub mod config;
pub mod plan;

pub use tiletree_core as core;
