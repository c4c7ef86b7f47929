use serde::Deserialize;
use tiletree_core::{OutputDir, RequiredBy};

/// Which tiles of a rendering run are rendered again.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Incremental {
	/// Render every tile.
	#[default]
	Full,

	/// Render tiles with chunks changed after `last_change` (seconds since the Unix epoch).
	Timestamp { last_change: i64 },

	/// Render tiles whose images are missing or older than their chunks.
	Filetimes,
}

impl Incremental {
	pub fn required_by(&self, output: &OutputDir) -> RequiredBy {
		match self {
			Incremental::Full => RequiredBy::All,
			Incremental::Timestamp { last_change } => RequiredBy::Timestamp(*last_change),
			Incremental::Filetimes => RequiredBy::Filetimes(output.clone()),
		}
	}
}
