//! The rendered tile images on disk.
//!
//! Tile images are stored like the tree itself. The root tile is `base.<ext>`, its children
//! are `1.<ext>` to `4.<ext>`, and the children of tile `1` live in the directory `1/`:
//! ```text
//! <root>/base.png
//! <root>/1.png
//! <root>/1/3.png
//! <root>/1/3/4.png
//! ```
//!
//! The tile set only needs to know whether a tile image exists and when it was last written.

use crate::TilePath;
use anyhow::{Context, Result};
use std::{
	fs,
	io::ErrorKind,
	path::{Path, PathBuf},
	time::UNIX_EPOCH,
};

/// An output directory of rendered tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputDir {
	root: PathBuf,
	extension: String,
}

impl OutputDir {
	pub fn new(root: &Path) -> OutputDir {
		OutputDir::with_extension(root, "png")
	}

	pub fn with_extension(root: &Path, extension: &str) -> OutputDir {
		OutputDir {
			root: root.to_path_buf(),
			extension: extension.to_string(),
		}
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn extension(&self) -> &str {
		&self.extension
	}

	/// Absolute file name of a tile image.
	pub fn tile_file(&self, path: &TilePath) -> PathBuf {
		self.root.join(path.to_file_path(&self.extension))
	}

	pub fn exists(&self, path: &TilePath) -> bool {
		self.tile_file(path).is_file()
	}

	/// Modification time of a tile image in seconds since the Unix epoch,
	/// `None` if the image does not exist.
	pub fn modified(&self, path: &TilePath) -> Result<Option<i64>> {
		let file = self.tile_file(path);
		let metadata = match fs::metadata(&file) {
			Ok(metadata) => metadata,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(err).with_context(|| format!("reading metadata of {file:?}")),
		};
		let modified = metadata
			.modified()
			.with_context(|| format!("reading modification time of {file:?}"))?;
		let seconds = match modified.duration_since(UNIX_EPOCH) {
			Ok(duration) => duration.as_secs() as i64,
			Err(before_epoch) => -(before_epoch.duration().as_secs() as i64),
		};
		Ok(Some(seconds))
	}
}
