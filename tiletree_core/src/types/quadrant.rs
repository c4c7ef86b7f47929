use anyhow::{Result, bail};
use enumset::{EnumSet, EnumSetType};
use std::fmt;

/// Position of a child tile inside its parent.
///
/// The digits `1..=4` are used for paths and file names.
#[derive(EnumSetType, Debug, Hash, PartialOrd, Ord)]
pub enum Quadrant {
	TopLeft,
	TopRight,
	BottomLeft,
	BottomRight,
}

impl Quadrant {
	/// All four quadrants in digit order.
	pub fn all() -> EnumSet<Quadrant> {
		EnumSet::all()
	}

	pub fn digit(self) -> u8 {
		use Quadrant::*;
		match self {
			TopLeft => 1,
			TopRight => 2,
			BottomLeft => 3,
			BottomRight => 4,
		}
	}

	pub fn from_digit(digit: u8) -> Result<Quadrant> {
		use Quadrant::*;
		Ok(match digit {
			1 => TopLeft,
			2 => TopRight,
			3 => BottomLeft,
			4 => BottomRight,
			_ => bail!("quadrant digit must be 1, 2, 3 or 4, got {digit}"),
		})
	}

	pub fn from_halves(right: bool, bottom: bool) -> Quadrant {
		use Quadrant::*;
		match (right, bottom) {
			(false, false) => TopLeft,
			(true, false) => TopRight,
			(false, true) => BottomLeft,
			(true, true) => BottomRight,
		}
	}

	pub fn is_right(self) -> bool {
		matches!(self, Quadrant::TopRight | Quadrant::BottomRight)
	}

	pub fn is_bottom(self) -> bool {
		matches!(self, Quadrant::BottomLeft | Quadrant::BottomRight)
	}
}

impl fmt::Display for Quadrant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.digit())
	}
}
