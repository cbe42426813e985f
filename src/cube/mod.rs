pub mod adjacency;
pub mod state;
pub mod turn;

/// The dimension of the cube
pub const CUBE_DIM: usize = 3;

/// The number of facelets per side
pub const CUBE_AREA: usize = CUBE_DIM * CUBE_DIM;

/// The number of sides of a cube
pub const NUM_SIDES: usize = 6;

/// The number of stickers on the whole cube
pub const NUM_STICKERS: usize = CUBE_AREA * NUM_SIDES;

/// Index of the center facelet, which its own face never moves
pub const CENTER: usize = CUBE_AREA / 2;

/// A side of the cube.
/// The discriminant is the index into the facelet grid of a [`state::CubeState`].
#[derive(
	Eq,
	PartialEq,
	Hash,
	Copy,
	Clone,
	Debug,
	strum::EnumCount,
	strum::EnumIter,
	strum::FromRepr,
	strum::Display,
	strum::EnumString,
	serde::Serialize,
	serde::Deserialize,
)]
#[strum(
	serialize_all = "lowercase",
	parse_err_ty = CubeError,
	parse_err_fn = invalid_face
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Face {
	// It must only contain unit fields!
	Up,
	Down,
	Front,
	Back,
	Left,
	Right,
}

/// All faces in discriminant order
pub const FACES: [Face; NUM_SIDES] = [
	Face::Up,
	Face::Down,
	Face::Front,
	Face::Back,
	Face::Left,
	Face::Right,
];

/// The order in which faces are concatenated by [`state::CubeState::serialize`].
/// Renderers depend on it, don't change it.
pub const SERIALIZE_ORDER: [Face; NUM_SIDES] = [
	Face::Up,
	Face::Right,
	Face::Front,
	Face::Down,
	Face::Left,
	Face::Back,
];

impl Face {
	/// The face on the other side of the cube.
	pub const fn opposite(self) -> Self {
		match self {
			Face::Up => Face::Down,
			Face::Down => Face::Up,
			Face::Front => Face::Back,
			Face::Back => Face::Front,
			Face::Left => Face::Right,
			Face::Right => Face::Left,
		}
	}

	/// The color this face carries on a solved cube.
	pub const fn solved_sticker(self) -> Sticker {
		match self {
			Face::Up => Sticker::White,
			Face::Down => Sticker::Yellow,
			Face::Front => Sticker::Red,
			Face::Back => Sticker::Orange,
			Face::Left => Sticker::Green,
			Face::Right => Sticker::Blue,
		}
	}
}

fn invalid_face(name: &str) -> CubeError {
	CubeError::InvalidFace(name.to_owned())
}

/// A sticker color.
/// Only identity matters, the names follow the solved baseline.
#[derive(
	Eq,
	PartialEq,
	Hash,
	Copy,
	Clone,
	Debug,
	strum::EnumCount,
	strum::EnumIter,
	serde::Serialize,
	serde::Deserialize,
)]
#[serde(into = "char", try_from = "char")]
#[repr(u8)]
pub enum Sticker {
	White,
	Yellow,
	Red,
	Orange,
	Green,
	Blue,
}

impl Sticker {
	/// The one-character symbol used in the serialized sticker string.
	pub const fn symbol(self) -> char {
		match self {
			Sticker::White => 'w',
			Sticker::Yellow => 'y',
			Sticker::Red => 'r',
			Sticker::Orange => 'o',
			Sticker::Green => 'g',
			Sticker::Blue => 'b',
		}
	}

	/// Inverse of [`Sticker::symbol`].
	pub const fn from_symbol(c: char) -> Option<Self> {
		let sticker = match c {
			'w' => Sticker::White,
			'y' => Sticker::Yellow,
			'r' => Sticker::Red,
			'o' => Sticker::Orange,
			'g' => Sticker::Green,
			'b' => Sticker::Blue,
			_ => return None,
		};
		Some(sticker)
	}

	/// Returns the ANSI-colorcode for the sticker.
	pub const fn ansi_color(self) -> &'static str {
		match self {
			Sticker::White => "\x1b[00m",
			Sticker::Yellow => "\x1b[93m",
			Sticker::Red => "\x1b[31m",
			Sticker::Orange => "\x1b[33m",
			Sticker::Green => "\x1b[32m",
			Sticker::Blue => "\x1b[34m",
		}
	}
}

impl From<Sticker> for char {
	fn from(val: Sticker) -> Self {
		val.symbol()
	}
}

impl TryFrom<char> for Sticker {
	type Error = String;

	fn try_from(c: char) -> Result<Self, Self::Error> {
		Sticker::from_symbol(c).ok_or_else(|| format!("unknown sticker symbol '{}'", c))
	}
}

/// Errors raised when a face or a move is named by text.
/// Validation always happens before the cube is touched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
	#[error("Invalid face: \"{0}\"")]
	InvalidFace(String),
	#[error("Invalid move token \"{token}\": unknown face \"{face}\"")]
	InvalidMoveToken { token: String, face: String },
}
