use std::str::FromStr;

use crate::cube::*;

/// The marker appended to a face name for a counterclockwise turn
pub const REVERSAL_MARKER: char = '\'';

/// Total number of ways to turn a face
pub const NUM_TURNWISES: usize = 2;

/// A face is either turned clockwise or counterclockwise (viewed from outside that face)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount)]
pub enum TurnWise {
	Clockwise,
	CounterClockwise,
}

impl TurnWise {
	pub const fn inverse(self) -> Self {
		match self {
			TurnWise::Clockwise => TurnWise::CounterClockwise,
			TurnWise::CounterClockwise => TurnWise::Clockwise,
		}
	}
}

impl std::fmt::Display for TurnWise {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			TurnWise::Clockwise => Ok(()),
			TurnWise::CounterClockwise => write!(f, "{}", REVERSAL_MARKER),
		}
	}
}

/// A single move: the face to turn and the direction.
///
/// The textual form is the lowercase face name, followed by
/// [`REVERSAL_MARKER`] for a counterclockwise turn: `"front"`, `"front'"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MoveToken {
	pub face: Face,
	pub wise: TurnWise,
}

impl MoveToken {
	pub const fn clockwise(face: Face) -> Self {
		Self {
			face,
			wise: TurnWise::Clockwise,
		}
	}

	pub const fn counter_clockwise(face: Face) -> Self {
		Self {
			face,
			wise: TurnWise::CounterClockwise,
		}
	}

	/// The move undoing this one.
	pub const fn inverse(self) -> Self {
		Self {
			face: self.face,
			wise: self.wise.inverse(),
		}
	}
}

impl std::fmt::Display for MoveToken {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}{}", self.face, self.wise)
	}
}

impl FromStr for MoveToken {
	type Err = CubeError;

	/// Only a single trailing marker is stripped, `"up''"` names the face `"up'"`.
	fn from_str(token: &str) -> Result<Self, Self::Err> {
		let (name, wise) = match token.strip_suffix(REVERSAL_MARKER) {
			Some(name) => (name, TurnWise::CounterClockwise),
			None => (token, TurnWise::Clockwise),
		};

		match Face::from_str(name) {
			Ok(face) => Ok(Self { face, wise }),
			Err(_) => Err(CubeError::InvalidMoveToken {
				token: token.to_owned(),
				face: name.to_owned(),
			}),
		}
	}
}

impl From<MoveToken> for String {
	fn from(val: MoveToken) -> Self {
		val.to_string()
	}
}

impl TryFrom<String> for MoveToken {
	type Error = CubeError;

	fn try_from(item: String) -> Result<Self, Self::Error> {
		Self::from_str(&item)
	}
}
