use std::str::FromStr;

use strum::{EnumCount, IntoEnumIterator};

use crate::cube::{adjacency::*, turn::*, *};

type FaceletGrid = [[Sticker; CUBE_AREA]; NUM_SIDES];

const fn solved_grid() -> FaceletGrid {
	let mut out = [[Sticker::White; CUBE_AREA]; NUM_SIDES];
	let mut i = 0;
	while i < NUM_SIDES {
		out[i] = [FACES[i].solved_sticker(); CUBE_AREA];
		i += 1;
	}
	out
}

const SOLVED: FaceletGrid = solved_grid();

/// The moves applied to a cube, oldest first.
/// Moves are only ever appended, or the whole history is dropped at once.
#[derive(Clone, Default, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MoveHistory(Vec<MoveToken>);

impl MoveHistory {
	pub(crate) fn push(&mut self, token: MoveToken) {
		self.0.push(token);
	}

	pub(crate) fn clear(&mut self) {
		self.0.clear();
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn last(&self) -> Option<&MoveToken> {
		self.0.last()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, MoveToken> {
		self.0.iter()
	}

	pub fn as_slice(&self) -> &[MoveToken] {
		&self.0
	}
}

impl<'a> IntoIterator for &'a MoveHistory {
	type Item = &'a MoveToken;
	type IntoIter = std::slice::Iter<'a, MoveToken>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// A Rubik's Cube as six 3x3 facelet grids plus the moves applied to it.
///
/// Facelets are indexed row-major: 0, 1, 2 is the top row, 4 the center.
/// Every change of the grids goes through a face turn or [`CubeState::reset_to_solved`],
/// so the stickers are only ever permuted.
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CubeStateRepr")]
pub struct CubeState {
	faces: FaceletGrid,
	history: MoveHistory,
}

/// Unchecked form of a deserialized [`CubeState`]
#[derive(serde::Deserialize)]
struct CubeStateRepr {
	faces: FaceletGrid,
	history: MoveHistory,
}

impl TryFrom<CubeStateRepr> for CubeState {
	type Error = FromStrError;

	fn try_from(repr: CubeStateRepr) -> Result<Self, Self::Error> {
		let cube = Self {
			faces: repr.faces,
			history: repr.history,
		};
		cube.check_sticker_counts()?;
		Ok(cube)
	}
}

impl Default for CubeState {
	/// Creates a *solved* rubiks cube!
	fn default() -> Self {
		Self {
			faces: SOLVED,
			history: MoveHistory::default(),
		}
	}
}

impl CubeState {
	pub fn new() -> Self {
		Self::default()
	}

	/// The 9 facelets of a face in row-major order
	pub fn face(&self, face: Face) -> &[Sticker; CUBE_AREA] {
		&self.faces[face as usize]
	}

	pub fn history(&self) -> &MoveHistory {
		&self.history
	}

	/// Returns the 54 sticker symbols, faces in [`SERIALIZE_ORDER`].
	pub fn serialize(&self) -> String {
		SERIALIZE_ORDER
			.iter()
			.flat_map(|face| self.faces[*face as usize].iter())
			.map(|sticker| sticker.symbol())
			.collect()
	}

	/// True iff every face is a single color.
	pub fn is_solved(&self) -> bool {
		self.faces
			.iter()
			.all(|grid| grid.iter().all(|sticker| *sticker == grid[0]))
	}

	/// How often each sticker color occurs, indexed by `Sticker as usize`
	pub fn sticker_counts(&self) -> [usize; Sticker::COUNT] {
		let mut counts = [0; Sticker::COUNT];
		for sticker in self.faces.iter().flatten() {
			counts[*sticker as usize] += 1;
		}
		counts
	}

	/// Turn the face a quarter clockwise (viewed from outside that face).
	pub fn rotate_clockwise(&mut self, face: Face, record_move: bool) {
		tracing::trace!(%face, "rotate clockwise");
		self.apply_transform(&TRANSFORM[face as usize]);

		if record_move {
			self.history.push(MoveToken::clockwise(face));
		}
	}

	/// Turn the face a quarter counterclockwise.
	/// That's three clockwise turns, recorded as one reversed move.
	pub fn rotate_counter_clockwise(&mut self, face: Face, record_move: bool) {
		for _ in 0..3 {
			self.rotate_clockwise(face, false);
		}

		if record_move {
			self.history.push(MoveToken::counter_clockwise(face));
		}
	}

	/// Apply and record a single move.
	pub fn apply_move(&mut self, token: MoveToken) {
		match token.wise {
			TurnWise::Clockwise => self.rotate_clockwise(token.face, true),
			TurnWise::CounterClockwise => self.rotate_counter_clockwise(token.face, true),
		}
	}

	/// Apply the given sequence of moves.
	pub fn apply_moves<I>(&mut self, tokens: I)
	where
		I: IntoIterator<Item = MoveToken>,
	{
		for token in tokens {
			self.apply_move(token);
		}
	}

	/// Put every sticker back to the solved baseline and forget all moves.
	pub fn reset_to_solved(&mut self) {
		self.faces = SOLVED;
		self.history.clear();
	}

	/// Every color must appear exactly CUBE_AREA times.
	fn check_sticker_counts(&self) -> Result<(), FromStrError> {
		let counts = self.sticker_counts();
		for sticker in Sticker::iter() {
			if counts[sticker as usize] != CUBE_AREA {
				return Err(FromStrError::Count(sticker, counts[sticker as usize]));
			}
		}
		Ok(())
	}

	pub(crate) fn clear_history(&mut self) {
		self.history.clear();
	}

	fn apply_transform(&mut self, trans: &Transform) {
		let bef = self.faces;
		for (i, src) in trans.iter().enumerate() {
			let src = *src as usize;
			self.faces[i / CUBE_AREA][i % CUBE_AREA] = bef[src / CUBE_AREA][src % CUBE_AREA];
		}
	}
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FromStrError {
	#[error("The given string has length {0}, not {}", NUM_STICKERS)]
	Length(usize),
	#[error("Unknown sticker symbol '{symbol}' at position {position}")]
	Symbol { position: usize, symbol: char },
	#[error("The color {0:?} appears {1} times instead of {}", CUBE_AREA)]
	Count(Sticker, usize),
}

impl FromStr for CubeState {
	type Err = FromStrError;

	/// Parse the format written by [`CubeState::serialize`].
	/// Only the sticker multiset is checked, not whether the position is reachable.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let len = s.chars().count();
		if len != NUM_STICKERS {
			return Err(FromStrError::Length(len));
		}

		let mut cube = CubeState::new();
		for (position, symbol) in s.chars().enumerate() {
			let sticker =
				Sticker::from_symbol(symbol).ok_or(FromStrError::Symbol { position, symbol })?;
			let face = SERIALIZE_ORDER[position / CUBE_AREA];
			cube.faces[face as usize][position % CUBE_AREA] = sticker;
		}

		cube.check_sticker_counts()?;
		Ok(cube)
	}
}

// ===== Tests =====

#[cfg(test)]
mod tests {
	use super::*;

	/// Assert that the facelets of `face` carry the solved color of `color`
	fn expect_band(cube: &CubeState, face: Face, indices: [usize; 3], color: Face) {
		for i in indices {
			assert_eq!(
				cube.face(face)[i],
				color.solved_sticker(),
				"{} facelet {} should carry the color of {}",
				face,
				i,
				color
			);
		}
	}

	#[test]
	/// A fresh cube is solved and serializes in the fixed face order
	fn new_cube_serialization() {
		let cube = CubeState::new();
		let s = cube.serialize();

		assert!(cube.is_solved());
		assert!(cube.history().is_empty());
		assert_eq!(s.len(), NUM_STICKERS);
		assert_eq!(
			s,
			"wwwwwwwwwbbbbbbbbbrrrrrrrrryyyyyyyyygggggggggooooooooo"
		);
		assert_eq!(cube.sticker_counts(), [CUBE_AREA; Sticker::COUNT]);
	}

	#[test]
	/// Turning up moves the top rows of the side faces one face over
	fn up_turn_scenario() {
		let mut cube = CubeState::new();
		cube.rotate_clockwise(Face::Up, true);

		expect_band(&cube, Face::Front, [0, 1, 2], Face::Right);
		expect_band(&cube, Face::Right, [0, 1, 2], Face::Back);
		expect_band(&cube, Face::Back, [0, 1, 2], Face::Left);
		expect_band(&cube, Face::Left, [0, 1, 2], Face::Front);

		for face in [Face::Front, Face::Right, Face::Back, Face::Left] {
			expect_band(&cube, face, [3, 4, 5], face);
			expect_band(&cube, face, [6, 7, 8], face);
		}

		let solved = CubeState::new();
		assert_eq!(cube.face(Face::Up), solved.face(Face::Up));
		assert_eq!(cube.face(Face::Down), solved.face(Face::Down));
		assert_eq!(cube.history().as_slice(), &[MoveToken::clockwise(Face::Up)]);
	}

	#[test]
	/// The band cycles of the remaining faces, starting from solved
	fn other_turn_scenarios() {
		let mut cube = CubeState::new();
		cube.rotate_clockwise(Face::Down, true);
		expect_band(&cube, Face::Front, [6, 7, 8], Face::Left);
		expect_band(&cube, Face::Left, [6, 7, 8], Face::Back);
		expect_band(&cube, Face::Back, [6, 7, 8], Face::Right);
		expect_band(&cube, Face::Right, [6, 7, 8], Face::Front);

		let mut cube = CubeState::new();
		cube.rotate_clockwise(Face::Front, true);
		expect_band(&cube, Face::Up, [6, 7, 8], Face::Left);
		expect_band(&cube, Face::Left, [2, 5, 8], Face::Down);
		expect_band(&cube, Face::Down, [0, 1, 2], Face::Right);
		expect_band(&cube, Face::Right, [0, 3, 6], Face::Up);

		let mut cube = CubeState::new();
		cube.rotate_clockwise(Face::Back, true);
		expect_band(&cube, Face::Up, [0, 1, 2], Face::Right);
		expect_band(&cube, Face::Right, [2, 5, 8], Face::Down);
		expect_band(&cube, Face::Down, [6, 7, 8], Face::Left);
		expect_band(&cube, Face::Left, [0, 3, 6], Face::Up);

		let mut cube = CubeState::new();
		cube.rotate_clockwise(Face::Left, true);
		expect_band(&cube, Face::Up, [0, 3, 6], Face::Back);
		expect_band(&cube, Face::Back, [2, 5, 8], Face::Down);
		expect_band(&cube, Face::Down, [0, 3, 6], Face::Front);
		expect_band(&cube, Face::Front, [0, 3, 6], Face::Up);

		let mut cube = CubeState::new();
		cube.rotate_clockwise(Face::Right, true);
		expect_band(&cube, Face::Up, [2, 5, 8], Face::Front);
		expect_band(&cube, Face::Front, [2, 5, 8], Face::Down);
		expect_band(&cube, Face::Down, [2, 5, 8], Face::Back);
		expect_band(&cube, Face::Back, [0, 3, 6], Face::Up);
	}

	#[test]
	/// The turned face's own stickers follow the fixed corner and edge cycles
	fn own_face_cycle() {
		let mut cube = CubeState::new();
		// Mark the up face: a unique color at a corner and an edge
		cube.faces[Face::Up as usize][0] = Sticker::Red;
		cube.faces[Face::Up as usize][1] = Sticker::Blue;

		cube.rotate_clockwise(Face::Up, false);
		assert_eq!(cube.face(Face::Up)[2], Sticker::Red);
		assert_eq!(cube.face(Face::Up)[5], Sticker::Blue);

		cube.rotate_clockwise(Face::Up, false);
		assert_eq!(cube.face(Face::Up)[8], Sticker::Red);
		assert_eq!(cube.face(Face::Up)[7], Sticker::Blue);

		cube.rotate_clockwise(Face::Up, false);
		assert_eq!(cube.face(Face::Up)[6], Sticker::Red);
		assert_eq!(cube.face(Face::Up)[3], Sticker::Blue);
		assert!(cube.history().is_empty());
	}

	#[test]
	/// Every single turn from solved breaks the solved state
	fn single_turn_unsolves() {
		for face in Face::iter() {
			let mut cube = CubeState::new();
			cube.rotate_clockwise(face, true);
			assert!(!cube.is_solved(), "{} turn", face);

			let mut cube = CubeState::new();
			cube.rotate_counter_clockwise(face, true);
			assert!(!cube.is_solved(), "{}' turn", face);
		}
	}

	#[test]
	/// Counterclockwise equals three clockwise turns but is recorded once
	fn counter_clockwise_is_three_clockwise() {
		let mut scrambled = CubeState::new();
		scrambled.apply_moves(
			["front", "right'", "up", "back", "left'", "down"]
				.iter()
				.map(|t| t.parse::<MoveToken>().unwrap()),
		);

		for face in Face::iter() {
			let mut cube_c = scrambled.clone();
			cube_c.rotate_counter_clockwise(face, true);

			let mut cube_n = scrambled.clone();
			for _ in 0..3 {
				cube_n.rotate_clockwise(face, false);
			}

			assert_eq!(cube_c.faces, cube_n.faces);
			assert_eq!(cube_c.history().len(), scrambled.history().len() + 1);
			assert_eq!(
				cube_c.history().last(),
				Some(&MoveToken::counter_clockwise(face))
			);
			assert_eq!(cube_n.history(), scrambled.history());
		}
	}

	#[test]
	/// Unrecorded turns leave the history alone
	fn record_flag() {
		let mut cube = CubeState::new();
		cube.rotate_clockwise(Face::Right, false);
		cube.rotate_counter_clockwise(Face::Left, false);
		assert!(cube.history().is_empty());
		assert!(!cube.is_solved());

		cube.rotate_clockwise(Face::Right, true);
		cube.rotate_counter_clockwise(Face::Left, true);
		let recorded: Vec<String> = cube.history().iter().map(|t| t.to_string()).collect();
		assert_eq!(recorded, vec!["right", "left'"]);
	}

	#[test]
	/// Clones share nothing with the original
	fn clone_is_independent() {
		let mut cube = CubeState::new();
		cube.rotate_clockwise(Face::Front, true);

		let copy = cube.clone();
		cube.rotate_clockwise(Face::Up, true);

		assert_ne!(copy, cube);
		assert_eq!(copy.history().len(), 1);
		assert_eq!(cube.history().len(), 2);
	}

	#[test]
	/// Reset restores the baseline and drops the history
	fn reset() {
		let mut cube = CubeState::new();
		for face in Face::iter() {
			cube.rotate_clockwise(face, true);
		}
		assert!(!cube.is_solved());

		cube.reset_to_solved();
		assert!(cube.is_solved());
		assert!(cube.history().is_empty());
		assert_eq!(cube, CubeState::new());
	}

	#[test]
	/// Check the conversion between CubeState and Strings
	fn string_conversion() {
		let mut cube = CubeState::new();
		for face in Face::iter() {
			cube.rotate_clockwise(face, false);
			cube.rotate_counter_clockwise(face.opposite(), false);

			let s = cube.serialize();
			match CubeState::from_str(&s) {
				Ok(c) => assert_eq!(c, cube),
				Err(e) => panic!("CubeState conversion failed: {}", e),
			}
		}
	}

	#[test]
	fn string_conversion_errors() {
		assert_eq!(CubeState::from_str("www"), Err(FromStrError::Length(3)));

		let mut s = CubeState::new().serialize();
		s.replace_range(10..11, "x");
		assert_eq!(
			CubeState::from_str(&s),
			Err(FromStrError::Symbol {
				position: 10,
				symbol: 'x'
			})
		);

		let mut s = CubeState::new().serialize();
		s.replace_range(0..1, "b");
		assert_eq!(
			CubeState::from_str(&s),
			Err(FromStrError::Count(Sticker::White, 8))
		);
	}

	#[test]
	/// Deserializing checks the sticker counts like parsing does
	fn deserialize_checks_stickers() {
		let mut cube = CubeState::new();
		cube.rotate_clockwise(Face::Front, true);
		cube.rotate_counter_clockwise(Face::Left, true);
		let json = serde_json::to_value(&cube).unwrap();
		assert_eq!(serde_json::from_value::<CubeState>(json).unwrap(), cube);

		let white = CubeState {
			faces: [[Sticker::White; CUBE_AREA]; NUM_SIDES],
			history: MoveHistory::default(),
		};
		let json = serde_json::to_value(&white).unwrap();
		let err = serde_json::from_value::<CubeState>(json).unwrap_err();
		assert!(err.to_string().contains("appears 54 times"), "{}", err);
	}
}
