//! Applying move sequences written in move notation, and random scrambles.
//!
//! The sequencer holds no state, everything lives in the [`CubeState`] passed in.

use std::str::FromStr;

use rand::Rng;

use crate::cube::{state::CubeState, turn::*, *};

/// The number of moves of a default scramble
pub const DEFAULT_SCRAMBLE_LEN: usize = 20;

/// Parse whitespace separated move tokens, e.g. `"front right' up"`.
pub fn parse_moves(string: &str) -> Result<Vec<MoveToken>, CubeError> {
	string.split_whitespace().map(MoveToken::from_str).collect()
}

/// Apply the tokens in order.
///
/// Processing stops at the first token naming an unknown face, the moves before it
/// stay applied. Clone the cube beforehand if that's not wanted.
pub fn apply_moves<I, S>(cube: &mut CubeState, tokens: I) -> Result<(), CubeError>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	for token in tokens {
		let token = token.as_ref();
		match MoveToken::from_str(token) {
			Ok(turn) => cube.apply_move(turn),
			Err(e) => {
				tracing::debug!(token, "rejecting move token");
				return Err(e);
			}
		}
	}

	Ok(())
}

/// Generate a random move: every face and both directions are equally likely.
pub fn random_move<R>(rng: &mut R) -> MoveToken
where
	R: Rng + ?Sized,
{
	let face = FACES[rng.gen_range(0..NUM_SIDES)];
	if rng.gen_bool(0.5) {
		MoveToken::clockwise(face)
	} else {
		MoveToken::counter_clockwise(face)
	}
}

/// Scramble the cube with `count` random moves drawn from `rng`.
///
/// The history is cleared first, so afterwards it equals the returned sequence.
pub fn scramble_sequence<R>(cube: &mut CubeState, count: usize, rng: &mut R) -> Vec<MoveToken>
where
	R: Rng + ?Sized,
{
	cube.clear_history();

	let moves: Vec<MoveToken> = (0..count).map(|_| random_move(&mut *rng)).collect();
	cube.apply_moves(moves.iter().copied());

	tracing::debug!(count, "scrambled cube");
	moves
}

/// Same as [`scramble_sequence`], using the thread local random source.
pub fn scramble(cube: &mut CubeState, count: usize) -> Vec<MoveToken> {
	scramble_sequence(cube, count, &mut rand::thread_rng())
}

/// The sequence undoing `moves`: reversed, each move inverted.
pub fn inverse_sequence(moves: &[MoveToken]) -> Vec<MoveToken> {
	moves.iter().rev().map(|turn| turn.inverse()).collect()
}
