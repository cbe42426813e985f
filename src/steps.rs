//! Step records: a cube walked through labeled groups of moves.
//!
//! A demo or solver collaborator uses a [`StepLog`] to keep a snapshot of the
//! cube after every group, so a user interface can step through them.

use crate::{
	cube::{state::CubeState, turn::MoveToken, CubeError},
	sequencer,
};

/// The description of the first record of every log
pub const INITIAL_STEP: &str = "Initial state";

/// One labeled group of moves and the cube after applying them
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub struct StepRecord {
	pub description: String,
	pub cube: CubeState,
	pub moves: Vec<MoveToken>,
}

#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(transparent)]
pub struct StepLog {
	steps: Vec<StepRecord>,
}

impl StepLog {
	/// Start a log with a snapshot of `initial` and no moves.
	pub fn new(initial: &CubeState) -> Self {
		let mut log = Self::default();
		log.record(INITIAL_STEP, initial, Vec::new());
		log
	}

	/// Record a step whose moves were applied elsewhere, e.g. a scramble.
	pub fn record<D>(&mut self, description: D, cube: &CubeState, moves: Vec<MoveToken>)
	where
		D: Into<String>,
	{
		self.steps.push(StepRecord {
			description: description.into(),
			cube: cube.clone(),
			moves,
		});
	}

	/// Apply the tokens to `cube` and record the result.
	///
	/// On an invalid token nothing is recorded, but the moves before it
	/// remain applied to the cube.
	pub fn apply<D, I, S>(
		&mut self,
		cube: &mut CubeState,
		description: D,
		tokens: I,
	) -> Result<(), CubeError>
	where
		D: Into<String>,
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let before = cube.history().len();
		sequencer::apply_moves(cube, tokens)?;

		let moves = cube.history().as_slice()[before..].to_vec();
		self.record(description, cube, moves);
		Ok(())
	}

	pub fn steps(&self) -> &[StepRecord] {
		&self.steps
	}

	pub fn into_steps(self) -> Vec<StepRecord> {
		self.steps
	}

	pub fn last(&self) -> Option<&StepRecord> {
		self.steps.last()
	}

	/// All moves of all steps, in order.
	pub fn moves(&self) -> Vec<MoveToken> {
		self.steps.iter().flat_map(|step| step.moves.iter().copied()).collect()
	}
}
