//! This is a simple example how to turn the cube.
//!
//! ```
//! use cubestate::prelude::*;
//!
//! let mut cube = CubeState::new();
//!
//! apply_moves(&mut cube, ["front", "right", "up'"]).unwrap();
//! assert!(!cube.is_solved());
//!
//! apply_moves(&mut cube, ["up", "right'", "front'"]).unwrap();
//! assert!(cube.is_solved());
//! assert_eq!(cube.history().len(), 6);
//! ```
//!
//! A counterclockwise move is written with a trailing `'`.
//! [`cube::state::CubeState::serialize`] gives the 54 stickers a renderer consumes.

pub mod cube;
pub mod sequencer;
pub mod steps;

pub mod prelude {
	pub use crate::cube::{state::*, turn::*, *};
	pub use crate::sequencer::*;
	pub use crate::steps::{StepLog, StepRecord};
}
