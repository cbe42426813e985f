//! The permutation tables behind every face turn.
//!
//! A clockwise turn of a face moves its own eight outer facelets and one
//! band of three facelets on each of the four faces around it.
//! [`ADJACENCY`] lists those bands, [`TRANSFORM`] is the full
//! 54-sticker permutation generated from it at compile time.

use const_for::const_for;

use crate::cube::*;

/// A transformation "matrix" over all stickers.
/// Let t be the transformation, s the old state and n the new state:
/// n[i] = s[ t[i] ] holds true, where i = face * CUBE_AREA + facelet.
pub type Transform = [u8; NUM_STICKERS];

/// Three facelets of one face lying along the edge shared with a turned face.
/// The order of `indices` matters: the j-th facelet of a band receives the
/// j-th facelet of the next band in the cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Band {
	pub face: Face,
	pub indices: [usize; CUBE_DIM],
}

const fn band(face: Face, indices: [usize; CUBE_DIM]) -> Band {
	Band { face, indices }
}

/// Where each facelet of a face comes from when the face itself turns clockwise.
/// Corners cycle through 0, 2, 8, 6 and edges through 1, 5, 7, 3.
pub const FACE_CLOCKWISE: [usize; CUBE_AREA] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// The band cycle of a clockwise turn, indexed by `Face as usize`.
///
/// Band k takes the stickers of band k + 1, the last band takes those of the first.
/// Reversed index runs encode the twist of a shared edge.
#[rustfmt::skip]
pub const ADJACENCY: [[Band; 4]; NUM_SIDES] = [
	// up
	[band(Face::Front, [0, 1, 2]), band(Face::Right, [0, 1, 2]), band(Face::Back, [0, 1, 2]), band(Face::Left, [0, 1, 2])],
	// down
	[band(Face::Front, [6, 7, 8]), band(Face::Left, [6, 7, 8]), band(Face::Back, [6, 7, 8]), band(Face::Right, [6, 7, 8])],
	// front
	[band(Face::Up, [6, 7, 8]), band(Face::Left, [8, 5, 2]), band(Face::Down, [2, 1, 0]), band(Face::Right, [0, 3, 6])],
	// back
	[band(Face::Up, [0, 1, 2]), band(Face::Right, [2, 5, 8]), band(Face::Down, [8, 7, 6]), band(Face::Left, [6, 3, 0])],
	// left
	[band(Face::Up, [0, 3, 6]), band(Face::Back, [8, 5, 2]), band(Face::Down, [0, 3, 6]), band(Face::Front, [0, 3, 6])],
	// right
	[band(Face::Up, [2, 5, 8]), band(Face::Front, [2, 5, 8]), band(Face::Down, [2, 5, 8]), band(Face::Back, [6, 3, 0])],
];

const fn sticker_index(face: Face, facelet: usize) -> usize {
	face as usize * CUBE_AREA + facelet
}

const fn identity() -> Transform {
	let mut out = [0; NUM_STICKERS];

	const_for!(i in 0..NUM_STICKERS => {
		out[i] = i as u8;
	});

	out
}

/// Neutral Transformation: Does nothing
pub const T_BASE: Transform = identity();

/// Build the clockwise transformation of one face out of its band cycle.
const fn face_transform(face: Face) -> Transform {
	let mut out = T_BASE;

	const_for!(i in 0..CUBE_AREA => {
		out[sticker_index(face, i)] = sticker_index(face, FACE_CLOCKWISE[i]) as u8;
	});

	let cycle = ADJACENCY[face as usize];
	const_for!(k in 0..4 => {
		let dst = cycle[k];
		let src = cycle[(k + 1) % 4];
		const_for!(j in 0..CUBE_DIM => {
			out[sticker_index(dst.face, dst.indices[j])] =
				sticker_index(src.face, src.indices[j]) as u8;
		});
	});

	out
}

const fn generate_transformation_table() -> [Transform; NUM_SIDES] {
	let mut out = [T_BASE; NUM_SIDES];

	const_for!(i in 0..NUM_SIDES => {
		out[i] = face_transform(FACES[i]);
	});

	out
}

/// Clockwise transformations, indexed by `Face as usize`
pub const TRANSFORM: [Transform; NUM_SIDES] = generate_transformation_table();
