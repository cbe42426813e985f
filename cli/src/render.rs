use std::io::Write;

use cubestate::prelude::*;

/// Write the cube as an unfolded net with ANSI-colors.
///
/// ```text
///        U
///  L  F  R  B
///        D
/// ```
pub fn print_net<W: Write + ?Sized>(out: &mut W, cube: &CubeState) -> std::io::Result<()> {
	// Generate a space depending on the size of CUBE_DIM
	let space: String = " ".repeat(2 * CUBE_DIM + 1);

	let cell = |face: Face, x: usize, y: usize| cube.face(face)[x + y * CUBE_DIM];

	// Print Up-side
	for j in 0..CUBE_DIM {
		write!(out, "{}", space)?;
		for i in 0..CUBE_DIM {
			write!(out, "{}▀ ", cell(Face::Up, i, j).ansi_color())?;
		}
		writeln!(out)?;
	}

	// Print Left, Front, Right, Back
	const SIDES: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];
	for j in 0..CUBE_DIM {
		for s in SIDES {
			for i in 0..CUBE_DIM {
				write!(out, "{}▄ ", cell(s, i, j).ansi_color())?;
			}
			write!(out, " ")?;
		}
		writeln!(out)?;
	}
	writeln!(out)?;

	// Print Down-side
	for j in 0..CUBE_DIM {
		write!(out, "{}", space)?;
		for i in 0..CUBE_DIM {
			write!(out, "{}▀ ", cell(Face::Down, i, j).ansi_color())?;
		}
		writeln!(out)?;
	}
	// Reset ansii color
	writeln!(out, "\x1b[00m")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	/// The net has a line per facelet row plus the separator and the reset
	fn net_layout() {
		let mut buf = Vec::new();
		print_net(&mut buf, &CubeState::new()).unwrap();
		let text = String::from_utf8(buf).unwrap();

		assert_eq!(text.lines().count(), 3 * CUBE_DIM + 2);
		assert_eq!(text.matches('▄').count(), 4 * CUBE_AREA);
		assert_eq!(text.matches('▀').count(), 2 * CUBE_AREA);
	}
}
