use std::{error::Error, io::Write, str::FromStr};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cubestate::prelude::*;

mod render;

/// Turn a Rubik's Cube from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence to apply on the cube, e.g. "front right' up"
	#[arg(short, long, default_value_t = String::new())]
	sequence: String,

	/// Set the cube from a string (the same format as when you output the cube via the "-c"-flag)
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// Scramble the cube with the given number of random moves before applying the sequence
	#[arg(short, long, num_args = 0..=1, default_missing_value = "20")]
	random: Option<usize>,

	/// Seed for the scramble, for reproducible scrambles
	#[arg(long)]
	seed: Option<u64>,

	/// Output the cube as a string rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Also print the move history
	#[arg(long, default_value_t = false)]
	history: bool,

	/// Print every step (initial state, scramble, sequence) as JSON
	#[arg(long, default_value_t = false)]
	json: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "warn")]
	log_level: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(filter)
		.init();

	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	run(&args, out.as_mut())
}

/// Build the cube the arguments describe and write it to `out`.
fn run(args: &Args, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
	// Parses a cube out of the cube string
	let mut cube = if args.set.is_empty() {
		CubeState::new()
	} else {
		CubeState::from_str(&args.set)?
	};
	let mut steps = StepLog::new(&cube);

	if let Some(count) = args.random {
		let mut rng = match args.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		let moves = scramble_sequence(&mut cube, count, &mut rng);
		tracing::info!(count, "scrambled");
		steps.record("Scramble", &cube, moves);
	}

	if !args.sequence.is_empty() {
		steps.apply(&mut cube, "Sequence", args.sequence.split_whitespace())?;
		tracing::info!(moves = %args.sequence, "applied sequence");
	}

	if args.json {
		serde_json::to_writer_pretty(&mut *out, &steps)?;
		writeln!(out)?;
		return Ok(());
	}

	// Print the resulting cube (either as a string or with colors)
	if args.char_print {
		writeln!(out, "{}", cube.serialize())?;
	} else {
		render::print_net(&mut *out, &cube)?;
	}

	if args.history {
		let moves: Vec<String> = cube.history().iter().map(|t| t.to_string()).collect();
		writeln!(out, "{}", moves.join(" "))?;
	}

	Ok(())
}
