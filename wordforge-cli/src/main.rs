use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use wordforge_core::engine::candidate_set::LengthBounds;
use wordforge_core::engine::generation_input::{GenerationInput, YearRange};
use wordforge_core::engine::generator::Generator;
use wordforge_core::engine::tokens::Profile;
use wordforge_core::error::Error;

mod io;

/// Generate a targeted password wordlist from names and optional dates.
#[derive(Parser, Debug)]
#[command(name = "wordforge", version, about = "Targeted password wordlist generator")]
struct Args {
	/// File containing target names, one per line
	#[arg(short, long, conflicts_with = "name", required_unless_present = "name")]
	input: Option<PathBuf>,

	/// Single target name
	#[arg(short, long)]
	name: Option<String>,

	/// Output wordlist path
	#[arg(short, long, default_value = "wordlist.txt")]
	output: PathBuf,

	/// Date of birth as DDMMYYYY
	#[arg(long)]
	dob: Option<String>,

	/// Inclusive year range, e.g. 1990-2050
	#[arg(long, value_parser = parse_year_span)]
	years: Option<(u16, u16)>,

	/// Minimum accepted candidate length
	#[arg(long, requires = "max_length")]
	min_length: Option<usize>,

	/// Maximum accepted candidate length
	#[arg(long, requires = "min_length")]
	max_length: Option<usize>,

	/// JSON profile overriding the default token literals and ceiling
	#[arg(long)]
	profile: Option<PathBuf>,
}

/// Parses a `FIRST-LAST` year span argument.
fn parse_year_span(raw: &str) -> Result<(u16, u16), String> {
	let (first, last) = raw
		.split_once('-')
		.ok_or_else(|| "expected FIRST-LAST, e.g. 1990-2050".to_owned())?;
	let first = first
		.trim()
		.parse::<u16>()
		.map_err(|_| format!("invalid year: {first}"))?;
	let last = last
		.trim()
		.parse::<u16>()
		.map_err(|_| format!("invalid year: {last}"))?;
	Ok((first, last))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	let profile: Profile = match &args.profile {
		Some(path) => {
			let contents = fs::read_to_string(path).map_err(Error::Io)?;
			serde_json::from_str(&contents)?
		}
		None => Profile::default(),
	};
	let generator = Generator::with_profile(profile);

	let names = match (&args.input, &args.name) {
		(Some(path), _) => io::read_names(path).map_err(Error::Io)?,
		(None, Some(name)) => vec![name.clone()],
		// clap enforces that one of the two is present
		(None, None) => Vec::new(),
	};
	if names.is_empty() {
		return Err(Error::InvalidInput("no target names supplied".to_owned()).into());
	}

	let year_range = match args.years {
		Some((first, last)) => Some(YearRange::new(first, last)?),
		None => None,
	};
	let length_bounds = match (args.min_length, args.max_length) {
		(Some(min), Some(max)) => Some(LengthBounds::new(min, max)?),
		_ => None,
	};

	// All input validation happens here, before any generation work.
	let mut inputs = Vec::with_capacity(names.len());
	for name in &names {
		let mut input = GenerationInput::new(name)?;
		if let Some(dob) = &args.dob {
			input.set_date_of_birth(dob)?;
		}
		input.year_range = year_range;
		input.length_bounds = length_bounds;
		inputs.push(input);
	}

	info!("loaded {} target name(s)", inputs.len());
	let candidates = generator.generate_batch(&inputs)?;
	info!("generated {} unique candidates", candidates.len());

	io::write_wordlist(&args.output, &candidates).map_err(Error::Io)?;
	info!("wordlist written to {}", args.output.display());

	Ok(())
}
