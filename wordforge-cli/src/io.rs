use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Reads a names file and returns its non-empty trimmed lines.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Blank lines and surrounding whitespace are dropped
pub fn read_names<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Writes the wordlist, one candidate per line, UTF-8, `\n` terminated.
pub fn write_wordlist<P: AsRef<Path>>(filename: P, candidates: &[String]) -> io::Result<()> {
	let file = File::create(filename)?;
	let mut writer = BufWriter::new(file);
	for candidate in candidates {
		writer.write_all(candidate.as_bytes())?;
		writer.write_all(b"\n")?;
	}
	writer.flush()
}
