use thiserror::Error;

/// Errors reported by the generation engine and its boundary crates.
///
/// All input problems are detected synchronously, before any generation
/// work begins. A rejected configuration never produces partial output.
///
/// # Variants
/// - `InvalidInput`: rejected caller parameters (empty name, malformed
///   date of birth, inverted year range or length bounds).
/// - `ConfigurationTooLarge`: the combinatorial expansion of the requested
///   configuration exceeds the profile ceiling.
/// - `Io`: file read/write failure, propagated by consumer crates. The
///   engine itself never performs I/O.
#[derive(Debug, Error)]
pub enum Error {
	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("configuration would expand to {estimated} raw candidates, ceiling is {ceiling}")]
	ConfigurationTooLarge { estimated: u64, ceiling: u64 },

	#[error(transparent)]
	Io(#[from] std::io::Error),
}
