use std::sync::mpsc;
use std::thread;

use crate::engine::candidate_set::CandidateSet;
use crate::engine::generation_input::GenerationInput;
use crate::engine::template::{self, Template};
use crate::engine::tokens::{NameVariants, Profile, TokenCounts, TokenSets};
use crate::error::Error;

/// High-level candidate generator.
///
/// # Responsibilities
/// - Hold the profile (token literals, year span, expansion ceiling) and
///   the template library for one engine instance
/// - Bound every run against the ceiling before doing any work
/// - Run the per-target pipeline: token build, composition, dedup, filter,
///   sort
/// - Fan a batch of independent targets out over worker threads and merge
///   the partial sets
///
/// Generation is fully deterministic: identical inputs produce identical
/// output sequences.
#[derive(Debug, Clone)]
pub struct Generator {
	profile: Profile,
	templates: Vec<Template>,
}

impl Default for Generator {
	fn default() -> Self {
		Self::new()
	}
}

impl Generator {
	/// Creates a generator with the default profile and the standard
	/// template library.
	pub fn new() -> Self {
		Self::with_profile(Profile::default())
	}

	/// Creates a generator with a custom profile.
	pub fn with_profile(profile: Profile) -> Self {
		Self { profile, templates: template::standard_library() }
	}

	pub fn profile(&self) -> &Profile {
		&self.profile
	}

	/// Upper bound on the raw compositions `input` would produce.
	///
	/// Pure arithmetic over the projected token counts; no token set is
	/// built. The bound intentionally ignores deduplication, so it can
	/// only over-count.
	pub fn estimate(&self, input: &GenerationInput) -> u64 {
		let counts = TokenCounts::project(&self.profile, input);
		self.templates
			.iter()
			.map(|t| t.estimate(&counts))
			.fold(0u64, u64::saturating_add)
	}

	/// Generates the sorted candidate wordlist for one target.
	///
	/// # Behavior
	/// - Rejects the configuration before any work if its expansion bound
	///   exceeds the profile ceiling.
	/// - Streams every template expansion into a deduplicating set, one
	///   candidate at a time.
	/// - Applies the optional length bounds as a final pass, then sorts.
	///
	/// # Errors
	/// - `Error::ConfigurationTooLarge` if the expansion bound exceeds
	///   the ceiling.
	pub fn generate(&self, input: &GenerationInput) -> Result<Vec<String>, Error> {
		let estimated = self.estimate(input);
		if estimated > self.profile.expansion_ceiling {
			return Err(Error::ConfigurationTooLarge {
				estimated,
				ceiling: self.profile.expansion_ceiling,
			});
		}
		Ok(self.generate_set(input).into_sorted_vec())
	}

	/// Generates the union wordlist for a batch of independent targets.
	///
	/// # Behavior
	/// - Validates the whole batch up front: the summed expansion bound
	///   must fit the ceiling before any target is processed.
	/// - Splits the targets into per-core chunks; each worker runs the
	///   single-target pipeline for its chunk and accumulates a partial
	///   set, which is sent back over a channel and merged.
	/// - Targets share no state, so workers never contend; the union is
	///   duplicate-safe and sorted once at the end.
	///
	/// # Errors
	/// - `Error::ConfigurationTooLarge` if the summed expansion bound
	///   exceeds the ceiling.
	pub fn generate_batch(&self, inputs: &[GenerationInput]) -> Result<Vec<String>, Error> {
		let mut total = 0u64;
		for input in inputs {
			total = total.saturating_add(self.estimate(input));
		}
		if total > self.profile.expansion_ceiling {
			return Err(Error::ConfigurationTooLarge {
				estimated: total,
				ceiling: self.profile.expansion_ceiling,
			});
		}
		if inputs.is_empty() {
			return Ok(Vec::new());
		}

		let cpus = num_cpus::get().max(1);
		let chunk_size = (inputs.len() + cpus - 1) / cpus;

		let (tx, rx) = mpsc::channel();
		for chunk in inputs.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<GenerationInput> = chunk.to_vec();
			let worker = self.clone();

			thread::spawn(move || {
				let mut partial = CandidateSet::new();
				for input in &chunk {
					partial.merge(worker.generate_set(input));
				}
				tx.send(partial).expect("Failed to send from thread");
			});
		}
		drop(tx);

		let mut union = CandidateSet::new();
		for partial in rx.iter() {
			union.merge(partial);
		}

		Ok(union.into_sorted_vec())
	}

	/// The single-target pipeline, without the ceiling check or the final
	/// sort. Callers validated the input at construction time.
	fn generate_set(&self, input: &GenerationInput) -> CandidateSet {
		let tokens = TokenSets::build(&self.profile, input);
		let variants = NameVariants::derive(input.name());

		let mut set = CandidateSet::new();
		{
			let mut sink = |candidate: String| {
				set.insert(candidate);
			};
			for template in &self.templates {
				template.expand(&variants, &tokens, &mut sink);
			}
		}

		if let Some(bounds) = input.length_bounds {
			set.retain_lengths(&bounds);
		}
		set
	}
}
