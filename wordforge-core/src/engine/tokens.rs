use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::engine::generation_input::{DateSpec, GenerationInput};

/// Curated numeric sequences observed in leaked password corpora:
/// short runs, reversed runs, repeated digits and common PIN-like values.
const NUMERIC_LITERALS: &[&str] = &[
	"1", "12", "123", "1234", "12345", "123456", "123456789", "21", "321",
	"4321", "54321", "654321", "987654321", "123321", "786", "007", "69", "00",
	"000", "111", "222", "333", "444", "555", "666", "777", "888", "999",
	"0000", "1111", "2222", "3333", "4444", "5555", "6666", "7777", "8888", "9999",
];

/// Symbol alphabet. The empty entry means "no symbol"; templates with a
/// dedicated symbol slot skip it because the symbol-free families already
/// produce those strings.
const SYMBOLS: &[&str] = &["", "@", "!", "#", "$", "*", "~", "&", "%", "^", "_", "-"];

/// Common filler words combined with the name, independent of the target.
const COMMON_WORDS: &[&str] = &["india", "king", "queen", "boss", "love", "pass"];

/// Year span used for the numeric family when no explicit range is given.
const DEFAULT_YEAR_SPAN: (u16, u16) = (1990, 2050);

/// Default bound on the raw composition count of a single run or batch.
const DEFAULT_EXPANSION_CEILING: u64 = 100_000_000;

/// Configuration of the token families and safety bounds for one engine.
///
/// A `Profile` parameterizes the engine instead of hard-coding literals at
/// the composition sites, so one engine serves every target. Profiles are
/// serializable; consumer crates may load one from a file to override the
/// defaults.
///
/// # Invariants
/// - `symbols` may contain one empty entry ("no symbol")
/// - `default_years` is an inclusive `(first, last)` pair with `first <= last`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
	/// Literal numeric sequences, unioned with 0-99 and the year span.
	pub numeric_literals: Vec<String>,

	/// Symbol tokens used in the symbol-slot templates.
	pub symbols: Vec<String>,

	/// Common-word tokens appended to name variants.
	pub words: Vec<String>,

	/// Inclusive year span for the numeric family when the input carries
	/// no explicit year range.
	pub default_years: (u16, u16),

	/// Upper bound on raw compositions before a run is rejected.
	pub expansion_ceiling: u64,
}

impl Default for Profile {
	fn default() -> Self {
		Self {
			numeric_literals: NUMERIC_LITERALS.iter().map(|s| s.to_string()).collect(),
			symbols: SYMBOLS.iter().map(|s| s.to_string()).collect(),
			words: COMMON_WORDS.iter().map(|s| s.to_string()).collect(),
			default_years: DEFAULT_YEAR_SPAN,
			expansion_ceiling: DEFAULT_EXPANSION_CEILING,
		}
	}
}

/// Appends `value` to `values` unless it was seen before.
///
/// Token families are sets; insertion order is kept only so iteration is
/// deterministic without an extra sort.
fn push_unique(values: &mut Vec<String>, seen: &mut HashSet<String>, value: String) {
	if seen.insert(value.clone()) {
		values.push(value);
	}
}

/// Uppercases the first character and lowercases the rest.
///
/// UTF-8 safe: operates on characters, not bytes.
fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first
			.to_uppercase()
			.chain(chars.flat_map(|c| c.to_lowercase()))
			.collect(),
		None => String::new(),
	}
}

/// Applies the full leet substitution map to `s`.
fn leet(s: &str) -> String {
	s.chars()
		.map(|c| match c {
			'a' => '@',
			'e' => '3',
			'i' => '1',
			'o' => '0',
			's' => '5',
			'l' => '1',
			't' => '7',
			other => other,
		})
		.collect()
}

/// Applies the reduced substitution map (`a` and `e` only) used by one of
/// the hard-coded high-value patterns.
pub(crate) fn leet_light(s: &str) -> String {
	s.chars()
		.map(|c| match c {
			'a' => '@',
			'e' => '3',
			other => other,
		})
		.collect()
}

/// The casing and substitution variants of one target name.
///
/// # Responsibilities
/// - Derive every variant once per run: lowercase, uppercase, capitalized,
///   space-removed, the 3-character prefix forms (names longer than 3
///   characters only) and the leet form (only when it differs from the
///   lowercase form).
/// - Keep the collection free of duplicates so no template expands the
///   same variant twice.
///
/// # Invariants
/// - `forms` is non-empty for a non-empty name and contains no duplicates
/// - `lower` and `capitalized` are always available for the literal
///   high-value patterns, whether or not they also appear in `forms`
#[derive(Debug)]
pub(crate) struct NameVariants {
	forms: Vec<String>,
	lower: String,
	capitalized: String,
}

impl NameVariants {
	/// Derives all variants of `name`.
	///
	/// # Behavior
	/// - Casing variants are always produced.
	/// - The space-removed variant keeps the original casing.
	/// - Prefix variants take the first 3 characters, lowercase and
	///   capitalized, only when the name is longer than 3 characters.
	/// - The leet variant substitutes on the lowercase form and is kept
	///   only if the substitution changed anything.
	pub(crate) fn derive(name: &str) -> Self {
		let lower = name.to_lowercase();
		let capitalized = capitalize(name);

		let mut forms = Vec::new();
		let mut seen = HashSet::new();

		push_unique(&mut forms, &mut seen, lower.clone());
		push_unique(&mut forms, &mut seen, name.to_uppercase());
		push_unique(&mut forms, &mut seen, capitalized.clone());
		push_unique(&mut forms, &mut seen, name.replace(' ', ""));

		if name.chars().count() > 3 {
			let prefix: String = name.chars().take(3).collect();
			push_unique(&mut forms, &mut seen, prefix.to_lowercase());
			push_unique(&mut forms, &mut seen, capitalize(&prefix));
		}

		let leet_form = leet(&lower);
		if leet_form != lower {
			push_unique(&mut forms, &mut seen, leet_form);
		}

		Self { forms, lower, capitalized }
	}

	/// All distinct variants, in derivation order.
	pub(crate) fn forms(&self) -> &[String] {
		&self.forms
	}

	/// The lowercase form of the raw name.
	pub(crate) fn lower(&self) -> &str {
		&self.lower
	}

	/// The capitalized form of the raw name.
	pub(crate) fn capitalized(&self) -> &str {
		&self.capitalized
	}
}

/// The token families derived for one run.
///
/// Built once per target from the profile and the input parameters, then
/// borrowed by every template expansion. Families are deduplicated at
/// build time so downstream composition never repeats work on identical
/// tokens.
#[derive(Debug)]
pub(crate) struct TokenSets {
	numbers: Vec<String>,
	dates: Vec<String>,
	symbols: Vec<String>,
	words: Vec<String>,
}

impl TokenSets {
	/// Builds the numeric, date, symbol and word families.
	///
	/// # Behavior
	/// - Numbers: profile literals, every integer 0-99, and every 4-digit
	///   year of the configured range (the explicit range if set, the
	///   profile span otherwise).
	/// - Dates: the 14 forms of the date of birth when present, plus the
	///   full day x month x year expansion when a year range is present.
	///   Calendar validity is deliberately not checked; day 31 is paired
	///   with every month.
	/// - Symbols and words come from the profile unchanged, minus
	///   duplicates.
	pub(crate) fn build(profile: &Profile, input: &GenerationInput) -> Self {
		let mut numbers = Vec::new();
		let mut seen = HashSet::new();
		for literal in &profile.numeric_literals {
			push_unique(&mut numbers, &mut seen, literal.clone());
		}
		for n in 0..=99u32 {
			push_unique(&mut numbers, &mut seen, n.to_string());
		}
		let (first, last) = match input.year_range {
			Some(range) => (range.first(), range.last()),
			None => profile.default_years,
		};
		for year in first..=last {
			push_unique(&mut numbers, &mut seen, year.to_string());
		}

		let mut dates = Vec::new();
		let mut seen = HashSet::new();
		if let Some(dob) = input.date_of_birth {
			for token in dob_tokens(&dob) {
				push_unique(&mut dates, &mut seen, token);
			}
		}
		if let Some(range) = input.year_range {
			for year in range.first()..=range.last() {
				let yyyy = format!("{year:04}");
				let yy = format!("{:02}", year % 100);
				for month in 1..=12u8 {
					let mm = format!("{month:02}");
					for day in 1..=31u8 {
						let dd = format!("{day:02}");
						push_unique(&mut dates, &mut seen, format!("{dd}{mm}{yyyy}"));
						push_unique(&mut dates, &mut seen, format!("{mm}{dd}{yyyy}"));
						push_unique(&mut dates, &mut seen, format!("{dd}{mm}{yy}"));
						push_unique(&mut dates, &mut seen, format!("{mm}{dd}{yy}"));
						push_unique(&mut dates, &mut seen, yyyy.clone());
						push_unique(&mut dates, &mut seen, yy.clone());
						push_unique(&mut dates, &mut seen, mm.clone());
						push_unique(&mut dates, &mut seen, dd.clone());
						push_unique(&mut dates, &mut seen, format!("{dd}{mm}"));
						push_unique(&mut dates, &mut seen, format!("{mm}{dd}"));
					}
				}
			}
		}

		let mut symbols = Vec::new();
		let mut seen = HashSet::new();
		for symbol in &profile.symbols {
			push_unique(&mut symbols, &mut seen, symbol.clone());
		}

		let mut words = Vec::new();
		let mut seen = HashSet::new();
		for word in &profile.words {
			push_unique(&mut words, &mut seen, word.clone());
		}

		Self { numbers, dates, symbols, words }
	}

	pub(crate) fn numbers(&self) -> &[String] {
		&self.numbers
	}

	pub(crate) fn dates(&self) -> &[String] {
		&self.dates
	}

	pub(crate) fn symbols(&self) -> &[String] {
		&self.symbols
	}

	pub(crate) fn words(&self) -> &[String] {
		&self.words
	}
}

/// Expands a date of birth into its composable string forms.
///
/// Day and month are zero-padded to two digits, the year appears as both
/// its 4-digit and 2-digit form, and every ordered day/month pairing is
/// produced with and without a year.
fn dob_tokens(spec: &DateSpec) -> Vec<String> {
	let dd = format!("{:02}", spec.day());
	let mm = format!("{:02}", spec.month());
	let yyyy = format!("{:04}", spec.year());
	let yy = format!("{:02}", spec.year() % 100);
	vec![
		dd.clone(),
		mm.clone(),
		yy.clone(),
		yyyy.clone(),
		format!("{dd}{mm}"),
		format!("{mm}{dd}"),
		format!("{mm}{yy}"),
		format!("{mm}{yyyy}"),
		format!("{dd}{yy}"),
		format!("{dd}{yyyy}"),
		format!("{dd}{mm}{yy}"),
		format!("{dd}{mm}{yyyy}"),
		format!("{mm}{dd}{yy}"),
		format!("{mm}{dd}{yyyy}"),
	]
}

/// Arithmetic projection of the token family sizes for one input.
///
/// Used to bound a run before any token set is built: the counts are
/// upper bounds on the raw (pre-deduplication) family sizes, so the
/// derived composition estimate can reject an oversized configuration
/// without doing any expansion work.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenCounts {
	pub(crate) variants: u64,
	pub(crate) numbers: u64,
	pub(crate) dates: u64,
	/// Count of non-empty symbols; the empty "no symbol" entry never
	/// occupies a symbol slot.
	pub(crate) symbols: u64,
	pub(crate) words: u64,
}

impl TokenCounts {
	/// Projects the family sizes for `input` under `profile`.
	///
	/// Name variants are derived for real (they are bounded by the name
	/// length); every other count is pure arithmetic.
	pub(crate) fn project(profile: &Profile, input: &GenerationInput) -> Self {
		let variants = NameVariants::derive(input.name()).forms().len() as u64;

		let (first, last) = match input.year_range {
			Some(range) => (range.first(), range.last()),
			None => profile.default_years,
		};
		let span = (last as u64).saturating_sub(first as u64) + 1;
		let numbers = profile.numeric_literals.len() as u64 + 100 + span;

		let mut dates = 0u64;
		if input.date_of_birth.is_some() {
			dates += 14;
		}
		if let Some(range) = input.year_range {
			// 12 months x 31 days x 10 forms per year
			dates = dates.saturating_add(range.span().saturating_mul(12 * 31 * 10));
		}

		let symbols = profile.symbols.iter().filter(|s| !s.is_empty()).count() as u64;
		let words = profile.words.len() as u64;

		Self { variants, numbers, dates, symbols, words }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::generation_input::GenerationInput;

	#[test]
	fn capitalize_lowercases_the_rest() {
		assert_eq!(capitalize("tEST"), "Test");
		assert_eq!(capitalize("mary jane"), "Mary jane");
		assert_eq!(capitalize(""), "");
	}

	#[test]
	fn leet_substitutes_the_full_map() {
		assert_eq!(leet("test"), "7357");
		assert_eq!(leet("alois"), "@1015");
		assert_eq!(leet("xyz"), "xyz");
	}

	#[test]
	fn leet_light_substitutes_a_and_e_only() {
		assert_eq!(leet_light("Teaser"), "T3@s3r");
		assert_eq!(leet_light("Bond"), "Bond");
	}

	#[test]
	fn variants_of_a_short_name_skip_prefix_forms() {
		let variants = NameVariants::derive("bob");
		let forms = variants.forms();
		assert!(forms.contains(&"bob".to_string()));
		assert!(forms.contains(&"BOB".to_string()));
		assert!(forms.contains(&"Bob".to_string()));
		// 3 characters, no truncated prefix
		assert!(!forms.contains(&"bo".to_string()));
		// leet form differs, so it is present
		assert!(forms.contains(&"b0b".to_string()));
	}

	#[test]
	fn variants_of_a_longer_name_include_prefix_forms() {
		let variants = NameVariants::derive("test");
		let forms = variants.forms();
		assert!(forms.contains(&"test".to_string()));
		assert!(forms.contains(&"TEST".to_string()));
		assert!(forms.contains(&"Test".to_string()));
		assert!(forms.contains(&"tes".to_string()));
		assert!(forms.contains(&"Tes".to_string()));
		assert!(forms.contains(&"7357".to_string()));
		assert_eq!(forms.len(), 6);
	}

	#[test]
	fn variants_contain_no_duplicates() {
		let variants = NameVariants::derive("Ana");
		let forms = variants.forms();
		let unique: HashSet<&String> = forms.iter().collect();
		assert_eq!(unique.len(), forms.len());
	}

	#[test]
	fn leet_variant_absent_when_identical() {
		// No character of the name is in the substitution map.
		let variants = NameVariants::derive("cnn");
		assert!(!variants.forms().iter().any(|f| f.contains('@') || f.contains('3')));
	}

	#[test]
	fn space_removed_variant_keeps_casing() {
		let variants = NameVariants::derive("Mary Jane");
		assert!(variants.forms().contains(&"MaryJane".to_string()));
	}

	#[test]
	fn numeric_family_unions_literals_two_digit_numbers_and_years() {
		let profile = Profile::default();
		let input = GenerationInput::new("test").unwrap();
		let tokens = TokenSets::build(&profile, &input);

		let numbers = tokens.numbers();
		assert!(numbers.contains(&"123456789".to_string()));
		assert!(numbers.contains(&"007".to_string()));
		assert!(numbers.contains(&"0".to_string()));
		assert!(numbers.contains(&"99".to_string()));
		assert!(numbers.contains(&"1990".to_string()));
		assert!(numbers.contains(&"2050".to_string()));

		let unique: HashSet<&String> = numbers.iter().collect();
		assert_eq!(unique.len(), numbers.len());
	}

	#[test]
	fn date_family_empty_without_date_input() {
		let profile = Profile::default();
		let input = GenerationInput::new("test").unwrap();
		let tokens = TokenSets::build(&profile, &input);
		assert!(tokens.dates().is_empty());
	}

	#[test]
	fn dob_expands_to_fourteen_distinct_forms() {
		let mut input = GenerationInput::new("test").unwrap();
		input.set_date_of_birth("15061995").unwrap();
		let tokens = TokenSets::build(&Profile::default(), &input);

		let dates = tokens.dates();
		assert_eq!(dates.len(), 14);
		for expected in ["15", "06", "95", "1995", "1506", "0615", "150695", "15061995", "06151995"] {
			assert!(dates.contains(&expected.to_string()), "missing {expected}");
		}
	}

	#[test]
	fn year_range_expands_every_day_month_combination() {
		let mut input = GenerationInput::new("test").unwrap();
		input.set_year_range(2000, 2000).unwrap();
		let tokens = TokenSets::build(&Profile::default(), &input);

		let dates = tokens.dates();
		// Calendar-invalid pairs are produced on purpose.
		assert!(dates.contains(&"31022000".to_string()));
		assert!(dates.contains(&"02312000".to_string()));
		assert!(dates.contains(&"310200".to_string()));
		assert!(dates.contains(&"2000".to_string()));
		assert!(dates.contains(&"00".to_string()));

		let unique: HashSet<&String> = dates.iter().collect();
		assert_eq!(unique.len(), dates.len());
	}

	#[test]
	fn counts_bound_the_built_families() {
		let profile = Profile::default();
		let mut input = GenerationInput::new("test").unwrap();
		input.set_date_of_birth("15061995").unwrap();
		input.set_year_range(1990, 1995).unwrap();

		let counts = TokenCounts::project(&profile, &input);
		let tokens = TokenSets::build(&profile, &input);

		assert!(counts.numbers >= tokens.numbers().len() as u64);
		assert!(counts.dates >= tokens.dates().len() as u64);
		assert_eq!(counts.words, tokens.words().len() as u64);
		assert_eq!(counts.symbols, tokens.symbols().iter().filter(|s| !s.is_empty()).count() as u64);
		assert_eq!(counts.variants, NameVariants::derive("test").forms().len() as u64);
	}
}
