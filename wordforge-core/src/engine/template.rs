use crate::engine::tokens::{NameVariants, TokenCounts, TokenSets, leet_light};

/// A composition template: a pure rule turning a name variant and zero or
/// more tokens into candidate strings.
///
/// Templates are data. The composer iterates a `Vec<Template>` and calls
/// `expand` without knowing any template's shape, so adding or removing a
/// family never touches enumeration or deduplication logic. The library
/// order is stable; reproducibility of the output does not depend on it
/// (the final sort does), but a stable order keeps runs comparable.
///
/// # Variants
/// - `NumberSuffix`: variant + number
/// - `SymbolNumberSuffix`: variant + symbol + number
/// - `NumberSymbolSuffix`: variant + number + symbol
/// - `SymbolPrefixNumber`: symbol + variant + number
/// - `NumberPrefix`: number + variant
/// - `DateSuffix`: variant + date token, in every date form
/// - `WordSuffix`: variant + common word
/// - `SymbolWordSuffix`: variant + symbol + common word
/// - `SelfDouble`: variant + variant, plain and `@`-joined
/// - `HighValue`: the fixed literal table below
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Template {
	NumberSuffix,
	SymbolNumberSuffix,
	NumberSymbolSuffix,
	SymbolPrefixNumber,
	NumberPrefix,
	DateSuffix,
	WordSuffix,
	SymbolWordSuffix,
	SelfDouble,
	HighValue,
}

/// The standard template library, in stable order.
pub(crate) fn standard_library() -> Vec<Template> {
	vec![
		Template::NumberSuffix,
		Template::SymbolNumberSuffix,
		Template::NumberSymbolSuffix,
		Template::SymbolPrefixNumber,
		Template::NumberPrefix,
		Template::DateSuffix,
		Template::WordSuffix,
		Template::SymbolWordSuffix,
		Template::SelfDouble,
		Template::HighValue,
	]
}

/// Which form of the raw name a high-value literal composes with.
#[derive(Debug, Clone, Copy)]
enum LiteralForm {
	Lower,
	Capitalized,
	/// Capitalized with the reduced `a`/`e` substitution applied.
	LeetLightCapitalized,
}

/// One hard-coded high-value pattern.
///
/// These literals were observed often enough in the wild to be worth
/// emitting regardless of the general template grid. They live in a table
/// so the composer treats them like any other template.
struct HighValuePattern {
	form: LiteralForm,
	suffix: &'static str,
}

const HIGH_VALUE_PATTERNS: &[HighValuePattern] = &[
	HighValuePattern { form: LiteralForm::Capitalized, suffix: "@123" },
	HighValuePattern { form: LiteralForm::Lower, suffix: "!@#" },
	HighValuePattern { form: LiteralForm::Capitalized, suffix: "#@!23" },
	HighValuePattern { form: LiteralForm::Lower, suffix: "2024" },
	HighValuePattern { form: LiteralForm::Capitalized, suffix: "@!" },
	HighValuePattern { form: LiteralForm::Lower, suffix: "#$" },
	HighValuePattern { form: LiteralForm::Lower, suffix: "12345" },
	HighValuePattern { form: LiteralForm::Lower, suffix: "12345678" },
	HighValuePattern { form: LiteralForm::Lower, suffix: "@123456" },
	HighValuePattern { form: LiteralForm::Lower, suffix: "@1234" },
	HighValuePattern { form: LiteralForm::Capitalized, suffix: "@1" },
	HighValuePattern { form: LiteralForm::Capitalized, suffix: "@0" },
	HighValuePattern { form: LiteralForm::Capitalized, suffix: "!" },
	HighValuePattern { form: LiteralForm::Capitalized, suffix: "@" },
	HighValuePattern { form: LiteralForm::Capitalized, suffix: "@!@#" },
	HighValuePattern { form: LiteralForm::LeetLightCapitalized, suffix: "@1996" },
];

impl HighValuePattern {
	fn compose(&self, variants: &NameVariants) -> String {
		match self.form {
			LiteralForm::Lower => format!("{}{}", variants.lower(), self.suffix),
			LiteralForm::Capitalized => format!("{}{}", variants.capitalized(), self.suffix),
			LiteralForm::LeetLightCapitalized => {
				format!("{}{}", leet_light(variants.capitalized()), self.suffix)
			}
		}
	}
}

impl Template {
	/// Expands this template over every applicable variant/token
	/// combination, emitting one candidate per combination into `sink`.
	///
	/// # Behavior
	/// - Candidates stream out one by one; nothing is materialized here.
	/// - An empty required token family makes the expansion a no-op, never
	///   an error.
	/// - The empty "no symbol" entry never fills a symbol slot; the
	///   symbol-free families already cover those strings.
	pub(crate) fn expand(
		&self,
		variants: &NameVariants,
		tokens: &TokenSets,
		sink: &mut dyn FnMut(String),
	) {
		match self {
			Template::NumberSuffix => {
				for form in variants.forms() {
					for number in tokens.numbers() {
						sink(format!("{form}{number}"));
					}
				}
			}
			Template::SymbolNumberSuffix => {
				for form in variants.forms() {
					for symbol in tokens.symbols() {
						if symbol.is_empty() {
							continue;
						}
						for number in tokens.numbers() {
							sink(format!("{form}{symbol}{number}"));
						}
					}
				}
			}
			Template::NumberSymbolSuffix => {
				for form in variants.forms() {
					for number in tokens.numbers() {
						for symbol in tokens.symbols() {
							if symbol.is_empty() {
								continue;
							}
							sink(format!("{form}{number}{symbol}"));
						}
					}
				}
			}
			Template::SymbolPrefixNumber => {
				for form in variants.forms() {
					for symbol in tokens.symbols() {
						if symbol.is_empty() {
							continue;
						}
						for number in tokens.numbers() {
							sink(format!("{symbol}{form}{number}"));
						}
					}
				}
			}
			Template::NumberPrefix => {
				for form in variants.forms() {
					for number in tokens.numbers() {
						sink(format!("{number}{form}"));
					}
				}
			}
			Template::DateSuffix => {
				for form in variants.forms() {
					for date in tokens.dates() {
						sink(format!("{form}{date}"));
					}
				}
			}
			Template::WordSuffix => {
				for form in variants.forms() {
					for word in tokens.words() {
						sink(format!("{form}{word}"));
					}
				}
			}
			Template::SymbolWordSuffix => {
				for form in variants.forms() {
					for symbol in tokens.symbols() {
						if symbol.is_empty() {
							continue;
						}
						for word in tokens.words() {
							sink(format!("{form}{symbol}{word}"));
						}
					}
				}
			}
			Template::SelfDouble => {
				for form in variants.forms() {
					sink(format!("{form}{form}"));
					sink(format!("{form}@{form}"));
				}
			}
			Template::HighValue => {
				for pattern in HIGH_VALUE_PATTERNS {
					sink(pattern.compose(variants));
				}
			}
		}
	}

	/// Upper bound on the number of candidates `expand` emits for the
	/// projected token counts. Used to reject oversized configurations
	/// before any composition work.
	pub(crate) fn estimate(&self, counts: &TokenCounts) -> u64 {
		let TokenCounts { variants, numbers, dates, symbols, words } = *counts;
		match self {
			Template::NumberSuffix => variants.saturating_mul(numbers),
			Template::SymbolNumberSuffix => variants.saturating_mul(symbols).saturating_mul(numbers),
			Template::NumberSymbolSuffix => variants.saturating_mul(numbers).saturating_mul(symbols),
			Template::SymbolPrefixNumber => variants.saturating_mul(symbols).saturating_mul(numbers),
			Template::NumberPrefix => variants.saturating_mul(numbers),
			Template::DateSuffix => variants.saturating_mul(dates),
			Template::WordSuffix => variants.saturating_mul(words),
			Template::SymbolWordSuffix => variants.saturating_mul(symbols).saturating_mul(words),
			Template::SelfDouble => variants.saturating_mul(2),
			Template::HighValue => HIGH_VALUE_PATTERNS.len() as u64,
		}
	}
}
