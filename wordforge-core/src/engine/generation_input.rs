use crate::engine::candidate_set::LengthBounds;
use crate::error::Error;

/// A validated day/month/year triple.
///
/// Day and month are checked against their bands (1-31 and 1-12). Calendar
/// validity is deliberately not checked: day 31 in a 30-day month passes,
/// because real passwords contain such strings and coverage wins over
/// calendar correctness here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpec {
	day: u8,
	month: u8,
	year: u16,
}

impl DateSpec {
	/// Creates a date spec from its parts.
	///
	/// # Errors
	/// Returns `Error::InvalidInput` if `day` is outside 1-31 or `month`
	/// is outside 1-12.
	pub fn new(day: u8, month: u8, year: u16) -> Result<Self, Error> {
		if !(1..=31).contains(&day) {
			return Err(Error::InvalidInput(format!("day must be in 1-31, got {day}")));
		}
		if !(1..=12).contains(&month) {
			return Err(Error::InvalidInput(format!("month must be in 1-12, got {month}")));
		}
		Ok(Self { day, month, year })
	}

	/// Parses a `DDMMYYYY` digit string.
	///
	/// # Errors
	/// Returns `Error::InvalidInput` if the string is not exactly 8 ASCII
	/// digits or the day/month bands are violated.
	pub fn parse(digits: &str) -> Result<Self, Error> {
		if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
			return Err(Error::InvalidInput(format!(
				"date of birth must be 8 digits (DDMMYYYY), got {digits:?}"
			)));
		}
		// Slicing is safe: 8 ASCII digits.
		let day = digits[0..2].parse::<u8>().map_err(|e| Error::InvalidInput(e.to_string()))?;
		let month = digits[2..4].parse::<u8>().map_err(|e| Error::InvalidInput(e.to_string()))?;
		let year = digits[4..8].parse::<u16>().map_err(|e| Error::InvalidInput(e.to_string()))?;
		Self::new(day, month, year)
	}

	pub fn day(&self) -> u8 {
		self.day
	}

	pub fn month(&self) -> u8 {
		self.month
	}

	pub fn year(&self) -> u16 {
		self.year
	}
}

/// An inclusive range of 4-digit years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
	first: u16,
	last: u16,
}

impl YearRange {
	/// Creates a validated range.
	///
	/// # Errors
	/// Returns `Error::InvalidInput` if the bounds are inverted or either
	/// bound is not a 4-digit year.
	pub fn new(first: u16, last: u16) -> Result<Self, Error> {
		if !(1000..=9999).contains(&first) || !(1000..=9999).contains(&last) {
			return Err(Error::InvalidInput(format!(
				"years must be 4-digit, got {first}-{last}"
			)));
		}
		if first > last {
			return Err(Error::InvalidInput(format!(
				"year range must not be inverted, got {first}-{last}"
			)));
		}
		Ok(Self { first, last })
	}

	pub fn first(&self) -> u16 {
		self.first
	}

	pub fn last(&self) -> u16 {
		self.last
	}

	/// Number of years covered, inclusive.
	pub fn span(&self) -> u64 {
		(self.last - self.first) as u64 + 1
	}
}

/// Parameters for generating the candidate set of one target.
///
/// `GenerationInput` contains the mandatory target name plus the optional
/// knobs that widen or narrow the run: a date of birth, a year range and
/// length bounds.
///
/// # Responsibilities
/// - Reject an empty target name at construction
/// - Parse and validate the date of birth before generation starts
/// - Hold only validated values, so a constructed input is always safe to
///   hand to the generator
///
/// # Invariants
/// - `name` is trimmed and non-empty
/// - Every optional field, when present, passed its own validation
#[derive(Debug, Clone)]
pub struct GenerationInput {
	name: String,

	/// Optional date of birth feeding the date token family.
	pub date_of_birth: Option<DateSpec>,

	/// Optional year range. Feeds the numeric family with bare years and
	/// the date family with the full day x month x year expansion.
	pub year_range: Option<YearRange>,

	/// Optional bounds applied to the final candidate set.
	pub length_bounds: Option<LengthBounds>,
}

impl GenerationInput {
	/// Creates an input for one target name.
	///
	/// The name is trimmed first; all derivations (casing, leet, prefix)
	/// start from the trimmed form.
	///
	/// # Errors
	/// Returns `Error::InvalidInput` if the trimmed name is empty.
	pub fn new(name: &str) -> Result<Self, Error> {
		let name = name.trim();
		if name.is_empty() {
			return Err(Error::InvalidInput("name cannot be empty".to_owned()));
		}
		Ok(Self {
			name: name.to_owned(),
			date_of_birth: None,
			year_range: None,
			length_bounds: None,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Parses and sets the date of birth from a `DDMMYYYY` digit string.
	///
	/// On error the previous value is kept.
	///
	/// # Errors
	/// See [`DateSpec::parse`].
	pub fn set_date_of_birth(&mut self, digits: &str) -> Result<(), Error> {
		self.date_of_birth = Some(DateSpec::parse(digits)?);
		Ok(())
	}

	/// Sets the inclusive year range.
	///
	/// # Errors
	/// See [`YearRange::new`].
	pub fn set_year_range(&mut self, first: u16, last: u16) -> Result<(), Error> {
		self.year_range = Some(YearRange::new(first, last)?);
		Ok(())
	}

	/// Sets the accepted candidate length bounds.
	///
	/// # Errors
	/// See [`LengthBounds::new`].
	pub fn set_length_bounds(&mut self, min: usize, max: usize) -> Result<(), Error> {
		self.length_bounds = Some(LengthBounds::new(min, max)?);
		Ok(())
	}
}
