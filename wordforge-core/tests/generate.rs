use std::collections::HashSet;

use wordforge_core::engine::generation_input::GenerationInput;
use wordforge_core::engine::generator::Generator;
use wordforge_core::engine::tokens::Profile;
use wordforge_core::error::Error;

fn input(name: &str) -> GenerationInput {
	GenerationInput::new(name).unwrap()
}

#[test]
fn generation_is_deterministic() {
	let generator = Generator::new();
	let mut target = input("test");
	target.set_date_of_birth("15061995").unwrap();

	let first = generator.generate(&target).unwrap();
	let second = generator.generate(&target).unwrap();
	assert_eq!(first, second);
}

#[test]
fn output_contains_no_duplicates() {
	let generator = Generator::new();
	let out = generator.generate(&input("test")).unwrap();
	let unique: HashSet<&String> = out.iter().collect();
	assert_eq!(unique.len(), out.len());
}

#[test]
fn output_is_sorted_ascending() {
	let generator = Generator::new();
	let out = generator.generate(&input("test")).unwrap();
	assert!(out.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn known_patterns_appear_for_test() {
	let generator = Generator::new();
	let out = generator.generate(&input("test")).unwrap();
	assert!(out.contains(&"test123".to_owned()));
	assert!(out.contains(&"Test@123".to_owned()));
}

#[test]
fn dob_compositions_appear_for_test() {
	let generator = Generator::new();
	let mut target = input("test");
	target.set_date_of_birth("15061995").unwrap();
	let out = generator.generate(&target).unwrap();

	assert!(out.contains(&"test150695".to_owned()));
	assert!(out.contains(&"test15061995".to_owned()));
	assert!(out.contains(&"test1995".to_owned()));
}

#[test]
fn length_bounds_hold_for_every_candidate() {
	let generator = Generator::new();
	let mut target = input("test");
	target.set_length_bounds(8, 12).unwrap();
	let out = generator.generate(&target).unwrap();

	assert!(!out.is_empty());
	assert!(out.iter().all(|c| {
		let length = c.chars().count();
		(8..=12).contains(&length)
	}));
}

#[test]
fn empty_name_is_an_input_error() {
	assert!(matches!(GenerationInput::new(""), Err(Error::InvalidInput(_))));
	assert!(matches!(GenerationInput::new(" \t "), Err(Error::InvalidInput(_))));
}

#[test]
fn batch_union_equals_union_of_singles() {
	let generator = Generator::new();
	let inputs = vec![input("alice"), input("bob")];

	let batch = generator.generate_batch(&inputs).unwrap();

	let mut union: HashSet<String> = generator
		.generate(&inputs[0])
		.unwrap()
		.into_iter()
		.collect();
	union.extend(generator.generate(&inputs[1]).unwrap());
	let mut union: Vec<String> = union.into_iter().collect();
	union.sort();

	assert_eq!(batch, union);
}

#[test]
fn batch_of_one_matches_single_generation() {
	let generator = Generator::new();
	let target = input("alice");
	assert_eq!(
		generator.generate_batch(std::slice::from_ref(&target)).unwrap(),
		generator.generate(&target).unwrap()
	);
}

#[test]
fn oversized_year_range_is_rejected() {
	let profile = Profile { expansion_ceiling: 1_000_000, ..Profile::default() };
	let generator = Generator::with_profile(profile);
	let mut target = input("test");
	target.set_year_range(1000, 9999).unwrap();

	match generator.generate(&target) {
		Err(Error::ConfigurationTooLarge { estimated, ceiling }) => {
			assert!(estimated > ceiling);
		}
		other => panic!("expected ConfigurationTooLarge, got {other:?}"),
	}
}

#[test]
fn year_range_feeds_both_token_families() {
	let generator = Generator::new();
	let mut target = input("kim");
	target.set_year_range(2000, 2001).unwrap();
	let out = generator.generate(&target).unwrap();

	// Bare year via the numeric family, with a symbol slot.
	assert!(out.contains(&"kim@2000".to_owned()));
	// Full date expansion via the date family, including a
	// calendar-invalid pairing.
	assert!(out.contains(&"kim31022001".to_owned()));
}

#[test]
fn filtering_never_reintroduces_candidates() {
	let generator = Generator::new();
	let mut bounded = input("test");
	bounded.set_length_bounds(8, 18).unwrap();
	let filtered = generator.generate(&bounded).unwrap();
	let unfiltered = generator.generate(&input("test")).unwrap();

	let all: HashSet<&String> = unfiltered.iter().collect();
	assert!(filtered.iter().all(|c| all.contains(c)));
	assert!(filtered.len() < unfiltered.len());
}
