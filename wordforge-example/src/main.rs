use wordforge_core::engine::generation_input::GenerationInput;
use wordforge_core::engine::generator::Generator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build the engine with the default profile
    // (standard token literals, year span 1990-2050, 100M ceiling)
    let generator = Generator::new();

    // A target input: the name is mandatory, everything else optional
    let mut input = GenerationInput::new("test")?;

    // Date of birth in DDMMYYYY form; feeds the date token family
    input.set_date_of_birth("15061995")?;

    // Malformed dates are rejected before any generation work
    match input.set_date_of_birth("15131995") {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Month 13 is invalid"),
    }
    match input.set_date_of_birth("156.1995") {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("A date of birth must be 8 digits"),
    }

    // An inverted year range is rejected too
    match input.set_year_range(2010, 1990) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("The range 2010-1990 is inverted"),
    }

    // Keep only candidates between 8 and 18 characters
    input.set_length_bounds(8, 18)?;

    // The expansion bound is checked against the profile ceiling
    // before any work starts
    println!("Estimated raw compositions: {}", generator.estimate(&input));

    // Generate the sorted, deduplicated wordlist
    let candidates = generator.generate(&input)?;
    println!("Generated {} unique candidates", candidates.len());
    for candidate in candidates.iter().take(20) {
        println!("{candidate}");
    }

    Ok(())
}
