//! Synthetic values for names, places and product codes.
//!
//! Every function draws from the caller's RNG so output is fully
//! determined by the seed.

use rand::Rng;

const CITY_PREFIXES: &[&str] = &["North", "South", "East", "West", "New", "Lake", "Port", "Fort"];

const CITY_ROOTS: &[&str] = &[
    "Spring", "River", "Frank", "George", "Fair", "Madi", "Arling", "Sal",
    "Rich", "Colum", "Aus", "Den", "Phoe", "Port", "Seat", "Bos",
    "Ash", "Brook", "Clear", "Green", "Oak", "Pine", "Stone", "Wood",
];

const CITY_SUFFIXES: &[&str] = &[
    "field", "side", "lin", "town", "view", "son", "ton", "em",
    "mond", "bia", "ville", "burgh", "haven", "port", "mouth", "chester",
];

const STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire",
    "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington", "West Virginia",
    "Wisconsin", "Wyoming",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Davis", "Evans", "Fisher", "Garcia", "Harris", "Johnson",
    "King", "Lopez", "Miller", "Nelson", "Oliveira", "Parker", "Quinn", "Roberts",
    "Smith", "Taylor", "Underwood", "Valdez", "Williams", "Young", "Zhang", "Adams",
    "Bell", "Clark", "Duncan", "Edwards", "Ford", "Martin", "Moreau", "Dubois",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "PLC", "Ltd", "and Sons"];

const WORDS: &[&str] = &[
    "amber", "apple", "basil", "berry", "bloom", "breeze", "butter", "candle",
    "cedar", "cherry", "citrus", "clover", "cocoa", "coral", "crisp", "crystal",
    "daisy", "dawn", "ember", "fern", "fresh", "frost", "garden", "ginger",
    "golden", "harbor", "harvest", "honey", "ivory", "jasmine", "lemon", "linen",
    "lotus", "maple", "meadow", "mint", "morning", "nectar", "olive", "orchard",
    "pearl", "pepper", "prairie", "river", "saffron", "sage", "silver", "spice",
    "summit", "sunny", "velvet", "vanilla", "willow", "winter",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, values: &[&'a str]) -> &'a str {
    values[rng.gen_range(0..values.len())]
}

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    let root = pick(rng, CITY_ROOTS);
    let suffix = pick(rng, CITY_SUFFIXES);
    if rng.gen_bool(0.3) {
        format!("{} {}{}", pick(rng, CITY_PREFIXES), root, suffix)
    } else {
        format!("{}{}", root, suffix)
    }
}

pub fn state<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, STATES).to_string()
}

pub fn company<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{}-{}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    }
}

/// A single dictionary word with its first letter upper-cased.
pub fn capitalized_word<R: Rng + ?Sized>(rng: &mut R) -> String {
    let word = pick(rng, WORDS);
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Thirteen digits, the last being the GS1 check digit.
pub fn ean13<R: Rng + ?Sized>(rng: &mut R) -> String {
    let digits: Vec<u32> = (0..12).map(|_| rng.gen_range(0..10)).collect();
    let check = ean13_check_digit(&digits);
    digits
        .iter()
        .chain(std::iter::once(&check))
        .map(|d| char::from_digit(*d, 10).unwrap_or('0'))
        .collect()
}

/// Check digit for the first twelve digits of an EAN-13.
pub fn ean13_check_digit(digits: &[u32]) -> u32 {
    let weighted: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    (10 - weighted % 10) % 10
}
