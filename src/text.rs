//! Reducing free text to cipher letters and laying cipher letters out again.

use crate::FILLER;
use crate::GROUP_SIZE;
use crate::GROUPS_PER_LINE;

/// Letters outside `A..=Z` that still carry meaning, spelled out in ASCII.
/// Consulted before uppercasing.
const TRANSLITERATIONS: [(char, &str); 7] = [
    ('Ä', "AE"),
    ('Ö', "OE"),
    ('Ü', "UE"),
    ('ä', "AE"),
    ('ö', "OE"),
    ('ü', "UE"),
    ('ß', "SS"),
];

fn transliterate(c: char) -> Option<&'static str> {
    TRANSLITERATIONS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Uppercase cleartext letters, transliterated where known.
/// Digits, punctuation, whitespace and unmapped letters are dropped.
pub fn normalize(text: &str) -> Vec<u8> {
    let mut letters = Vec::with_capacity(text.len());
    for c in text.chars() {
        match transliterate(c) {
            Some(mapped) => letters.extend_from_slice(mapped.as_bytes()),
            None if c.is_ascii_alphabetic() => letters.push(c.to_ascii_uppercase() as u8),
            None => continue,
        }
    }
    letters
}

/// Uppercase ASCII letters only; used for ciphertext, which never carries
/// transliterated forms.
pub fn letters(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase())
        .collect()
}

/// Appends filler until the length is a whole number of groups.
pub fn pad(mut letters: Vec<u8>) -> Vec<u8> {
    let missing = (GROUP_SIZE - letters.len() % GROUP_SIZE) % GROUP_SIZE;
    letters.resize(letters.len() + missing, FILLER);
    letters
}

/// Groups of five separated by spaces, four groups per line.
pub fn group(letters: &[u8]) -> String {
    letters
        .chunks(GROUP_SIZE)
        .map(|chunk| chunk.iter().map(|&b| b as char).collect::<String>())
        .collect::<Vec<String>>()
        .chunks(GROUPS_PER_LINE)
        .map(|line| line.join(" "))
        .collect::<Vec<String>>()
        .join("\n")
}
