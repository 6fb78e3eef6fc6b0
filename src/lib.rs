//! Bruce Schneier's Solitaire (a.k.a. Pontifex) card-deck stream cipher.
//!
//! A 54-card deck (52 standard cards plus two distinguishable jokers) is the
//! entire cipher state. Each keystream digit is produced by permuting the deck
//! once and reading a card off it; digits are added to (or subtracted from)
//! letters modulo 26.
//!
//! This is a faithful reproduction of a pen-and-paper cipher, not a modern
//! primitive. Do not use it where confidentiality actually matters.
//!
//! ## Core Types
//!
//! - [`Card`]: one of 54 cards, with its algorithmic [`Card::value`]
//! - [`Deck`]: the ordered 54-card state and its permutation steps
//! - [`Alphabet`]: the `A..=Z` ⇄ `1..=26` bijection
//! - [`Solitaire`]: an encrypt/decrypt session owning one deck
//!
//! ## Example
//!
//! ```
//! use solitaire::Solitaire;
//!
//! let mut session = Solitaire::with_passphrase(b"CRYPTONOMICON").unwrap();
//! assert_eq!(session.encrypt("SOLITAIRE"), "KIRAK SFJAN");
//!
//! let mut session = Solitaire::with_passphrase(b"CRYPTONOMICON").unwrap();
//! assert_eq!(session.decrypt("KIRAK SFJAN").unwrap(), "SOLIT AIREX");
//! ```
pub mod alphabet;
pub mod cards;
pub mod error;
pub mod keying;
pub mod session;
pub mod text;

#[cfg(feature = "cli")]
pub mod cli;

pub use alphabet::*;
pub use cards::*;
pub use error::*;
pub use session::*;

// ============================================================================
// DECK GEOMETRY
// ============================================================================
/// Cards in a Solitaire deck: 52 standard cards and two jokers.
pub const DECK_SIZE: usize = 54;
/// Numeric value shared by both jokers.
pub const JOKER_VALUE: u8 = 53;
/// Cards per suit.
pub const SUIT_SIZE: u8 = 13;

// ============================================================================
// TEXT FORMATTING
// Cleartext is padded to whole groups; output is grouped for hand copying.
// ============================================================================
/// Letters in the cipher alphabet.
pub const ALPHABET_SIZE: usize = 26;
/// Letter appended to cleartext until it fills a whole group.
pub const FILLER: u8 = b'X';
/// Letters per output group.
pub const GROUP_SIZE: usize = 5;
/// Groups per output line.
pub const GROUPS_PER_LINE: usize = 4;

// ============================================================================
// COMMAND LINE
// ============================================================================
/// Environment variable consulted for the passphrase when no flag is given.
pub const PASSPHRASE_ENV: &str = "SOLITAIRE_PASSPHRASE";
/// Passphrases shorter than this are accepted but warned about.
pub const RECOMMENDED_PASSPHRASE_LEN: usize = 80;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and key-deck shuffling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr at the given level.
/// Stdout is reserved for cipher output.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
