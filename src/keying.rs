//! Deriving a starting deck from a passphrase.
//!
//! Starting from the canonical order, each passphrase letter costs one full
//! [`Deck::advance`] followed by an extra count cut of the letter's alphabet
//! position. Equal passphrases always give equal decks; the empty passphrase
//! gives the canonical deck.

use crate::ALPHABET;
use crate::Deck;
use crate::error::SolitaireError;

/// Rejects any byte outside `A..=Z`, reporting the first offender.
pub fn validate(passphrase: &[u8]) -> Result<(), SolitaireError> {
    match passphrase.iter().position(|&b| !ALPHABET.contains(b)) {
        Some(offset) => Err(SolitaireError::InvalidPassphrase {
            byte: passphrase[offset],
            offset,
        }),
        None => Ok(()),
    }
}

impl Deck {
    /// Keys a fresh canonical deck with `passphrase`.
    pub fn keyed(passphrase: &[u8]) -> Result<Self, SolitaireError> {
        validate(passphrase)?;
        let mut deck = Self::new();
        for &letter in passphrase {
            deck.advance();
            deck.count_cut(ALPHABET.index(letter).expect("validated letter") as usize);
        }
        log::debug!("keyed deck with {} letter passphrase", passphrase.len());
        Ok(deck)
    }
}
