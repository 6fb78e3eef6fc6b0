//! Errors surfaced at the boundaries where untrusted input enters.

/// Recoverable failures of keying, deck import and decryption.
///
/// None of these leave partial output behind: the operation that returns one
/// has produced nothing and, for keying, mutated nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolitaireError {
    /// Passphrases may only contain `A..=Z`.
    #[error("passphrase contains non-letter byte {byte:#04x} at offset {offset}")]
    InvalidPassphrase { byte: u8, offset: usize },
    /// Ciphertext must reduce to a non-empty multiple of five letters.
    #[error("ciphertext must be a non-empty multiple of 5 letters, got {letters}")]
    MalformedCiphertext { letters: usize },
    /// Deck imports must list exactly 54 cards.
    #[error("deck must be 54 cards, got {count}")]
    DeckSize { count: usize },
    /// A deck import token is not `<suit><rank>`, `JA` or `JB`.
    #[error("invalid card {token}: {reason}")]
    InvalidCard { token: String, reason: String },
    /// A deck import lists the same card twice.
    #[error("duplicate card {card} in deck")]
    DuplicateCard { card: String },
}

pub type Result<T> = std::result::Result<T, SolitaireError>;
