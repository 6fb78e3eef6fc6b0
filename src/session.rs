use crate::ALPHABET;
use crate::ALPHABET_SIZE;
use crate::Deck;
use crate::GROUP_SIZE;
use crate::error::SolitaireError;
use crate::text;

/// An encryption or decryption session owning one deck.
///
/// Every letter processed advances the deck irreversibly, so a session is a
/// one-shot keystream: encrypting the same text twice in one session gives
/// two different ciphertexts. Use a fresh session, keyed the same way, on
/// the other end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solitaire {
    deck: Deck,
}

impl From<Deck> for Solitaire {
    fn from(deck: Deck) -> Self {
        Self { deck }
    }
}

impl Solitaire {
    /// Session over the canonical, unkeyed deck. Only useful for tests and
    /// reproducing published examples.
    pub fn new() -> Self {
        Self::default()
    }
    /// Session keyed from a passphrase of `A..=Z` bytes. The empty
    /// passphrase is accepted and leaves the deck canonical.
    pub fn with_passphrase(passphrase: &[u8]) -> Result<Self, SolitaireError> {
        Deck::keyed(passphrase).map(Self::from)
    }
    /// Session over a deck previously written by [`Deck::export`].
    pub fn import(exported: &str) -> Result<Self, SolitaireError> {
        Deck::try_from(exported).map(Self::from)
    }
    /// Current deck state.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Normalizes and pads `cleartext`, then shifts each letter forward by
    /// one keystream digit. Output is in groups of five, four per line.
    pub fn encrypt(&mut self, cleartext: &str) -> String {
        let letters = text::pad(text::normalize(cleartext));
        log::debug!("encrypting {} letters", letters.len());
        let shifted = letters
            .iter()
            .zip(self.deck.keystream())
            .map(|(&letter, k)| Self::index(letter) + k as usize)
            .map(|i| ALPHABET.char(i))
            .collect::<Vec<u8>>();
        text::group(&shifted)
    }

    /// Shifts each ciphertext letter back by one keystream digit.
    ///
    /// Everything but ASCII letters is ignored, so grouped output from
    /// [`Solitaire::encrypt`] can be passed straight back. Padding added
    /// during encryption is not removed.
    pub fn decrypt(&mut self, ciphertext: &str) -> Result<String, SolitaireError> {
        let letters = text::letters(ciphertext);
        if letters.is_empty() || letters.len() % GROUP_SIZE != 0 {
            return Err(SolitaireError::MalformedCiphertext {
                letters: letters.len(),
            });
        }
        log::debug!("decrypting {} letters", letters.len());
        let shifted = letters
            .iter()
            .zip(self.deck.keystream())
            .map(|(&letter, k)| Self::index(letter) as isize - k as isize)
            .map(|i| i.rem_euclid(ALPHABET_SIZE as isize) as usize)
            .map(|i| ALPHABET.char(i))
            .collect::<Vec<u8>>();
        Ok(text::group(&shifted))
    }

    /// Alphabet position of a letter that has already been normalized.
    fn index(letter: u8) -> usize {
        ALPHABET.index(letter).expect("normalized letter") as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn encrypt(passphrase: &str, cleartext: &str) -> String {
        Solitaire::with_passphrase(passphrase.as_bytes())
            .unwrap()
            .encrypt(cleartext)
    }

    fn decrypt(passphrase: &str, ciphertext: &str) -> String {
        Solitaire::with_passphrase(passphrase.as_bytes())
            .unwrap()
            .decrypt(ciphertext)
            .unwrap()
    }

    #[test]
    fn encryption_vectors() {
        assert_eq!(encrypt("CRYPTONOMICON", "SOLITAIRE"), "KIRAK SFJAN");
        assert_eq!(encrypt("FOO", "AAAAAAAAAAAAAAA"), "ITHZU JIWGR FARMW");
        assert_eq!(encrypt("", "AAAAAAAAAA"), "EXKYI ZSGEH");
        assert_eq!(
            encrypt("CRYPTONOMICON", "HELLO WORLD Hello WORLD HELLO WORLD"),
            "ZYRDF OLJHT YQIZV EDSQS\nEECJE FZXRN"
        );
    }

    #[test]
    fn decryption_vectors() {
        assert_eq!(decrypt("CRYPTONOMICON", "KIRAK SFJAN"), "SOLIT AIREX");
        assert_eq!(decrypt("FOO", "ITHZU JIWGR FARMW"), "AAAAA AAAAA AAAAA");
        assert_eq!(decrypt("", "exkyi zsgeh"), "AAAAA AAAAA");
    }

    #[test]
    fn imported_deck_matches_passphrase() {
        let deck = Deck::keyed(b"CRYPTONOMICON").unwrap().export();
        let mut session = Solitaire::import(&deck).unwrap();
        assert_eq!(session.encrypt("SOLITAIRE"), "KIRAK SFJAN");
    }

    #[test]
    fn unkeyed_session_is_empty_passphrase() {
        assert_eq!(Solitaire::new(), Solitaire::with_passphrase(b"").unwrap());
        assert_eq!(Solitaire::new().encrypt("AAAAAAAAAA"), "EXKYI ZSGEH");
    }

    #[test]
    fn round_trip_modulo_padding() {
        for cleartext in ["Attack at dawn!", "Grüße aus Köln", "x", "SOLITAIRE"] {
            let deck = Deck::random();
            let ciphertext = Solitaire::from(deck.clone()).encrypt(cleartext);
            let recovered = Solitaire::from(deck).decrypt(&ciphertext).unwrap();
            let expected = text::group(&text::pad(text::normalize(cleartext)));
            assert_eq!(recovered, expected);
        }
    }

    #[test]
    fn session_keystream_does_not_rewind() {
        let mut session = Solitaire::with_passphrase(b"CRYPTONOMICON").unwrap();
        let first = session.encrypt("SOLITAIRE");
        let second = session.encrypt("SOLITAIRE");
        assert_eq!(first, "KIRAK SFJAN");
        assert_ne!(first, second);
    }

    #[test]
    fn encrypting_nothing_yields_nothing() {
        let mut session = Solitaire::new();
        assert_eq!(session.encrypt("1234 !?"), "");
        assert_eq!(session, Solitaire::new());
    }

    #[test]
    fn rejects_malformed_ciphertext() {
        let mut session = Solitaire::new();
        assert_eq!(
            session.decrypt(""),
            Err(SolitaireError::MalformedCiphertext { letters: 0 })
        );
        assert_eq!(
            session.decrypt("KIRAK SFJ"),
            Err(SolitaireError::MalformedCiphertext { letters: 8 })
        );
        assert_eq!(session, Solitaire::new());
    }

    #[test]
    fn rejects_invalid_passphrase() {
        assert!(matches!(
            Solitaire::with_passphrase(b"NOT OK"),
            Err(SolitaireError::InvalidPassphrase { offset: 3, .. })
        ));
    }

    #[test]
    fn rejects_malformed_import() {
        assert_eq!(
            Solitaire::import("C7,C8"),
            Err(SolitaireError::DeckSize { count: 2 })
        );
    }
}
