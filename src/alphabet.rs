use crate::ALPHABET_SIZE;

/// Ordered cipher alphabet, mapping letters to `1..=26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet([u8; ALPHABET_SIZE]);

/// The English alphabet in uppercase: A = 1 through Z = 26.
pub const ALPHABET: Alphabet = Alphabet(*b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");

impl Alphabet {
    /// One-based position of `letter`, or `None` if it is not in the alphabet.
    pub fn index(&self, letter: u8) -> Option<u8> {
        self.0
            .iter()
            .position(|&c| c == letter)
            .map(|i| i as u8 + 1)
    }
    /// Letter at one-based `index`, taken modulo 26 with 0 meaning 26.
    pub fn char(&self, index: usize) -> u8 {
        match index % ALPHABET_SIZE {
            0 => self.0[ALPHABET_SIZE - 1],
            i => self.0[i - 1],
        }
    }
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }
}
