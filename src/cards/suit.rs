use crate::SUIT_SIZE;

/// Card suit: clubs, diamonds, hearts, spades.
///
/// In Solitaire a suit is an offset added to the rank: clubs count 1..=13,
/// diamonds 14..=26, hearts 27..=39, spades 40..=52. That sum is the card's
/// value for every cut and lookup the deck performs.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in deck order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    /// Value added to a rank to obtain the card value (0, 13, 26, 39).
    pub const fn offset(&self) -> u8 {
        *self as u8 * SUIT_SIZE
    }
    /// Letter value of a card of this suit, folded into `1..=26`.
    ///
    /// This is the card-to-letter reading used when working the cipher by
    /// hand: clubs and hearts give A..M, diamonds and spades give N..Z.
    ///
    /// # Panics
    /// If `rank` is outside `1..=13`. Ranks come from [`Rank`] in all
    /// internal paths, so reaching this is a programming error.
    ///
    /// [`Rank`]: super::rank::Rank
    pub fn value(&self, rank: u8) -> u8 {
        assert!(
            (1..=SUIT_SIZE).contains(&rank),
            "card rank must be between 1 and 13, got {}",
            rank
        );
        match (rank + self.offset()) % 26 {
            0 => 26,
            n => n,
        }
    }
    /// Unicode suit symbol for display.
    pub fn symbol(&self) -> char {
        match self {
            Suit::C => '♣',
            Suit::D => '♦',
            Suit::H => '♥',
            Suit::S => '♠',
        }
    }
    /// Diamonds and hearts.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::D | Suit::H)
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::C),
            "d" | "♦" => Ok(Suit::D),
            "h" | "♥" => Ok(Suit::H),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

/// Single-letter export form.
impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "C"),
            Suit::D => write!(f, "D"),
            Suit::H => write!(f, "H"),
            Suit::S => write!(f, "S"),
        }
    }
}
