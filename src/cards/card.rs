use super::rank::Rank;
use super::suit::Suit;
use crate::JOKER_VALUE;
use crate::SUIT_SIZE;

/// One of the 54 cards of a Solitaire deck, encoded in a single byte.
///
/// Standard cards are numbered `1..=52` in bridge order (clubs, diamonds,
/// hearts, spades; Ace to King within each suit). The slow joker is 53 and
/// the fast joker is 54. The encoding doubles as the canonical deck position
/// plus one.
///
/// # Representations
///
/// - `u8`: ordinal `1..=54`, bijective
/// - `(Rank, Suit)`: standard cards only
/// - `&str`: export tokens such as `"C7"`, `"S10"`, `"JA"`
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Card(u8);

impl Card {
    /// The slow joker, moved down one card per step.
    pub const JOKER_A: Card = Card(53);
    /// The fast joker, moved down two cards per step.
    pub const JOKER_B: Card = Card(54);

    /// Numeric value driving every cut and lookup.
    /// `suit offset + rank` for standard cards; 53 for either joker.
    pub fn value(&self) -> u8 {
        self.0.min(JOKER_VALUE)
    }
    pub fn is_joker_a(&self) -> bool {
        *self == Self::JOKER_A
    }
    pub fn is_joker_b(&self) -> bool {
        *self == Self::JOKER_B
    }
    pub fn is_joker(&self) -> bool {
        self.0 > 4 * SUIT_SIZE
    }
    /// Suit of a standard card; jokers have none.
    pub fn suit(&self) -> Option<Suit> {
        (!self.is_joker()).then(|| Suit::from((self.0 - 1) / SUIT_SIZE))
    }
    /// Rank of a standard card; jokers have none.
    pub fn rank(&self) -> Option<Rank> {
        (!self.is_joker()).then(|| Rank::from((self.0 - 1) % SUIT_SIZE + 1))
    }
    /// Abbreviated export form: suit letter then rank, or `JA` / `JB`.
    pub fn short(&self) -> String {
        match (self.suit(), self.rank()) {
            (Some(suit), Some(rank)) => format!("{}{}", suit, rank.short()),
            _ if self.is_joker_a() => String::from("JA"),
            _ => String::from("JB"),
        }
    }
}

/// (Rank, Suit) injection
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(s.offset() + u8::from(r))
    }
}

/// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((1..=54).contains(&n), "invalid card u8: {}", n);
        Self(n)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let token = s.trim();
        match token.to_uppercase().as_str() {
            "JA" => Ok(Self::JOKER_A),
            "JB" => Ok(Self::JOKER_B),
            upper
                if (2..=3).contains(&upper.len())
                    && upper.bytes().all(|b| b.is_ascii_alphanumeric()) =>
            {
                let suit = Suit::try_from(&upper[0..1])?;
                let rank = Rank::try_from(&upper[1..])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("expected <suit><rank>, JA or JB, got {:?}", token)),
        }
    }
}
impl std::str::FromStr for Card {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
impl TryFrom<String> for Card {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Card> for String {
    fn from(c: Card) -> String {
        c.short()
    }
}

/// Human-readable form: `♣ A`, `♥ 10`, `Joker A`.
impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.suit(), self.rank()) {
            (Some(suit), Some(rank)) => write!(f, "{} {}", suit.symbol(), rank.short()),
            _ if self.is_joker_a() => write!(f, "Joker A"),
            _ => write!(f, "Joker B"),
        }
    }
}
