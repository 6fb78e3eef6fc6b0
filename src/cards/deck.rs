use super::card::Card;
use crate::Arbitrary;
use crate::DECK_SIZE;
use crate::JOKER_VALUE;
use crate::error::SolitaireError;

/// The full cipher state: 54 distinct cards in order, index 0 on top.
///
/// Position is the only state. Every operation permutes the array in place
/// and preserves the invariant that each of the 52 standard cards and both
/// jokers appears exactly once.
///
/// One keystream digit costs one [`Deck::advance`] (or more, when a joker
/// turns up as the output card and is skipped).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Deck([Card; DECK_SIZE]);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Canonical order: Ace..King of clubs, diamonds, hearts, spades,
    /// then the slow joker, then the fast joker.
    pub fn new() -> Self {
        Self(std::array::from_fn(|i| Card::from(i as u8 + 1)))
    }
    /// Cards from top to bottom.
    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
    pub fn top(&self) -> Card {
        self.0[0]
    }
    pub fn bottom(&self) -> Card {
        self.0[DECK_SIZE - 1]
    }

    /// Index of `card`. Every card is present exactly once.
    pub fn find(&self, card: Card) -> usize {
        self.0
            .iter()
            .position(|c| *c == card)
            .expect("deck holds every card")
    }
    pub fn find_joker_a(&self) -> usize {
        self.find(Card::JOKER_A)
    }
    pub fn find_joker_b(&self) -> usize {
        self.find(Card::JOKER_B)
    }
    /// Index of whichever joker is nearer the top.
    pub fn first_joker(&self) -> usize {
        self.0
            .iter()
            .position(Card::is_joker)
            .expect("deck holds both jokers")
    }
    /// Index of whichever joker is nearer the bottom.
    pub fn last_joker(&self) -> usize {
        self.0
            .iter()
            .rposition(Card::is_joker)
            .expect("deck holds both jokers")
    }

    /// Moves the card at `position` down by `by` places, wrapping circularly.
    ///
    /// A card never wraps into the top slot: when `position + by` runs off
    /// the bottom it travels one extra place, so a bottom card moved by one
    /// lands just below the top card.
    pub fn shift(&mut self, position: usize, by: usize) {
        let offset = match position + by >= DECK_SIZE {
            true => by + 1,
            false => by,
        };
        self.relocate(position, (position + offset) % DECK_SIZE);
    }

    /// Removes the card at `src` and reinserts it at `dst`.
    /// Cards in between close the gap or make room.
    fn relocate(&mut self, src: usize, dst: usize) {
        match src.cmp(&dst) {
            std::cmp::Ordering::Less => self.0[src..=dst].rotate_left(1),
            std::cmp::Ordering::Greater => self.0[dst..=src].rotate_right(1),
            std::cmp::Ordering::Equal => {}
        }
    }

    /// Swaps the cards above the first joker with the cards below the last
    /// joker. The jokers and everything between them stay together in the
    /// middle. Either outer block may be empty.
    pub fn triple_cut(&mut self) {
        let f = self.first_joker();
        let l = self.last_joker();
        let above = f;
        let below = DECK_SIZE - 1 - l;
        let mut next = self.0;
        next[..below].copy_from_slice(&self.0[l + 1..]);
        next[below..DECK_SIZE - above].copy_from_slice(&self.0[f..=l]);
        next[DECK_SIZE - above..].copy_from_slice(&self.0[..f]);
        self.0 = next;
    }

    /// Moves the top `cut` cards to sit just above the bottom card, which
    /// stays where it is. A zero cut leaves the deck untouched.
    ///
    /// # Panics
    ///
    /// Panics if `cut` is not below 54.
    pub fn count_cut(&mut self, cut: usize) {
        assert!(cut < DECK_SIZE, "count cut must be below {}, got {}", DECK_SIZE, cut);
        self.0[..DECK_SIZE - 1].rotate_left(cut);
    }

    /// Count cut by the value of the bottom card.
    pub fn default_count_cut(&mut self) {
        self.count_cut(self.bottom().value() as usize % DECK_SIZE);
    }

    /// One full permutation step: slow joker down one, fast joker down two,
    /// triple cut, count cut.
    pub fn advance(&mut self) {
        let a = self.find_joker_a();
        self.shift(a, 1);
        let b = self.find_joker_b();
        self.shift(b, 2);
        self.triple_cut();
        self.default_count_cut();
    }

    /// Produces the next keystream digit in `1..=52`.
    ///
    /// After advancing, the top card's value counts down into the deck and
    /// the card found there is the output. A joker output is discarded and
    /// the deck advanced again.
    pub fn key(&mut self) -> u8 {
        loop {
            self.advance();
            let value = self.0[self.top().value() as usize].value();
            match value {
                JOKER_VALUE => log::trace!("joker output, advancing again"),
                _ => return value,
            }
        }
    }

    /// Endless keystream drawn from this deck.
    pub fn keystream(&mut self) -> Keystream<'_> {
        Keystream(self)
    }

    /// Comma-separated export tokens, top first, suitable for [`Deck::try_from`].
    pub fn export(&self) -> String {
        self.0
            .iter()
            .map(Card::short)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Checks that no card appears twice. With exactly 54 cards drawn from
    /// 54 possibilities, that also proves none is missing.
    fn verify(cards: &[Card; DECK_SIZE]) -> Result<(), SolitaireError> {
        let mut seen = [false; DECK_SIZE + 1];
        for card in cards {
            match std::mem::replace(&mut seen[u8::from(*card) as usize], true) {
                true => return Err(SolitaireError::DuplicateCard { card: card.short() }),
                false => continue,
            }
        }
        Ok(())
    }
}

/// Infinite iterator of keystream digits, advancing the borrowed deck.
pub struct Keystream<'a>(&'a mut Deck);

impl Iterator for Keystream<'_> {
    type Item = u8;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.key())
    }
}

/// Import from individual export tokens.
impl<S: AsRef<str>> TryFrom<&[S]> for Deck {
    type Error = SolitaireError;
    fn try_from(tokens: &[S]) -> Result<Self, Self::Error> {
        if tokens.len() != DECK_SIZE {
            return Err(SolitaireError::DeckSize {
                count: tokens.len(),
            });
        }
        let mut cards = [Card::JOKER_A; DECK_SIZE];
        for (slot, token) in cards.iter_mut().zip(tokens) {
            *slot = Card::try_from(token.as_ref()).map_err(|reason| {
                SolitaireError::InvalidCard {
                    token: token.as_ref().to_string(),
                    reason,
                }
            })?;
        }
        Self::verify(&cards)?;
        log::debug!("imported deck");
        Ok(Self(cards))
    }
}

/// Import from the comma-separated export string.
impl TryFrom<&str> for Deck {
    type Error = SolitaireError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.trim().split(',').collect::<Vec<&str>>().as_slice())
    }
}
impl TryFrom<String> for Deck {
    type Error = SolitaireError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl std::str::FromStr for Deck {
    type Err = SolitaireError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
impl From<Deck> for String {
    fn from(deck: Deck) -> String {
        deck.export()
    }
}

impl Arbitrary for Deck {
    fn random() -> Self {
        use rand::seq::SliceRandom;
        let mut deck = Self::new();
        deck.0.shuffle(&mut rand::rng());
        deck
    }
}

/// Numbered listing, one card per line, top first.
impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            writeln!(f, "{:>2}: {}", i + 1, card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rank;
    use crate::Suit;

    const CRYPTONOMICON: &str = "C7,C8,C9,D3,CQ,CK,DA,D2,SK,H4,D7,D8,D9,D10,DJ,DQ,DK,D4,C2,H5,H6,C5,H9,H10,HJ,HQ,H7,S2,S3,S4,S5,S6,S7,H8,SQ,JA,H2,S10,C6,D5,D6,HK,SA,S8,C10,CJ,HA,SJ,JB,H3,C3,C4,CA,S9";

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::from((rank, suit))
    }

    fn is_permutation(deck: &Deck) -> bool {
        let mut values = deck.iter().map(|c| u8::from(*c)).collect::<Vec<u8>>();
        values.sort();
        values == (1..=54).collect::<Vec<u8>>()
    }

    #[test]
    fn canonical_order() {
        let deck = Deck::new();
        assert_eq!(deck.top(), card(Rank::Ace, Suit::C));
        assert_eq!(deck.cards()[12], card(Rank::King, Suit::C));
        assert_eq!(deck.cards()[13], card(Rank::Ace, Suit::D));
        assert_eq!(deck.cards()[51], card(Rank::King, Suit::S));
        assert_eq!(deck.find_joker_a(), 52);
        assert_eq!(deck.find_joker_b(), 53);
        assert!(is_permutation(&deck));
    }

    #[test]
    fn shift_wraps_past_top_card() {
        let mut deck = Deck::new();
        deck.shift(deck.find_joker_a(), 1);
        assert_eq!(deck.find_joker_a(), 53);
        assert_eq!(deck.find_joker_b(), 52);
        deck.shift(deck.find_joker_b(), 2);
        assert_eq!(deck.find_joker_a(), 53);
        assert_eq!(deck.find_joker_b(), 1);
        assert_eq!(deck.top(), card(Rank::Ace, Suit::C));
    }

    #[test]
    fn shift_bottom_card_lands_second() {
        let mut deck = Deck::new();
        deck.shift(53, 1);
        assert_eq!(deck.cards()[1], Card::JOKER_B);
        assert_eq!(deck.cards()[2], card(Rank::Two, Suit::C));
        assert_eq!(deck.bottom(), Card::JOKER_A);
    }

    #[test]
    fn shift_within_deck_swaps_neighbours() {
        let mut deck = Deck::new();
        deck.shift(10, 2);
        assert_eq!(deck.cards()[10], card(Rank::Queen, Suit::C));
        assert_eq!(deck.cards()[11], card(Rank::King, Suit::C));
        assert_eq!(deck.cards()[12], card(Rank::Jack, Suit::C));
        assert!(is_permutation(&deck));
    }

    #[test]
    fn triple_cut_swaps_outer_blocks() {
        let mut deck = Deck::new();
        deck.shift(52, 1);
        // ... KS JB JA
        deck.shift(deck.find_joker_a(), 1);
        // AC JA 2C ... KS JB
        deck.triple_cut();
        assert_eq!(deck.top(), Card::JOKER_A);
        assert_eq!(deck.cards()[1], card(Rank::Two, Suit::C));
        assert_eq!(deck.cards()[52], Card::JOKER_B);
        assert_eq!(deck.bottom(), card(Rank::Ace, Suit::C));
    }

    #[test]
    fn triple_cut_with_jokers_at_both_edges() {
        let mut deck = Deck::new();
        deck.shift(52, 1);
        deck.shift(53, 1);
        // AC JA 2C ... KS JB
        deck.shift(0, 1);
        // JA AC 2C ... KS JB
        let before = deck.clone();
        deck.triple_cut();
        assert_eq!(deck, before);
    }

    #[test]
    fn triple_cut_with_adjacent_jokers() {
        let mut deck = Deck::new();
        deck.triple_cut();
        // JA JB AC ... KS
        assert_eq!(deck.find_joker_a(), 0);
        assert_eq!(deck.find_joker_b(), 1);
        assert_eq!(deck.cards()[2], card(Rank::Ace, Suit::C));
        assert_eq!(deck.bottom(), card(Rank::King, Suit::S));
    }

    #[test]
    fn count_cut_keeps_bottom_card() {
        let mut deck = Deck::new();
        deck.count_cut(3);
        assert_eq!(deck.top(), card(Rank::Four, Suit::C));
        assert_eq!(deck.cards()[50], card(Rank::Ace, Suit::C));
        assert_eq!(deck.cards()[52], card(Rank::Three, Suit::C));
        assert_eq!(deck.bottom(), Card::JOKER_B);
    }

    #[test]
    fn count_cut_zero_is_noop() {
        let mut deck = Deck::random();
        let before = deck.clone();
        deck.count_cut(0);
        assert_eq!(deck, before);
    }

    #[test]
    #[should_panic(expected = "count cut must be below")]
    fn count_cut_rejects_full_deck() {
        Deck::new().count_cut(DECK_SIZE);
    }

    #[test]
    fn first_advance_from_canonical() {
        let mut deck = Deck::new();
        deck.advance();
        assert_eq!(deck.top(), card(Rank::Two, Suit::C));
        assert_eq!(deck.cards()[50], card(Rank::King, Suit::S));
        assert_eq!(deck.cards()[51], Card::JOKER_A);
        assert_eq!(deck.cards()[52], Card::JOKER_B);
        assert_eq!(deck.bottom(), card(Rank::Ace, Suit::C));
    }

    #[test]
    fn canonical_keystream() {
        let mut deck = Deck::new();
        let digits = deck.keystream().take(10).collect::<Vec<u8>>();
        assert_eq!(digits, vec![4, 49, 10, 24, 8, 51, 44, 6, 4, 33]);
    }

    #[test]
    fn advance_preserves_permutation() {
        for _ in 0..64 {
            let mut deck = Deck::random();
            for _ in 0..256 {
                deck.advance();
                assert!(is_permutation(&deck));
            }
        }
    }

    #[test]
    fn key_stays_in_range() {
        for _ in 0..16 {
            let mut deck = Deck::random();
            assert!(deck.keystream().take(512).all(|k| (1..=52).contains(&k)));
        }
    }

    #[test]
    fn export_round_trips() {
        let deck = Deck::try_from(CRYPTONOMICON).unwrap();
        assert_eq!(deck.export(), CRYPTONOMICON);
        let deck = Deck::random();
        assert_eq!(Deck::try_from(deck.export().as_str()).unwrap(), deck);
    }

    #[test]
    fn import_tolerates_spacing_and_case() {
        let spaced = CRYPTONOMICON.replace(',', ", ").to_lowercase();
        let deck = Deck::try_from(spaced.as_str()).unwrap();
        assert_eq!(deck.export(), CRYPTONOMICON);
    }

    #[test]
    fn import_rejects_wrong_count() {
        let short = CRYPTONOMICON.rsplit_once(',').unwrap().0;
        assert_eq!(
            Deck::try_from(short),
            Err(SolitaireError::DeckSize { count: 53 })
        );
        assert_eq!(
            Deck::try_from(""),
            Err(SolitaireError::DeckSize { count: 1 })
        );
    }

    #[test]
    fn import_rejects_bad_token() {
        let bad = CRYPTONOMICON.replace("SQ", "SX");
        match Deck::try_from(bad.as_str()) {
            Err(SolitaireError::InvalidCard { token, .. }) => assert_eq!(token, "SX"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn import_rejects_space_inside_token() {
        let bad = CRYPTONOMICON.replace("C7,", "C 7,");
        match Deck::try_from(bad.as_str()) {
            Err(SolitaireError::InvalidCard { token, .. }) => assert_eq!(token, "C 7"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn import_rejects_duplicates() {
        let dup = CRYPTONOMICON.replace("JB", "JA");
        assert_eq!(
            Deck::try_from(dup.as_str()),
            Err(SolitaireError::DuplicateCard {
                card: String::from("JA")
            })
        );
    }

    #[test]
    fn listing() {
        let listing = Deck::new().to_string();
        let lines = listing.lines().collect::<Vec<&str>>();
        assert_eq!(lines.len(), DECK_SIZE);
        assert_eq!(lines[0], " 1: ♣ A");
        assert_eq!(lines[53], "54: Joker B");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_export_string() {
        let deck = Deck::try_from(CRYPTONOMICON).unwrap();
        let json = serde_json::to_string(&deck).unwrap();
        assert_eq!(json, format!("\"{}\"", CRYPTONOMICON));
        assert_eq!(serde_json::from_str::<Deck>(&json).unwrap(), deck);
        assert!(serde_json::from_str::<Deck>("\"C7,C8\"").is_err());
    }
}
