//! Deck construction and shuffling.
//!
//! Spider always plays with 104 cards (two standard decks). Variants with
//! fewer suits keep the size by adding copies of each remaining suit:
//!
//! | suits | copies of each rank per suit per deck |
//! |-------|---------------------------------------|
//! | 1     | 4                                     |
//! | 2     | 2                                     |
//! | 4     | 1                                     |

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Rank, Suit, NUM_RANKS};
use crate::core::rng::GameRng;

/// Number of physical decks combined into one deal.
pub const DECKS: usize = 2;

/// Total cards in play, independent of the suit count.
pub const DECK_SIZE: usize = DECKS * 4 * NUM_RANKS;

/// Number of suits in play.
///
/// Built from a raw count with [`SuitCount::from_count`]; anything other
/// than 1, 2 or 4 normalizes to one suit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum SuitCount {
    #[default]
    One,
    Two,
    Four,
}

impl SuitCount {
    /// Normalize a raw suit count.
    #[must_use]
    pub const fn from_count(count: u8) -> Self {
        match count {
            2 => SuitCount::Two,
            4 => SuitCount::Four,
            _ => SuitCount::One,
        }
    }

    /// Number of suits as a plain integer.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            SuitCount::One => 1,
            SuitCount::Two => 2,
            SuitCount::Four => 4,
        }
    }

    /// Copies of every (suit, rank) pair in a single deck.
    #[must_use]
    pub const fn copies_per_suit(self) -> usize {
        4 / self.count()
    }

    /// The suits in play, a prefix of [`Suit::ALL`].
    #[must_use]
    pub fn suits(self) -> &'static [Suit] {
        match self {
            SuitCount::One => &[Suit::Spades],
            SuitCount::Two => &[Suit::Spades, Suit::Hearts],
            SuitCount::Four => &Suit::ALL,
        }
    }
}

impl From<u8> for SuitCount {
    fn from(count: u8) -> Self {
        Self::from_count(count)
    }
}

impl From<SuitCount> for u8 {
    fn from(count: SuitCount) -> Self {
        count.count() as u8
    }
}

impl std::fmt::Display for SuitCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuitCount::One => f.write_str("1 suit"),
            n => write!(f, "{} suits", n.count()),
        }
    }
}

/// Build the unshuffled 104-card deck for a suit count.
///
/// Order is deck-major, then suit, then rank, then copy. Every card starts
/// face-down and gets the next [`CardId`] in creation order.
#[must_use]
pub fn create_deck(suit_count: SuitCount) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u8;

    for _ in 0..DECKS {
        for &suit in suit_count.suits() {
            for rank in Rank::ALL {
                for _ in 0..suit_count.copies_per_suit() {
                    cards.push(Card::new(CardId(next_id), suit, rank));
                    next_id += 1;
                }
            }
        }
    }

    debug_assert_eq!(cards.len(), DECK_SIZE);
    cards
}

/// Fisher–Yates shuffle in place.
///
/// For each `i` from the last index down to 1, swaps `i` with an index
/// drawn uniformly from `0..=i`.
pub fn shuffle<T>(cards: &mut [T], rng: &mut GameRng) {
    for i in (1..cards.len()).rev() {
        let j = rng.gen_index(i);
        cards.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_suit_count_normalization() {
        assert_eq!(SuitCount::from_count(1), SuitCount::One);
        assert_eq!(SuitCount::from_count(2), SuitCount::Two);
        assert_eq!(SuitCount::from_count(4), SuitCount::Four);
        assert_eq!(SuitCount::from_count(0), SuitCount::One);
        assert_eq!(SuitCount::from_count(3), SuitCount::One);
        assert_eq!(SuitCount::from_count(200), SuitCount::One);
    }

    #[test]
    fn test_deck_size_every_variant() {
        for count in [SuitCount::One, SuitCount::Two, SuitCount::Four] {
            let deck = create_deck(count);
            assert_eq!(deck.len(), DECK_SIZE);
            assert!(deck.iter().all(|c| !c.is_face_up()));
        }
    }

    #[test]
    fn test_deck_composition() {
        for count in [SuitCount::One, SuitCount::Two, SuitCount::Four] {
            let deck = create_deck(count);
            let mut tally: HashMap<(Suit, Rank), usize> = HashMap::new();
            for card in &deck {
                *tally.entry((card.suit(), card.rank())).or_default() += 1;
            }

            assert_eq!(tally.len(), count.count() * NUM_RANKS);
            let expected = DECKS * count.copies_per_suit();
            assert!(tally.values().all(|&n| n == expected));
            assert!(deck.iter().all(|c| count.suits().contains(&c.suit())));
        }
    }

    #[test]
    fn test_unique_ids() {
        let deck = create_deck(SuitCount::Two);
        let mut ids: Vec<_> = deck.iter().map(Card::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DECK_SIZE);
        assert_eq!(ids.first(), Some(&CardId(0)));
        assert_eq!(ids.last(), Some(&CardId(103)));
    }

    #[test]
    fn test_unshuffled_order() {
        let deck = create_deck(SuitCount::Four);
        assert_eq!((deck[0].suit(), deck[0].rank()), (Suit::Spades, Rank::Ace));
        assert_eq!((deck[12].suit(), deck[12].rank()), (Suit::Spades, Rank::King));
        assert_eq!((deck[13].suit(), deck[13].rank()), (Suit::Hearts, Rank::Ace));
        assert_eq!((deck[52].suit(), deck[52].rank()), (Suit::Spades, Rank::Ace));
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut a = create_deck(SuitCount::Four);
        let mut b = create_deck(SuitCount::Four);

        shuffle(&mut a, &mut GameRng::new(42));
        shuffle(&mut b, &mut GameRng::new(42));

        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let original = create_deck(SuitCount::Four);
        let mut shuffled = original.clone();
        shuffle(&mut shuffled, &mut GameRng::new(7));

        assert_ne!(shuffled, original);

        let mut ids: Vec<_> = shuffled.iter().map(Card::id).collect();
        ids.sort();
        let expected: Vec<_> = original.iter().map(Card::id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_shuffle_small_slices() {
        let mut rng = GameRng::new(1);

        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![9];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // Each of three elements should land first at least once.
        let mut rng = GameRng::new(3);
        let mut firsts = [false; 3];
        for _ in 0..200 {
            let mut data = [0usize, 1, 2];
            shuffle(&mut data, &mut rng);
            firsts[data[0]] = true;
        }
        assert_eq!(firsts, [true; 3]);
    }

    #[test]
    fn test_display() {
        assert_eq!(SuitCount::One.to_string(), "1 suit");
        assert_eq!(SuitCount::Four.to_string(), "4 suits");
    }
}
