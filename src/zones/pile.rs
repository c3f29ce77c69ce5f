//! A single tableau column.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Ordered cards of one tableau column.
///
/// Index 0 is the bottom (dealt first); the last card is the visible top.
/// Cards enter at the top and leave as a contiguous block via
/// [`Pile::take_range`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in order, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Index of the top card, `None` for an empty pile.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    /// The visible top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Place a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Place a block on top, keeping its order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove `count` cards starting at `index` and return them in order.
    ///
    /// Returns `None` (and leaves the pile alone) if the range does not fit.
    pub fn take_range(&mut self, index: usize, count: usize) -> Option<Vec<Card>> {
        let end = index.checked_add(count)?;
        if end > self.cards.len() {
            return None;
        }
        Some(self.cards.drain(index..end).collect())
    }

    /// Turn the top card face-up if it is face-down.
    ///
    /// Returns `true` if a card was turned.
    pub fn flip_top_up(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up() => {
                card.set_face_up(true);
                true
            }
            _ => false,
        }
    }

    /// Number of face-down cards at the bottom of the pile.
    #[must_use]
    pub fn face_down_count(&self) -> usize {
        self.cards.iter().take_while(|c| !c.is_face_up()).count()
    }

    /// True if no face-up card sits below a face-down one.
    #[must_use]
    pub fn face_down_is_contiguous(&self) -> bool {
        self.cards[self.face_down_count()..].iter().all(Card::is_face_up)
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
