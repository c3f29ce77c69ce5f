//! The undealt reserve.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Number of cards the stock hands out per deal, one per tableau pile.
pub const DEAL_SIZE: usize = 10;

/// One dealt row, sized so a deal never touches the heap.
pub type DealtRow = SmallVec<[Card; DEAL_SIZE]>;

/// Face-down cards waiting to be dealt.
///
/// The last card is the next one out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stock {
    cards: Vec<Card>,
}

impl Stock {
    /// Create a stock from cards; the last card is dealt first.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the stock, next-to-deal last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Full deals still available.
    #[must_use]
    pub fn remaining_deals(&self) -> usize {
        self.cards.len() / DEAL_SIZE
    }

    /// True if a full row can be dealt.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        self.cards.len() >= DEAL_SIZE
    }

    /// Remove the next [`DEAL_SIZE`] cards, in dealing order.
    ///
    /// All or nothing: returns `None` and leaves the stock untouched when
    /// fewer than [`DEAL_SIZE`] cards remain.
    pub fn deal_row(&mut self) -> Option<DealtRow> {
        if !self.can_deal() {
            return None;
        }
        let split = self.cards.len() - DEAL_SIZE;
        Some(self.cards.drain(split..).rev().collect())
    }
}
