//! Pure sequence queries over a column of cards.
//!
//! A *movable sequence* is a face-up, same-suit block that descends by
//! exactly one rank per card. A *complete run* is such a block of
//! [`RUN_LENGTH`] cards from King down to Ace sitting at the top of a pile.

use smallvec::SmallVec;

use crate::cards::{Card, Rank, Suit, NUM_RANKS};
use crate::zones::Pile;

/// Cards in a complete King-to-Ace run.
pub const RUN_LENGTH: usize = NUM_RANKS;

/// Last index of the maximal movable sequence starting at `start`.
///
/// Returns `start` unchanged when it is out of range or the card there is
/// face-down.
#[must_use]
pub fn movable_sequence_end(cards: &[Card], start: usize) -> usize {
    match cards.get(start) {
        Some(card) if card.is_face_up() => {}
        _ => return start,
    }

    let mut end = start;
    while end + 1 < cards.len() && cards[end].continues_with(&cards[end + 1]) {
        end += 1;
    }
    end
}

/// True if a block starting at `start` may leave the pile: it is the top
/// card itself, or its movable sequence reaches the top.
#[must_use]
pub fn sequence_reaches_top(cards: &[Card], start: usize) -> bool {
    let Some(last) = cards.len().checked_sub(1) else {
        return false;
    };
    start == last || (start < last && movable_sequence_end(cards, start) == last)
}

/// Suit of the complete run on top of `cards`, if there is one.
///
/// Checks only the top [`RUN_LENGTH`] cards and stops at the first
/// face-down card, suit change, or rank gap.
#[must_use]
pub fn completed_run_suit(cards: &[Card]) -> Option<Suit> {
    let start = cards.len().checked_sub(RUN_LENGTH)?;
    let window = &cards[start..];

    let head = &window[0];
    if !head.is_face_up() || head.rank() != Rank::King {
        return None;
    }

    window
        .windows(2)
        .all(|pair| pair[0].continues_with(&pair[1]))
        .then(|| head.suit())
}

/// Discard every complete run from the top of `pile`.
///
/// After each removal the newly exposed top card is turned face-up. Returns
/// the suit of each run removed, in removal order.
pub fn strip_completed_runs(pile: &mut Pile) -> SmallVec<[Suit; 2]> {
    let mut removed = SmallVec::new();

    while let Some(suit) = completed_run_suit(pile.cards()) {
        let start = pile.len() - RUN_LENGTH;
        if pile.take_range(start, RUN_LENGTH).is_none() {
            break;
        }
        pile.flip_top_up();
        removed.push(suit);
    }

    removed
}
