//! Tableau move validation and move discovery.
//!
//! All functions here are read-only over the tableau. Validation produces a
//! [`Move`] that the engine then commits, so a refused move can never leave
//! a half-applied state behind.

use serde::{Deserialize, Serialize};

use super::sequence::{movable_sequence_end, sequence_reaches_top};
use crate::cards::Card;
use crate::core::error::MoveError;
use crate::zones::Pile;

/// A validated block move between two tableau piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Source pile.
    pub from: usize,
    /// Index of the leading (lowest, highest-ranked) card in the source.
    pub index: usize,
    /// Destination pile.
    pub to: usize,
    /// Cards moved; the block always ends at the source's top.
    pub count: usize,
}

impl Move {
    /// True if more than one card moves.
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        self.count >= 2
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} card(s) from pile {}[{}] to pile {}",
            self.count, self.from, self.index, self.to
        )
    }
}

/// What a committed move changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub applied: Move,
    /// A face-down card in the source pile was turned up.
    pub revealed: bool,
    /// Complete runs discarded from the destination.
    pub runs_completed: usize,
}

/// Whether `lead` may be placed on `dest`.
///
/// An empty pile takes anything. Otherwise the top must be face-up and
/// exactly one rank above `lead`; suits are not compared.
pub(crate) fn check_destination(dest: &Pile, dest_index: usize, lead: &Card) -> Result<(), MoveError> {
    let Some(top) = dest.top() else {
        return Ok(());
    };
    if !top.is_face_up() {
        return Err(MoveError::DestinationFaceDown { pile: dest_index });
    }
    if !lead.rank().is_one_below(top.rank()) {
        return Err(MoveError::RankMismatch {
            moving: lead.rank(),
            target: top.rank(),
        });
    }
    Ok(())
}

/// Validate moving the block at `piles[from][index..]` onto `piles[to]`.
///
/// Checks run in order: distinct piles, pile bounds, card bounds,
/// orientation, the block reaching the top, then the destination.
pub fn validate_move(piles: &[Pile], from: usize, index: usize, to: usize) -> Result<Move, MoveError> {
    if from == to {
        return Err(MoveError::SamePile(from));
    }
    let count = piles.len();
    for pile in [from, to] {
        if pile >= count {
            return Err(MoveError::PileOutOfRange { index: pile, count });
        }
    }

    let source = &piles[from];
    let cards = source.cards();
    let lead = cards.get(index).ok_or(MoveError::CardOutOfRange {
        pile: from,
        index,
        len: cards.len(),
    })?;
    if !lead.is_face_up() {
        return Err(MoveError::FaceDown { pile: from, index });
    }
    if !sequence_reaches_top(cards, index) {
        return Err(MoveError::NotMovable { pile: from, index });
    }

    check_destination(&piles[to], to, lead)?;

    let end = movable_sequence_end(cards, index);
    Ok(Move {
        from,
        index,
        to,
        count: end - index + 1,
    })
}

/// Every block that could leave its pile: `(pile, index, count)`.
///
/// A block qualifies when its leading card is face-up and its movable
/// sequence ends at the pile's top.
fn movable_blocks(piles: &[Pile]) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
    piles.iter().enumerate().flat_map(|(p, pile)| {
        let cards = pile.cards();
        (0..cards.len()).filter_map(move |i| {
            (cards[i].is_face_up() && sequence_reaches_top(cards, i))
                .then(|| (p, i, cards.len() - i))
        })
    })
}

/// All legal moves whose block has at least `min_count` cards, ordered by
/// source pile, start index, then destination pile.
fn moves_with_min_count(piles: &[Pile], min_count: usize) -> impl Iterator<Item = Move> + '_ {
    movable_blocks(piles)
        .filter(move |&(_, _, count)| count >= min_count)
        .flat_map(move |(from, index, count)| {
            let lead = &piles[from].cards()[index];
            (0..piles.len()).filter_map(move |to| {
                (to != from && check_destination(&piles[to], to, lead).is_ok()).then_some(Move {
                    from,
                    index,
                    to,
                    count,
                })
            })
        })
}

/// Every legal tableau move.
#[must_use]
pub fn legal_moves(piles: &[Pile]) -> Vec<Move> {
    moves_with_min_count(piles, 1).collect()
}

/// True if any legal move exists, single cards included.
#[must_use]
pub fn has_any_tableau_move(piles: &[Pile]) -> bool {
    moves_with_min_count(piles, 1).next().is_some()
}

/// True if any legal move of two or more cards exists.
#[must_use]
pub fn has_any_sequence_move(piles: &[Pile]) -> bool {
    moves_with_min_count(piles, 2).next().is_some()
}
