//! Why a command was refused.
//!
//! None of these are fatal. The boolean entry points
//! (`try_move_sequence`, `deal_from_stock`) collapse them to `false`;
//! the `Result` flavours hand them back for callers that want a reason.

use thiserror::Error;

use crate::cards::Rank;

/// A tableau move that was rejected. Nothing was mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("source and destination are both pile {0}")]
    SamePile(usize),

    #[error("pile {index} does not exist (tableau has {count} piles)")]
    PileOutOfRange { index: usize, count: usize },

    #[error("pile {pile} has no card at index {index} (length {len})")]
    CardOutOfRange { pile: usize, index: usize, len: usize },

    #[error("card {index} of pile {pile} is face-down")]
    FaceDown { pile: usize, index: usize },

    #[error("cards from index {index} of pile {pile} do not form a sequence ending at the top")]
    NotMovable { pile: usize, index: usize },

    #[error("top card of pile {pile} is face-down")]
    DestinationFaceDown { pile: usize },

    #[error("cannot place {moving:?} on {target:?}")]
    RankMismatch { moving: Rank, target: Rank },
}

/// A stock deal that was rejected. Nothing was mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("stock holds {remaining} cards, a deal needs {required}")]
    InsufficientStock { remaining: usize, required: usize },
}
