//! Game status as an explicit state machine.
//!
//! A position is classified from three facts: whether the stock can still
//! deal, how many runs are left to complete, and whether a multi-card move
//! exists. Single-card moves do not count; a position whose only moves are
//! single cards, with an exhausted stock, is lost.

use serde::{Deserialize, Serialize};

/// Complete runs needed to win.
pub const RUNS_TO_WIN: usize = 8;

/// Whether the stock can still deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealPhase {
    /// This many full deals remain (always at least one).
    DealsRemaining(usize),
    /// Fewer than ten cards left.
    Exhausted,
}

impl DealPhase {
    /// Phase for a stock holding `remaining_deals` full deals.
    #[must_use]
    pub fn from_remaining(remaining_deals: usize) -> Self {
        match remaining_deals {
            0 => DealPhase::Exhausted,
            n => DealPhase::DealsRemaining(n),
        }
    }

    #[must_use]
    pub fn can_deal(self) -> bool {
        matches!(self, DealPhase::DealsRemaining(_))
    }
}

/// The facts that decide a position's status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSummary {
    pub deal_phase: DealPhase,
    /// Runs still to complete before the game is won.
    pub runs_remaining: usize,
    /// A legal move of two or more cards exists.
    pub sequence_move_available: bool,
}

/// Overall game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Classify a position.
    ///
    /// Won beats everything. Otherwise the game goes on while the stock can
    /// deal or a sequence move exists.
    #[must_use]
    pub fn classify(summary: &PositionSummary) -> Self {
        if summary.runs_remaining == 0 {
            GameStatus::Won
        } else if summary.deal_phase.can_deal() || summary.sequence_move_available {
            GameStatus::InProgress
        } else {
            GameStatus::Lost
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        })
    }
}
