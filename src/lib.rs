//! # spider-engine
//!
//! Rules engine for Spider Solitaire.
//!
//! The engine owns the 104-card deal: ten tableau piles, the stock, and the
//! count of completed King-to-Ace runs. Callers drive it with two commands
//! (move a sequence, deal from the stock) and read everything else back
//! through queries. Rendering, input, and persistence are left to the host.
//!
//! ## Design Principles
//!
//! 1. **Validate, then commit**: a refused command never mutates anything.
//!    Refusals come back as `false` or as a `MoveError` / `DealError`.
//!
//! 2. **Injected randomness**: shuffles draw from a `GameRng` the caller
//!    can seed, so any deal can be replayed.
//!
//! 3. **Cards have identity**: the two-deck game has duplicate faces, so
//!    each card carries a `CardId` and is moved, never copied.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: suits, ranks, cards, deck construction and shuffle
//! - `zones`: tableau piles and the stock
//! - `rules`: sequence checks, moves, status, and `SpiderEngine`

pub mod cards;
pub mod core;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{DealError, GameRng, MoveError, SpiderConfig};

pub use crate::cards::{Card, CardId, Rank, Suit, SuitCount, DECK_SIZE};

pub use crate::zones::{Pile, Stock, DEAL_SIZE};

pub use crate::rules::{
    DealPhase, GameStatus, Move, MoveOutcome, PositionSummary, SpiderEngine, RUNS_TO_WIN,
    RUN_LENGTH, TABLEAU_PILES,
};
