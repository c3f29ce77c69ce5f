//! Spider rules: sequence queries, move validation, game status, and the
//! engine that ties them to an owned tableau.
//!
//! - `sequence`: pure checks over a column (movable extent, complete runs)
//! - `moves`: validating a move and discovering available moves
//! - `status`: the won / lost / in-progress state machine
//! - `engine`: `SpiderEngine`, the stateful entry point

pub mod engine;
pub mod moves;
pub mod sequence;
pub mod status;

pub use engine::{SpiderEngine, TABLEAU_PILES};
pub use moves::{legal_moves, validate_move, Move, MoveOutcome};
pub use sequence::{completed_run_suit, movable_sequence_end, RUN_LENGTH};
pub use status::{DealPhase, GameStatus, PositionSummary, RUNS_TO_WIN};
