//! Core engine plumbing: randomness, configuration, and errors.
//!
//! Nothing here knows Spider rules; the `rules` module builds on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::SpiderConfig;
pub use error::{DealError, MoveError};
pub use rng::GameRng;
