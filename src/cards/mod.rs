//! Card system: suits, ranks, card instances, and the deck.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: fixed card faces
//! - `Card`: a physical card with a unique `CardId` and a face-up flag
//! - `SuitCount`: how many suits a variant plays with
//! - `create_deck` / `shuffle`: building and shuffling the 104-card deck

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit, NUM_RANKS};
pub use deck::{create_deck, shuffle, SuitCount, DECKS, DECK_SIZE};
