//! Card containers: tableau piles and the stock.
//!
//! Both own their cards outright. A card changes container only by being
//! moved out of one and into another, so it is never in two places.

pub mod pile;
pub mod stock;

pub use pile::Pile;
pub use stock::{DealtRow, Stock, DEAL_SIZE};
