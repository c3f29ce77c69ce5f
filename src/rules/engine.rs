//! The Spider Solitaire engine.
//!
//! `SpiderEngine` owns the ten tableau piles, the stock, and the run
//! counter. Every command validates first and commits second: a refused
//! command leaves every pile, the stock, and every card's orientation
//! exactly as they were.
//!
//! ## Usage
//!
//! ```
//! use spider_engine::{GameRng, SpiderEngine, SuitCount};
//!
//! let mut engine = SpiderEngine::with_rng(SuitCount::Two, GameRng::new(42));
//! assert_eq!(engine.stock_len(), 50);
//!
//! if let Some(m) = engine.legal_moves().first().copied() {
//!     assert!(engine.try_move_sequence(m.from, m.index, m.to));
//! }
//! assert!(engine.deal_from_stock());
//! assert_eq!(engine.remaining_deals(), 4);
//! ```

use log::{debug, trace};

use super::moves::{self, Move, MoveOutcome};
use super::sequence::{self, RUN_LENGTH};
use super::status::{DealPhase, GameStatus, PositionSummary, RUNS_TO_WIN};
use crate::cards::{create_deck, shuffle, Card, Suit, SuitCount};
use crate::core::config::SpiderConfig;
use crate::core::error::{DealError, MoveError};
use crate::core::rng::GameRng;
use crate::zones::{Pile, Stock, DEAL_SIZE};

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 10;

/// Cards dealt to each pile at the start; the top one is turned up.
const INITIAL_PILE_SIZES: [usize; TABLEAU_PILES] = [6, 6, 6, 6, 5, 5, 5, 5, 5, 5];

/// Spider Solitaire rules engine.
///
/// Not internally synchronized. A host that shares one engine between
/// threads must serialize calls itself.
#[derive(Clone, Debug)]
pub struct SpiderEngine {
    piles: [Pile; TABLEAU_PILES],
    stock: Stock,
    completed_runs: usize,
    completed_run_suits: Vec<Suit>,
    suit_count: SuitCount,
    rng: GameRng,
}

impl Default for SpiderEngine {
    fn default() -> Self {
        Self::from_config(&SpiderConfig::default())
    }
}

impl SpiderEngine {
    /// Start a game with a raw suit count and an entropy-seeded shuffle.
    ///
    /// Counts other than 1, 2 or 4 play with one suit.
    #[must_use]
    pub fn new(suit_count: u8) -> Self {
        Self::with_rng(SuitCount::from_count(suit_count), GameRng::from_entropy())
    }

    /// Start a game shuffled by `rng`.
    #[must_use]
    pub fn with_rng(suit_count: SuitCount, rng: GameRng) -> Self {
        let mut engine = Self {
            piles: Default::default(),
            stock: Stock::default(),
            completed_runs: 0,
            completed_run_suits: Vec::new(),
            suit_count,
            rng,
        };
        engine.setup();
        engine
    }

    /// Start a game described by `config`.
    #[must_use]
    pub fn from_config(config: &SpiderConfig) -> Self {
        Self::with_rng(config.suit_count, config.rng())
    }

    /// Throw the current game away and deal a new one.
    ///
    /// `None` keeps the current suit count. The shuffle continues the
    /// engine's random stream, so a seeded engine replays the same series
    /// of games.
    pub fn new_game(&mut self, suit_count: Option<SuitCount>) {
        if let Some(count) = suit_count {
            self.suit_count = count;
        }
        self.setup();
    }

    /// Build, shuffle, and deal a fresh deck.
    fn setup(&mut self) {
        let mut deck = create_deck(self.suit_count);
        shuffle(&mut deck, &mut self.rng);

        let mut cards = deck.into_iter();
        for (pile, size) in self.piles.iter_mut().zip(INITIAL_PILE_SIZES) {
            *pile = cards.by_ref().take(size).collect();
            pile.flip_top_up();
        }
        self.stock = Stock::new(cards.collect());
        self.completed_runs = 0;
        self.completed_run_suits.clear();

        debug!(
            "new game: {}, seed {}, {} cards in stock",
            self.suit_count,
            self.rng.seed(),
            self.stock.len()
        );
    }

    // === Queries ===

    /// The tableau, pile 0 first.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    #[must_use]
    pub fn pile(&self, index: usize) -> Option<&Pile> {
        self.piles.get(index)
    }

    /// Card at `index` in pile `pile`.
    #[must_use]
    pub fn card(&self, pile: usize, index: usize) -> Option<&Card> {
        self.piles.get(pile)?.get(index)
    }

    #[must_use]
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Full deals left in the stock.
    #[must_use]
    pub fn remaining_deals(&self) -> usize {
        self.stock.remaining_deals()
    }

    #[must_use]
    pub fn completed_runs(&self) -> usize {
        self.completed_runs
    }

    /// Suit of every run completed so far, in completion order.
    #[must_use]
    pub fn completed_run_suits(&self) -> &[Suit] {
        &self.completed_run_suits
    }

    #[must_use]
    pub fn suit_count(&self) -> SuitCount {
        self.suit_count
    }

    /// Seed of the engine's random source.
    ///
    /// An engine built with `GameRng::new(seed)` deals the same games in
    /// the same order.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Cards on the tableau, in the stock, and in discarded runs.
    ///
    /// Always 104 for an engine that has only been driven through its
    /// public commands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let tableau: usize = self.piles.iter().map(Pile::len).sum();
        tableau + self.stock.len() + self.completed_runs * RUN_LENGTH
    }

    /// Last index of the movable sequence starting at `index` in `pile`.
    ///
    /// Returns `index` unchanged for a face-down card or out-of-range input.
    #[must_use]
    pub fn movable_sequence_end(&self, pile: usize, index: usize) -> usize {
        self.piles
            .get(pile)
            .map_or(index, |p| sequence::movable_sequence_end(p.cards(), index))
    }

    #[must_use]
    pub fn can_deal_from_stock(&self) -> bool {
        self.stock.can_deal()
    }

    /// Every legal tableau move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        moves::legal_moves(&self.piles)
    }

    /// True if any tableau move exists, single cards included.
    #[must_use]
    pub fn has_any_tableau_move(&self) -> bool {
        moves::has_any_tableau_move(&self.piles)
    }

    /// True if a move of two or more cards exists.
    #[must_use]
    pub fn has_any_sequence_move(&self) -> bool {
        moves::has_any_sequence_move(&self.piles)
    }

    /// The facts the game status is decided from.
    #[must_use]
    pub fn summary(&self) -> PositionSummary {
        PositionSummary {
            deal_phase: DealPhase::from_remaining(self.remaining_deals()),
            runs_remaining: RUNS_TO_WIN.saturating_sub(self.completed_runs),
            sequence_move_available: self.has_any_sequence_move(),
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::classify(&self.summary())
    }

    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.completed_runs >= RUNS_TO_WIN
    }

    /// True when the game is not won, the stock cannot deal, and no move of
    /// two or more cards exists. Remaining single-card moves do not help.
    #[must_use]
    pub fn is_game_lost(&self) -> bool {
        self.status() == GameStatus::Lost
    }

    // === Commands ===

    /// Deal one card face-up onto every pile.
    ///
    /// Returns `false` and changes nothing if the stock holds fewer than ten
    /// cards.
    pub fn deal_from_stock(&mut self) -> bool {
        self.deal().is_ok()
    }

    /// Deal one card face-up onto every pile, then discard any runs this
    /// completed. Returns the number of runs completed.
    pub fn deal(&mut self) -> Result<usize, DealError> {
        let row = self.stock.deal_row().ok_or(DealError::InsufficientStock {
            remaining: self.stock.len(),
            required: DEAL_SIZE,
        })?;

        for (pile, mut card) in self.piles.iter_mut().zip(row) {
            card.set_face_up(true);
            pile.push(card);
        }

        let runs: usize = (0..TABLEAU_PILES).map(|i| self.settle_pile(i)).sum();
        debug!("dealt from stock, {} cards left, {} run(s) completed", self.stock.len(), runs);
        Ok(runs)
    }

    /// Move the block starting at `index` of `from` onto `to`.
    ///
    /// Returns `false` and changes nothing if the move is illegal.
    pub fn try_move_sequence(&mut self, from: usize, index: usize, to: usize) -> bool {
        self.move_sequence(from, index, to).is_ok()
    }

    /// Move the block starting at `index` of `from` onto `to`.
    ///
    /// On success the source's new top is turned up and complete runs are
    /// discarded from the destination.
    pub fn move_sequence(&mut self, from: usize, index: usize, to: usize) -> Result<MoveOutcome, MoveError> {
        let applied = moves::validate_move(&self.piles, from, index, to).map_err(|err| {
            trace!("move rejected: {err}");
            err
        })?;

        let block = self.piles[from]
            .take_range(applied.index, applied.count)
            .ok_or(MoveError::NotMovable { pile: from, index })?;
        self.piles[to].extend(block);

        let revealed = self.piles[from].flip_top_up();
        let runs_completed = self.settle_pile(to);

        trace!("moved {applied}");
        Ok(MoveOutcome {
            applied,
            revealed,
            runs_completed,
        })
    }

    /// Discard complete runs from one pile and count them.
    fn settle_pile(&mut self, index: usize) -> usize {
        let suits = sequence::strip_completed_runs(&mut self.piles[index]);
        for suit in &suits {
            debug!("completed {suit:?} run on pile {index}");
        }
        self.completed_runs += suits.len();
        self.completed_run_suits.extend(suits.iter().copied());
        suits.len()
    }
}

#[cfg(test)]
impl SpiderEngine {
    /// Build an arbitrary position. Card conservation is the caller's
    /// business.
    pub(crate) fn from_parts(
        suit_count: SuitCount,
        piles: Vec<Vec<Card>>,
        stock: Vec<Card>,
        completed_runs: usize,
    ) -> Self {
        let mut piles = piles.into_iter();
        Self {
            piles: std::array::from_fn(|_| piles.next().unwrap_or_default().into_iter().collect()),
            stock: Stock::new(stock),
            completed_runs,
            completed_run_suits: vec![Suit::Spades; completed_runs],
            suit_count,
            rng: GameRng::new(0),
        }
    }
}
