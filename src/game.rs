//! The abstract game-state contract.
//!
//! Any two-player, perfect-information, zero-sum game can plug into the
//! search engine by implementing [`Game`]. The search walks the game tree
//! through `make_move`/`unmake_move` on a single mutable state, so
//! implementations must restore the state exactly.

use std::fmt;

/// Heuristic score. Infinity sentinels seed the alpha-beta bounds.
pub type Score = f32;

/// Capability set required of a game state.
///
/// `Display` renders the current state for the terminal; it has no bearing
/// on search correctness.
pub trait Game: fmt::Display {
    type Move: Clone;

    /// Applies `mv` in place and flips the side to move.
    ///
    /// The caller must later pass the *same* move value (including its
    /// captured-piece field, where the game has one) to [`Game::unmake_move`]
    /// to restore the prior state. This is a strict stack discipline.
    fn make_move(&mut self, mv: &Self::Move);

    /// Exact inverse of [`Game::make_move`].
    ///
    /// Behavior is undefined if `mv` is not the most recently made move.
    fn unmake_move(&mut self, mv: &Self::Move);

    /// All pseudo-legal moves for the side to move, in a deterministic order.
    ///
    /// Does not mutate the state. An empty list means the game is over from
    /// the engine's perspective.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Heuristic value of the state from a fixed perspective, independent of
    /// whose turn it is.
    fn heuristic_value(&self) -> Score;

    /// Translates notation into a move, or `None` when the input is
    /// malformed or cannot be attributed to exactly one piece. Never panics
    /// on bad input.
    fn parse(&self, input: &str) -> Option<Self::Move>;
}
