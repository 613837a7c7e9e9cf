//! Agents: anything that can select the next move for a game state.

mod human;
mod minimax;

pub use human::HumanAgent;
pub use minimax::MinimaxAgent;

use thiserror::Error;

use crate::game::Game;

/// Why an agent could not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The side to move has no legal moves: the game has ended from the
    /// engine's perspective. Callers must treat this as a terminal state,
    /// not retry it.
    #[error("side to move has no legal moves")]
    NoLegalMoves,
    /// The human agent's input stream ended before a move was entered.
    #[error("input ended before a move was entered")]
    InputClosed,
}

/// An entity that selects moves for `G`.
///
/// The state is borrowed mutably because search-backed agents explore it via
/// make/unmake; the state is restored exactly before `select_move` returns.
pub trait Agent<G: Game> {
    fn select_move(&mut self, state: &mut G) -> Result<G::Move, SelectError>;
}
