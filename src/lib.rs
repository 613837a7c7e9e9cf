//! A generic two-player, perfect-information, zero-sum game engine.
//!
//! The crate is built around three pieces:
//! - [`Game`], the abstract state contract (make/unmake, move generation,
//!   heuristic, notation parsing);
//! - [`game_repr`], a chess rule engine implementing that contract with a
//!   flat mailbox board and pseudo-legal move generation;
//! - [`agent`], move-selecting agents: depth-bounded minimax with
//!   alpha-beta pruning, and a human prompt loop.

pub mod agent;
pub mod game;
pub mod game_repr;
pub mod tictactoe;

pub use agent::{Agent, HumanAgent, MinimaxAgent, SelectError};
pub use game::{Game, Score};
