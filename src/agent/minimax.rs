// Minimax search with alpha-beta pruning.
//
// A depth-first traversal of the game tree, bounded by a fixed ply count.
// The tree is walked in place: every recursive call makes exactly one move
// on entry and unmakes exactly that move before returning, including when a
// branch is pruned, so the state is bit-for-bit restored between siblings.
//
// https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning#Pseudocode

use std::time::Instant;

use crate::agent::{Agent, SelectError};
use crate::game::{Game, Score};

const INF: Score = Score::INFINITY;
const NEG_INF: Score = Score::NEG_INFINITY;

/// Search-backed agent. Configured at construction with a ply limit and a
/// heuristic-adjustment function: the adjustment of every move on the
/// current search path is accumulated on make and reverted on unmake, so a
/// leaf's value is the running sum rather than a full re-evaluation.
///
/// The adjustment fixes the perspective: it must return positive scores for
/// moves that favor the side this agent plays (for chess, see
/// [`crate::game_repr::material_gain`]).
pub struct MinimaxAgent<G: Game> {
    max_plies: u32,
    adjust: Box<dyn Fn(&G::Move) -> Score>,
    running_value: Score,
    leaves_visited: u64,
}

impl<G: Game> MinimaxAgent<G> {
    /// `max_plies` is the fixed search depth; the heuristic is evaluated
    /// after exactly that many half-moves.
    pub fn new(max_plies: u32, adjust: impl Fn(&G::Move) -> Score + 'static) -> Self {
        assert!(max_plies >= 1, "search depth must be at least one ply");
        Self {
            max_plies,
            adjust: Box::new(adjust),
            running_value: 0.0,
            leaves_visited: 0,
        }
    }

    /// Values `mv` from the root side's perspective. Plies are 1-indexed
    /// from the root: even plies put the root side back on the move, so
    /// those levels maximize; odd plies minimize.
    fn alpha_beta(
        &mut self,
        state: &mut G,
        mv: &G::Move,
        ply: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        state.make_move(mv);
        self.running_value += (self.adjust)(mv);

        let value = if ply == self.max_plies {
            self.leaves_visited += 1;
            self.running_value
        } else if ply % 2 == 0 {
            // Maximizing level. A childless node keeps the -inf seed: the
            // root side having no moves counts as a loss for it.
            let mut value = NEG_INF;
            for child in state.legal_moves() {
                value = value.max(self.alpha_beta(state, &child, ply + 1, alpha, beta));
                if value >= beta {
                    break;
                }
                alpha = alpha.max(value);
            }
            value
        } else {
            // Minimizing level, symmetric.
            let mut value = INF;
            for child in state.legal_moves() {
                value = value.min(self.alpha_beta(state, &child, ply + 1, alpha, beta));
                if value <= alpha {
                    break;
                }
                beta = beta.min(value);
            }
            value
        };

        // Single exit: the unmake and the accumulator revert run on every
        // path out of this call, pruning breaks included.
        state.unmake_move(mv);
        self.running_value -= (self.adjust)(mv);
        value
    }
}

impl<G: Game> Agent<G> for MinimaxAgent<G> {
    /// Searches every root move to the configured depth and returns the
    /// first one achieving the maximum value. Ties are broken by generation
    /// order, with exact float equality, so repeated calls on an unchanged
    /// state return the same move.
    fn select_move(&mut self, state: &mut G) -> Result<G::Move, SelectError> {
        log::debug!("minimax agent is thinking...");
        let begin = Instant::now();
        self.running_value = 0.0;
        self.leaves_visited = 0;

        let mut best_value = NEG_INF;
        let mut best_move: Option<G::Move> = None;
        for mv in state.legal_moves() {
            let value = self.alpha_beta(state, &mv, 1, NEG_INF, INF);
            if best_move.is_none() || value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
        }

        let mv = best_move.ok_or(SelectError::NoLegalMoves)?;
        log::info!(
            "selected a move with value {} after visiting {} leaf nodes in {:?}",
            best_value,
            self.leaves_visited,
            begin.elapsed()
        );
        Ok(mv)
    }
}
