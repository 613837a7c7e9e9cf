use super::DestinationList;
use crate::game_repr::board::Chess;
use crate::game_repr::moves::Square;

const KING_STEPS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

impl Chess {
    /// Same directions as the queen, one step each. No castling.
    pub(crate) fn king_destinations(&self, from: Square, tos: &mut DestinationList) {
        self.walk_steps(from, &KING_STEPS, true, tos);
    }
}
