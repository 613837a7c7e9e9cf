use super::DestinationList;
use crate::game_repr::board::Chess;
use crate::game_repr::moves::Square;

const ROOK_STEPS: [i16; 4] = [-8, -1, 1, 8];

impl Chess {
    pub(crate) fn rook_destinations(&self, from: Square, tos: &mut DestinationList) {
        self.walk_steps(from, &ROOK_STEPS, false, tos);
    }
}
