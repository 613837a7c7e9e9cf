use super::DestinationList;
use crate::game_repr::board::Chess;
use crate::game_repr::moves::Square;

const QUEEN_STEPS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

impl Chess {
    pub(crate) fn queen_destinations(&self, from: Square, tos: &mut DestinationList) {
        self.walk_steps(from, &QUEEN_STEPS, false, tos);
    }
}
