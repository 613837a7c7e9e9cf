use super::DestinationList;
use crate::game_repr::board::Chess;
use crate::game_repr::moves::Square;

const BISHOP_STEPS: [i16; 4] = [-9, -7, 7, 9];

impl Chess {
    pub(crate) fn bishop_destinations(&self, from: Square, tos: &mut DestinationList) {
        self.walk_steps(from, &BISHOP_STEPS, false, tos);
    }
}
