use super::DestinationList;
use crate::game_repr::board::Chess;
use crate::game_repr::moves::Square;

const KNIGHT_STEPS: [i16; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

impl Chess {
    /// Knight jumps need their own wraparound test: a raw offset that stays
    /// inside [0, 64) can still hop from one board edge to the other, so the
    /// landing square must differ by one file and two ranks or two files and
    /// one rank.
    pub(crate) fn knight_destinations(&self, from: Square, tos: &mut DestinationList) {
        let mover = self.piece_at(from);

        for &step in &KNIGHT_STEPS {
            let target = from.index() as i16 + step;
            if !(0..64).contains(&target) {
                continue;
            }
            let to = Square::new(target as u8);

            let file_delta = (to.file() as i16 - from.file() as i16).abs();
            let rank_delta = (to.rank() as i16 - from.rank() as i16).abs();
            if file_delta * rank_delta != 2 {
                continue;
            }

            let occupant = self.piece_at(to);
            if occupant.is_none() || occupant.color != mover.color {
                tos.push(to);
            }
        }
    }
}
