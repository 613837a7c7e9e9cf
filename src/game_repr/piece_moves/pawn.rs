use super::DestinationList;
use crate::game_repr::board::Chess;
use crate::game_repr::moves::Square;
use crate::game_repr::piece::Color;

impl Chess {
    /// Pawn moves are directional: forward one square when empty, forward
    /// two from the home rank when both squares are empty, and diagonal
    /// captures gated by the origin file so they cannot wrap around an edge.
    ///
    /// No promotion and no en passant: a pawn that reaches its back rank
    /// stays a pawn and generates nothing further.
    pub(crate) fn pawn_destinations(&self, from: Square, tos: &mut DestinationList) {
        let pawn = self.piece_at(from);
        let (orientation, home_rank, last_rank): (i16, u8, u8) = match pawn.color {
            Color::White => (1, 1, 7),
            Color::Black => (-1, 6, 0),
        };

        if from.rank() == last_rank {
            return;
        }
        let index = from.index() as i16;

        let forward = Square::new((index + 8 * orientation) as u8);
        if self.piece_at(forward).is_none() {
            tos.push(forward);

            if from.rank() == home_rank {
                let double_forward = Square::new((index + 16 * orientation) as u8);
                if self.piece_at(double_forward).is_none() {
                    tos.push(double_forward);
                }
            }
        }

        // Captures toward the a-file and toward the h-file. The file guards
        // depend on color because the +7/+9 offsets mirror for Black.
        let toward_a = match pawn.color {
            Color::White => 7,
            Color::Black => -9,
        };
        let toward_h = match pawn.color {
            Color::White => 9,
            Color::Black => -7,
        };
        if from.file() != 0 {
            let to = Square::new((index + toward_a) as u8);
            if self.piece_at(to).belongs_to(pawn.color.opposite()) {
                tos.push(to);
            }
        }
        if from.file() != 7 {
            let to = Square::new((index + toward_h) as u8);
            if self.piece_at(to).belongs_to(pawn.color.opposite()) {
                tos.push(to);
            }
        }
    }
}
