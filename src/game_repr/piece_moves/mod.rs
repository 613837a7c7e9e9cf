// Per-piece destination generation. Each module adds the generator for one
// piece type onto `Chess`; the shared offset walker lives here.

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use smallvec::SmallVec;

use super::board::Chess;
use super::moves::Square;

/// Destination buffer. A queen in the open reaches at most 27 squares, so
/// the inline capacity covers every piece without spilling to the heap.
pub(crate) type DestinationList = SmallVec<[Square; 32]>;

impl Chess {
    /// Walks outward from `from` along each step size, collecting reachable
    /// squares into `tos`. Sliding pieces repeat a step until blocked;
    /// single-step pieces (king) stop after one step per direction.
    ///
    /// A step is rejected when it leaves the board or wraps around an edge:
    /// horizontal steps must not change the rank, vertical steps must not
    /// change the file, and diagonal steps must change rank and file by
    /// exactly the step count. A square is reachable when empty or held by
    /// the opponent; any occupied square ends the walk.
    pub(crate) fn walk_steps(
        &self,
        from: Square,
        step_sizes: &[i16],
        single_step: bool,
        tos: &mut DestinationList,
    ) {
        let mover = self.piece_at(from);
        let from_rank = from.rank() as i16;
        let from_file = from.file() as i16;

        for &step in step_sizes {
            let mut i: i16 = 1;
            loop {
                let target = from.index() as i16 + step * i;
                if !(0..64).contains(&target) {
                    break;
                }
                let to = Square::new(target as u8);
                let to_rank = to.rank() as i16;
                let to_file = to.file() as i16;

                if step.abs() == 1 && to_rank != from_rank {
                    break;
                }
                if step.abs() == 8 && to_file != from_file {
                    break;
                }
                if (step.abs() == 7 || step.abs() == 9)
                    && ((to_rank - from_rank).abs() != i || (to_file - from_file).abs() != i)
                {
                    break;
                }

                let occupant = self.piece_at(to);
                if occupant.is_none() || occupant.color != mover.color {
                    tos.push(to);
                }
                // No moving through pieces.
                if !occupant.is_none() || single_step {
                    break;
                }
                i += 1;
            }
        }
    }
}
