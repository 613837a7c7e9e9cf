use super::*;
use crate::game::Game;

// ==================== HELPER FUNCTIONS ====================

/// Shorthand square constructor from coordinates like "e4".
pub fn sq(coords: &str) -> Square {
    let mut chars = coords.chars();
    let file = chars.next().expect("file character");
    let rank = chars.next().expect("rank character");
    Square::from_coords(file, rank).expect("valid coordinates")
}

/// Helper to drop a piece onto a board under construction.
pub fn place(game: &mut Chess, coords: &str, color: Color, piece_type: Type) {
    game.set_piece(sq(coords), Piece::new(color, piece_type));
}

/// Helper to check whether a move list contains from -> to.
pub fn has_move(moves: &[ChessMove], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

// ==================== TEST MODULES ====================

mod board_setup;
mod pawn_movement;
