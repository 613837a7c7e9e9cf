use std::fmt;

use crate::game::Score;

use super::piece::{Color, Piece};

/// Index of one board cell, rank-major: `index = 8 * rank + file` with both
/// zero-based, so a1 = 0 and h8 = 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Wraps a raw index. Out-of-range indices are a caller bug, not user
    /// input, and fail loudly.
    pub fn new(index: u8) -> Square {
        assert!(index < 64, "square index {} out of range", index);
        Square(index)
    }

    /// Builds a square from notation coordinates, e.g. `('e', '4')`.
    pub fn from_coords(file: char, rank: char) -> Option<Square> {
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Some(Square(8 * (rank as u8 - b'1') + (file as u8 - b'a')))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based file (0 = a-file).
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    /// Zero-based rank (0 = rank 1).
    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// A chess move. `captured` records whatever occupied `to` when the move was
/// generated (the empty piece for quiet moves); it is what makes the move
/// exactly reversible without copying the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub captured: Piece,
}

/// Capture-material heuristic adjustment for the minimax agent, from
/// `side`'s perspective: capturing an enemy piece scores positive, losing
/// one's own scores negative. Quiet moves score zero.
pub fn material_gain(side: Color) -> impl Fn(&ChessMove) -> Score {
    move |mv| match side {
        Color::White => -mv.captured.material_value(),
        Color::Black => mv.captured.material_value(),
    }
}
