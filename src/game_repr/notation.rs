//! The algebraic-notation subset spoken by the engine:
//!
//! ```text
//! move  := piece? 'x'? file rank
//! piece := 'K' | 'Q' | 'R' | 'B' | 'N'     (absence = pawn)
//! file  := 'a'..'h'
//! rank  := '1'..'8'
//! ```
//!
//! No castling, promotion suffixes, check/mate annotations, or origin-square
//! disambiguation. A destination that zero or several pieces of the inferred
//! type can reach is a parse failure, not a guess.

use super::board::Chess;
use super::moves::{ChessMove, Square};
use super::piece::Type;

impl Chess {
    /// Formats `mv` for the side to move. Must be called *before* the move
    /// is made, since the piece letter is read off the origin square.
    pub fn format_move(&self, mv: &ChessMove) -> String {
        let mut out = String::new();
        if let Some(letter) = self.piece_at(mv.from).piece_type.letter() {
            out.push(letter);
        }
        if !mv.captured.is_none() {
            out.push('x');
        }
        out.push(mv.to.file_char());
        out.push(mv.to.rank_char());
        out
    }

    /// Appends `mv` to the history, pairing Black's reply onto White's
    /// entry. Call before [`crate::Game::make_move`], like
    /// [`Chess::format_move`].
    pub fn record_move(&mut self, mv: &ChessMove) {
        let notation = self.format_move(mv);
        if self.white_to_move || self.history.is_empty() {
            self.history.push(notation);
        } else {
            let entry = self.history.last_mut().expect("history is non-empty");
            entry.push(' ');
            entry.push_str(&notation);
        }
    }

    /// Resolves notation against the current position. Returns `None` for
    /// anything malformed, or when the destination cannot be attributed to
    /// exactly one piece of the side to move.
    pub(crate) fn parse_move(&self, input: &str) -> Option<ChessMove> {
        let bytes = input.as_bytes();
        let mut i = 0;

        let piece_type = match bytes.first().and_then(|&b| Type::from_letter(b as char)) {
            Some(piece_type) => {
                i += 1;
                piece_type
            }
            None => Type::Pawn,
        };
        // An 'x' marker is accepted whether or not the move captures.
        if bytes.get(i) == Some(&b'x') {
            i += 1;
        }
        let file = *bytes.get(i)? as char;
        let rank = *bytes.get(i + 1)? as char;
        if i + 2 != bytes.len() {
            return None;
        }
        let to = Square::from_coords(file, rank)?;

        // Scan the side to move's pieces of that type for the unique one
        // whose destinations contain the target.
        let side = self.side_to_move();
        let mut candidate: Option<Square> = None;
        for index in 0..64 {
            let from = Square::new(index);
            let piece = self.piece_at(from);
            if piece.piece_type != piece_type || !piece.belongs_to(side) {
                continue;
            }
            if self.destinations(from).contains(&to) {
                if candidate.is_some() {
                    return None; // Ambiguous.
                }
                candidate = Some(from);
            }
        }

        candidate.map(|from| ChessMove {
            from,
            to,
            captured: self.piece_at(to),
        })
    }
}
