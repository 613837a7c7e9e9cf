use std::fmt;

use crate::game::{Game, Score};

use super::moves::{ChessMove, Square};
use super::piece::{Color, Piece, Type};
use super::piece_moves::DestinationList;

// ANSI escape codes for terminal rendering.
const CURSOR_HOME: &str = "\x1b[H";
const ERASE_SCREEN: &str = "\x1b[2J";
const FOREGROUND_BLACK: &str = "\x1b[30m";
const FOREGROUND_GRAY: &str = "\x1b[38;5;240m";
const FOREGROUND_DEFAULT: &str = "\x1b[39m";
const BACKGROUND_MAGENTA: &str = "\x1b[45m";
const BACKGROUND_WHITE: &str = "\x1b[47m";
const BACKGROUND_DEFAULT: &str = "\x1b[49m";

/// Piece order of the major rank, a-file to h-file. Both sides mirror it.
const MAJOR_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

/// Chess game state: a flat rank-major array of 64 squares plus the side to
/// move. The board is the single owner of all positional state; make/unmake
/// mutate it in place so the search never copies it.
///
/// The engine generates pseudo-legal moves only. There is no check or
/// checkmate detection, no castling, no en passant and no promotion, and
/// nothing enforces "one king per side" — callers set up whatever position
/// they want.
#[derive(Clone)]
pub struct Chess {
    pub(crate) board: [Piece; 64],
    pub(crate) white_to_move: bool,
    /// Played moves in algebraic notation, one entry per full move. Grown by
    /// [`Chess::record_move`] only; the search never touches it.
    pub(crate) history: Vec<String>,
    /// Which side sits at the bottom of the rendered board.
    white_perspective: bool,
}

impl Chess {
    /// Sets up the standard starting position, White to move.
    pub fn new(white_perspective: bool) -> Self {
        let mut board = [Piece::default(); 64];
        for file in 0..8 {
            board[file] = Piece::new(Color::White, MAJOR_RANK[file]);
            board[8 + file] = Piece::new(Color::White, Type::Pawn);
            board[48 + file] = Piece::new(Color::Black, Type::Pawn);
            board[56 + file] = Piece::new(Color::Black, MAJOR_RANK[file]);
        }
        Self {
            board,
            white_to_move: true,
            history: Vec::new(),
            white_perspective,
        }
    }

    /// An empty board, White to move. Intended for setting up custom
    /// positions with [`Chess::set_piece`].
    pub fn empty() -> Self {
        Self {
            board: [Piece::default(); 64],
            white_to_move: true,
            history: Vec::new(),
            white_perspective: true,
        }
    }

    pub fn piece_at(&self, square: Square) -> Piece {
        self.board[square.index()]
    }

    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.board[square.index()] = piece;
    }

    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.white_to_move = color == Color::White;
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Squares the piece on `from` can move to, in step-order. Empty squares
    /// produce nothing.
    pub fn destinations(&self, from: Square) -> DestinationList {
        let mut tos = DestinationList::new();
        match self.piece_at(from).piece_type {
            Type::Pawn => self.pawn_destinations(from, &mut tos),
            Type::Knight => self.knight_destinations(from, &mut tos),
            Type::Bishop => self.bishop_destinations(from, &mut tos),
            Type::Rook => self.rook_destinations(from, &mut tos),
            Type::Queen => self.queen_destinations(from, &mut tos),
            Type::King => self.king_destinations(from, &mut tos),
            Type::None => {}
        }
        tos
    }
}

impl Game for Chess {
    type Move = ChessMove;

    fn make_move(&mut self, mv: &ChessMove) {
        self.board[mv.to.index()] = self.board[mv.from.index()];
        self.board[mv.from.index()] = Piece::default();
        self.white_to_move = !self.white_to_move;
    }

    fn unmake_move(&mut self, mv: &ChessMove) {
        self.board[mv.from.index()] = self.board[mv.to.index()];
        self.board[mv.to.index()] = mv.captured;
        self.white_to_move = !self.white_to_move;
    }

    /// Aggregates destinations over every piece of the side to move, in
    /// ascending square order. The order is deterministic, which is what
    /// makes search tie-breaking reproducible.
    fn legal_moves(&self) -> Vec<ChessMove> {
        let side = self.side_to_move();
        let mut moves = Vec::with_capacity(40);
        for index in 0..64 {
            let from = Square::new(index);
            if !self.piece_at(from).belongs_to(side) {
                continue;
            }
            for to in self.destinations(from) {
                moves.push(ChessMove {
                    from,
                    to,
                    captured: self.piece_at(to),
                });
            }
        }
        moves
    }

    /// Material advantage from White's perspective.
    fn heuristic_value(&self) -> Score {
        self.board.iter().map(Piece::material_value).sum()
    }

    fn parse(&self, input: &str) -> Option<ChessMove> {
        self.parse_move(input)
    }
}

impl fmt::Display for Chess {
    /// Renders the board with ANSI checkering and Unicode glyphs, rank
    /// labels on the left and file labels below, plus the move history in a
    /// gray column on the right (every ninth entry per row).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ERASE_SCREEN, CURSOR_HOME)?;
        for row in 0..9 {
            if row == 8 {
                write!(f, "  ")?;
            } else {
                let rank = if self.white_perspective {
                    (b'8' - row) as char
                } else {
                    (b'1' + row) as char
                };
                write!(f, "{} ", rank)?;
            }
            for col in 0..8 {
                let file = if self.white_perspective {
                    (b'a' + col) as char
                } else {
                    (b'h' - col) as char
                };
                if row == 8 {
                    write!(f, "{} ", file)?;
                    continue;
                }
                let rank_index = if self.white_perspective { 7 - row } else { row };
                let file_index = if self.white_perspective { col } else { 7 - col };
                // The top-left square renders light for both perspectives.
                let background = if (row + col) % 2 == 0 {
                    BACKGROUND_WHITE
                } else {
                    BACKGROUND_MAGENTA
                };
                let square = Square::new(8 * rank_index + file_index);
                write!(
                    f,
                    "{}{}{} ",
                    background,
                    FOREGROUND_BLACK,
                    self.piece_at(square).glyph()
                )?;
            }
            write!(f, "{}{} ", BACKGROUND_DEFAULT, FOREGROUND_GRAY)?;
            let mut entry = row as usize;
            while entry < self.history.len() {
                // Three digits of move number, then notation padded so the
                // columns line up across rows.
                let mut cell = format!("{:>3}. {}", entry + 1, self.history[entry]);
                while cell.len() < 14 {
                    cell.push(' ');
                }
                write!(f, "{}", cell)?;
                entry += 9;
            }
            writeln!(f, "{}", FOREGROUND_DEFAULT)?;
        }
        Ok(())
    }
}
