use crate::game::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    None,
}

impl Type {
    /// Algebraic-notation letter; pawns (and empty squares) have none.
    pub fn letter(self) -> Option<char> {
        match self {
            Type::King => Some('K'),
            Type::Queen => Some('Q'),
            Type::Rook => Some('R'),
            Type::Bishop => Some('B'),
            Type::Knight => Some('N'),
            Type::Pawn | Type::None => None,
        }
    }

    /// Inverse of [`Type::letter`] over the letters the notation parser
    /// accepts.
    pub fn from_letter(letter: char) -> Option<Type> {
        match letter {
            'K' => Some(Type::King),
            'Q' => Some(Type::Queen),
            'R' => Some(Type::Rook),
            'B' => Some(Type::Bishop),
            'N' => Some(Type::Knight),
            _ => None,
        }
    }
}

/// One cell of the board. The empty square is a value (`Type::None`), not an
/// absence; `Piece::default()` is its canonical encoding so that boards
/// compare bit-for-bit after make/unmake round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Default for Piece {
    fn default() -> Self {
        Self {
            color: Color::White,
            piece_type: Type::None,
        }
    }
}

impl Piece {
    pub fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    /// True when the square holds a piece of `color`. Empty squares belong
    /// to nobody.
    pub fn belongs_to(&self, color: Color) -> bool {
        !self.is_none() && self.color == color
    }

    /// Signed material value, positive for White. The king outweighs
    /// everything else combined so that capturing one dominates the
    /// heuristic.
    pub fn material_value(&self) -> Score {
        let magnitude = match self.piece_type {
            Type::King => 200.0,
            Type::Queen => 9.0,
            Type::Rook => 5.0,
            Type::Bishop => 3.0,
            Type::Knight => 3.0,
            Type::Pawn => 1.0,
            Type::None => return 0.0,
        };
        match self.color {
            Color::White => magnitude,
            Color::Black => -magnitude,
        }
    }

    /// Unicode chess glyph for terminal rendering.
    /// https://en.wikipedia.org/wiki/Chess_symbols_in_Unicode
    pub fn glyph(&self) -> &'static str {
        match (self.color, self.piece_type) {
            (_, Type::None) => " ",
            (Color::White, Type::King) => "\u{2654}",
            (Color::White, Type::Queen) => "\u{2655}",
            (Color::White, Type::Rook) => "\u{2656}",
            (Color::White, Type::Bishop) => "\u{2657}",
            (Color::White, Type::Knight) => "\u{2658}",
            (Color::White, Type::Pawn) => "\u{2659}",
            (Color::Black, Type::King) => "\u{265A}",
            (Color::Black, Type::Queen) => "\u{265B}",
            (Color::Black, Type::Rook) => "\u{265C}",
            (Color::Black, Type::Bishop) => "\u{265D}",
            (Color::Black, Type::Knight) => "\u{265E}",
            (Color::Black, Type::Pawn) => "\u{265F}",
        }
    }
}
