//! Tic-tac-toe: the trivial instantiation of the game contract. Nine cells,
//! full-width search territory; it exists mostly to keep the contract honest
//! about not being chess-shaped.

use std::fmt;

use crate::game::{Game, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    fn letter(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeMove {
    pub square: u8,
}

/// Row-major 3x3 board, X moves first.
pub struct TicTacToe {
    board: [Cell; 9],
    x_to_move: bool,
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            board: [Cell::Empty; 9],
            x_to_move: true,
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TicTacToe {
    type Move = TicTacToeMove;

    fn make_move(&mut self, mv: &TicTacToeMove) {
        self.board[mv.square as usize] = if self.x_to_move { Cell::X } else { Cell::O };
        self.x_to_move = !self.x_to_move;
    }

    fn unmake_move(&mut self, mv: &TicTacToeMove) {
        self.board[mv.square as usize] = Cell::Empty;
        self.x_to_move = !self.x_to_move;
    }

    fn legal_moves(&self) -> Vec<TicTacToeMove> {
        (0..9)
            .filter(|&i| self.board[i as usize] == Cell::Empty)
            .map(|square| TicTacToeMove { square })
            .collect()
    }

    /// Completed lines, X-positive.
    fn heuristic_value(&self) -> Score {
        LINES
            .iter()
            .map(|line| {
                let [a, b, c] = *line;
                if self.board[a] != Cell::Empty && self.board[a] == self.board[b] && self.board[b] == self.board[c] {
                    if self.board[a] == Cell::X {
                        1.0
                    } else {
                        -1.0
                    }
                } else {
                    0.0
                }
            })
            .sum()
    }

    /// A single digit 0-8 naming an empty cell.
    fn parse(&self, input: &str) -> Option<TicTacToeMove> {
        let square: u8 = input.parse().ok()?;
        if square >= 9 || self.board[square as usize] != Cell::Empty {
            return None;
        }
        Some(TicTacToeMove { square })
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(
                f,
                "{} \u{2502}{} \u{2502}{} ",
                self.board[3 * row].letter(),
                self.board[3 * row + 1].letter(),
                self.board[3 * row + 2].letter()
            )?;
            if row < 2 {
                writeln!(f, "\u{2500}\u{2500}\u{253c}\u{2500}\u{2500}\u{253c}\u{2500}\u{2500}")?;
            }
        }
        Ok(())
    }
}
