mod board;
mod moves;
mod notation;
mod piece;
mod piece_moves;

#[cfg(test)]
mod tests;

pub use board::*;
pub use moves::*;
pub use piece::*;
