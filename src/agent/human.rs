use std::io::{self, BufRead, Write};

use crate::agent::{Agent, SelectError};
use crate::game::Game;

/// Prompts on stdout and reads moves from stdin, retrying until the input
/// parses against the current state. Blocks while waiting for the user.
pub struct HumanAgent;

impl<G: Game> Agent<G> for HumanAgent {
    fn select_move(&mut self, state: &mut G) -> Result<G::Move, SelectError> {
        let stdin = io::stdin();
        let mut input = String::new();
        loop {
            print!("Please enter a move: ");
            let _ = io::stdout().flush();

            input.clear();
            match stdin.lock().read_line(&mut input) {
                Ok(0) | Err(_) => return Err(SelectError::InputClosed),
                Ok(_) => {}
            }
            if let Some(mv) = state.parse(input.trim()) {
                return Ok(mv);
            }
            println!("Invalid entry!");
        }
    }
}
