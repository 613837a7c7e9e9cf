use minimax_chess::game_repr::{material_gain, Chess, Color};
use minimax_chess::{Agent, Game, HumanAgent, MinimaxAgent, SelectError};

fn main() {
    env_logger::init();

    let mut game = Chess::new(/*white_perspective=*/ true);

    // Human plays White, the engine plays Black, so the engine's heuristic
    // counts captured material from Black's perspective.
    let mut agents: Vec<Box<dyn Agent<Chess>>> = vec![
        Box::new(HumanAgent),
        Box::new(MinimaxAgent::new(5, material_gain(Color::Black))),
    ];

    // Take turns making moves until someone can't.
    'game: loop {
        for agent in agents.iter_mut() {
            print!("{}", game);
            if game.legal_moves().is_empty() {
                println!("{:?} has no moves; game over.", game.side_to_move());
                break 'game;
            }
            let mv = match agent.select_move(&mut game) {
                Ok(mv) => mv,
                Err(SelectError::NoLegalMoves) => break 'game,
                Err(SelectError::InputClosed) => return,
            };
            log::debug!("{:?} plays {}", game.side_to_move(), game.format_move(&mv));
            game.record_move(&mv);
            game.make_move(&mv);
        }
    }
    print!("{}", game);
}
