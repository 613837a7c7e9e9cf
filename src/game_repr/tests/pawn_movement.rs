use super::*;

#[test]
fn home_rank_pawn_may_step_or_double_step() {
    let game = Chess::new(true);

    let tos = game.destinations(sq("e2"));
    assert_eq!(tos.len(), 2);
    assert!(tos.contains(&sq("e3")));
    assert!(tos.contains(&sq("e4")));
}

#[test]
fn advanced_pawn_steps_once() {
    let mut game = Chess::empty();
    place(&mut game, "e3", Color::White, Type::Pawn);

    let tos = game.destinations(sq("e3"));
    assert_eq!(tos.len(), 1);
    assert!(tos.contains(&sq("e4")));
}

#[test]
fn blocked_pawn_has_no_forward_moves() {
    let mut game = Chess::empty();
    place(&mut game, "e2", Color::White, Type::Pawn);
    place(&mut game, "e3", Color::Black, Type::Rook);

    // A straight-ahead enemy blocks; pawns never capture forward.
    assert!(game.destinations(sq("e2")).is_empty());
}

#[test]
fn double_step_needs_both_squares_empty() {
    let mut game = Chess::empty();
    place(&mut game, "e2", Color::White, Type::Pawn);
    place(&mut game, "e4", Color::Black, Type::Rook);

    let tos = game.destinations(sq("e2"));
    assert_eq!(tos.len(), 1);
    assert!(tos.contains(&sq("e3")));
}

#[test]
fn pawn_captures_diagonally_enemies_only() {
    let mut game = Chess::empty();
    place(&mut game, "e4", Color::White, Type::Pawn);
    place(&mut game, "d5", Color::Black, Type::Pawn);
    place(&mut game, "f5", Color::White, Type::Knight);

    let tos = game.destinations(sq("e4"));
    assert_eq!(tos.len(), 2);
    assert!(tos.contains(&sq("e5")));
    assert!(tos.contains(&sq("d5")));
    assert!(!tos.contains(&sq("f5")), "cannot capture a friendly knight");
}

#[test]
fn edge_file_pawns_do_not_wrap_their_captures() {
    let mut game = Chess::empty();
    place(&mut game, "a4", Color::White, Type::Pawn);
    // The a-file pawn's missing left capture would land here if the file
    // boundary were ignored.
    place(&mut game, "h4", Color::Black, Type::Rook);

    let tos = game.destinations(sq("a4"));
    assert_eq!(tos.len(), 1);
    assert!(tos.contains(&sq("a5")));

    let mut game = Chess::empty();
    place(&mut game, "h4", Color::White, Type::Pawn);
    place(&mut game, "a5", Color::Black, Type::Rook);

    let tos = game.destinations(sq("h4"));
    assert_eq!(tos.len(), 1);
    assert!(tos.contains(&sq("h5")));
}

#[test]
fn black_pawns_move_toward_rank_one() {
    let mut game = Chess::empty();
    game.set_side_to_move(Color::Black);
    place(&mut game, "e7", Color::Black, Type::Pawn);
    place(&mut game, "d6", Color::White, Type::Knight);

    let tos = game.destinations(sq("e7"));
    assert_eq!(tos.len(), 3);
    assert!(tos.contains(&sq("e6")));
    assert!(tos.contains(&sq("e5")));
    assert!(tos.contains(&sq("d6")));
}

#[test]
fn last_rank_pawn_is_stuck() {
    let mut game = Chess::empty();
    place(&mut game, "e8", Color::White, Type::Pawn);
    assert!(game.destinations(sq("e8")).is_empty());
    assert!(game.legal_moves().is_empty());

    let mut game = Chess::empty();
    game.set_side_to_move(Color::Black);
    place(&mut game, "e1", Color::Black, Type::Pawn);
    assert!(game.destinations(sq("e1")).is_empty());
}
