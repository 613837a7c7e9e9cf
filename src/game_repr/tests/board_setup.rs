use super::*;

#[test]
fn square_addressing_is_rank_major() {
    assert_eq!(sq("a1").index(), 0);
    assert_eq!(sq("h1").index(), 7);
    assert_eq!(sq("a2").index(), 8);
    assert_eq!(sq("e4").index(), 28);
    assert_eq!(sq("h8").index(), 63);
    assert_eq!(sq("e4").to_string(), "e4");
}

#[test]
fn from_coords_rejects_off_board_names() {
    assert_eq!(Square::from_coords('i', '4'), None);
    assert_eq!(Square::from_coords('a', '9'), None);
    assert_eq!(Square::from_coords('e', '0'), None);
    assert_eq!(Square::from_coords('`', '1'), None);
}

#[test]
#[should_panic]
fn raw_index_out_of_range_is_a_bug() {
    Square::new(64);
}

#[test]
fn starting_position_layout() {
    let game = Chess::new(true);

    assert_eq!(game.piece_at(sq("a1")), Piece::new(Color::White, Type::Rook));
    assert_eq!(game.piece_at(sq("b1")), Piece::new(Color::White, Type::Knight));
    assert_eq!(game.piece_at(sq("c1")), Piece::new(Color::White, Type::Bishop));
    assert_eq!(game.piece_at(sq("d1")), Piece::new(Color::White, Type::Queen));
    assert_eq!(game.piece_at(sq("e1")), Piece::new(Color::White, Type::King));
    assert_eq!(game.piece_at(sq("e8")), Piece::new(Color::Black, Type::King));
    assert_eq!(game.piece_at(sq("d8")), Piece::new(Color::Black, Type::Queen));
    for file in 'a'..='h' {
        let white_pawn = Square::from_coords(file, '2').unwrap();
        let black_pawn = Square::from_coords(file, '7').unwrap();
        assert_eq!(game.piece_at(white_pawn), Piece::new(Color::White, Type::Pawn));
        assert_eq!(game.piece_at(black_pawn), Piece::new(Color::Black, Type::Pawn));
    }
    for file in 'a'..='h' {
        for rank in '3'..='6' {
            let square = Square::from_coords(file, rank).unwrap();
            assert!(game.piece_at(square).is_none(), "{}{} should be empty", file, rank);
        }
    }
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.heuristic_value(), 0.0, "standard setup is materially even");
}

#[test]
fn twenty_moves_from_the_starting_position() {
    let game = Chess::new(true);
    let moves = game.legal_moves();

    assert_eq!(moves.len(), 20);
    let knight_moves = moves
        .iter()
        .filter(|m| game.piece_at(m.from).piece_type == Type::Knight)
        .count();
    let pawn_moves = moves
        .iter()
        .filter(|m| game.piece_at(m.from).piece_type == Type::Pawn)
        .count();
    assert_eq!(knight_moves, 4);
    assert_eq!(pawn_moves, 16);
}

#[test]
fn generated_moves_are_sound() {
    let game = Chess::new(true);
    for mv in game.legal_moves() {
        assert!(
            game.piece_at(mv.from).belongs_to(Color::White),
            "move {} -> {} does not start on a white piece",
            mv.from,
            mv.to
        );
        assert!(
            !game.piece_at(mv.to).belongs_to(Color::White),
            "move {} -> {} lands on a friendly piece",
            mv.from,
            mv.to
        );
        assert_eq!(mv.captured, game.piece_at(mv.to));
    }
}

#[test]
fn black_also_has_twenty_replies() {
    let mut game = Chess::new(true);
    let opening = game.parse("e4").expect("e4 is playable from the start");
    game.make_move(&opening);

    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.legal_moves().len(), 20);
}

#[test]
fn empty_board_has_no_moves() {
    let game = Chess::empty();
    assert!(game.legal_moves().is_empty());
}
