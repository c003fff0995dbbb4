use super::*;

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();
    assert_eq!(b.turn(), Color::White);
    assert!(b.castling_rights(Color::White));
    assert!(b.castling_rights(Color::Black));
    assert_eq!(b.piece(4, 0), Piece::new(Color::White, PieceKind::King));
    assert_eq!(b.piece(3, 7), Piece::new(Color::Black, PieceKind::Queen));
    assert_eq!(b.piece_at(sq("g2")), Piece::new(Color::White, PieceKind::Pawn));
    assert_eq!(b.pieces().count(), 32);
    assert!(b.history().is_empty());
}

#[test]
fn test_fen_roundtrip_startpos() {
    let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let b = Board::from_fen(start).unwrap();
    assert_eq!(b, Board::startpos());
    assert_eq!(b.fen(), start);
}

#[test]
fn test_fen_rejects_garbage() {
    for bad in [
        "",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
        "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",
    ] {
        assert!(
            matches!(Board::from_fen(bad), Err(CoreError::InvalidFen { .. })),
            "{bad:?}"
        );
    }
}

#[test]
fn test_simple_move_and_undo() {
    let mut b = Board::startpos();
    let before = b.clone();

    let record = b.make_move(mv("g1f3"), Promotion::AutoQueen);
    assert!(matches!(record, MoveRecord::Normal { .. }));
    assert_eq!(b.turn(), Color::Black);
    assert_eq!(b.halfmove_clock(), 1);
    assert!(b.piece_at(sq("g1")).is_empty());
    assert_eq!(b.last_move(), Some(&record));

    assert_eq!(b.unmake_move(), Some(record));
    assert_eq!(b, before);
    assert_eq!(b.unmake_move(), None);
}

#[test]
fn test_pawn_move_resets_clock() {
    let mut b = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 17 30").unwrap();
    b.make_move(mv("e2e4"), Promotion::AutoQueen);
    assert_eq!(b.halfmove_clock(), 0);
    b.unmake_move();
    assert_eq!(b.halfmove_clock(), 17);
}

#[test]
fn test_castling_moves_rook_and_clears_flag() {
    let mut b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 1").unwrap();
    let before = b.clone();

    let record = b.make_move(mv("e1g1"), Promotion::AutoQueen);
    assert!(matches!(
        record,
        MoveRecord::Castling {
            side: CastleSide::King,
            ..
        }
    ));
    assert_eq!(b.piece_at(sq("g1")), Piece::new(Color::White, PieceKind::King));
    assert_eq!(b.piece_at(sq("f1")), Piece::new(Color::White, PieceKind::Rook));
    assert!(b.piece_at(sq("h1")).is_empty());
    assert!(!b.castling_rights(Color::White));
    assert!(b.castling_rights(Color::Black));
    assert_eq!(b.halfmove_clock(), 4);

    b.unmake_move();
    assert_eq!(b, before);

    b.make_move(mv("e1c1"), Promotion::AutoQueen);
    assert_eq!(b.piece_at(sq("c1")), Piece::new(Color::White, PieceKind::King));
    assert_eq!(b.piece_at(sq("d1")), Piece::new(Color::White, PieceKind::Rook));
    assert!(b.piece_at(sq("a1")).is_empty());
    b.unmake_move();
    assert_eq!(b, before);
}

#[test]
fn test_rook_move_clears_flag_and_undo_restores_it() {
    let mut b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    b.make_move(mv("a8a7"), Promotion::AutoQueen);
    assert!(!b.castling_rights(Color::Black));
    b.unmake_move();
    assert!(b.castling_rights(Color::Black));
}

#[test]
fn test_en_passant_capture_and_undo() {
    let mut b = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let before = b.clone();

    let record = b.make_move(mv("e5d6"), Promotion::AutoQueen);
    assert!(matches!(record, MoveRecord::EnPassant { .. }));
    assert!(record.is_capture());
    assert!(b.piece_at(sq("d5")).is_empty());
    assert_eq!(b.piece_at(sq("d6")), Piece::new(Color::White, PieceKind::Pawn));

    b.unmake_move();
    assert_eq!(b, before);
}

#[test]
fn test_promotion_policies() {
    let fen = "1r2k3/P7/8/8/8/8/8/4K3 w - - 5 1";

    let mut b = Board::from_fen(fen).unwrap();
    let before = b.clone();
    b.make_move(mv("a7b8"), Promotion::AutoQueen);
    assert_eq!(b.piece_at(sq("b8")), Piece::new(Color::White, PieceKind::Queen));
    assert_eq!(b.halfmove_clock(), 0);
    b.unmake_move();
    assert_eq!(b, before);

    b.make_move(mv("a7a8"), Promotion::Random);
    let kind = b.piece_at(sq("a8")).kind().unwrap();
    assert!(PieceKind::PROMOTIONS.contains(&kind));
    b.unmake_move();
    assert_eq!(b, before);

    let mut keys = "zQ".chars().rev().collect::<Vec<_>>();
    let mut prompt = move || keys.pop().unwrap_or('r');
    b.make_move(mv("a7a8"), Promotion::Manual(&mut prompt));
    // 'z' is ignored, 'Q' picks the queen
    assert_eq!(b.piece_at(sq("a8")), Piece::new(Color::White, PieceKind::Queen));
}

#[test]
fn test_history_lines() {
    let mut b = Board::startpos();
    for m in ["e2e4", "d7d5", "e4d5"] {
        b.make_move(mv(m), Promotion::AutoQueen);
    }
    let lines: Vec<String> = b.history().iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        ["pawn 'e2' to 'e4'", "pawn 'd7' to 'd5'", "pawn 'e4' to pawn 'd5'"]
    );
}

#[test]
fn test_fen_after_double_push() {
    let mut b = Board::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").unwrap();
    b.make_move(mv("e2e4"), Promotion::AutoQueen);
    assert_eq!(b.fen(), "4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1");
}

#[test]
#[should_panic(expected = "off the board")]
fn test_raw_coordinate_out_of_range_panics() {
    Board::startpos().piece(8, 0);
}

#[test]
fn test_fen_keeps_fullmove_number() {
    let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 17 30";
    let mut b = Board::from_fen(fen).unwrap();
    assert_eq!(b.fullmove_number(), 30);
    assert_eq!(b.fen(), fen);

    b.make_move(mv("e2e4"), Promotion::AutoQueen);
    assert_eq!(b.fen(), "4k3/8/8/8/4P3/8/8/4K3 b - - 0 30");
    b.make_move(mv("e8d8"), Promotion::AutoQueen);
    assert_eq!(b.fen(), "3k4/8/8/8/4P3/8/8/4K3 w - - 1 31");

    let mut b = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 3 12").unwrap();
    b.make_move(mv("e8d8"), Promotion::AutoQueen);
    assert_eq!(b.fullmove_number(), 13);
    b.unmake_move();
    assert_eq!(b.fullmove_number(), 12);
}

#[test]
fn test_en_passant_setup_cannot_be_unmade() {
    let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1";
    let mut b = Board::from_fen(fen).unwrap();
    let setup = b.clone();

    assert!(b.history().is_empty());
    assert!(b.last_move().is_some_and(MoveRecord::is_double_pawn_push));
    assert_eq!(b.unmake_move(), None);
    assert_eq!(b, setup);
    assert_eq!(b.fen(), fen);
    assert!(crate::movegen::legal_moves(&b).contains(&mv("e5d6")));
}
