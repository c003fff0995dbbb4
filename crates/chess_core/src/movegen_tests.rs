use super::*;
use crate::board::Promotion;

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

fn play(board: &mut Board, moves: &[&str]) {
    for text in moves {
        let m = mv(text);
        assert!(legal_moves(board).contains(&m), "{text} should be legal");
        board.make_move(m, Promotion::AutoQueen);
    }
}

#[test]
fn test_startpos_moves() {
    let board = Board::startpos();
    let moves = legal_moves(&board);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = legal_moves(&board);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_legal_moves_never_leave_king_in_check() {
    let mut board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let mover = board.turn();
    for m in legal_moves(&board) {
        board.make_move(m, Promotion::AutoQueen);
        assert!(!in_check(&board, mover), "{m} exposes the king");
        board.unmake_move();
    }
}

#[test]
fn test_pawn_capture_needs_enemy_piece() {
    // Own piece on d3 and empty f3: the e2 pawn has no captures
    let board = Board::from_fen("4k3/8/8/8/8/3N4/4P3/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&board);
    assert!(moves.contains(&mv("e2e3")));
    assert!(moves.contains(&mv("e2e4")));
    assert!(!moves.contains(&mv("e2d3")));
    assert!(!moves.contains(&mv("e2f3")));
}

#[test]
fn test_double_push_blocked() {
    let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&board);
    assert!(moves.contains(&mv("e2e3")));
    assert!(!moves.contains(&mv("e2e4")));

    let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&board);
    assert!(!moves.contains(&mv("e2e3")));
    assert!(!moves.contains(&mv("e2e4")));
}

#[test]
fn test_promotion_listed_once_per_square() {
    let board = Board::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&board);
    assert_eq!(moves.iter().filter(|m| **m == mv("a7a8")).count(), 1);
    assert!(moves.contains(&mv("a7b8")));
}

#[test]
fn test_en_passant_window() {
    let mut board = Board::startpos();
    play(&mut board, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(en_passant_file(&board), Some(3));
    assert!(legal_moves(&board).contains(&mv("e5d6")));

    // Any intervening move closes the window
    play(&mut board, &["b1c3", "a6a5"]);
    assert_eq!(en_passant_file(&board), None);
    assert!(!legal_moves(&board).contains(&mv("e5d6")));
}

#[test]
fn test_en_passant_needs_adjacent_pawn() {
    let mut board = Board::startpos();
    play(&mut board, &["e2e4", "d7d5"]);
    // The white pawn is on e4, two ranks short of d5's neighbours
    assert_eq!(en_passant_file(&board), None);
}

#[test]
fn test_en_passant_from_fen() {
    let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    assert_eq!(en_passant_file(&board), Some(3));
    assert!(legal_moves(&board).contains(&mv("e5d6")));
}

#[test]
fn test_castling_both_wings() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let moves = legal_moves(&board);
    assert!(moves.contains(&mv("e1g1")));
    assert!(moves.contains(&mv("e1c1")));
}

#[test]
fn test_castling_blocked_by_piece_between() {
    // Knight on b1 blocks the long side only
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1").unwrap();
    let moves = legal_moves(&board);
    assert!(moves.contains(&mv("e1g1")));
    assert!(!moves.contains(&mv("e1c1")));
}

#[test]
fn test_no_castling_out_of_check() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").unwrap();
    let moves = legal_moves(&board);
    assert!(!moves.contains(&mv("e1g1")));
    assert!(!moves.contains(&mv("e1c1")));
}

#[test]
fn test_no_castling_through_attacked_square() {
    // Rook on f8 covers f1
    let board = Board::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let moves = legal_moves(&board);
    assert!(!moves.contains(&mv("e1g1")));
    assert!(moves.contains(&mv("e1c1")));
}

#[test]
fn test_no_castling_without_rook_or_flag() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1").unwrap();
    assert!(!legal_moves(&board).contains(&mv("e1g1")));

    let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w KQ - 0 1").unwrap();
    let moves = legal_moves(&board);
    assert!(!moves.contains(&mv("e1g1")));
    assert!(moves.contains(&mv("e1c1")));
}

#[test]
fn test_king_move_forfeits_castling() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play(&mut board, &["e1f1", "e8f8", "f1e1", "f8e8"]);
    let moves = legal_moves(&board);
    assert!(!moves.contains(&mv("e1g1")));
    assert!(!moves.contains(&mv("e1c1")));
}

#[test]
fn test_legal_moves_into_reuses_buffer() {
    let mut board = Board::startpos();
    let before = board.clone();
    let mut buf = vec![mv("a1a2")];
    legal_moves_into(&mut board, &mut buf);
    assert_eq!(buf.len(), 20);
    assert_eq!(board, before);
}
