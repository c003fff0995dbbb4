use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let mut board = Board::startpos();
    let before = board.clone();

    let result = engine.search(&mut board, 3);

    assert!(result.best_move.is_some());
    assert_eq!(board, before);
    assert!(chess_core::legal_moves(&board).contains(&result.best_move.unwrap()));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let mut board =
        Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    let result = engine.search(&mut board, 1);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let mut board = Board::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    let result = engine.search(&mut board, 1);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_promotes_to_any_piece() {
    let engine = RandomEngine::new();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let mut board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        board.make_move("a7a8".parse().unwrap(), engine.promotion());
        seen.insert(board.piece(0, 7).kind());
    }
    assert_eq!(seen.len(), 4);
}
