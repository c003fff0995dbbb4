use super::*;

fn record(outcome: Outcome, status: GameStatus) -> GameRecord {
    GameRecord {
        outcome,
        status,
        plies: 4,
        white_score: 0,
        black_score: 900,
        moves: vec!["f2f3".into(), "e7e5".into(), "g2g4".into(), "d8h4".into()],
        final_fen: "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3".into(),
    }
}

#[test]
fn test_outcome_from_status() {
    assert_eq!(
        Outcome::from_status(GameStatus::Checkmate {
            winner: Color::Black
        }),
        Outcome::BlackWins
    );
    assert_eq!(Outcome::from_status(GameStatus::Stalemate), Outcome::Draw);
    assert_eq!(Outcome::from_status(GameStatus::ThreefoldRepetition), Outcome::Draw);
    assert_eq!(Outcome::from_status(GameStatus::Ongoing), Outcome::Unfinished);
}

#[test]
fn test_totals_follow_outcomes() {
    let mut result = MatchResult::new("Search", "Random");
    result.add_game(record(
        Outcome::BlackWins,
        GameStatus::Checkmate {
            winner: Color::Black,
        },
    ));
    result.add_game(record(Outcome::Draw, GameStatus::FiftyMoveRule));
    result.add_game(record(Outcome::Unfinished, GameStatus::Ongoing));

    assert_eq!(result.total_games(), 3);
    assert_eq!(result.black_wins, 1);
    assert_eq!(result.draws, 1);
    assert_eq!(result.unfinished, 1);
    assert_eq!(result.white_wins, 0);

    let report = result.generate_report();
    assert!(report.contains("Search vs Random"));
    assert!(report.contains("checkmate, black wins"));
}

#[test]
fn test_save_and_load_json() {
    let mut result = MatchResult::new("A", "B");
    result.add_game(record(Outcome::Draw, GameStatus::Stalemate));

    let path = std::env::temp_dir().join(format!("selfplay-results-{}.json", std::process::id()));
    result.save(&path).unwrap();
    let loaded = MatchResult::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.draws, 1);
    assert_eq!(loaded.games[0].status, GameStatus::Stalemate);
    assert_eq!(loaded.games[0].moves.len(), 4);
}
