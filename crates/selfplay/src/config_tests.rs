use super::*;

#[test]
fn test_partial_config_keeps_defaults() {
    let config = MatchConfig::from_toml(
        r#"
        games = 4

        [black]
        name = "Chaos"
        random = true
        "#,
    )
    .unwrap();

    assert_eq!(config.games, 4);
    assert_eq!(config.max_plies, 200);
    assert_eq!(config.white, BotConfig::new("White", 2, false));
    assert_eq!(config.black.name, "Chaos");
    assert!(config.black.random);
    assert_eq!(config.black.difficulty, 2);
}

#[test]
fn test_empty_config_is_default() {
    assert_eq!(MatchConfig::from_toml("").unwrap(), MatchConfig::default());
}

#[test]
fn test_bad_config_is_an_error() {
    assert!(MatchConfig::from_toml("games = \"many\"").is_err());
    assert!(MatchConfig::load(Path::new("/nonexistent/selfplay.toml")).is_err());
}
