use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_defaults() {
    let config = PlayConfig::default();
    assert_eq!(config.mode, Mode::Computer);
    assert_eq!(config.depth, 2);
    assert_eq!(config.computer_side, PlaySide::Black);
    assert_eq!(config.move_delay_ms, 250);
    assert_eq!(config.start_fen, None);
}

#[test]
fn test_empty_toml_gives_defaults() {
    assert_eq!(PlayConfig::from_toml_str("").unwrap(), PlayConfig::default());
}

#[test]
fn test_full_toml() {
    let config = PlayConfig::from_toml_str(
        r#"
        mode = "human"
        depth = 3
        computer_side = "white"
        move_delay_ms = 0
        start_fen = "4k3/8/8/8/8/8/8/4K3 w - - 0 1"
        "#,
    )
    .unwrap();
    assert_eq!(config.mode, Mode::Human);
    assert_eq!(config.depth, 3);
    assert_eq!(config.computer_side, PlaySide::White);
    assert_eq!(config.move_delay_ms, 0);
    assert_eq!(
        config.start_fen.as_deref(),
        Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1")
    );
}

#[test]
fn test_toml_rejects_bad_input() {
    assert!(PlayConfig::from_toml_str("depth = 0").is_err());
    assert!(PlayConfig::from_toml_str("mode = \"robot\"").is_err());
    assert!(PlayConfig::from_toml_str("depht = 3").is_err());
}

#[test]
fn test_round_trip_through_toml() {
    let config = PlayConfig {
        mode: Mode::Human,
        depth: 4,
        ..Default::default()
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(PlayConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_no_args_gives_defaults() {
    assert_eq!(PlayConfig::from_args(&[]).unwrap(), PlayConfig::default());
}

#[test]
fn test_flags_override() {
    let config = PlayConfig::from_args(&args(&[
        "human",
        "--depth",
        "3",
        "--delay",
        "10",
        "--computer-plays",
        "white",
        "--fen",
        "8/8/8/8/8/8/8/K6k w - - 0 1",
    ]))
    .unwrap();
    assert_eq!(config.mode, Mode::Human);
    assert_eq!(config.depth, 3);
    assert_eq!(config.move_delay_ms, 10);
    assert_eq!(config.computer_side, PlaySide::White);
    assert_eq!(config.start_fen.as_deref(), Some("8/8/8/8/8/8/8/K6k w - - 0 1"));
}

#[test]
fn test_bad_args_are_errors() {
    assert!(PlayConfig::from_args(&args(&["--depth"])).is_err());
    assert!(PlayConfig::from_args(&args(&["--depth", "two"])).is_err());
    assert!(PlayConfig::from_args(&args(&["--depth", "0"])).is_err());
    assert!(PlayConfig::from_args(&args(&["--computer-plays", "red"])).is_err());
    assert!(PlayConfig::from_args(&args(&["--fast"])).is_err());
}

#[test]
fn test_config_file_then_flags() {
    let path = std::env::temp_dir().join(format!("chess_play_config_{}.toml", std::process::id()));
    std::fs::write(&path, "depth = 4\nmove_delay_ms = 5\n").unwrap();
    let path_arg = path.to_string_lossy().into_owned();

    let config = PlayConfig::from_args(&args(&["--depth", "1", "--config", &path_arg])).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.depth, 1);
    assert_eq!(config.move_delay_ms, 5);
}

#[test]
fn test_missing_config_file_names_the_path() {
    let err = PlayConfig::load(Path::new("/nonexistent/chess_play.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/chess_play.toml"));
}
