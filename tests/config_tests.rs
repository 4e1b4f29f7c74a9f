use broadside::{ConfigError, GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_FLEET};

#[test]
fn test_default_config() {
    let config = GameConfig::default();
    assert_eq!(config.board_size, DEFAULT_BOARD_SIZE);
    assert_eq!(config.fleet, DEFAULT_FLEET.to_vec());
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_from_json() {
    let config = GameConfig::from_json(r#"{"board_size": 8, "fleet": [4, 3, 2]}"#).unwrap();
    assert_eq!(config, GameConfig::new(8, vec![4, 3, 2]));

    // missing fields fall back to defaults
    let config = GameConfig::from_json(r#"{"fleet": [2, 2]}"#).unwrap();
    assert_eq!(config.board_size, DEFAULT_BOARD_SIZE);
}

#[test]
fn test_from_json_validates() {
    assert!(GameConfig::from_json(r#"{"board_size": 3, "fleet": [4]}"#).is_err());
    assert!(GameConfig::from_json("not json").is_err());
    assert_eq!(
        GameConfig::new(3, vec![4]).validate(),
        Err(ConfigError::ShipTooLong {
            length: 4,
            board_size: 3
        })
    );
}
