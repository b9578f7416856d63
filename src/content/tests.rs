//! Content domain: tests for tuning parsing and sanitizing.

use super::{parse_actor_config, sanitize_config};
use crate::movement::{ActorConfig, LayerFilter};

#[test]
fn test_partial_ron_keeps_defaults() {
    let config = parse_actor_config(
        "(jump_height: 4.5, jump_count: 1, ground: (ray_count: 5))",
        false,
        "inline.ron",
    )
    .expect("partial config should parse");

    assert_eq!(config.jump_height, 4.5);
    assert_eq!(config.jump_count, 1);
    assert_eq!(config.ground.ray_count, 5);
    assert_eq!(config.ground.ray_distance, 0.05);
    assert_eq!(config.dash_power, ActorConfig::default().dash_power);
}

#[test]
fn test_json_config() {
    let config = parse_actor_config(
        r#"{ "dash_power": 20.0, "ceiling_ignore_tags": ["OneWay"], "wall": { "mask": 4 } }"#,
        true,
        "inline.json",
    )
    .expect("json config should parse");

    assert_eq!(config.dash_power, 20.0);
    assert_eq!(config.ceiling_ignore_tags, vec!["OneWay".to_string()]);
    assert_eq!(config.wall.mask, LayerFilter(4));
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_actor_config("(jump_height: \"high\")", false, "broken.ron")
        .expect_err("string height should fail");
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_sanitize_floors_ray_counts() {
    let mut config = ActorConfig::default();
    config.ground.ray_count = -4;
    config.wall.ray_count = 1;

    let (config, warnings) = sanitize_config(config);
    assert_eq!(config.ground.ray_count, 2);
    assert_eq!(config.wall.ray_count, 2);
    assert_eq!(config.ceiling.ray_count, 3);
    assert_eq!(warnings.len(), 2);
}

#[test]
fn test_sanitize_clamps_rates_and_distances() {
    let config = ActorConfig {
        horizontal_acceleration_rate: 1.5,
        horizontal_deceleration_rate: -0.2,
        coyote_time: -1.0,
        ..Default::default()
    };

    let (config, warnings) = sanitize_config(config);
    assert_eq!(config.horizontal_acceleration_rate, 1.0);
    assert_eq!(config.horizontal_deceleration_rate, 0.0);
    assert_eq!(config.coyote_time, 0.0);
    assert_eq!(warnings.len(), 3);
    assert!(warnings.iter().any(|w| w.field == "coyote_time"));
}

#[test]
fn test_default_config_is_clean() {
    let (config, warnings) = sanitize_config(ActorConfig::default());
    assert!(warnings.is_empty());
    assert_eq!(config, ActorConfig::default());
}

#[test]
fn test_shipped_actor_config_loads_clean() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/actor.ron");
    let config = super::load_actor_config(&path).expect("shipped config should load");

    assert_eq!(config.ground.mask, LayerFilter(10));
    assert_eq!(config.ceiling.mask, LayerFilter(42));
    assert_eq!(config.ceiling_ignore_tags, vec!["Canopy".to_string()]);
    assert!(!config.stuck_protection.enabled);

    let (_, warnings) = sanitize_config(config);
    assert!(warnings.is_empty());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = super::load_actor_config(std::path::Path::new("does/not/exist.ron"))
        .expect_err("missing file should fail");
    assert!(err.message.starts_with("IO error"));
}
