use std::time::Duration;

use rand::RngCore;

use super::*;

#[test]
fn default_config_is_usable() {
    let config = VisualizerConfig::default();
    assert_eq!(config.algorithm, AlgorithmKind::Bubble);
    assert!(config.array.is_none());
    assert!(config.random_seed.is_none());
    assert_eq!(config.autoplay.interval(), Duration::from_millis(1250));
}

#[test]
fn toml_round_trip() {
    let config = VisualizerConfig::from_toml_str(
        r#"
        algorithm = "merge"
        random_seed = 7

        [array]
        mode = "custom"
        values = [3, 1, 2]

        [autoplay]
        interval_ms = 800
        "#,
    )
    .unwrap();

    assert_eq!(config.algorithm, AlgorithmKind::Merge);
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(
        config.array,
        Some(ArraySpec::Custom {
            values: vec![3, 1, 2]
        })
    );
    assert_eq!(config.autoplay.interval(), Duration::from_millis(800));
}

#[test]
fn yaml_parses_too() {
    let config = VisualizerConfig::from_yaml_str(
        r#"
        algorithm: bfs
        array:
          mode: random
          size: 5
        "#,
    )
    .unwrap();

    assert_eq!(config.algorithm, AlgorithmKind::Bfs);
    assert_eq!(config.array, Some(ArraySpec::Random { size: 5 }));
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(VisualizerConfig::from_toml_str("algorithm = ").is_err());
    assert!(VisualizerConfig::from_toml_str("algorithm = \"bogo\"").is_err());
}

#[test]
fn autoplay_interval_is_clamped() {
    let fast = AutoplayConfig { interval_ms: 10 };
    assert_eq!(fast.interval(), Duration::from_millis(500));

    let slow = AutoplayConfig { interval_ms: 60_000 };
    assert_eq!(slow.interval(), Duration::from_millis(2500));
}

#[test]
fn builders_chain() {
    let config = VisualizerConfig::new()
        .with_algorithm(AlgorithmKind::Quick)
        .with_array(ArraySpec::Random { size: 8 })
        .with_random_seed(99);

    assert_eq!(config.algorithm, AlgorithmKind::Quick);
    assert_eq!(config.array, Some(ArraySpec::Random { size: 8 }));
    assert_eq!(config.random_seed, Some(99));
}

#[test]
fn seeded_rng_is_deterministic() {
    let config = VisualizerConfig::new().with_random_seed(5);
    let mut a = config.rng();
    let mut b = config.rng();
    assert_eq!(a.next_u64(), b.next_u64());
}
