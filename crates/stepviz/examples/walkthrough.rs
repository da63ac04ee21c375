//! Walks a quicksort run forward step by step, printing each frame the
//! way a renderer would consume it.
//!
//! Run with `cargo run --example walkthrough`.

use stepviz::prelude::*;
use stepviz::{materialize, record_sort};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = VisualizerConfig::new()
        .with_algorithm(AlgorithmKind::Quick)
        .with_array(ArraySpec::Random { size: 8 })
        .with_random_seed(2024);

    let spec = config.array.clone().expect("array configured above");
    let values = materialize(&spec, &mut config.rng()).expect("spec is within the size contract");
    println!("input: {values:?}");

    let recording = record_sort(config.algorithm, &values).expect("quick sort takes an array");
    let (mut player, _handle) = Player::new(recording);

    while let Some(snapshot) = player.step_forward() {
        println!(
            "[{:>3}/{}] {:<24} positions={:?}",
            snapshot.cursor,
            snapshot.total,
            snapshot.narrative.chars().take(24).collect::<String>(),
            snapshot.positions,
        );
    }

    println!(
        "done: {} comparisons, {} elements settled",
        player.comparisons(),
        player.settled_now().len(),
    );
}
