//! Configuration and input contract for stepviz.
//!
//! The controls layer feeds the core validated problem instances only;
//! everything user-typed is checked here first. Visualizer settings load
//! from TOML or YAML files to control autoplay pacing and random
//! generation without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use stepviz_config::VisualizerConfig;
//! use std::time::Duration;
//!
//! let config = VisualizerConfig::from_toml_str(r#"
//!     algorithm = "quick"
//!     random_seed = 42
//!
//!     [array]
//!     mode = "random"
//!     size = 8
//!
//!     [autoplay]
//!     interval_ms = 1000
//! "#).unwrap();
//!
//! assert_eq!(config.autoplay.interval(), Duration::from_millis(1000));
//! assert_eq!(config.random_seed, Some(42));
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use stepviz_config::VisualizerConfig;
//!
//! let config = VisualizerConfig::load("visualizer.toml").unwrap_or_default();
//! ```

mod input;

pub use input::{materialize, parse_custom_array, ArraySpec, InputError, MAX_ELEMENTS};

use std::path::Path;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which algorithm the host should instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Bfs,
}

/// Autoplay pacing. The interval is clamped to the range the step
/// animation can keep up with.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AutoplayConfig {
    /// Milliseconds between automatic forward steps.
    #[serde(default = "AutoplayConfig::default_interval_ms")]
    pub interval_ms: u64,
}

impl AutoplayConfig {
    pub const MIN_INTERVAL_MS: u64 = 500;
    pub const MAX_INTERVAL_MS: u64 = 2500;

    fn default_interval_ms() -> u64 {
        1250
    }

    /// The effective tick interval, clamped to
    /// [`Self::MIN_INTERVAL_MS`]..=[`Self::MAX_INTERVAL_MS`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(
            self.interval_ms
                .clamp(Self::MIN_INTERVAL_MS, Self::MAX_INTERVAL_MS),
        )
    }
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: Self::default_interval_ms(),
        }
    }
}

/// Main visualizer configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct VisualizerConfig {
    /// Algorithm to instrument.
    #[serde(default)]
    pub algorithm: AlgorithmKind,

    /// Problem instance to generate, if preconfigured.
    #[serde(default)]
    pub array: Option<ArraySpec>,

    /// Random seed for reproducible problem generation.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Autoplay pacing.
    #[serde(default)]
    pub autoplay: AutoplayConfig,
}

impl VisualizerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid
    /// TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: AlgorithmKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the problem instance.
    pub fn with_array(mut self, array: ArraySpec) -> Self {
        self.array = Some(array);
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// The problem-generation RNG: seeded when a seed is configured,
    /// OS-seeded otherwise.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

#[cfg(test)]
mod tests;
