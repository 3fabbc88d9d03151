//! Configuration loading from lapbench.toml
//!
//! Driver settings can be specified in a `lapbench.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for by [`LapConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "lapbench.toml";

/// lapbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LapConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Doubling-run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Measured repetitions per benchmark and size
    #[serde(default = "default_runs")]
    pub runs: usize,
    /// First problem size
    #[serde(default = "default_initial_size")]
    pub initial_size: usize,
    /// Number of times the size doubles after the first
    #[serde(default = "default_doublings")]
    pub doublings: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            runs: default_runs(),
            initial_size: default_initial_size(),
            doublings: default_doublings(),
        }
    }
}

fn default_runs() -> usize {
    10
}
fn default_initial_size() -> usize {
    200
}
fn default_doublings() -> u32 {
    6
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (e.g., "lapbench=info")
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "lapbench=info".to_string()
}

impl LapConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# lapbench Configuration

[runner]
# Measured repetitions per benchmark and problem size
runs = 10
# First problem size
initial_size = 200
# How many times the problem size doubles (sizes: 200, 400, ... 12800)
doublings = 6

[logging]
# tracing-subscriber EnvFilter directive
filter = "lapbench=info"
"#
        .to_string()
    }
}
