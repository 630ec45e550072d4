//! Session configuration with defaults < file < environment precedence.
//! CLI flags are applied on top by the play command itself.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub blind: u32,
    pub buy_in: u32,
    pub opponents: usize,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blind: 10,
            buy_in: 1_000,
            opponents: 4,
            seed: None,
        }
    }
}

/// The optional subset a TOML file may provide.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    blind: Option<u32>,
    buy_in: Option<u32>,
    opponents: Option<usize>,
    seed: Option<u64>,
}

/// Resolves the effective configuration: built-in defaults, overlaid by the
/// optional TOML file, overlaid by `RINGGAME_*` environment variables.
pub fn resolve(file: Option<&Path>) -> Result<Config, CliError> {
    let mut config = Config::default();

    if let Some(path) = file {
        let raw = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
        let parsed: FileConfig = toml::from_str(&raw)
            .map_err(|e| CliError::Config(format!("cannot parse {}: {e}", path.display())))?;
        apply(&mut config, parsed);
    }

    apply(&mut config, env_config()?);
    if config.blind == 0 || config.buy_in == 0 {
        return Err(CliError::Config(
            "blind and buy-in must be positive".to_string(),
        ));
    }
    Ok(config)
}

fn apply(config: &mut Config, overlay: FileConfig) {
    if let Some(blind) = overlay.blind {
        config.blind = blind;
    }
    if let Some(buy_in) = overlay.buy_in {
        config.buy_in = buy_in;
    }
    if let Some(opponents) = overlay.opponents {
        config.opponents = opponents;
    }
    if let Some(seed) = overlay.seed {
        config.seed = Some(seed);
    }
}

fn env_config() -> Result<FileConfig, CliError> {
    Ok(FileConfig {
        blind: env_var("RINGGAME_BLIND")?,
        buy_in: env_var("RINGGAME_BUY_IN")?,
        opponents: env_var("RINGGAME_OPPONENTS")?,
        seed: env_var("RINGGAME_SEED")?,
    })
}

fn env_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, CliError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| CliError::Config(format!("invalid value for {name}: {value}"))),
        Err(_) => Ok(None),
    }
}
