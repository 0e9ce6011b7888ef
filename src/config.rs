use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_config.json";
pub const CONFIG_PATH_ENV: &str = "TICTACTOE_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub display: DisplayConfig,
    pub selfplay: SelfPlayDefaults,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// 乱数シード (未指定ならエントロピーから)
    pub seed: Option<u64>,
    /// 対話モードでAIが指す前の待ち時間
    pub think_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayDefaults {
    pub num_games: usize,
}

impl AppConfig {
    /// Reads `$TICTACTOE_CONFIG`, or `tictactoe_config.json` in the working directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::load_from(&path)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&config_str)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => {
                debug!(?config, "loaded config");
                config
            }
            Err(err) => {
                debug!("using default config: {:#}", err);
                Self::default()
            }
        }
    }

    /// 先手・後手で異なる乱数列になるようにシードをずらす
    pub fn seed_for(&self, player_index: u64) -> Option<u64> {
        self.ai.seed.map(|seed| seed.wrapping_add(player_index))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ai: AiConfig::default(),
            display: DisplayConfig::default(),
            selfplay: SelfPlayDefaults::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { color: false }
    }
}

impl Default for SelfPlayDefaults {
    fn default() -> Self {
        SelfPlayDefaults { num_games: 100 }
    }
}
