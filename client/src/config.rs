use common::config::{ConfigManager, Validate};
use common::{BotType, GameMode};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager() -> ConfigManager<Config> {
    ConfigManager::from_yaml_file(CONFIG_FILE)
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum PlayMode {
    TwoPlayer,
    VsBot,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub mode: PlayMode,
    pub difficulty: BotType,
    pub bot_delay_ms: u32,
    pub seed: Option<u64>,
}

impl Config {
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            PlayMode::TwoPlayer => GameMode::TwoPlayer,
            PlayMode::VsBot => GameMode::VsBot(self.difficulty),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > 5000 {
            return Err("bot_delay_ms must not exceed 5000".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: PlayMode::VsBot,
            difficulty: BotType::Minimax,
            bot_delay_ms: 300,
            seed: None,
        }
    }
}
