//! Configuration schema types for the grinder.
//!
//! All structs use `serde(default)` so partial configs load; wire names
//! are camelCase to match the config files the desktop app writes.

mod accounts;
mod auto_buy;
mod commands;
mod cooldowns;
mod gui;

pub use accounts::*;
pub use auto_buy::*;
pub use commands::*;
pub use cooldowns::*;
pub use gui::*;

use grinder_common::{Choice, OnlineStatus};
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub gui: GuiConfig,
    pub discord_status: Choice<OnlineStatus>,
    /// Probability of answering a chat event correctly.
    pub events_correct_chance: f64,
    pub cooldowns: Cooldowns,
    pub accounts: Vec<AccountConfig>,
    pub auto_buy: AutoBuyConfig,
    pub commands: CommandsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gui: GuiConfig::default(),
            discord_status: Choice::Known(OnlineStatus::Online),
            events_correct_chance: 0.8,
            cooldowns: Cooldowns::default(),
            accounts: Vec::new(),
            auto_buy: AutoBuyConfig::default(),
            commands: CommandsConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
