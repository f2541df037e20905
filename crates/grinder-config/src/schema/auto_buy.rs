//! Automatic purchase of consumable items.

use serde::{Deserialize, Serialize};

/// Purchase settings for one item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AutoBuyItem {
    pub state: bool,
    /// How many to buy when the item runs out.
    pub amount: i64,
}

/// Auto-buy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoBuyConfig {
    pub hunting_rifle: AutoBuyItem,
    pub shovel: AutoBuyItem,
    pub life_savers: AutoBuyItem,
}

impl Default for AutoBuyConfig {
    fn default() -> Self {
        Self {
            hunting_rifle: AutoBuyItem {
                state: true,
                amount: 1,
            },
            shovel: AutoBuyItem {
                state: true,
                amount: 1,
            },
            life_savers: AutoBuyItem {
                state: false,
                amount: 0,
            },
        }
    }
}
