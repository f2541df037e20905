//! Per-command settings.
//!
//! Every command carries a [`GeneralCommandConfig`]; the specialized
//! commands flatten it next to their own options so the wire format stays
//! a single object per command.

use serde::{Deserialize, Serialize};

use grinder_common::Choice;

grinder_common::closed_set! {
    /// Destination picked when starting an adventure.
    #[derive(Default)]
    pub enum AdventureOption {
        Brazil => "Brazil",
        #[default]
        Space => "Space",
        Vacation => "Vacation",
        West => "West",
    }
}

grinder_common::closed_set! {
    /// Fishing spot.
    #[derive(Default)]
    pub enum FishLocation {
        #[default]
        VertigoBeach => "VertigoBeach",
        WilyRiver => "WilyRiver",
        UnderwaterSanctuary => "UnderwaterSanctuary",
        CampGuillermo => "CampGuillermo",
        ScurvyWaters => "ScurvyWaters",
        NorthpointCabin => "NorthpointCabin",
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralCommandConfig {
    pub state: bool,
    /// Extra wait in seconds before the command is reissued.
    pub delay: i64,
}

impl Default for GeneralCommandConfig {
    fn default() -> Self {
        Self {
            state: true,
            delay: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AdventureCommandConfig {
    #[serde(flatten)]
    pub general: GeneralCommandConfig,
    pub adventure_option: Choice<AdventureOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlackjackCommandConfig {
    #[serde(flatten)]
    pub general: GeneralCommandConfig,
    /// Bet passed to the command verbatim, e.g. `1000` or `max`.
    pub amount: String,
}

impl Default for BlackjackCommandConfig {
    fn default() -> Self {
        Self {
            general: GeneralCommandConfig {
                state: false,
                delay: 0,
            },
            amount: "1000".into(),
        }
    }
}

/// Crime choices; the first list is tried before the second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrimeCommandConfig {
    #[serde(flatten)]
    pub general: GeneralCommandConfig,
    pub priority: Vec<String>,
    pub second_priority: Vec<String>,
}

impl Default for CrimeCommandConfig {
    fn default() -> Self {
        Self {
            general: GeneralCommandConfig::default(),
            priority: vec!["Tax Evasion".into(), "Fraud".into()],
            second_priority: vec!["Shoplifting".into(), "Cyber Bullying".into()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FishCommandConfig {
    #[serde(flatten)]
    pub general: GeneralCommandConfig,
    pub fish_location: Vec<Choice<FishLocation>>,
    /// Sell any catch worth less than this many coins.
    pub sell_coins_value: i64,
}

impl Default for FishCommandConfig {
    fn default() -> Self {
        Self {
            general: GeneralCommandConfig::default(),
            fish_location: vec![Choice::Known(FishLocation::VertigoBeach)],
            sell_coins_value: 10_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamCommandConfig {
    #[serde(flatten)]
    pub general: GeneralCommandConfig,
    /// Stream actions, cycled in order.
    pub order: Vec<String>,
}

impl Default for StreamCommandConfig {
    fn default() -> Self {
        Self {
            general: GeneralCommandConfig::default(),
            order: vec!["Read Chat".into(), "Collect Donations".into(), "Run AD".into()],
        }
    }
}

/// Search spots; the first list is tried before the second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchCommandConfig {
    #[serde(flatten)]
    pub general: GeneralCommandConfig,
    pub priority: Vec<String>,
    pub second_priority: Vec<String>,
}

impl Default for SearchCommandConfig {
    fn default() -> Self {
        Self {
            general: GeneralCommandConfig::default(),
            priority: vec!["Phone".into(), "Coat".into(), "Laundromat".into()],
            second_priority: vec!["Mailbox".into(), "Bus".into()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMemesCommandConfig {
    #[serde(flatten)]
    pub general: GeneralCommandConfig,
    /// Platforms picked from at random.
    pub platform: Vec<String>,
}

impl Default for PostMemesCommandConfig {
    fn default() -> Self {
        Self {
            general: GeneralCommandConfig::default(),
            platform: vec!["Reddit".into(), "Twitter".into(), "TikTok".into()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriviaCommandConfig {
    #[serde(flatten)]
    pub general: GeneralCommandConfig,
    /// Probability of answering a trivia question correctly.
    pub trivia_correct_chance: f64,
}

impl Default for TriviaCommandConfig {
    fn default() -> Self {
        Self {
            general: GeneralCommandConfig::default(),
            trivia_correct_chance: 0.75,
        }
    }
}

/// Command configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CommandsConfig {
    pub adventure: AdventureCommandConfig,
    pub beg: GeneralCommandConfig,
    pub blackjack: BlackjackCommandConfig,
    pub crime: CrimeCommandConfig,
    pub daily: GeneralCommandConfig,
    pub deposit: GeneralCommandConfig,
    pub dig: GeneralCommandConfig,
    pub fish: FishCommandConfig,
    pub high_low: GeneralCommandConfig,
    pub hunt: GeneralCommandConfig,
    pub post_memes: PostMemesCommandConfig,
    pub scratch: GeneralCommandConfig,
    pub search: SearchCommandConfig,
    pub stream: StreamCommandConfig,
    pub trivia: TriviaCommandConfig,
    pub work: GeneralCommandConfig,
}

impl CommandsConfig {
    /// Every command's shared settings as `(wire name, config)` pairs,
    /// in declaration order.
    pub fn commands_map(&self) -> Vec<(&'static str, &GeneralCommandConfig)> {
        vec![
            ("adventure", &self.adventure.general),
            ("beg", &self.beg),
            ("blackjack", &self.blackjack.general),
            ("crime", &self.crime.general),
            ("daily", &self.daily),
            ("deposit", &self.deposit),
            ("dig", &self.dig),
            ("fish", &self.fish.general),
            ("highLow", &self.high_low),
            ("hunt", &self.hunt),
            ("postMemes", &self.post_memes.general),
            ("scratch", &self.scratch),
            ("search", &self.search.general),
            ("stream", &self.stream.general),
            ("trivia", &self.trivia.general),
            ("work", &self.work),
        ]
    }
}
