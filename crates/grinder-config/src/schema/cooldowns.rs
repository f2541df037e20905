//! Delay windows the grinder randomizes between.

use serde::{Deserialize, Serialize};

/// A closed `(min, max)` window checked by the range-pair validator.
pub trait RangePair {
    /// Wire name of the lower bound.
    const MIN_FIELD: &'static str;
    /// Wire name of the upper bound.
    const MAX_FIELD: &'static str;
    /// What the window measures, used as the subject of error messages.
    const SUBJECT: &'static str;

    fn bounds(&self) -> (f64, f64);
}

/// Delay window in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DelaySeconds {
    pub min_seconds: f64,
    pub max_seconds: f64,
}

impl DelaySeconds {
    pub fn new(min_seconds: f64, max_seconds: f64) -> Self {
        Self {
            min_seconds,
            max_seconds,
        }
    }
}

impl RangePair for DelaySeconds {
    const MIN_FIELD: &'static str = "minSeconds";
    const MAX_FIELD: &'static str = "maxSeconds";
    const SUBJECT: &'static str = "delays";

    fn bounds(&self) -> (f64, f64) {
        (self.min_seconds, self.max_seconds)
    }
}

/// Break window in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DelayHours {
    pub min_hours: f64,
    pub max_hours: f64,
}

impl DelayHours {
    pub fn new(min_hours: f64, max_hours: f64) -> Self {
        Self {
            min_hours,
            max_hours,
        }
    }
}

impl RangePair for DelayHours {
    const MIN_FIELD: &'static str = "minHours";
    const MAX_FIELD: &'static str = "maxHours";
    const SUBJECT: &'static str = "break time";

    fn bounds(&self) -> (f64, f64) {
        (self.min_hours, self.max_hours)
    }
}

/// Cooldown configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cooldowns {
    /// Wait before pressing a message button.
    pub button_click_delay: DelaySeconds,
    /// Gap between two commands on one account.
    pub command_interval: DelaySeconds,
    /// Time grinding before a break; zero is not allowed.
    pub break_cooldown: DelayHours,
    /// Length of a break; zero disables breaks.
    pub break_duration: DelayHours,
    /// Delay before an account starts after launch.
    pub start_delay: DelaySeconds,
    /// Delay before answering a chat event.
    pub event_delay: DelaySeconds,
}

impl Default for Cooldowns {
    fn default() -> Self {
        Self {
            button_click_delay: DelaySeconds::new(0.5, 1.0),
            command_interval: DelaySeconds::new(1.0, 3.0),
            break_cooldown: DelayHours::new(2.0, 4.0),
            break_duration: DelayHours::new(0.5, 1.0),
            start_delay: DelaySeconds::new(5.0, 20.0),
            event_delay: DelaySeconds::new(1.0, 4.0),
        }
    }
}
