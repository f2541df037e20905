//! GUI settings.

use serde::{Deserialize, Serialize};

use grinder_common::Choice;

grinder_common::closed_set! {
    /// Color scheme of the desktop window.
    #[derive(Default)]
    pub enum Theme {
        System => "System",
        #[default]
        Dark => "Dark",
        Light => "Light",
    }
}

/// GUI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuiConfig {
    pub theme: Choice<Theme>,
}
