use serde::{Deserialize, Serialize};

/// One automated Discord identity.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AccountConfig {
    pub token: String,
    /// Channel the account sends commands in.
    #[serde(rename = "channelID")]
    pub channel_id: String,
}

impl AccountConfig {
    pub fn new(token: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            channel_id: channel_id.into(),
        }
    }
}
