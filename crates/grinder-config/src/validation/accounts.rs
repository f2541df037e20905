use grinder_common::ValidationError;

use crate::schema::AccountConfig;

use super::helpers::require_non_empty_str;

/// Validate one account entry; the caller adds the index.
pub(crate) fn validate_account(account: &AccountConfig) -> Result<(), ValidationError> {
    require_non_empty_str("token", &account.token, "token is required")?;
    require_non_empty_str("channelID", &account.channel_id, "channelID is required")?;
    Ok(())
}
