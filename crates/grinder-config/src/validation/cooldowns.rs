//! Cooldown windows. Only the break cooldown forbids zero.

use grinder_common::ValidationError;

use crate::schema::Cooldowns;

use super::helpers::{validate_range_pair, Annotate, ZeroPolicy};

pub(crate) fn validate_cooldowns(cooldowns: &Cooldowns) -> Result<(), ValidationError> {
    validate_range_pair(&cooldowns.button_click_delay, ZeroPolicy::Allow)
        .in_section("buttonClickDelay")?;
    validate_range_pair(&cooldowns.command_interval, ZeroPolicy::Allow)
        .in_section("commandInterval")?;
    validate_range_pair(&cooldowns.break_cooldown, ZeroPolicy::Forbid)
        .in_section("breakCooldown")?;
    validate_range_pair(&cooldowns.break_duration, ZeroPolicy::Allow)
        .in_section("breakDuration")?;
    validate_range_pair(&cooldowns.start_delay, ZeroPolicy::Allow).in_section("startDelay")?;
    validate_range_pair(&cooldowns.event_delay, ZeroPolicy::Allow).in_section("eventDelay")?;
    Ok(())
}
