//! Full configuration validation.
//!
//! Mirrors the shape of the config tree: the root calls one validator
//! per section in a fixed order, each section recurses into its children,
//! and the first failure is returned with the path it travelled through.
//! Nothing is collected or merged; a valid config yields `Ok(())`.

mod accounts;
mod auto_buy;
mod commands;
mod cooldowns;
mod gui;
mod helpers;

#[cfg(test)]
mod tests;

use grinder_common::ValidationError;

use crate::schema::Config;

use helpers::{validate_choice, validate_probability, Annotate};

/// Validate a config, stopping at the first failure.
///
/// Order: gui, discordStatus, eventsCorrectChance, cooldowns, each
/// account, autoBuy, commands.
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    gui::validate_gui(&config.gui).in_section("gui")?;
    validate_choice("discordStatus", "discordStatus", &config.discord_status)?;
    validate_probability("eventsCorrectChance", config.events_correct_chance)?;
    cooldowns::validate_cooldowns(&config.cooldowns).in_section("cooldowns")?;

    for (index, account) in config.accounts.iter().enumerate() {
        accounts::validate_account(account)
            .at_index(index)
            .in_section("accounts")?;
    }

    auto_buy::validate_auto_buy(&config.auto_buy).in_section("autoBuy")?;
    commands::validate_commands(&config.commands).in_section("commands")?;
    Ok(())
}
