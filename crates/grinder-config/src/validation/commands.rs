//! Command section validation.
//!
//! Runs in two passes: first every command's shared delay, then the
//! options of the specialized commands.

use grinder_common::ValidationError;

use crate::schema::{
    AdventureCommandConfig, BlackjackCommandConfig, CommandsConfig, CrimeCommandConfig,
    FishCommandConfig, PostMemesCommandConfig, SearchCommandConfig, StreamCommandConfig,
    TriviaCommandConfig,
};

use super::helpers::{
    require_any, require_non_empty, require_non_empty_str, require_non_negative, validate_choice,
    validate_choices, validate_probability, Annotate,
};

pub(crate) fn validate_commands(commands: &CommandsConfig) -> Result<(), ValidationError> {
    for (name, general) in commands.commands_map() {
        require_non_negative("delay", general.delay, "delay cannot be negative").in_section(name)?;
    }

    validate_adventure(&commands.adventure).in_section("adventure")?;
    validate_blackjack(&commands.blackjack).in_section("blackjack")?;
    validate_crime(&commands.crime).in_section("crime")?;
    validate_fish(&commands.fish).in_section("fish")?;
    validate_stream(&commands.stream).in_section("stream")?;
    validate_search(&commands.search).in_section("search")?;
    validate_post_memes(&commands.post_memes).in_section("postMemes")?;
    validate_trivia(&commands.trivia).in_section("trivia")?;
    Ok(())
}

fn validate_adventure(adventure: &AdventureCommandConfig) -> Result<(), ValidationError> {
    validate_choice(
        "adventureOption",
        "adventure option",
        &adventure.adventure_option,
    )
}

fn validate_blackjack(blackjack: &BlackjackCommandConfig) -> Result<(), ValidationError> {
    require_non_empty_str("amount", &blackjack.amount, "amount is required")
}

fn validate_crime(crime: &CrimeCommandConfig) -> Result<(), ValidationError> {
    require_any(
        &crime.priority,
        &crime.second_priority,
        "must have at least one priority or secondPriority crime",
    )
}

fn validate_fish(fish: &FishCommandConfig) -> Result<(), ValidationError> {
    validate_choices(
        "fishLocation",
        "fish location",
        &fish.fish_location,
        "at least one fish location must be specified",
    )?;
    require_non_negative(
        "sellCoinsValue",
        fish.sell_coins_value,
        "sellCoinsValue cannot be negative",
    )
}

fn validate_stream(stream: &StreamCommandConfig) -> Result<(), ValidationError> {
    require_non_empty("order", &stream.order, "order cannot be empty")
}

fn validate_search(search: &SearchCommandConfig) -> Result<(), ValidationError> {
    require_any(
        &search.priority,
        &search.second_priority,
        "must have at least one priority or secondPriority search",
    )
}

fn validate_post_memes(post_memes: &PostMemesCommandConfig) -> Result<(), ValidationError> {
    require_non_empty("platform", &post_memes.platform, "platform cannot be empty")
}

fn validate_trivia(trivia: &TriviaCommandConfig) -> Result<(), ValidationError> {
    validate_probability("triviaCorrectChance", trivia.trivia_correct_chance)
}
