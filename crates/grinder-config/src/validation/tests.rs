//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;
use grinder_common::{Choice, OnlineStatus, PathSegment, ViolationKind};

fn with_account(token: &str, channel_id: &str) -> Config {
    let mut config = Config::default();
    config.accounts.push(AccountConfig::new(token, channel_id));
    config
}

#[test]
fn default_config_validates() {
    let config = Config::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn config_with_accounts_validates() {
    let mut config = with_account("abc", "123");
    config.accounts.push(AccountConfig::new("def", "456"));
    assert!(validate(&config).is_ok());
}

// -- gui / root -------------------------------------------------------------

#[test]
fn catches_invalid_theme() {
    let mut config = Config::default();
    config.gui.theme = Choice::Raw("Solarized".into());
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "gui: invalid theme: Solarized");
    assert_eq!(err.kind(), ViolationKind::Membership);
    assert_eq!(err.location(), "gui.theme");
}

#[test]
fn theme_match_is_case_sensitive() {
    let mut config = Config::default();
    config.gui.theme = Choice::Raw("dark".into());
    assert!(validate(&config).is_err());
    config.gui.theme = Choice::Raw(String::new());
    assert!(validate(&config).is_err());
}

#[test]
fn every_theme_is_accepted() {
    for theme in Theme::ALL {
        let mut config = Config::default();
        config.gui.theme = Choice::Known(*theme);
        assert!(validate(&config).is_ok(), "{theme}");
    }
}

#[test]
fn catches_invalid_discord_status() {
    let mut config = Config::default();
    config.discord_status = Choice::Raw("away".into());
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "invalid discordStatus: away");
    assert!(err.path().is_empty());
    assert_eq!(err.value(), Some("away"));
}

#[test]
fn every_status_is_accepted() {
    for status in OnlineStatus::ALL {
        let mut config = Config::default();
        config.discord_status = Choice::Known(*status);
        assert!(validate(&config).is_ok(), "{status}");
    }
}

#[test]
fn events_chance_bounds() {
    let mut config = Config::default();
    for ok in [0.0, 1.0, 0.3] {
        config.events_correct_chance = ok;
        assert!(validate(&config).is_ok(), "{ok}");
    }
    for bad in [-0.0001, 1.0001] {
        config.events_correct_chance = bad;
        let err = validate(&config).unwrap_err();
        assert_eq!(err.to_string(), "eventsCorrectChance must be between 0 and 1");
    }
}

// -- cooldowns --------------------------------------------------------------

#[test]
fn break_cooldown_forbids_zero() {
    let mut config = Config::default();
    config.cooldowns.break_cooldown = DelayHours::new(0.0, 10.0);
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "cooldowns: breakCooldown: break time cannot be 0");
    assert_eq!(err.kind(), ViolationKind::Range);
    assert_eq!(err.location(), "cooldowns.breakCooldown.minHours");
}

#[test]
fn break_duration_allows_zero() {
    let mut config = Config::default();
    config.cooldowns.break_duration = DelayHours::new(0.0, 0.0);
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_negative_delay() {
    let mut config = Config::default();
    config.cooldowns.command_interval = DelaySeconds::new(-1.0, 2.0);
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "cooldowns: commandInterval: delays cannot be negative");
}

#[test]
fn catches_reversed_delay() {
    let mut config = Config::default();
    config.cooldowns.event_delay = DelaySeconds::new(5.0, 1.0);
    let err = validate(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cooldowns: eventDelay: minSeconds cannot be greater than maxSeconds"
    );
}

#[test]
fn negative_and_reversed_pair_reports_negative() {
    let mut config = Config::default();
    config.cooldowns.start_delay = DelaySeconds::new(3.0, -2.0);
    let err = validate(&config).unwrap_err();
    assert_eq!(err.message(), "delays cannot be negative");
}

#[test]
fn zero_delays_are_allowed_outside_break_cooldown() {
    let mut config = Config::default();
    config.cooldowns.button_click_delay = DelaySeconds::new(0.0, 0.0);
    config.cooldowns.command_interval = DelaySeconds::new(0.0, 0.0);
    config.cooldowns.start_delay = DelaySeconds::new(0.0, 0.0);
    config.cooldowns.event_delay = DelaySeconds::new(0.0, 0.0);
    assert!(validate(&config).is_ok());
}

#[test]
fn cooldowns_report_first_failing_window() {
    let mut config = Config::default();
    config.cooldowns.button_click_delay = DelaySeconds::new(2.0, 1.0);
    config.cooldowns.event_delay = DelaySeconds::new(-1.0, 1.0);
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().starts_with("cooldowns: buttonClickDelay:"));
}

// -- accounts ---------------------------------------------------------------

#[test]
fn catches_missing_channel_id() {
    let config = with_account("abc", "");
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "accounts[0]: channelID is required");
    assert_eq!(
        err.path(),
        &[PathSegment::Field("accounts"), PathSegment::Index(0)]
    );
    assert_eq!(err.field(), Some("channelID"));
    assert_eq!(err.kind(), ViolationKind::Emptiness);
}

#[test]
fn catches_missing_token_before_channel() {
    let config = with_account("", "");
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "accounts[0]: token is required");
}

#[test]
fn reports_first_bad_account_index() {
    let mut config = with_account("abc", "123");
    config.accounts.push(AccountConfig::new("def", "456"));
    config.accounts.push(AccountConfig::new("", "789"));
    config.accounts.push(AccountConfig::new("ghi", ""));
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "accounts[2]: token is required");
    assert_eq!(err.location(), "accounts[2].token");
}

#[test]
fn cooldowns_fail_before_accounts() {
    let mut config = with_account("", "");
    config.cooldowns.break_cooldown = DelayHours::new(0.0, 1.0);
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().starts_with("cooldowns:"));
}

// -- auto-buy ---------------------------------------------------------------

#[test]
fn negative_amount_ignored_when_disabled() {
    let mut config = Config::default();
    config.auto_buy.shovel = AutoBuyItem {
        state: false,
        amount: -3,
    };
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_negative_amount_when_enabled() {
    let mut config = Config::default();
    config.auto_buy.life_savers = AutoBuyItem {
        state: true,
        amount: -1,
    };
    let err = validate(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "autoBuy: lifeSavers: amount must be >= 0 when enabled"
    );
    assert_eq!(err.kind(), ViolationKind::Conditional);
}

// -- commands ---------------------------------------------------------------

#[test]
fn catches_negative_command_delay_with_name() {
    let mut config = Config::default();
    config.commands.beg.delay = -1;
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "commands: beg: delay cannot be negative");
    assert_eq!(err.location(), "commands.beg.delay");
}

#[test]
fn delay_sweep_covers_specialized_commands() {
    let mut config = Config::default();
    config.commands.post_memes.general.delay = -10;
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "commands: postMemes: delay cannot be negative");
}

#[test]
fn delay_sweep_runs_before_specialized_checks() {
    let mut config = Config::default();
    config.commands.adventure.adventure_option = Choice::Raw("Moon".into());
    config.commands.work.delay = -1;
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "commands: work: delay cannot be negative");
}

#[test]
fn catches_invalid_adventure_option() {
    let mut config = Config::default();
    config.commands.adventure.adventure_option = Choice::Raw("Moon".into());
    let err = validate(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "commands: adventure: invalid adventure option: Moon"
    );
}

#[test]
fn catches_empty_blackjack_amount() {
    let mut config = Config::default();
    config.commands.blackjack.amount.clear();
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "commands: blackjack: amount is required");
}

#[test]
fn crime_needs_at_least_one_priority_list() {
    let mut config = Config::default();

    config.commands.crime.second_priority.clear();
    assert!(validate(&config).is_ok());

    config.commands.crime.priority.clear();
    config.commands.crime.second_priority = vec!["Fraud".into()];
    assert!(validate(&config).is_ok());

    config.commands.crime.second_priority.clear();
    let err = validate(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "commands: crime: must have at least one priority or secondPriority crime"
    );
}

#[test]
fn search_needs_at_least_one_priority_list() {
    let mut config = Config::default();

    config.commands.search.priority.clear();
    assert!(validate(&config).is_ok());

    config.commands.search.second_priority.clear();
    let err = validate(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "commands: search: must have at least one priority or secondPriority search"
    );
    assert_eq!(err.kind(), ViolationKind::Emptiness);
}

#[test]
fn catches_unknown_fish_location() {
    let mut config = Config::default();
    config.commands.fish.fish_location = vec![Choice::Raw("Mars".into())];
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "commands: fish: invalid fish location: Mars");
    assert_eq!(err.kind(), ViolationKind::Membership);
    assert_eq!(err.value(), Some("Mars"));
}

#[test]
fn fish_reports_first_bad_location() {
    let mut config = Config::default();
    config.commands.fish.fish_location = vec![
        Choice::Known(FishLocation::WilyRiver),
        Choice::Raw("Mars".into()),
        Choice::Raw("Venus".into()),
    ];
    let err = validate(&config).unwrap_err();
    assert_eq!(err.value(), Some("Mars"));
}

#[test]
fn fish_checks_location_before_sell_value() {
    let mut config = Config::default();
    config.commands.fish.fish_location = vec![Choice::Known(FishLocation::VertigoBeach)];
    config.commands.fish.sell_coins_value = -5;
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "commands: fish: sellCoinsValue cannot be negative");
    assert_eq!(err.kind(), ViolationKind::Range);
}

#[test]
fn catches_empty_fish_locations() {
    let mut config = Config::default();
    config.commands.fish.fish_location.clear();
    let err = validate(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "commands: fish: at least one fish location must be specified"
    );
    assert_eq!(err.kind(), ViolationKind::Emptiness);
}

#[test]
fn catches_empty_stream_order() {
    let mut config = Config::default();
    config.commands.stream.order.clear();
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "commands: stream: order cannot be empty");
}

#[test]
fn catches_empty_post_memes_platform() {
    let mut config = Config::default();
    config.commands.post_memes.platform.clear();
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "commands: postMemes: platform cannot be empty");
}

#[test]
fn trivia_chance_bounds() {
    let mut config = Config::default();
    config.commands.trivia.trivia_correct_chance = 1.0;
    assert!(validate(&config).is_ok());
    config.commands.trivia.trivia_correct_chance = 0.0;
    assert!(validate(&config).is_ok());
    config.commands.trivia.trivia_correct_chance = 1.0001;
    let err = validate(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "commands: trivia: triviaCorrectChance must be between 0 and 1"
    );
}

// -- whole pipeline ---------------------------------------------------------

#[test]
fn reports_only_the_first_failure() {
    let mut config = with_account("abc", "");
    config.gui.theme = Choice::Raw("Neon".into());
    config.commands.stream.order.clear();
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "gui: invalid theme: Neon");
}

#[test]
fn validation_is_deterministic() {
    let mut config = Config::default();
    config.commands.dig.delay = -1;
    config.commands.hunt.delay = -2;
    let first = validate(&config).unwrap_err();
    let second = validate(&config).unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "commands: dig: delay cannot be negative");
}

#[test]
fn validates_config_parsed_from_json() {
    let config: Config = serde_json::from_str(
        r#"{
            "accounts": [{ "token": "abc", "channelID": "" }]
        }"#,
    )
    .unwrap();
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "accounts[0]: channelID is required");
}

// -- membership -------------------------------------------------------------

#[test]
fn raw_member_names_are_accepted() {
    let mut config = Config::default();
    config.gui.theme = Choice::Raw("Dark".into());
    config.discord_status = Choice::Raw("dnd".into());
    config.commands.adventure.adventure_option = Choice::Raw("West".into());
    config.commands.fish.fish_location = vec![Choice::Raw("VertigoBeach".into())];
    assert!(validate(&config).is_ok());
}

#[test]
fn discord_status_match_is_case_sensitive() {
    let mut config = Config::default();
    config.discord_status = Choice::Raw("Online".into());
    let err = validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "invalid discordStatus: Online");
    assert_eq!(err.kind(), ViolationKind::Membership);
}

fn parse_commands(commands: &str) -> Config {
    serde_json::from_str(&format!(r#"{{ "commands": {commands} }}"#)).unwrap()
}

#[test]
fn adventure_option_requires_exact_name() {
    for bad in ["space", "", "SPACE"] {
        let config = parse_commands(&format!(r#"{{ "adventure": {{ "adventureOption": "{bad}" }} }}"#));
        let err = validate(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("commands: adventure: invalid adventure option: {bad}")
        );
        assert_eq!(err.value(), Some(bad));
    }

    let config = parse_commands(r#"{ "adventure": { "adventureOption": "Space" } }"#);
    assert!(validate(&config).is_ok());
}

#[test]
fn fish_location_requires_exact_name() {
    for bad in ["vertigobeach", "", "Vertigo Beach"] {
        let config = parse_commands(&format!(r#"{{ "fish": {{ "fishLocation": ["{bad}"] }} }}"#));
        let err = validate(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("commands: fish: invalid fish location: {bad}")
        );
        assert_eq!(err.kind(), ViolationKind::Membership);
    }

    let config = parse_commands(r#"{ "fish": { "fishLocation": ["VertigoBeach", "CampGuillermo"] } }"#);
    assert!(validate(&config).is_ok());
}
