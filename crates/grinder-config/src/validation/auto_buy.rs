//! Auto-buy validation: amounts only matter for enabled items.

use grinder_common::ValidationError;

use crate::schema::{AutoBuyConfig, AutoBuyItem};

use super::helpers::{require_non_negative_when, Annotate};

pub(crate) fn validate_auto_buy(auto_buy: &AutoBuyConfig) -> Result<(), ValidationError> {
    validate_item(&auto_buy.hunting_rifle).in_section("huntingRifle")?;
    validate_item(&auto_buy.shovel).in_section("shovel")?;
    validate_item(&auto_buy.life_savers).in_section("lifeSavers")?;
    Ok(())
}

fn validate_item(item: &AutoBuyItem) -> Result<(), ValidationError> {
    require_non_negative_when(
        item.state,
        "amount",
        item.amount,
        "amount must be >= 0 when enabled",
    )
}
