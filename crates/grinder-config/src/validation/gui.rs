//! GUI section validation.

use grinder_common::ValidationError;

use crate::schema::GuiConfig;

use super::helpers::validate_choice;

pub(crate) fn validate_gui(gui: &GuiConfig) -> Result<(), ValidationError> {
    validate_choice("theme", "theme", &gui.theme)
}
