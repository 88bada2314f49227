// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::ReferenceDate;
use crate::ui::date_picker;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    DatePicker(date_picker::Message),
    /// Hide the config warning banner.
    DismissWarning,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DOB_PICKER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Date the picker treats as "today". Defaults to the local date.
    pub today: Option<ReferenceDate>,
    /// Echo diagnostic events to stderr.
    pub verbose: bool,
}
