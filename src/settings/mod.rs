//! Settings menu wiring so switch rendering and toggle actions evolve together.

mod controller;
mod items;

pub use controller::{
    PendingWarningChoice, SettingsActionContext, SettingsMenu, ToggleOutcome, APP_NAME,
};
pub use items::{SettingClass, SettingId, SettingSpec, SETTINGS_ITEMS, SETTINGS_SWITCHES_NB};
