//! Settings toggle handlers so the displayed switches and persisted flags change together.

use crate::display::{DisplayEngine, HomeAndSettings, Icon, InfoEntry, SwitchItem};
use crate::store::{SettingsStore, StoreError};

use super::items::{SettingClass, SettingId, SETTINGS_ITEMS, SETTINGS_SWITCHES_NB};

pub const APP_NAME: &str = "Stellar";
const DEVELOPER: &str = "overcat";

/// In-memory mirror of the switch values last shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsMenu {
    enabled: [bool; SETTINGS_SWITCHES_NB],
}

impl SettingsMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_enabled(&self, id: SettingId) -> bool {
        self.enabled[id.index()]
    }

    fn set(&mut self, id: SettingId, enabled: bool) {
        self.enabled[id.index()] = enabled;
    }

    fn content(&self, page: u8) -> HomeAndSettings {
        HomeAndSettings {
            app_name: APP_NAME,
            icon: Icon::Stellar,
            page,
            switches: SETTINGS_ITEMS
                .iter()
                .map(|spec| SwitchItem {
                    setting: spec.id,
                    text: spec.text,
                    sub_text: spec.sub_text,
                    enabled: self.is_enabled(spec.id),
                })
                .collect(),
            infos: vec![
                InfoEntry {
                    label: "Version",
                    content: env!("CARGO_PKG_VERSION").to_string(),
                },
                InfoEntry {
                    label: "Developer",
                    content: DEVELOPER.to_string(),
                },
            ],
        }
    }
}

/// A dangerous setting waiting on the warning dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingWarningChoice {
    pub setting: SettingId,
    /// Page the toggle came from; the menu returns here once the dialog closes.
    pub page: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Applied { enabled: bool },
    /// Declined warning; nothing written.
    Unchanged,
    /// The store refused the write and the switch was restored.
    RolledBack,
    AwaitingConfirmation(PendingWarningChoice),
}

pub struct SettingsActionContext<'a> {
    pub menu: &'a mut SettingsMenu,
    pub store: &'a mut dyn SettingsStore,
    pub display: &'a mut dyn DisplayEngine,
}

impl SettingsActionContext<'_> {
    pub fn render_home_and_settings(&mut self, page: u8) {
        for spec in SETTINGS_ITEMS {
            self.menu.set(spec.id, self.store.get(spec.flag));
        }
        let content = self.menu.content(page);
        self.display.show_switches_page(&content);
    }

    pub fn handle_toggle(&mut self, setting: SettingId, page: u8) -> ToggleOutcome {
        let spec = setting.spec();
        let persisted = self.store.get(spec.flag);
        match spec.class {
            SettingClass::Dangerous { warning } if !persisted => {
                tracing::info!(setting = setting.as_str(), page, "enable requested; awaiting warning confirmation");
                self.display.show_warning(&warning);
                ToggleOutcome::AwaitingConfirmation(PendingWarningChoice { setting, page })
            }
            SettingClass::Dangerous { .. } | SettingClass::Benign => {
                self.menu.set(setting, !persisted);
                match self.commit(setting) {
                    Ok(()) => {
                        tracing::info!(setting = setting.as_str(), enabled = !persisted, "setting toggled");
                        ToggleOutcome::Applied {
                            enabled: !persisted,
                        }
                    }
                    Err(()) => {
                        self.render_home_and_settings(page);
                        ToggleOutcome::RolledBack
                    }
                }
            }
        }
    }

    pub fn resolve_warning(
        &mut self,
        pending: PendingWarningChoice,
        confirmed: bool,
    ) -> ToggleOutcome {
        let PendingWarningChoice { setting, page } = pending;
        let outcome = if !confirmed {
            tracing::info!(setting = setting.as_str(), "warning declined");
            ToggleOutcome::Unchanged
        } else if self.store.get(setting.spec().flag) {
            self.menu.set(setting, true);
            ToggleOutcome::Applied { enabled: true }
        } else {
            self.menu.set(setting, true);
            match self.commit(setting) {
                Ok(()) => {
                    tracing::info!(setting = setting.as_str(), "warning accepted; setting enabled");
                    ToggleOutcome::Applied { enabled: true }
                }
                Err(()) => ToggleOutcome::RolledBack,
            }
        };
        self.render_home_and_settings(page);
        outcome
    }

    /// Persists the flip of `setting`, restoring the mirror from the store if the
    /// write fails.
    fn commit(&mut self, setting: SettingId) -> Result<(), ()> {
        let flag = setting.spec().flag;
        self.store.toggle(flag).map_err(|err: StoreError| {
            let actual = self.store.get(flag);
            tracing::warn!(
                setting = setting.as_str(),
                error = %err,
                restored = actual,
                "settings write failed; rolled back"
            );
            self.menu.set(setting, actual);
        })
    }
}
