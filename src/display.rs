//! Declarative content handed to the display engine.
//!
//! The engine renders one interaction at a time. It does not call back into the
//! core; the user's decision comes back to the owning session as a separate
//! event and is matched against the session's pending interaction.

use serde::Serialize;

use crate::settings::SettingId;

/// Page index of the home screen in the home/settings carousel.
pub const INIT_HOME_PAGE: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Stellar,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchItem {
    pub setting: SettingId,
    pub text: &'static str,
    pub sub_text: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoEntry {
    pub label: &'static str,
    pub content: String,
}

/// Home screen plus the settings switches, shown at `page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeAndSettings {
    pub app_name: &'static str,
    pub icon: Icon,
    pub page: u8,
    pub switches: Vec<SwitchItem>,
    pub infos: Vec<InfoEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WarningDialog {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressReview {
    pub address: String,
    pub icon: Icon,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    AddressVerified,
    AddressRejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnTo {
    Home,
}

pub trait DisplayEngine {
    fn show_switches_page(&mut self, content: &HomeAndSettings);
    fn show_warning(&mut self, dialog: &WarningDialog);
    fn show_address_review(&mut self, review: &AddressReview);
    fn show_status(&mut self, kind: StatusKind, return_to: ReturnTo);
}
