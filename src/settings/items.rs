//! Settings item metadata so menus render and dispatch toggles from one schema.

use serde::{Deserialize, Serialize};

use crate::display::{Icon, WarningDialog};
use crate::store::SettingFlag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingId {
    UnverifiedContracts,
    HashSigning,
    SequenceNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingClass {
    /// Toggles immediately in both directions.
    Benign,
    /// Enabling needs the user to accept `warning`; disabling never does.
    Dangerous { warning: WarningDialog },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingSpec {
    pub id: SettingId,
    pub text: &'static str,
    pub sub_text: &'static str,
    pub flag: SettingFlag,
    pub class: SettingClass,
}

impl SettingSpec {
    #[must_use]
    pub fn is_dangerous(&self) -> bool {
        matches!(self.class, SettingClass::Dangerous { .. })
    }
}

const CONFIRM_LABEL: &str = "I understand, confirm";
const CANCEL_LABEL: &str = "Cancel";

/// Menu order matches the switch list on the device.
pub const SETTINGS_ITEMS: &[SettingSpec] = &[
    SettingSpec {
        id: SettingId::UnverifiedContracts,
        text: "Custom contracts",
        sub_text: "Allow unverified contract",
        flag: SettingFlag::UnverifiedContracts,
        class: SettingClass::Dangerous {
            warning: WarningDialog {
                icon: Icon::Warning,
                title: "Allow unverified contracts",
                body: "Unverified contracts may not be displayed in a readable form on your \
                       Ledger, so you need to examine them very carefully before sign them.",
                confirm_label: CONFIRM_LABEL,
                cancel_label: CANCEL_LABEL,
            },
        },
    },
    SettingSpec {
        id: SettingId::HashSigning,
        text: "Hash signing",
        sub_text: "Enable hash signing",
        flag: SettingFlag::HashSigning,
        class: SettingClass::Dangerous {
            warning: WarningDialog {
                icon: Icon::Warning,
                title: "Enable Hash Signing",
                body: "Signing hashes is a dangerous operation that can put your wallet at \
                       serious risk. Only enable this feature if you are sure you know what \
                       you are doing.",
                confirm_label: CONFIRM_LABEL,
                cancel_label: CANCEL_LABEL,
            },
        },
    },
    SettingSpec {
        id: SettingId::SequenceNumber,
        text: "Sequence number",
        sub_text: "Display sequence in\ntransactions",
        flag: SettingFlag::SequenceNumber,
        class: SettingClass::Benign,
    },
];

pub const SETTINGS_SWITCHES_NB: usize = 3;

impl SettingId {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::UnverifiedContracts => 0,
            Self::HashSigning => 1,
            Self::SequenceNumber => 2,
        }
    }

    #[must_use]
    pub fn spec(self) -> &'static SettingSpec {
        &SETTINGS_ITEMS[self.index()]
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.spec().flag.name()
    }
}
