//! Persistent settings flags that survive power loss.
//!
//! Flags are bits of a single settings byte, mirroring the device's NVM layout.
//! The store is the source of truth; the settings menu only mirrors it.

mod file;
mod memory;

use std::fmt;
use std::io;
use std::path::PathBuf;

pub use file::{default_settings_path, FileSettingsStore};
pub use memory::MemorySettingsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingFlag {
    HashSigning,
    SequenceNumber,
    UnverifiedContracts,
}

pub const ALL_FLAGS: &[SettingFlag] = &[
    SettingFlag::HashSigning,
    SettingFlag::SequenceNumber,
    SettingFlag::UnverifiedContracts,
];

impl SettingFlag {
    #[must_use]
    pub const fn mask(self) -> u8 {
        match self {
            Self::HashSigning => 1 << 0,
            Self::SequenceNumber => 1 << 1,
            Self::UnverifiedContracts => 1 << 2,
        }
    }

    /// Key used for this flag in the settings file.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HashSigning => "hash_signing",
            Self::SequenceNumber => "sequence_number",
            Self::UnverifiedContracts => "unverified_contracts",
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Serialize(String),
    WriteRejected,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "settings write to {} failed: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "settings serialization failed: {err}"),
            Self::WriteRejected => write!(f, "settings write rejected by storage"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize(_) | Self::WriteRejected => None,
        }
    }
}

pub trait SettingsStore {
    fn get(&self, flag: SettingFlag) -> bool;

    /// Flips `flag` and persists the result. On error the stored value is unchanged.
    fn toggle(&mut self, flag: SettingFlag) -> Result<(), StoreError>;
}
