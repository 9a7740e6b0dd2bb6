//! Volatile store for `--ephemeral` runs and tests, with write-failure injection.

use super::{SettingFlag, SettingsStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    flags: u8,
    reject_writes: bool,
    writes: usize,
}

impl MemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_enabled(flags: &[SettingFlag]) -> Self {
        Self {
            flags: flags.iter().fold(0, |acc, flag| acc | flag.mask()),
            ..Self::default()
        }
    }

    /// Makes every subsequent `toggle` fail until switched back off.
    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Number of successful writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    #[must_use]
    pub fn raw_flags(&self) -> u8 {
        self.flags
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, flag: SettingFlag) -> bool {
        self.flags & flag.mask() != 0
    }

    fn toggle(&mut self, flag: SettingFlag) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError::WriteRejected);
        }
        self.flags ^= flag.mask();
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_only_the_requested_flag() {
        let mut store = MemorySettingsStore::with_enabled(&[SettingFlag::SequenceNumber]);
        store.toggle(SettingFlag::HashSigning).expect("write");
        assert!(store.get(SettingFlag::HashSigning));
        assert!(store.get(SettingFlag::SequenceNumber));
        assert!(!store.get(SettingFlag::UnverifiedContracts));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn rejected_write_leaves_flags_untouched() {
        let mut store = MemorySettingsStore::new();
        store.set_reject_writes(true);
        assert!(matches!(
            store.toggle(SettingFlag::HashSigning),
            Err(StoreError::WriteRejected)
        ));
        assert_eq!(store.raw_flags(), 0);
        assert_eq!(store.write_count(), 0);
    }
}
