//! CLI flag schema so simulator startup behavior is explicit and discoverable.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use crate::address::RAW_PUBLIC_KEY_LEN;
use crate::store::default_settings_path;

#[derive(Debug, Parser, Clone)]
#[command(about = "Stellar device UI", author, version)]
pub struct AppConfig {
    /// Settings file holding the persisted switches
    #[arg(long = "settings-file", env = "STELLAR_UI_SETTINGS_FILE")]
    pub settings_file: Option<PathBuf>,

    /// Keep settings in memory only; nothing is written to disk
    #[arg(long = "ephemeral", default_value_t = false)]
    pub ephemeral: bool,

    /// Write JSON trace logs (see STELLAR_UI_TRACE_LOG)
    #[arg(long = "logs", default_value_t = false)]
    pub logs: bool,

    /// Disable all logging, overriding --logs
    #[arg(long = "no-logs", default_value_t = false)]
    pub no_logs: bool,

    /// Print the account id for a hex-encoded ed25519 public key and exit
    #[arg(long = "print-address", value_name = "HEX", value_parser = parse_public_key_hex)]
    pub print_address: Option<[u8; RAW_PUBLIC_KEY_LEN]>,

    /// Print the settings switches and their persisted values and exit
    #[arg(long = "list-settings", default_value_t = false)]
    pub list_settings: bool,
}

impl AppConfig {
    /// Settings file to use, or `None` when only an in-memory store applies.
    pub fn resolved_settings_file(&self) -> Result<Option<PathBuf>> {
        if self.ephemeral {
            return Ok(None);
        }
        match &self.settings_file {
            Some(path) => Ok(Some(path.clone())),
            None => default_settings_path()
                .map(Some)
                .ok_or_else(|| anyhow!("cannot resolve a settings path; pass --settings-file or --ephemeral")),
        }
    }
}

pub fn parse_public_key_hex(value: &str) -> Result<[u8; RAW_PUBLIC_KEY_LEN], String> {
    let bytes = hex::decode(value.trim()).map_err(|err| format!("invalid hex: {err}"))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| format!("expected {RAW_PUBLIC_KEY_LEN} bytes, got {len}"))
}
