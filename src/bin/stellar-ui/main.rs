//! Stellar device UI binary: runs the session over JSON IPC on stdin/stdout.

use anyhow::Result;
use clap::Parser;
use stellar_ui::config::AppConfig;
use stellar_ui::settings::SETTINGS_ITEMS;
use stellar_ui::{
    encode_account_id, init_tracing, ipc, FileSettingsStore, MemorySettingsStore, SettingsStore,
};

fn print_settings(store: &dyn SettingsStore, source: &str) {
    println!("Settings ({source}):");
    for item in SETTINGS_ITEMS {
        let state = if store.get(item.flag) { "on" } else { "off" };
        let marker = if item.is_dangerous() { " [warning]" } else { "" };
        println!("  {:<22} {state:<3}{marker}  {}", item.id.as_str(), item.text);
    }
}

fn main() -> Result<()> {
    let config = AppConfig::parse();
    init_tracing(&config);

    if let Some(raw_public_key) = config.print_address {
        println!("{}", encode_account_id(&raw_public_key));
        return Ok(());
    }

    let settings_file = config.resolved_settings_file()?;

    if config.list_settings {
        match settings_file {
            Some(path) => {
                let source = path.display().to_string();
                print_settings(&FileSettingsStore::open(path), &source);
            }
            None => print_settings(&MemorySettingsStore::new(), "in memory"),
        }
        return Ok(());
    }

    match settings_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "using settings file");
            ipc::run_ipc_mode(FileSettingsStore::open(path))
        }
        None => {
            tracing::info!("using in-memory settings");
            ipc::run_ipc_mode(MemorySettingsStore::new())
        }
    }
}
