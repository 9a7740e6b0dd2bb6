//! Stellar device UI core: the settings menu, address verification, and the
//! request context that gates which transport operation may run.
//!
//! Screens are described declaratively and handed to a [`display::DisplayEngine`];
//! replies go back to the transport through a [`status::RequestOriginator`].
//! The `stellar-ui` binary drives both over a JSON IPC channel.

pub mod address;
pub mod address_flow;
pub mod config;
pub mod context;
pub mod display;
pub mod ipc;
pub mod session;
pub mod settings;
pub mod status;
pub mod store;
mod telemetry;

#[cfg(test)]
mod test_support;

pub use address::{encode_account_id, print_account_id, AddressError, DetailBuffer};
pub use context::{GlobalRequestContext, OperationKind, RequestedOperation};
pub use session::{DeviceSession, PendingInteraction, SessionError};
pub use status::{Reply, RequestOriginator, StatusWord};
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};
pub use telemetry::{init_tracing, tracing_log_path};
