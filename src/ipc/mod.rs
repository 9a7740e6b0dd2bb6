//! JSON IPC mode: the host drives the device session over stdin/stdout.
//!
//! Commands arrive as newline-delimited JSON on stdin and are funneled through a
//! channel into a single-threaded loop that owns the [`DeviceSession`]. Every
//! screen the session draws and every reply it produces goes back out on stdout
//! as one JSON event per line.

mod event_sink;
pub mod protocol;
mod router;
mod stdin_reader;
#[cfg(any(test, feature = "mutants"))]
mod test_support;

use anyhow::Result;
use crossbeam_channel::Receiver;

use crate::session::DeviceSession;
use crate::settings::APP_NAME;
use crate::store::SettingsStore;

use event_sink::send_event;
use protocol::{IpcCommand, IpcEvent};
pub use router::IpcDisplay;

pub(crate) struct IpcState<S> {
    pub(crate) session: DeviceSession<S, IpcDisplay>,
    pub(crate) exit_requested: bool,
}

impl<S: SettingsStore> IpcState<S> {
    pub(crate) fn new(store: S) -> Self {
        Self {
            session: DeviceSession::new(store, IpcDisplay),
            exit_requested: false,
        }
    }

    fn emit_ready(&self) {
        send_event(&IpcEvent::Ready {
            app_name: APP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        });
    }
}

/// Runs the session until the host sends `quit` or closes stdin.
pub fn run_ipc_mode<S: SettingsStore>(store: S) -> Result<()> {
    tracing::info!("starting JSON IPC mode");

    let mut state = IpcState::new(store);
    state.emit_ready();
    state.session.start();

    let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded();
    #[cfg(any(test, feature = "mutants"))]
    {
        drop(cmd_tx);
        run_ipc_loop(&mut state, &cmd_rx)
    }
    #[cfg(not(any(test, feature = "mutants")))]
    {
        let _stdin_handle = stdin_reader::spawn_stdin_reader(cmd_tx);
        run_ipc_loop(&mut state, &cmd_rx)
    }
}

pub(crate) fn run_ipc_loop<S: SettingsStore>(
    state: &mut IpcState<S>,
    cmd_rx: &Receiver<IpcCommand>,
) -> Result<()> {
    let mut handled: u64 = 0;
    while let Ok(cmd) = cmd_rx.recv() {
        handled += 1;
        tracing::debug!(command = ?cmd, "ipc command");
        router::handle_command(state, cmd);
        if state.exit_requested {
            tracing::info!(handled, "quit requested, leaving IPC loop");
            return Ok(());
        }
    }
    tracing::info!(handled, "command channel closed, leaving IPC loop");
    Ok(())
}
