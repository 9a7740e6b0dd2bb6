use std::io::{self, BufRead};
use std::thread;

use crossbeam_channel::Sender;

use super::event_sink::send_event;
use super::protocol::{IpcCommand, IpcEvent};

#[cfg_attr(any(test, feature = "mutants"), allow(dead_code))]
pub(super) fn spawn_stdin_reader(tx: Sender<IpcCommand>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = io::stdin();
        let stdin_lock = stdin.lock();

        for line in stdin_lock.lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };

            match parse_command_line(&line) {
                Some(Ok(cmd)) => {
                    if tx.send(cmd).is_err() {
                        break; // Session loop has exited
                    }
                }
                Some(Err(message)) => {
                    send_event(&IpcEvent::Error {
                        message,
                        recoverable: true,
                    });
                }
                None => {}
            }
        }

        tracing::debug!("stdin reader thread exiting");
    })
}

/// Blank lines are skipped; anything else must be a JSON command.
pub(super) fn parse_command_line(line: &str) -> Option<Result<IpcCommand, String>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(
        serde_json::from_str::<IpcCommand>(trimmed)
            .map_err(|err| format!("Invalid command: {err}")),
    )
}
