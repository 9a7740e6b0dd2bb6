//! Command dispatch from the host into the device session.

use crate::context::{AddressVerificationRequest, RequestedOperation};
use crate::display::{
    AddressReview, DisplayEngine, HomeAndSettings, ReturnTo, StatusKind, WarningDialog,
};
use crate::settings::SettingId;
use crate::status::{Reply, RequestOriginator};
use crate::store::SettingsStore;

use super::event_sink::send_event;
use super::protocol::{IpcCommand, IpcEvent};
use super::IpcState;

/// Display engine that forwards every screen to the host as an event.
#[derive(Debug, Default)]
pub struct IpcDisplay;

impl DisplayEngine for IpcDisplay {
    fn show_switches_page(&mut self, content: &HomeAndSettings) {
        send_event(&IpcEvent::HomeAndSettings(content.clone()));
    }

    fn show_warning(&mut self, dialog: &WarningDialog) {
        send_event(&IpcEvent::Warning(*dialog));
    }

    fn show_address_review(&mut self, review: &AddressReview) {
        send_event(&IpcEvent::AddressReview(review.clone()));
    }

    fn show_status(&mut self, kind: StatusKind, return_to: ReturnTo) {
        send_event(&IpcEvent::ReviewStatus { kind, return_to });
    }
}

/// The host, seen as the originator of transport requests.
#[derive(Debug, Default)]
pub(super) struct IpcOriginator;

impl RequestOriginator for IpcOriginator {
    fn reply(&mut self, reply: Reply) {
        send_event(&IpcEvent::from(reply));
    }
}

fn send_recoverable_error(message: String) {
    send_event(&IpcEvent::Error {
        message,
        recoverable: true,
    });
}

pub(super) fn handle_command<S: SettingsStore>(state: &mut IpcState<S>, cmd: IpcCommand) {
    match cmd {
        IpcCommand::Toggle { setting, page } => handle_toggle(state, setting, page),
        IpcCommand::Choice { confirm } => handle_choice(state, confirm),
        IpcCommand::VerifyAddress { public_key } => handle_verify_address(state, &public_key),
        IpcCommand::Home { page } => {
            if state.session.pending_interaction().is_some() {
                send_recoverable_error("a dialog is on screen; answer it first".to_string());
            } else {
                state.session.render_home_and_settings(page);
            }
        }
        IpcCommand::Quit => {
            state.exit_requested = true;
        }
    }
}

fn handle_toggle<S: SettingsStore>(state: &mut IpcState<S>, setting: SettingId, page: u8) {
    if let Err(err) = state.session.handle_toggle(setting, page) {
        tracing::debug!(setting = setting.as_str(), error = %err, "toggle ignored");
        send_recoverable_error(format!("toggle ignored: {err}"));
    }
}

fn handle_choice<S: SettingsStore>(state: &mut IpcState<S>, confirm: bool) {
    let mut originator = IpcOriginator;
    if let Err(err) = state.session.resolve(confirm, &mut originator) {
        send_recoverable_error(format!("choice ignored: {err}"));
    }
}

fn handle_verify_address<S: SettingsStore>(state: &mut IpcState<S>, public_key: &str) {
    let raw_public_key = match hex::decode(public_key.trim()) {
        Ok(bytes) => bytes,
        Err(err) => {
            send_recoverable_error(format!("invalid public key hex: {err}"));
            return;
        }
    };
    state
        .session
        .set_pending(RequestedOperation::VerifyAddress(
            AddressVerificationRequest::new(raw_public_key),
        ));
    let mut originator = IpcOriginator;
    if let Err(err) = state.session.begin_address_verification(&mut originator) {
        // The status word already went out through the originator.
        tracing::debug!(error = %err, "address verification not started");
    }
}
