use super::*;
use crate::context::{AddressVerificationRequest, FlowState, OperationKind};
use crate::display::{ReturnTo, StatusKind};
use crate::status::{Reply, StatusWord};
use crate::store::{MemorySettingsStore, SettingFlag};
use crate::test_support::{RecordingDisplay, RecordingOriginator, Screen};

type TestSession = DeviceSession<MemorySettingsStore, RecordingDisplay>;

fn session_with(flags: &[SettingFlag]) -> TestSession {
    let mut session = DeviceSession::new(
        MemorySettingsStore::with_enabled(flags),
        RecordingDisplay::new(),
    );
    session.start();
    session
}

fn verify_request(key: &[u8]) -> RequestedOperation {
    RequestedOperation::VerifyAddress(AddressVerificationRequest::new(key))
}

#[test]
fn start_shows_home_page() {
    let session = session_with(&[]);
    let content = session.display().last_switches().expect("home shown");
    assert_eq!(content.page, INIT_HOME_PAGE);
    assert!(session.pending_interaction().is_none());
}

#[test]
fn scenario_a_verified_address_returns_context_to_idle() {
    let mut session = session_with(&[]);
    let mut originator = RecordingOriginator::new();
    session.set_pending(verify_request(&[0u8; 32]));

    session
        .begin_address_verification(&mut originator)
        .expect("review shown");
    assert_eq!(
        session.context().flow_state(),
        FlowState::AwaitingUserConfirmation
    );
    assert!(matches!(
        session.pending_interaction(),
        Some(PendingInteraction::AddressReview(_))
    ));

    let outcome = session.resolve(true, &mut originator).expect("pending");
    assert_eq!(
        outcome,
        InteractionOutcome::Address(VerificationOutcome::AddressVerified)
    );
    assert_eq!(originator.replies, vec![Reply::ok_with(vec![0u8; 32])]);
    assert_eq!(session.context(), &GlobalRequestContext::new());

    let screens = &session.display().screens;
    assert!(matches!(
        screens[screens.len() - 2],
        Screen::Status(StatusKind::AddressVerified, ReturnTo::Home)
    ));
    assert!(matches!(
        &screens[screens.len() - 1],
        Screen::Switches(content) if content.page == INIT_HOME_PAGE
    ));
}

#[test]
fn scenario_b_begin_without_request_is_bad_state() {
    let mut session = session_with(&[]);
    let mut originator = RecordingOriginator::new();
    let screens_before = session.display().screens.len();

    let err = session
        .begin_address_verification(&mut originator)
        .unwrap_err();
    assert_eq!(err, FlowError::BadState);
    assert_eq!(originator.replies, vec![Reply::status(StatusWord::BAD_STATE)]);
    assert!(session.context().is_idle());
    assert_eq!(session.display().screens.len(), screens_before);
}

#[test]
fn scenario_c_declined_hash_signing_returns_to_originating_page() {
    let mut session = session_with(&[]);
    let mut originator = RecordingOriginator::new();

    let outcome = session
        .handle_toggle(SettingId::HashSigning, 2)
        .expect("menu idle");
    assert!(matches!(outcome, ToggleOutcome::AwaitingConfirmation(_)));
    assert!(matches!(session.display().last(), Some(Screen::Warning(_))));

    let outcome = session.resolve(false, &mut originator).expect("pending");
    assert_eq!(outcome, InteractionOutcome::Setting(ToggleOutcome::Unchanged));
    assert!(!session.menu().is_enabled(SettingId::HashSigning));
    assert!(!session.store().get(SettingFlag::HashSigning));
    assert_eq!(session.store().write_count(), 0);
    assert_eq!(session.display().last_switches().map(|c| c.page), Some(2));
    assert!(originator.replies.is_empty());
}

#[test]
fn scenario_d_enabled_hash_signing_turns_off_without_dialog() {
    let mut session = session_with(&[SettingFlag::HashSigning]);
    let outcome = session
        .handle_toggle(SettingId::HashSigning, 1)
        .expect("menu idle");
    assert_eq!(outcome, ToggleOutcome::Applied { enabled: false });
    assert!(!session.store().get(SettingFlag::HashSigning));
    assert!(!session.menu().is_enabled(SettingId::HashSigning));
    assert_eq!(session.display().warnings_shown(), 0);
    assert!(session.pending_interaction().is_none());
}

#[test]
fn begin_twice_without_new_request_is_bad_state() {
    let mut session = session_with(&[]);
    let mut originator = RecordingOriginator::new();
    session.set_pending(verify_request(&[3u8; 32]));
    session
        .begin_address_verification(&mut originator)
        .expect("first");
    let err = session
        .begin_address_verification(&mut originator)
        .unwrap_err();
    assert_eq!(err, FlowError::BadState);
    assert_eq!(originator.replies, vec![Reply::status(StatusWord::BAD_STATE)]);
}

#[test]
fn verify_request_during_warning_is_rejected() {
    let mut session = session_with(&[]);
    let mut originator = RecordingOriginator::new();
    let _ = session.handle_toggle(SettingId::UnverifiedContracts, 0);

    session.set_pending(verify_request(&[3u8; 32]));
    let err = session
        .begin_address_verification(&mut originator)
        .unwrap_err();
    assert_eq!(err, FlowError::BadState);
    assert!(!session.context().is_pending(OperationKind::VerifyAddress));
    assert!(matches!(
        session.pending_interaction(),
        Some(PendingInteraction::Warning(_))
    ));

    let outcome = session.resolve(true, &mut originator).expect("warning");
    assert_eq!(
        outcome,
        InteractionOutcome::Setting(ToggleOutcome::Applied { enabled: true })
    );
    assert!(session.store().get(SettingFlag::UnverifiedContracts));
}

#[test]
fn toggle_during_address_review_is_refused() {
    let mut session = session_with(&[]);
    let mut originator = RecordingOriginator::new();
    session.set_pending(verify_request(&[3u8; 32]));
    session
        .begin_address_verification(&mut originator)
        .expect("review shown");
    assert_eq!(
        session.handle_toggle(SettingId::SequenceNumber, 0),
        Err(SessionError::InteractionInProgress)
    );
    assert!(!session.store().get(SettingFlag::SequenceNumber));
}

#[test]
fn resolve_without_pending_interaction_is_an_error() {
    let mut session = session_with(&[]);
    let mut originator = RecordingOriginator::new();
    assert_eq!(
        session.resolve(true, &mut originator),
        Err(SessionError::NoPendingInteraction)
    );
}

#[test]
fn storage_failure_on_benign_toggle_is_not_reported_to_originator() {
    let mut session = session_with(&[]);
    session.store_mut().set_reject_writes(true);
    let outcome = session
        .handle_toggle(SettingId::SequenceNumber, 1)
        .expect("menu idle");
    assert_eq!(outcome, ToggleOutcome::RolledBack);
    assert!(!session.menu().is_enabled(SettingId::SequenceNumber));
    assert_eq!(session.display().last_switches().map(|c| c.page), Some(1));
}
