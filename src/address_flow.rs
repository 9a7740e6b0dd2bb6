//! Address verification flow: show the device's address and record whether the
//! user says it matches.
//!
//! `Idle` -> `AwaitingUserConfirmation` -> `Idle`. Precondition failures are
//! reported to the originator as status words and never reach the screen.

use std::fmt;

use crate::address::{print_account_id, AddressError, DetailBuffer};
use crate::context::{GlobalRequestContext, RequestedOperation};
use crate::display::{AddressReview, DisplayEngine, Icon, ReturnTo, StatusKind};
use crate::status::{Reply, RequestOriginator, StatusWord};

pub const ADDRESS_REVIEW_TITLE: &str = "Verify Stellar address";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// No matching request outstanding, or another flow is still in progress.
    BadState,
    DisplayAddressFail(AddressError),
}

impl FlowError {
    #[must_use]
    pub fn status_word(&self) -> StatusWord {
        match self {
            Self::BadState => StatusWord::BAD_STATE,
            Self::DisplayAddressFail(_) => StatusWord::DISPLAY_ADDRESS_FAIL,
        }
    }
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadState => write!(f, "no address verification request outstanding"),
            Self::DisplayAddressFail(err) => write!(f, "address display failed: {err}"),
        }
    }
}

impl std::error::Error for FlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadState => None,
            Self::DisplayAddressFail(err) => Some(err),
        }
    }
}

/// Address review on screen, waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAddressReview {
    raw_public_key: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    AddressVerified,
    AddressRejected,
}

impl VerificationOutcome {
    #[must_use]
    pub fn status_kind(self) -> StatusKind {
        match self {
            Self::AddressVerified => StatusKind::AddressVerified,
            Self::AddressRejected => StatusKind::AddressRejected,
        }
    }
}

pub struct AddressFlowContext<'a> {
    pub context: &'a mut GlobalRequestContext,
    pub detail: &'a mut DetailBuffer,
    pub display: &'a mut dyn DisplayEngine,
    pub originator: &'a mut dyn RequestOriginator,
}

impl AddressFlowContext<'_> {
    pub fn begin_address_verification(&mut self) -> Result<PendingAddressReview, FlowError> {
        let request = match self.context.requested_operation() {
            RequestedOperation::VerifyAddress(request) if self.context.is_idle() => {
                Some(request.clone())
            }
            _ => None,
        };
        let Some(request) = request else {
            tracing::warn!(
                requested = ?self.context.requested_operation().kind(),
                flow_state = ?self.context.flow_state(),
                "address verification rejected: bad state"
            );
            return Err(self.reject(FlowError::BadState));
        };

        // Wipe first so an early return never leaves a previous address behind.
        self.detail.clear();
        if let Err(err) = print_account_id(&request.raw_public_key, self.detail, 0, 0) {
            tracing::warn!(error = %err, "address verification rejected: cannot format address");
            return Err(self.reject(FlowError::DisplayAddressFail(err)));
        }

        self.context.mark_awaiting_confirmation();
        self.display.show_address_review(&AddressReview {
            address: self.detail.as_str().to_string(),
            icon: Icon::Stellar,
            title: ADDRESS_REVIEW_TITLE,
        });
        tracing::info!("address review shown");
        Ok(PendingAddressReview {
            raw_public_key: request.raw_public_key,
        })
    }

    pub fn on_user_choice(
        &mut self,
        pending: PendingAddressReview,
        confirmed: bool,
    ) -> VerificationOutcome {
        let (outcome, reply) = if confirmed {
            (
                VerificationOutcome::AddressVerified,
                Reply::ok_with(pending.raw_public_key),
            )
        } else {
            (
                VerificationOutcome::AddressRejected,
                Reply::status(StatusWord::DENY),
            )
        };
        tracing::info!(?outcome, "address review answered");
        self.originator.reply(reply);
        self.display.show_status(outcome.status_kind(), ReturnTo::Home);
        self.detail.clear();
        self.context.clear();
        outcome
    }

    /// Reports `err` to the originator and forces the context back to `Idle`.
    pub(crate) fn reject(&mut self, err: FlowError) -> FlowError {
        self.context.clear();
        self.originator.reply(Reply::status(err.status_word()));
        err
    }
}
