//! Request/flow context shared by the transport layer and the confirmation flows.
//!
//! There is exactly one display and one pending user decision per device, so a
//! session owns exactly one [`GlobalRequestContext`]. It is the only source of
//! truth for whether a request is outstanding and of what kind.

use std::fmt;

/// Kinds of operation the transport may ask the UI to service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    VerifyAddress,
    SignTransaction,
    SignHash,
    SignSorobanAuthorization,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VerifyAddress => "verify-address",
            Self::SignTransaction => "sign-transaction",
            Self::SignHash => "sign-hash",
            Self::SignSorobanAuthorization => "sign-soroban-authorization",
        };
        f.write_str(label)
    }
}

/// Payload of an address-verification command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressVerificationRequest {
    pub raw_public_key: Vec<u8>,
}

impl AddressVerificationRequest {
    #[must_use]
    pub fn new(raw_public_key: impl Into<Vec<u8>>) -> Self {
        Self {
            raw_public_key: raw_public_key.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestedOperation {
    #[default]
    None,
    VerifyAddress(AddressVerificationRequest),
    /// Operations the transport may mark pending but this UI never services.
    Other(OperationKind),
}

impl RequestedOperation {
    #[must_use]
    pub fn kind(&self) -> Option<OperationKind> {
        match self {
            Self::None => None,
            Self::VerifyAddress(_) => Some(OperationKind::VerifyAddress),
            Self::Other(kind) => Some(*kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    AwaitingUserConfirmation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalRequestContext {
    requested_operation: RequestedOperation,
    flow_state: FlowState,
}

impl GlobalRequestContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `operation` as the request the UI is authorized to service next.
    /// The flow state is left alone; a flow still in progress makes the next
    /// `begin_*` call fail its preconditions.
    pub fn set_pending(&mut self, operation: RequestedOperation) {
        tracing::debug!(operation = ?operation.kind(), "request marked pending");
        self.requested_operation = operation;
    }

    #[must_use]
    pub fn is_pending(&self, kind: OperationKind) -> bool {
        self.requested_operation.kind() == Some(kind)
    }

    /// Returns to `Idle` with nothing pending.
    pub fn clear(&mut self) {
        self.requested_operation = RequestedOperation::None;
        self.flow_state = FlowState::Idle;
    }

    #[must_use]
    pub fn requested_operation(&self) -> &RequestedOperation {
        &self.requested_operation
    }

    #[must_use]
    pub fn flow_state(&self) -> FlowState {
        self.flow_state
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.flow_state == FlowState::Idle
    }

    pub(crate) fn mark_awaiting_confirmation(&mut self) {
        self.flow_state = FlowState::AwaitingUserConfirmation;
    }
}
