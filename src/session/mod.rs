//! Device session: owns the request context, the settings mirror, and the one
//! interaction that may be waiting on the user.
//!
//! Every user-facing decision is two-phase. Starting it stores a
//! [`PendingInteraction`]; the user's answer later arrives through
//! [`DeviceSession::resolve`], which consumes it.

use std::fmt;

use crate::address::DetailBuffer;
use crate::address_flow::{
    AddressFlowContext, FlowError, PendingAddressReview, VerificationOutcome,
};
use crate::context::{GlobalRequestContext, RequestedOperation};
use crate::display::{DisplayEngine, INIT_HOME_PAGE};
use crate::settings::{
    PendingWarningChoice, SettingId, SettingsActionContext, SettingsMenu, ToggleOutcome,
};
use crate::status::RequestOriginator;
use crate::store::SettingsStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingInteraction {
    Warning(PendingWarningChoice),
    AddressReview(PendingAddressReview),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    Setting(ToggleOutcome),
    Address(VerificationOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A decision arrived with nothing on screen to answer.
    NoPendingInteraction,
    /// Input for the menu arrived while a dialog owns the screen.
    InteractionInProgress,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPendingInteraction => write!(f, "no interaction is waiting for a decision"),
            Self::InteractionInProgress => write!(f, "another interaction is on screen"),
        }
    }
}

impl std::error::Error for SessionError {}

pub struct DeviceSession<S, D> {
    context: GlobalRequestContext,
    menu: SettingsMenu,
    detail: DetailBuffer,
    store: S,
    display: D,
    pending: Option<PendingInteraction>,
}

impl<S: SettingsStore, D: DisplayEngine> DeviceSession<S, D> {
    pub fn new(store: S, display: D) -> Self {
        Self {
            context: GlobalRequestContext::new(),
            menu: SettingsMenu::new(),
            detail: DetailBuffer::new(),
            store,
            display,
            pending: None,
        }
    }

    /// Shows the home page.
    pub fn start(&mut self) {
        self.render_home_and_settings(INIT_HOME_PAGE);
    }

    pub fn render_home_and_settings(&mut self, page: u8) {
        self.settings().render_home_and_settings(page);
    }

    pub fn handle_toggle(
        &mut self,
        setting: SettingId,
        page: u8,
    ) -> Result<ToggleOutcome, SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::InteractionInProgress);
        }
        let outcome = self.settings().handle_toggle(setting, page);
        if let ToggleOutcome::AwaitingConfirmation(choice) = outcome {
            self.pending = Some(PendingInteraction::Warning(choice));
        }
        Ok(outcome)
    }

    /// Transport hook: authorize the next operation.
    pub fn set_pending(&mut self, operation: RequestedOperation) {
        self.context.set_pending(operation);
    }

    pub fn begin_address_verification(
        &mut self,
        originator: &mut dyn RequestOriginator,
    ) -> Result<(), FlowError> {
        let interaction_on_screen = self.pending.is_some();
        let mut flow = AddressFlowContext {
            context: &mut self.context,
            detail: &mut self.detail,
            display: &mut self.display,
            originator,
        };
        if interaction_on_screen {
            tracing::warn!("address verification rejected: another interaction is on screen");
            return Err(flow.reject(FlowError::BadState));
        }
        let review = flow.begin_address_verification()?;
        self.pending = Some(PendingInteraction::AddressReview(review));
        Ok(())
    }

    /// Delivers the user's answer to whatever is on screen.
    pub fn resolve(
        &mut self,
        confirmed: bool,
        originator: &mut dyn RequestOriginator,
    ) -> Result<InteractionOutcome, SessionError> {
        let pending = self
            .pending
            .take()
            .ok_or(SessionError::NoPendingInteraction)?;
        let outcome = match pending {
            PendingInteraction::Warning(choice) => {
                InteractionOutcome::Setting(self.settings().resolve_warning(choice, confirmed))
            }
            PendingInteraction::AddressReview(review) => {
                let outcome = AddressFlowContext {
                    context: &mut self.context,
                    detail: &mut self.detail,
                    display: &mut self.display,
                    originator,
                }
                .on_user_choice(review, confirmed);
                self.render_home_and_settings(INIT_HOME_PAGE);
                InteractionOutcome::Address(outcome)
            }
        };
        Ok(outcome)
    }

    #[must_use]
    pub fn context(&self) -> &GlobalRequestContext {
        &self.context
    }

    #[must_use]
    pub fn menu(&self) -> &SettingsMenu {
        &self.menu
    }

    #[must_use]
    pub fn pending_interaction(&self) -> Option<&PendingInteraction> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    fn settings(&mut self) -> SettingsActionContext<'_> {
        SettingsActionContext {
            menu: &mut self.menu,
            store: &mut self.store,
            display: &mut self.display,
        }
    }
}

#[cfg(test)]
mod tests;
