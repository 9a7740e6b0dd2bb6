//! Recording doubles for the display engine and request originator.

use crate::display::{
    AddressReview, DisplayEngine, HomeAndSettings, ReturnTo, StatusKind, WarningDialog,
};
use crate::status::{Reply, RequestOriginator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Screen {
    Switches(HomeAndSettings),
    Warning(WarningDialog),
    AddressReview(AddressReview),
    Status(StatusKind, ReturnTo),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingDisplay {
    pub(crate) screens: Vec<Screen>,
}

impl RecordingDisplay {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn last(&self) -> Option<&Screen> {
        self.screens.last()
    }

    pub(crate) fn last_switches(&self) -> Option<&HomeAndSettings> {
        self.screens.iter().rev().find_map(|screen| match screen {
            Screen::Switches(content) => Some(content),
            _ => None,
        })
    }

    pub(crate) fn warnings_shown(&self) -> usize {
        self.screens
            .iter()
            .filter(|screen| matches!(screen, Screen::Warning(_)))
            .count()
    }
}

impl DisplayEngine for RecordingDisplay {
    fn show_switches_page(&mut self, content: &HomeAndSettings) {
        self.screens.push(Screen::Switches(content.clone()));
    }

    fn show_warning(&mut self, dialog: &WarningDialog) {
        self.screens.push(Screen::Warning(*dialog));
    }

    fn show_address_review(&mut self, review: &AddressReview) {
        self.screens.push(Screen::AddressReview(review.clone()));
    }

    fn show_status(&mut self, kind: StatusKind, return_to: ReturnTo) {
        self.screens.push(Screen::Status(kind, return_to));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingOriginator {
    pub(crate) replies: Vec<Reply>,
}

impl RecordingOriginator {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl RequestOriginator for RecordingOriginator {
    fn reply(&mut self, reply: Reply) {
        self.replies.push(reply);
    }
}
