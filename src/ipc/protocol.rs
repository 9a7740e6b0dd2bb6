//! Typed JSON IPC protocol between the device session and its host.
//!
//! The host plays both the transport layer (sending requests, receiving status
//! words) and the user (answering dialogs). Messages are newline-delimited JSON.

use serde::{Deserialize, Serialize};

use crate::display::{AddressReview, HomeAndSettings, ReturnTo, StatusKind, WarningDialog};
use crate::settings::SettingId;
use crate::status::Reply;

// ============================================================================
// IPC Events (device → host)
// ============================================================================

/// Events emitted by the device session.
///
/// Serialized as JSON with an `"event"` tag field for type discrimination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum IpcEvent {
    /// Sent once on startup
    #[serde(rename = "ready")]
    Ready {
        /// Application name shown on the home page.
        app_name: String,
        /// Crate semantic version.
        version: String,
    },

    /// Home page and settings switches
    #[serde(rename = "home_and_settings")]
    HomeAndSettings(HomeAndSettings),

    /// Confirmation dialog before enabling a dangerous setting
    #[serde(rename = "warning")]
    Warning(WarningDialog),

    /// Address shown for the user to compare
    #[serde(rename = "address_review")]
    AddressReview(AddressReview),

    /// Final screen after an address review
    #[serde(rename = "review_status")]
    ReviewStatus {
        kind: StatusKind,
        return_to: ReturnTo,
    },

    /// Terminal response to a transport request
    #[serde(rename = "reply")]
    Reply {
        /// Status word, e.g. `0x9000`.
        status: String,
        /// Hex-encoded response payload.
        data: String,
    },

    /// Command could not be handled
    #[serde(rename = "error")]
    Error {
        message: String,
        /// Whether the session keeps running.
        recoverable: bool,
    },
}

impl From<Reply> for IpcEvent {
    fn from(reply: Reply) -> Self {
        Self::Reply {
            status: reply.status.to_string(),
            data: hex::encode(reply.data),
        }
    }
}

// ============================================================================
// IPC Commands (host → device)
// ============================================================================

/// Commands accepted from the host.
///
/// Deserialized from JSON with a `"cmd"` tag field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd")]
pub enum IpcCommand {
    /// User tapped a settings switch
    #[serde(rename = "toggle")]
    Toggle {
        setting: SettingId,
        /// Settings page the switch was on.
        #[serde(default)]
        page: u8,
    },

    /// User answered the dialog on screen
    #[serde(rename = "choice")]
    Choice { confirm: bool },

    /// Transport asks the device to show and confirm its address
    #[serde(rename = "verify_address")]
    VerifyAddress {
        /// Hex-encoded raw ed25519 public key.
        public_key: String,
    },

    /// Redraw the home/settings page
    #[serde(rename = "home")]
    Home {
        #[serde(default)]
        page: u8,
    },

    /// Exit the session
    #[serde(rename = "quit")]
    Quit,
}
