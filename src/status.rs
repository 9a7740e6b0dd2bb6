//! Status words and reply payloads handed back to whoever originated a request.

use std::fmt;

/// ISO 7816 status word reported to the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusWord(pub u16);

impl StatusWord {
    pub const OK: Self = Self(0x9000);
    pub const DENY: Self = Self(0x6985);
    pub const DISPLAY_ADDRESS_FAIL: Self = Self(0xB002);
    pub const BAD_STATE: Self = Self(0xB007);

    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::OK
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// A terminal response to an outstanding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusWord,
    pub data: Vec<u8>,
}

impl Reply {
    #[must_use]
    pub fn status(status: StatusWord) -> Self {
        Self {
            status,
            data: Vec::new(),
        }
    }

    #[must_use]
    pub fn ok_with(data: Vec<u8>) -> Self {
        Self {
            status: StatusWord::OK,
            data,
        }
    }
}

/// The party that issued a request and is waiting for its final status.
pub trait RequestOriginator {
    fn reply(&mut self, reply: Reply);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_word_displays_as_padded_hex() {
        assert_eq!(StatusWord::OK.to_string(), "0x9000");
        assert_eq!(StatusWord::BAD_STATE.to_string(), "0xB007");
        assert_eq!(StatusWord(0x10).to_string(), "0x0010");
    }

    #[test]
    fn only_ok_counts_as_success() {
        assert!(StatusWord::OK.is_success());
        assert!(!StatusWord::DENY.is_success());
        assert!(!StatusWord::DISPLAY_ADDRESS_FAIL.is_success());
    }
}
