//! Stellar account-id ("G...") encoding into fixed-capacity display buffers.

use std::fmt;

use data_encoding::BASE32_NOPAD;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Capacity of the detail buffer the address review renders from.
pub const DETAIL_VALUE_MAX_LENGTH: usize = 89;
pub const RAW_PUBLIC_KEY_LEN: usize = 32;
/// Length of an encoded account id: base32 of version byte, key, and checksum.
pub const ACCOUNT_ID_LEN: usize = 56;

const VERSION_BYTE_ACCOUNT_ID: u8 = 6 << 3;
const ABBREVIATION_SEPARATOR: &str = "..";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    MalformedKey { len: usize },
    BufferTooSmall { needed: usize, capacity: usize },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedKey { len } => write!(
                f,
                "malformed public key: expected {RAW_PUBLIC_KEY_LEN} bytes, got {len}"
            ),
            Self::BufferTooSmall { needed, capacity } => write!(
                f,
                "address needs {needed} bytes but display buffer holds {capacity}"
            ),
        }
    }
}

impl std::error::Error for AddressError {}

/// Fixed-capacity text buffer for values shown on the device.
///
/// Contents are wiped on [`DetailBuffer::clear`] and on drop so a previous
/// request's address never survives into a later one.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DetailBuffer<const N: usize = DETAIL_VALUE_MAX_LENGTH> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> DetailBuffer<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: [0u8; N],
            len: 0,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.zeroize();
    }

    /// Raw backing storage, including bytes past `len`.
    #[must_use]
    pub fn raw(&self) -> &[u8; N] {
        &self.bytes
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    fn set(&mut self, text: &str) -> Result<(), AddressError> {
        let needed = text.len();
        if needed > N {
            return Err(AddressError::BufferTooSmall {
                needed,
                capacity: N,
            });
        }
        self.bytes[..needed].copy_from_slice(text.as_bytes());
        self.len = needed;
        Ok(())
    }
}

impl<const N: usize> Default for DetailBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for DetailBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetailBuffer")
            .field("capacity", &N)
            .field("len", &self.len)
            .finish()
    }
}

/// CRC16-XModem (polynomial 0x1021, initial value 0).
#[must_use]
pub fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= u16::from(*byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Encodes a raw ed25519 public key as a Stellar account id.
#[must_use]
pub fn encode_account_id(raw_public_key: &[u8; RAW_PUBLIC_KEY_LEN]) -> String {
    let mut payload = [0u8; 1 + RAW_PUBLIC_KEY_LEN + 2];
    payload[0] = VERSION_BYTE_ACCOUNT_ID;
    payload[1..=RAW_PUBLIC_KEY_LEN].copy_from_slice(raw_public_key);
    let checksum = crc16_xmodem(&payload[..=RAW_PUBLIC_KEY_LEN]);
    payload[RAW_PUBLIC_KEY_LEN + 1..].copy_from_slice(&checksum.to_le_bytes());
    BASE32_NOPAD.encode(&payload)
}

/// Writes the account id for `raw_public_key` into `out`.
///
/// With both `num_chars_l` and `num_chars_r` non-zero the id is abbreviated to
/// its first and last characters joined by `..`. `out` is only modified on
/// success.
pub fn print_account_id<const N: usize>(
    raw_public_key: &[u8],
    out: &mut DetailBuffer<N>,
    num_chars_l: usize,
    num_chars_r: usize,
) -> Result<(), AddressError> {
    let key = <&[u8; RAW_PUBLIC_KEY_LEN]>::try_from(raw_public_key).map_err(|_| {
        AddressError::MalformedKey {
            len: raw_public_key.len(),
        }
    })?;
    let encoded = encode_account_id(key);
    if num_chars_l > 0 && num_chars_r > 0 && num_chars_l + num_chars_r < encoded.len() {
        let abbreviated = format!(
            "{}{ABBREVIATION_SEPARATOR}{}",
            &encoded[..num_chars_l],
            &encoded[encoded.len() - num_chars_r..]
        );
        return out.set(&abbreviated);
    }
    out.set(&encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TEST_KEY_HEX: &str = "e93388bbfd2fbd11806dd0bd59cea9079e7cc70ce7b1e154f114cdfe4e466ecd";
    const TEST_KEY_ADDRESS: &str = "GDUTHCF37UX32EMANXIL2WOOVEDZ47GHBTT3DYKU6EKM37SOIZXM2FN7";

    fn test_key() -> [u8; 32] {
        let bytes = hex::decode(TEST_KEY_HEX).expect("valid hex");
        bytes.try_into().expect("32 bytes")
    }

    #[test]
    fn crc16_matches_xmodem_check_value() {
        assert_eq!(crc16_xmodem(b"123456789"), 0x31C3);
    }

    #[rstest]
    #[case([0u8; 32], "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF")]
    #[case(test_key(), TEST_KEY_ADDRESS)]
    fn encodes_reference_account_ids(#[case] key: [u8; 32], #[case] expected: &str) {
        let encoded = encode_account_id(&key);
        assert_eq!(encoded.len(), ACCOUNT_ID_LEN);
        assert_eq!(encoded.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn print_account_id_writes_full_address() {
        let mut out = DetailBuffer::<DETAIL_VALUE_MAX_LENGTH>::new();
        print_account_id(&test_key(), &mut out, 0, 0).expect("fits");
        assert_eq!(out.as_str(), TEST_KEY_ADDRESS);
        assert_eq!(out.len(), ACCOUNT_ID_LEN);
    }

    #[test]
    fn print_account_id_abbreviates_when_both_sides_requested() {
        let mut out = DetailBuffer::<DETAIL_VALUE_MAX_LENGTH>::new();
        print_account_id(&test_key(), &mut out, 4, 4).expect("fits");
        assert_eq!(out.as_str(), "GDUT..2FN7");
    }

    #[test]
    fn one_sided_abbreviation_prints_full_address() {
        let mut out = DetailBuffer::<DETAIL_VALUE_MAX_LENGTH>::new();
        print_account_id(&test_key(), &mut out, 6, 0).expect("fits");
        assert_eq!(out.as_str(), TEST_KEY_ADDRESS);
    }

    #[rstest]
    #[case(0)]
    #[case(31)]
    #[case(33)]
    fn wrong_key_length_is_malformed(#[case] len: usize) {
        let mut out = DetailBuffer::<DETAIL_VALUE_MAX_LENGTH>::new();
        let err = print_account_id(&vec![1u8; len], &mut out, 0, 0).unwrap_err();
        assert_eq!(err, AddressError::MalformedKey { len });
        assert!(out.is_empty());
    }

    #[test]
    fn small_buffer_is_rejected_without_partial_write() {
        let mut out = DetailBuffer::<16>::new();
        let err = print_account_id(&test_key(), &mut out, 0, 0).unwrap_err();
        assert_eq!(
            err,
            AddressError::BufferTooSmall {
                needed: ACCOUNT_ID_LEN,
                capacity: 16
            }
        );
        assert!(out.raw().iter().all(|b| *b == 0));
    }

    #[test]
    fn clear_wipes_every_byte() {
        let mut out = DetailBuffer::<DETAIL_VALUE_MAX_LENGTH>::new();
        print_account_id(&test_key(), &mut out, 0, 0).expect("fits");
        out.clear();
        assert!(out.is_empty());
        assert_eq!(out.as_str(), "");
        assert!(out.raw().iter().all(|b| *b == 0));
    }
}
