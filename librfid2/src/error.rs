// librfid2/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Input text exceeds the encoder limit. Checked before any page access.
    #[error("text too long: {actual} bytes exceeds the {max} byte limit")]
    TextTooLong { max: usize, actual: usize },

    /// No tag was presented within the acquisition deadline.
    #[error("operation timed out")]
    Timeout,

    /// A page read or write failed. The device-specific status code is
    /// surfaced verbatim together with the failing page address.
    #[error("storage error at page {page}: status={status:#04x}")]
    Storage { page: u8, status: u8 },

    /// The first TLV byte is not an NDEF Message tag (0x03).
    #[error("not an ndef message: tag byte {tag:#04x}")]
    NotNdef { tag: u8 },

    /// The record header, type length, or type byte does not describe a
    /// well-known short text record.
    #[error("not an ndef text record")]
    NotTextRecord,

    /// The declared payload length cannot even hold its own status byte and
    /// language code.
    #[error("bad text payload: payload length {payload_len} < 1 + language length {lang_len}")]
    BadPayload { payload_len: u8, lang_len: u8 },

    /// Fewer bytes are available than a declared length requires.
    #[error("truncated data: needed {needed} bytes, got {available}")]
    Truncated { needed: usize, available: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
