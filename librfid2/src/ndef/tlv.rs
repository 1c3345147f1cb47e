// librfid2/src/ndef/tlv.rs

use crate::constants::{MAX_RECORD_LEN, TLV_NDEF_MESSAGE, TLV_OVERHEAD, TLV_TERMINATOR};
use crate::ndef::parser;
use crate::{Error, Result};

/// NDEF Message TLV helper. Provides encode/decode of the envelope
/// Format: [Tag(1)] [Len(1)] [Record(L)] [Terminator(1)]
/// Tag: 0x03
/// Terminator: 0xFE
pub struct Tlv;

impl Tlv {
    /// Wrap a record in the single-byte-length TLV envelope.
    ///
    /// Record lengths above 255 would need the long TLV format, which this
    /// crate does not speak; the encoder-side text cap keeps every record
    /// well under that.
    pub fn encode(record: &[u8]) -> Vec<u8> {
        debug_assert!(
            record.len() <= MAX_RECORD_LEN,
            "record exceeds one-byte TLV length"
        );
        let mut out = Vec::with_capacity(TLV_OVERHEAD + record.len());
        out.push(TLV_NDEF_MESSAGE);
        out.push(record.len() as u8);
        out.extend_from_slice(record);
        out.push(TLV_TERMINATOR);
        out
    }

    /// Unwrap the TLV envelope and return the enclosed record bytes.
    ///
    /// The input must cover tag, length, record and terminator; trailing
    /// bytes past the terminator are ignored. The terminator's value is not
    /// checked, only that the transfer reached far enough to include it.
    pub fn decode(raw: &[u8]) -> Result<&[u8]> {
        parser::ensure_len(raw, 2)?;
        let tag = raw[0];
        if tag != TLV_NDEF_MESSAGE {
            return Err(Error::NotNdef { tag });
        }
        let record_len = raw[1] as usize;
        parser::ensure_len(raw, 2 + record_len + 1)?;
        Ok(&raw[2..2 + record_len])
    }
}
