// librfid2/src/ndef/text.rs

use crate::constants::{
    MAX_TEXT_LEN, RECORD_MIN_LEN, RECORD_PAYLOAD_OFFSET, STATUS_LANG_LEN_MASK, TEXT_RECORD_HEADER,
    TEXT_RECORD_TYPE, TEXT_TYPE_LEN,
};
use crate::ndef::parser;
use crate::types::LanguageCode;
use crate::{Error, Result};

/// Encode a short well-known text record carrying English text.
pub fn encode_text(text: &str) -> Result<Vec<u8>> {
    encode_text_with_language(text, LanguageCode::EN)
}

/// Encode a short well-known text record.
/// Layout: header(1) + type_len(1) + payload_len(1) + type(1) + status(1) + language(2) + text(N)
/// Header: 0xD1 (MB | ME | SR, TNF = well-known)
/// Status: UTF-8 flag clear, low bits carry the language-code length
pub fn encode_text_with_language(text: &str, language: LanguageCode) -> Result<Vec<u8>> {
    let text_len = text.len();
    if text_len > MAX_TEXT_LEN {
        return Err(Error::TextTooLong {
            max: MAX_TEXT_LEN,
            actual: text_len,
        });
    }

    let lang = language.as_bytes();
    let payload_len = (1 + lang.len() + text_len) as u8;
    let mut out = Vec::with_capacity(RECORD_MIN_LEN + text_len);
    out.push(TEXT_RECORD_HEADER);
    out.push(TEXT_TYPE_LEN);
    out.push(payload_len);
    out.push(TEXT_RECORD_TYPE);
    out.push(lang.len() as u8);
    out.extend_from_slice(lang);
    out.extend_from_slice(text.as_bytes());
    Ok(out)
}

/// Decode a short well-known text record back into its text.
///
/// The header, type length and type byte are validated before any declared
/// length is trusted. The status byte's UTF-16 flag (bit 6) is ignored and
/// the text bytes are always read as UTF-8, with undecodable sequences
/// replaced rather than rejected. Records written by other encoders may carry
/// a language code of any length; it is skipped, not interpreted.
pub fn decode_text(record: &[u8]) -> Result<String> {
    parser::ensure_len(record, RECORD_MIN_LEN)?;

    if record[0] != TEXT_RECORD_HEADER
        || record[1] != TEXT_TYPE_LEN
        || record[3] != TEXT_RECORD_TYPE
    {
        return Err(Error::NotTextRecord);
    }

    let payload_len = record[2];
    let lang_len = record[RECORD_PAYLOAD_OFFSET] & STATUS_LANG_LEN_MASK;
    if payload_len < 1 + lang_len {
        return Err(Error::BadPayload {
            payload_len,
            lang_len,
        });
    }

    let text_len = (payload_len - 1 - lang_len) as usize;
    let text_start = RECORD_PAYLOAD_OFFSET + 1 + lang_len as usize;
    let text = parser::slice_at(record, text_start, text_len)?;
    Ok(String::from_utf8_lossy(text).into_owned())
}
