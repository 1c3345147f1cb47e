// librfid2/src/ndef/codec.rs

use crate::Result;

use super::Tlv;
use super::text::{decode_text, encode_text, encode_text_with_language};
use crate::types::LanguageCode;

/// Encode text into a full framed message (record wrapped in the TLV
/// envelope), exactly as it is laid out in tag memory.
pub fn encode_message(text: &str) -> Result<Vec<u8>> {
    let record = encode_text(text)?;
    Ok(Tlv::encode(&record))
}

/// Encode a framed message carrying a non-default language code.
pub fn encode_message_with_language(text: &str, language: LanguageCode) -> Result<Vec<u8>> {
    let record = encode_text_with_language(text, language)?;
    Ok(Tlv::encode(&record))
}

/// Decode a framed message read back from tag memory and return its text.
pub fn decode_message(raw: &[u8]) -> Result<String> {
    let record = Tlv::decode(raw)?;
    decode_text(record)
}
