// librfid2/src/ndef/mod.rs

pub mod codec;
pub mod parser;
pub mod text;
pub mod tlv;

pub use codec::{decode_message, encode_message, encode_message_with_language};
pub use text::{decode_text, encode_text, encode_text_with_language};
pub use tlv::Tlv;
