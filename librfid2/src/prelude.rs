// librfid2/src/prelude.rs

pub use crate::ndef::{Tlv, decode_message, decode_text, encode_message, encode_text};
pub use crate::tag::{TagReader, TagSession};
pub use crate::transport::{MemoryTag, MockPageStore, PageStore};
pub use crate::{Error, LanguageCode, Page, PageAddress, Result};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_presence_timeout, ms};
