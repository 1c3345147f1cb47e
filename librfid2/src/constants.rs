// librfid2/src/constants.rs
//! Common wire and paging constants used across the crate

/// NDEF Message TLV tag byte
pub const TLV_NDEF_MESSAGE: u8 = 0x03;

/// Terminator TLV byte, written immediately after the message bytes
pub const TLV_TERMINATOR: u8 = 0xFE;

/// TLV overhead around one message: tag(1) + length(1) + terminator(1)
pub const TLV_OVERHEAD: usize = 3;

/// Record header for a single well-known short text record: MB|ME|SR|TNF=0x01
pub const TEXT_RECORD_HEADER: u8 = 0xD1;

/// Type length of the text record type field ('T' is one byte)
pub const TEXT_TYPE_LEN: u8 = 0x01;

/// Well-known record type byte for Text
pub const TEXT_RECORD_TYPE: u8 = b'T';

/// Status-byte bit marking UTF-16 text. Ignored on decode; this crate reads
/// and writes UTF-8 only.
pub const STATUS_UTF16: u8 = 0x40;

/// Status-byte mask for the language-code length (bits 0-5)
pub const STATUS_LANG_LEN_MASK: u8 = 0x3F;

/// Minimal serialized text record: header + type len + payload len + type +
/// status + 2-byte language code
pub const RECORD_MIN_LEN: usize = 7;

/// Record bytes preceding the payload: header, type length, payload length,
/// type
pub const RECORD_PAYLOAD_OFFSET: usize = 4;

/// Maximum encodable text length in bytes. Keeps the framed message well
/// inside the single-byte TLV length field and small-tag capacity.
pub const MAX_TEXT_LEN: usize = 240;

/// Upper bound on a record enclosed by the single-byte TLV length field
pub const MAX_RECORD_LEN: usize = 255;

/// Tag page size in bytes
pub const PAGE_SIZE: usize = 4;

/// First user-data page. Pages 0-3 hold UID, lock bits and the capability
/// container.
pub const DATA_START_PAGE: u8 = 4;

/// Pages covered by one read burst
pub const READ_BURST_PAGES: usize = 4;

/// Bytes returned by one read burst
pub const READ_BURST_LEN: usize = READ_BURST_PAGES * PAGE_SIZE;

/// Hard cap on bytes accumulated by the paged read protocol. Intentionally
/// smaller than the largest writable message; see `tag::operations::read`.
pub const READ_BUFFER_CAP: usize = 64;
