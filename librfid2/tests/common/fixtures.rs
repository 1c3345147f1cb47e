// fixtures.rs — provides commonly used test texts, records and frames

#![allow(dead_code)]

/// The canonical short message used across the test suite.
pub fn hello_text() -> &'static str {
    "hello"
}

/// "hello" as a serialized text record, bytes fixed by the wire format.
pub fn hello_record() -> Vec<u8> {
    hex::decode("d101085402656e68656c6c6f").unwrap()
}

/// "hello" framed in its TLV envelope, exactly as laid out in tag memory.
pub fn hello_frame() -> Vec<u8> {
    hex::decode("030cd101085402656e68656c6c6ffe").unwrap()
}

/// The 4 pages the "hello" frame occupies, padding included.
pub fn hello_pages() -> Vec<[u8; 4]> {
    vec![
        [0x03, 0x0C, 0xD1, 0x01],
        [0x08, 0x54, 0x02, 0x65],
        [0x6E, 0x68, 0x65, 0x6C],
        [0x6C, 0x6F, 0xFE, 0x00],
    ]
}

/// Longest text the encoder accepts.
pub fn max_text() -> String {
    "x".repeat(240)
}

/// One byte past the encoder limit.
pub fn over_cap_text() -> String {
    "x".repeat(241)
}

/// Longest text whose full frame fits the 64-byte read accumulation cap
/// (frame length 10 + n).
pub fn longest_readable_text() -> String {
    "r".repeat(54)
}

/// Shortest text that writes fine but frames past the read cap.
pub fn shortest_unreadable_text() -> String {
    "u".repeat(55)
}
