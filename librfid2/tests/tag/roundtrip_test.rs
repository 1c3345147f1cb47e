#[path = "../common/mod.rs"]
mod common;

use librfid2::tag::TagReader;
use librfid2::test_support::{SharedMemory, boxed_memory_with_frame};
use librfid2::transport::{MemoryTag, PageStore};
use librfid2::types::PageAddress;
use librfid2::Error;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn hello_roundtrip_through_memory_tag() {
    let mut reader = TagReader::new(Box::new(MemoryTag::new()));
    reader.write_text(common::fixtures::hello_text()).unwrap();
    assert_eq!(reader.read_text().unwrap(), "hello");
}

#[test]
fn hello_lands_on_the_fixture_pages() {
    let inner = Rc::new(RefCell::new(MemoryTag::new()));
    let mut reader = TagReader::new(Box::new(SharedMemory::new(inner.clone())));
    reader.write_text("hello").unwrap();

    let mut tag = inner.borrow().clone();
    tag.acquire_session(0).unwrap();
    let raw = tag.read_pages(PageAddress::new(4), 4).unwrap();

    let expected: Vec<u8> = common::fixtures::hello_pages().concat();
    assert_eq!(raw, expected);
}

#[test]
fn tag_written_elsewhere_reads_back() {
    // A tag that already carries the frame, laid out by some other writer
    let store = boxed_memory_with_frame(&common::fixtures::hello_frame()).unwrap();
    let mut reader = TagReader::new(store);
    assert_eq!(reader.read_text().unwrap(), "hello");
}

#[test]
fn empty_text_roundtrips() {
    let mut reader = TagReader::new(Box::new(MemoryTag::new()));
    reader.write_text("").unwrap();
    assert_eq!(reader.read_text().unwrap(), "");
}

#[test]
fn multibyte_text_roundtrips() {
    let mut reader = TagReader::new(Box::new(MemoryTag::new()));
    reader.write_text("grüße ☕").unwrap();
    assert_eq!(reader.read_text().unwrap(), "grüße ☕");
}

#[test]
fn rewriting_a_shorter_message_still_reads_cleanly() {
    // Stale bytes from the longer first message stay on the tag past the new
    // terminator; the declared TLV length keeps them out of the result.
    let mut reader = TagReader::new(Box::new(MemoryTag::new()));
    reader.write_text("a considerably longer first message").unwrap();
    reader.write_text("short").unwrap();
    assert_eq!(reader.read_text().unwrap(), "short");
}

#[test]
fn longest_readable_text_roundtrips() {
    let text = common::fixtures::longest_readable_text();
    let mut reader = TagReader::new(Box::new(MemoryTag::new()));
    reader.write_text(&text).unwrap();
    assert_eq!(reader.read_text().unwrap(), text);
}

#[test]
fn text_past_the_read_cap_writes_but_reads_truncated() {
    let text = common::fixtures::shortest_unreadable_text();
    let mut reader = TagReader::new(Box::new(MemoryTag::new()));
    reader.write_text(&text).unwrap();

    match reader.read_text() {
        Err(Error::Truncated {
            needed: 65,
            available: 64,
        }) => {}
        other => panic!("expected Truncated, got {:?}", other),
    }
}

#[test]
fn max_text_writes_to_a_small_tag_only_if_it_fits() {
    // 250-byte frame needs pages 4..=66; a 32-page tag refuses partway
    let mut reader = TagReader::new(Box::new(MemoryTag::with_pages(32)));
    match reader.write_text(&common::fixtures::max_text()) {
        Err(Error::Storage { page: 32, .. }) => {}
        other => panic!("expected Storage, got {:?}", other),
    }

    let mut reader = TagReader::new(Box::new(MemoryTag::new()));
    reader.write_text(&common::fixtures::max_text()).unwrap();
}
