#[path = "../common/mod.rs"]
mod common;

use librfid2::ndef::encode_message;
use librfid2::tag::TagReader;
use librfid2::test_support::{SharedStore, boxed_mock_with_frame, seed_frame_bursts};
use librfid2::transport::MockPageStore;
use librfid2::types::PageAddress;
use std::cell::RefCell;
use std::rc::Rc;

fn shared_reader() -> (Rc<RefCell<MockPageStore>>, TagReader) {
    let inner = Rc::new(RefCell::new(MockPageStore::new()));
    let reader = TagReader::new(Box::new(SharedStore::new(inner.clone())));
    (inner, reader)
}

#[test]
fn hello_takes_four_ascending_pages() {
    let (inner, mut reader) = shared_reader();
    reader.write_text("hello").unwrap();

    let store = inner.borrow();
    let addrs: Vec<u8> = store.written.iter().map(|(a, _)| a.as_u8()).collect();
    assert_eq!(addrs, vec![4, 5, 6, 7]);

    let pages: Vec<[u8; 4]> = store.written.iter().map(|(_, p)| *p.as_bytes()).collect();
    assert_eq!(pages, common::fixtures::hello_pages());
}

#[test]
fn thirty_seven_byte_frame_takes_ten_writes() {
    // 27 bytes of text frame to exactly 37 bytes
    let text = "abcdefghijklmnopqrstuvwxyz!";
    let frame = encode_message(text).unwrap();
    assert_eq!(frame.len(), 37);

    let (inner, mut reader) = shared_reader();
    reader.write_text(text).unwrap();

    let store = inner.borrow();
    assert_eq!(store.written.len(), 10);
    assert_eq!(store.written[0].0, PageAddress::new(4));
    assert_eq!(store.written[9].0, PageAddress::new(13));
    // 37 = 9 * 4 + 1, so the last page carries one byte and three zeros
    assert_eq!(store.written[9].1.as_bytes(), &[frame[36], 0, 0, 0]);
}

#[test]
fn written_bytes_match_the_frame_with_padding() {
    let (inner, mut reader) = shared_reader();
    reader.write_text("").unwrap();

    let frame = encode_message("").unwrap();
    let mut expected = frame.clone();
    expected.resize(12, 0); // 10-byte frame padded to 3 whole pages
    assert_eq!(inner.borrow().written_bytes(), expected);
}

#[test]
fn short_record_reads_in_one_burst() {
    let (inner, mut reader) = shared_reader();
    seed_frame_bursts(&mut inner.borrow_mut(), &encode_message("hi").unwrap());

    assert_eq!(reader.read_text().unwrap(), "hi");
    assert_eq!(inner.borrow().reads, vec![(PageAddress::new(4), 4)]);
}

#[test]
fn scripted_store_reads_like_a_tag() {
    let frame = encode_message("scripted").unwrap();
    let mut reader = TagReader::new(boxed_mock_with_frame(&frame));
    assert_eq!(reader.read_text().unwrap(), "scripted");
}

#[test]
fn twenty_byte_record_reads_in_two_bursts() {
    // L = 20 -> needed = 23 -> bursts at pages 4 and 8
    let text = "0123456789abc";
    let frame = encode_message(text).unwrap();
    assert_eq!(frame[1], 20);

    let (inner, mut reader) = shared_reader();
    seed_frame_bursts(&mut inner.borrow_mut(), &frame);

    assert_eq!(reader.read_text().unwrap(), text);
    assert_eq!(
        inner.borrow().reads,
        vec![(PageAddress::new(4), 4), (PageAddress::new(8), 4)]
    );
}

#[test]
fn read_bursts_stop_at_the_cap() {
    let frame = encode_message(&common::fixtures::shortest_unreadable_text()).unwrap();
    let (inner, mut reader) = shared_reader();
    seed_frame_bursts(&mut inner.borrow_mut(), &frame);

    assert!(reader.read_text().is_err());
    // 64-byte cap = at most four 16-byte bursts, pages 4, 8, 12, 16
    let addrs: Vec<u8> = inner.borrow().reads.iter().map(|(a, _)| a.as_u8()).collect();
    assert_eq!(addrs, vec![4, 8, 12, 16]);
}
