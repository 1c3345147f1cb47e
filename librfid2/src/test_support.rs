//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common page-store setup so tests across the
//! crate and tests/ directory can reuse the same logic. The shared wrappers
//! let a test keep a handle on a store after a `TagReader` has taken
//! ownership of it, to assert on session counts and written pages afterwards.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::transport::{MemoryTag, MockPageStore, PageStore};
use crate::types::{Page, PageAddress};
use crate::{Result, constants};

/// Page store that delegates into an `Rc<RefCell<MockPageStore>>` so the test
/// retains a second handle for inspection.
#[doc(hidden)]
pub struct SharedStore {
    inner: Rc<RefCell<MockPageStore>>,
}

impl SharedStore {
    pub fn new(inner: Rc<RefCell<MockPageStore>>) -> Self {
        Self { inner }
    }
}

impl PageStore for SharedStore {
    fn read_pages(&mut self, addr: PageAddress, pages: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read_pages(addr, pages)
    }

    fn write_page(&mut self, addr: PageAddress, page: Page) -> Result<()> {
        self.inner.borrow_mut().write_page(addr, page)
    }

    fn acquire_session(&mut self, timeout_ms: u64) -> Result<()> {
        self.inner.borrow_mut().acquire_session(timeout_ms)
    }

    fn release_session(&mut self) {
        self.inner.borrow_mut().release_session()
    }
}

/// Like `SharedStore` but over a `MemoryTag`, for tests that want real page
/// semantics plus post-hoc access to the memory.
#[doc(hidden)]
pub struct SharedMemory {
    inner: Rc<RefCell<MemoryTag>>,
}

impl SharedMemory {
    pub fn new(inner: Rc<RefCell<MemoryTag>>) -> Self {
        Self { inner }
    }
}

impl PageStore for SharedMemory {
    fn read_pages(&mut self, addr: PageAddress, pages: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read_pages(addr, pages)
    }

    fn write_page(&mut self, addr: PageAddress, page: Page) -> Result<()> {
        self.inner.borrow_mut().write_page(addr, page)
    }

    fn acquire_session(&mut self, timeout_ms: u64) -> Result<()> {
        self.inner.borrow_mut().acquire_session(timeout_ms)
    }

    fn release_session(&mut self) {
        self.inner.borrow_mut().release_session()
    }
}

/// Build a MockPageStore whose read script answers with the given frame,
/// split into full 16-byte bursts, and return it boxed as a PageStore trait
/// object.
#[doc(hidden)]
pub fn boxed_mock_with_frame(frame: &[u8]) -> Box<dyn PageStore> {
    let mut mock = MockPageStore::new();
    seed_frame_bursts(&mut mock, frame);
    Box::new(mock)
}

/// Queue `frame` onto a MockPageStore as consecutive zero-padded 16-byte
/// bursts, the way a tag with that frame in memory would answer.
#[doc(hidden)]
pub fn seed_frame_bursts(mock: &mut MockPageStore, frame: &[u8]) {
    for chunk in frame.chunks(constants::READ_BURST_LEN) {
        let mut burst = vec![0u8; constants::READ_BURST_LEN];
        burst[..chunk.len()].copy_from_slice(chunk);
        mock.push_read(burst);
    }
}

/// A MemoryTag preloaded with `frame` in its user-data area, boxed as a
/// PageStore trait object.
#[doc(hidden)]
pub fn boxed_memory_with_frame(frame: &[u8]) -> Result<Box<dyn PageStore>> {
    let mut tag = MemoryTag::new();
    tag.acquire_session(0)?;
    crate::tag::operations::write_frame(&mut tag, frame)?;
    tag.release_session();
    Ok(Box::new(tag))
}
