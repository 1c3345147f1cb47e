// librfid2/src/transport/memory.rs

use crate::constants::PAGE_SIZE;
use crate::transport::traits::PageStore;
use crate::types::{Page, PageAddress};
use crate::{Error, Result};

/// Pages of an NTAG215-sized tag, the variant most of these units ship with.
const DEFAULT_PAGES: usize = 135;

/// Status reported for a page outside the tag's address space, matching the
/// NACK a real tag answers an invalid address with.
const STATUS_NACK: u8 = 0xFF;

/// Status reported for I/O attempted with no open session.
const STATUS_NO_SESSION: u8 = 0x03;

/// Array-backed tag emulation. Behaves like a tag that is always in front of
/// the reader: acquisition succeeds immediately, page I/O requires an open
/// session, and out-of-range addresses are refused the way a real tag NACKs
/// them.
#[derive(Debug, Clone)]
pub struct MemoryTag {
    pages: Vec<[u8; PAGE_SIZE]>,
    session_open: bool,
}

impl MemoryTag {
    /// Tag with the default NTAG215 page count.
    pub fn new() -> Self {
        Self::with_pages(DEFAULT_PAGES)
    }

    /// Tag with an arbitrary page count, for exercising capacity edges.
    pub fn with_pages(pages: usize) -> Self {
        Self {
            pages: vec![[0u8; PAGE_SIZE]; pages],
            session_open: false,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn check_range(&self, addr: PageAddress, pages: usize) -> Result<usize> {
        let start = addr.as_u8() as usize;
        let end = start + pages;
        if end > self.pages.len() {
            return Err(Error::Storage {
                page: addr.as_u8(),
                status: STATUS_NACK,
            });
        }
        Ok(start)
    }

    fn check_session(&self, addr: PageAddress) -> Result<()> {
        if !self.session_open {
            return Err(Error::Storage {
                page: addr.as_u8(),
                status: STATUS_NO_SESSION,
            });
        }
        Ok(())
    }
}

impl Default for MemoryTag {
    fn default() -> Self {
        Self::new()
    }
}

impl PageStore for MemoryTag {
    fn read_pages(&mut self, addr: PageAddress, pages: usize) -> Result<Vec<u8>> {
        self.check_session(addr)?;
        let start = self.check_range(addr, pages)?;
        let mut out = Vec::with_capacity(pages * PAGE_SIZE);
        for page in &self.pages[start..start + pages] {
            out.extend_from_slice(page);
        }
        Ok(out)
    }

    fn write_page(&mut self, addr: PageAddress, page: Page) -> Result<()> {
        self.check_session(addr)?;
        let start = self.check_range(addr, 1)?;
        self.pages[start] = *page.as_bytes();
        Ok(())
    }

    fn acquire_session(&mut self, _timeout_ms: u64) -> Result<()> {
        self.session_open = true;
        Ok(())
    }

    fn release_session(&mut self) {
        self.session_open = false;
    }
}
