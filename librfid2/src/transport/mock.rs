// librfid2/src/transport/mock.rs

use crate::transport::traits::PageStore;
use crate::types::{Page, PageAddress};
use crate::{Error, Result};

/// Status the mock reports when its read script is exhausted.
pub const STATUS_SCRIPT_EMPTY: u8 = 0xEE;

/// Mock page store for unit tests. It records page writes and read requests
/// and returns queued read bursts in order, ignoring the requested address.
#[derive(Debug)]
pub struct MockPageStore {
    pub written: Vec<(PageAddress, Page)>,
    pub reads: Vec<(PageAddress, usize)>,
    pub read_responses: Vec<Vec<u8>>,
    /// Whether a tag is in front of the reader; acquisition times out when
    /// this is false.
    pub present: bool,
    pub acquired: usize,
    pub released: usize,
    /// Testing hook: fail a write to this page with this status
    pub fail_write_at: Option<(PageAddress, u8)>,
    /// Testing hook: fail a read burst starting at this page with this status
    pub fail_read_at: Option<(PageAddress, u8)>,
}

impl MockPageStore {
    pub fn new() -> Self {
        Self {
            written: Vec::new(),
            reads: Vec::new(),
            read_responses: Vec::new(),
            present: true,
            acquired: 0,
            released: 0,
            fail_write_at: None,
            fail_read_at: None,
        }
    }

    /// Queue one read burst (for tests).
    pub fn push_read(&mut self, burst: Vec<u8>) {
        self.read_responses.push(burst);
    }

    /// All written page bytes in write order, concatenated.
    pub fn written_bytes(&self) -> Vec<u8> {
        self.written
            .iter()
            .flat_map(|(_, page)| page.as_bytes().iter().copied())
            .collect()
    }
}

impl Default for MockPageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PageStore for MockPageStore {
    fn read_pages(&mut self, addr: PageAddress, pages: usize) -> Result<Vec<u8>> {
        self.reads.push((addr, pages));
        if let Some((at, status)) = self.fail_read_at {
            if at == addr {
                return Err(Error::Storage {
                    page: addr.as_u8(),
                    status,
                });
            }
        }
        if self.read_responses.is_empty() {
            return Err(Error::Storage {
                page: addr.as_u8(),
                status: STATUS_SCRIPT_EMPTY,
            });
        }
        Ok(self.read_responses.remove(0))
    }

    fn write_page(&mut self, addr: PageAddress, page: Page) -> Result<()> {
        if let Some((at, status)) = self.fail_write_at {
            if at == addr {
                return Err(Error::Storage {
                    page: addr.as_u8(),
                    status,
                });
            }
        }
        self.written.push((addr, page));
        Ok(())
    }

    fn acquire_session(&mut self, _timeout_ms: u64) -> Result<()> {
        if !self.present {
            return Err(Error::Timeout);
        }
        self.acquired += 1;
        Ok(())
    }

    fn release_session(&mut self) {
        self.released += 1;
    }
}
