// librfid2/src/transport/traits.rs

use crate::Result;
use crate::types::{Page, PageAddress};

/// PageStore trait abstracts page-level tag I/O away from the transfer
/// protocol.
///
/// Implementations wrap whatever physically holds the pages: a reader chip
/// driving a tag over RF, or an in-memory array in tests. Addresses are
/// absolute page numbers; the transfer protocol never touches anything below
/// `constants::DATA_START_PAGE`.
pub trait PageStore {
    /// Read `pages` consecutive pages starting at `addr`. A successful read
    /// returns exactly `pages * 4` bytes; anything shorter is treated as
    /// truncated by the caller.
    fn read_pages(&mut self, addr: PageAddress, pages: usize) -> Result<Vec<u8>>;

    /// Write a single page at `addr`.
    fn write_page(&mut self, addr: PageAddress, page: Page) -> Result<()>;

    /// Block until a tag is present and a session is open, or `timeout_ms`
    /// elapses. Hardware stores poll for presence, conventionally every
    /// `utils::POLL_INTERVAL_MS`. `Error::Timeout` means no page was touched.
    fn acquire_session(&mut self, timeout_ms: u64) -> Result<()>;

    /// Close the session and put the tag back to sleep. Idempotent: calling
    /// this with no open session is a no-op.
    fn release_session(&mut self);
}
