use log::{debug, trace};

use crate::Result;
use crate::constants::{DATA_START_PAGE, PAGE_SIZE};
use crate::transport::PageStore;
use crate::types::{Page, PageAddress};

/// Write a framed message to consecutive pages starting at the user-data
/// area.
///
/// The frame is split into `ceil(len / 4)` chunks and written one page per
/// chunk, strictly increasing from page 4, the last chunk zero-padded to a
/// full page. The first failing page aborts the transfer with its address
/// and status; pages already written stay written, there is no retry and no
/// rollback.
pub fn write_frame(store: &mut dyn PageStore, frame: &[u8]) -> Result<()> {
    debug!(
        "writing {} byte frame as {} pages from page {}",
        frame.len(),
        frame.len().div_ceil(PAGE_SIZE),
        DATA_START_PAGE
    );

    let mut addr = PageAddress::new(DATA_START_PAGE);
    for chunk in frame.chunks(PAGE_SIZE) {
        let page = Page::from_chunk(chunk);
        trace!("write {}: {}", addr, page.to_hex());
        store.write_page(addr, page)?;
        addr = addr.advanced(1);
    }
    Ok(())
}
