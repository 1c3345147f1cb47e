use log::{debug, trace};

use crate::constants::{DATA_START_PAGE, READ_BUFFER_CAP, READ_BURST_LEN, READ_BURST_PAGES};
use crate::transport::PageStore;
use crate::types::PageAddress;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Read a framed message back from the user-data area.
///
/// One 16-byte burst (4 pages) is always issued. Its second byte is the TLV
/// length, which fixes how many bytes the transfer needs: tag + length byte +
/// record + terminator. Further bursts follow at page + 4 steps until enough
/// has accumulated or the 64-byte buffer cap is hit. Hitting the cap is not
/// an error at this layer; the assembled bytes simply stop short and frame
/// decoding rejects them as truncated.
///
/// The cap is deliberately smaller than the largest frame the write path can
/// produce (250 bytes for 240 bytes of text). Text over 54 bytes frames past
/// the cap, so it is writable but not readable back through this protocol;
/// the asymmetry is kept as the deployed reader units behave.
pub fn read_frame(store: &mut dyn PageStore) -> Result<Vec<u8>> {
    let mut addr = PageAddress::new(DATA_START_PAGE);
    let mut buf = Vec::with_capacity(READ_BUFFER_CAP);

    read_burst(store, &mut buf, addr)?;

    // Tag byte + length byte + record + terminator
    let record_len = buf[1] as usize;
    let needed = 2 + record_len + 1;
    debug!("tlv length {record_len}, transfer needs {needed} bytes");

    while buf.len() < needed && buf.len() < READ_BUFFER_CAP {
        addr = addr.advanced(READ_BURST_PAGES as u8);
        read_burst(store, &mut buf, addr)?;
    }

    if buf.len() > needed {
        buf.truncate(needed);
    }
    debug!("assembled {} of {} needed bytes", buf.len(), needed);
    Ok(buf)
}

/// Issue one burst and append its bytes. A store answering with fewer bytes
/// than a full burst would stall the accumulation loop, so short answers are
/// refused here.
fn read_burst(store: &mut dyn PageStore, buf: &mut Vec<u8>, addr: PageAddress) -> Result<()> {
    let burst = store.read_pages(addr, READ_BURST_PAGES)?;
    trace!("read {}: {}", addr, bytes_to_hex_spaced(&burst));
    if burst.len() < READ_BURST_LEN {
        return Err(Error::Truncated {
            needed: READ_BURST_LEN,
            available: burst.len(),
        });
    }
    buf.extend_from_slice(&burst[..READ_BURST_LEN]);
    Ok(())
}
