// librfid2/src/tag/mod.rs

pub mod operations;

use crate::Result;
use crate::ndef;
use crate::transport::PageStore;
use crate::utils::DEFAULT_PRESENCE_TIMEOUT_MS;

/// Handle over a page store that owns tag acquisition and the text transfer
/// protocol.
///
/// A reader cannot exist without its store, so there is no "not initialized"
/// state to check at run time. One transfer runs at a time: a session
/// mutably borrows the reader for as long as it is open.
pub struct TagReader {
    store: Box<dyn PageStore>,
    presence_timeout_ms: u64,
}

impl TagReader {
    /// Create a reader with the default presence timeout.
    pub fn new(store: Box<dyn PageStore>) -> Self {
        Self {
            store,
            presence_timeout_ms: DEFAULT_PRESENCE_TIMEOUT_MS,
        }
    }

    /// Builder-style override of how long to wait for a tag.
    pub fn with_presence_timeout(mut self, timeout_ms: u64) -> Self {
        self.presence_timeout_ms = timeout_ms;
        self
    }

    pub fn set_presence_timeout(&mut self, timeout_ms: u64) {
        self.presence_timeout_ms = timeout_ms;
    }

    pub fn presence_timeout_ms(&self) -> u64 {
        self.presence_timeout_ms
    }

    /// Encode `text` and write it to the next tag presented.
    ///
    /// The encoder limit is enforced before waiting for a tag, so an
    /// oversized text never touches hardware. The session is released on
    /// every exit path once one was opened.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        let frame = ndef::encode_message(text)?;
        let mut session = self.session()?;
        session.write_frame(&frame)
    }

    /// Wait for a tag and read its text back.
    pub fn read_text(&mut self) -> Result<String> {
        let mut session = self.session()?;
        session.read_text()
    }

    /// Wait for a tag and keep the session open until the returned guard
    /// drops. Lets a caller read and then rewrite the same tag presentation,
    /// paying one acquisition and one release.
    pub fn session(&mut self) -> Result<TagSession<'_>> {
        self.store.acquire_session(self.presence_timeout_ms)?;
        Ok(TagSession { reader: self })
    }
}

/// Open session on a presented tag.
///
/// Release happens in `Drop`, so every exit path from a transfer (success,
/// malformed data, a failing page) releases exactly once. A session that
/// never opened (acquisition timed out) has nothing to release.
pub struct TagSession<'a> {
    reader: &'a mut TagReader,
}

impl TagSession<'_> {
    /// Encode and write text within this session.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        let frame = ndef::encode_message(text)?;
        self.write_frame(&frame)
    }

    /// Write an already-framed message starting at the user-data area.
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        operations::write_frame(self.reader.store.as_mut(), frame)
    }

    /// Read and decode the tag's text.
    pub fn read_text(&mut self) -> Result<String> {
        let raw = self.read_frame()?;
        ndef::decode_message(&raw)
    }

    /// Read the raw frame bytes the transfer protocol assembles.
    pub fn read_frame(&mut self) -> Result<Vec<u8>> {
        operations::read_frame(self.reader.store.as_mut())
    }
}

impl Drop for TagSession<'_> {
    fn drop(&mut self) {
        self.reader.store.release_session();
    }
}
