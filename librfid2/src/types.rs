// librfid2/src/types.rs

use crate::constants::PAGE_SIZE;
use derive_more::{Display, From};
use std::fmt;

/// PageAddress - Newtype Pattern (page index on the tag)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "page {}", _0)]
pub struct PageAddress(u8);

impl PageAddress {
    pub const fn new(page: u8) -> Self {
        Self(page)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Address `pages` pages past this one.
    pub fn advanced(&self, pages: u8) -> Self {
        Self(self.0.saturating_add(pages))
    }
}

/// Page - Newtype Pattern (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page([u8; PAGE_SIZE]);

impl Page {
    pub const fn from_bytes(bytes: [u8; PAGE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }

    /// Builds a page from up to 4 bytes, zero-padding the tail. The final
    /// chunk of a frame is rarely page-aligned.
    pub fn from_chunk(chunk: &[u8]) -> Self {
        let mut arr = [0u8; PAGE_SIZE];
        let n = chunk.len().min(PAGE_SIZE);
        arr[..n].copy_from_slice(&chunk[..n]);
        Self(arr)
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// LanguageCode - ISO 639-1 two-letter code carried in the text record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageCode([u8; 2]);

impl LanguageCode {
    /// English, the code every record gets unless a caller says otherwise.
    pub const EN: Self = Self(*b"en");

    pub const fn new(code: [u8; 2]) -> Self {
        Self(code)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            let c = if b.is_ascii_graphic() { b as char } else { '.' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
