// librfid2/src/lib.rs

//! librfid2
//!
//! NDEF text record codec and paged tag I/O for MFRC522-family NFC units.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod ndef;
pub mod prelude;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
