// librfid2/src/transport/mod.rs

pub mod memory;
pub mod mock;
pub mod traits;

pub use memory::MemoryTag;
pub use mock::MockPageStore;
pub use traits::PageStore;
