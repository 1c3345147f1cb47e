pub mod read;
pub mod write;

// Re-export the transfer entry points at the operations root so callers can
// use `crate::tag::operations::read_frame(...)`.
pub use read::read_frame;
pub use write::write_frame;
