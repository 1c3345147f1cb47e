// Round-trip demo over the in-memory tag store.

// Writes a text message the way a reader unit lays it out on the page grid,
// reads it back through the burst protocol, and prints each step. Run with
// RUST_LOG=trace to watch per-page I/O.

use anyhow::Result;
use librfid2::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut reader = TagReader::new(Box::new(MemoryTag::new()));

    let message = "hello from librfid2";
    println!("writing: {message:?}");
    reader.write_text(message)?;

    let back = reader.read_text()?;
    println!("read back: {back:?}");

    // The raw frame exactly as it sits in tag memory
    {
        let mut session = reader.session()?;
        let frame = session.read_frame()?;
        println!(
            "frame ({} bytes): {}",
            frame.len(),
            bytes_to_hex_spaced(&frame)
        );
    }

    // The write side accepts more than the burst reader will hand back
    let long = "x".repeat(100);
    reader.write_text(&long)?;
    match reader.read_text() {
        Err(Error::Truncated { needed, available }) => {
            println!("100-byte text wrote fine, reads back short: needed {needed}, got {available}");
        }
        other => println!("unexpected: {other:?}"),
    }

    Ok(())
}
