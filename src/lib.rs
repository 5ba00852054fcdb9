/*!
# fsddump

A Rust library for decoding FSD floppy disk image files.

FSD images store, per physical track, a variable number of sectors with the
sector IDs as recorded on the disc, nominal and actual size codes, the error
code seen when the sector was read, and the sector data itself.

## Features

- Single forward pass over the image, with records streamed to a sink as
  they are decoded
- Detailed or plain header decoding
- Error code and sector size statistics with addressing anomaly flags
- Text dump of headers, sectors and hex data

## Quick Start

```rust,no_run
use fsddump::{FsdImage, FsdDecoder, TextDump};
use std::fs::File;
use std::io::BufReader;

// Decode an image, keeping only the metadata
let image = FsdImage::open("disc.fsd")?;
println!("{}: {} tracks", image.header().title, image.track_count());

for (code, count) in image.statistics().error_codes() {
    println!("{:02X}: {}", code, count);
}

// Dump an image to stdout as it is decoded
let file = BufReader::new(File::open("disc.fsd")?);
FsdDecoder::new(file).decode(TextDump::new(std::io::stdout()))?;
# Ok::<(), fsddump::FsdError>(())
```

## Modules

- `format`: FSD constants, size codes and decode options
- `image`: Decoded image structures (FsdImage, DiscHeader, Track, Sector)
- `io`: Byte cursor and decoder
- `stats`: Error code and size code statistics
- `dump`: Dump sinks and the hex dump renderer
- `error`: Error types and Result alias
*/

#![warn(missing_docs)]

/// Dump sinks and text rendering
pub mod dump;
/// Error types and Result alias
pub mod error;
/// FSD format constants and decode options
pub mod format;
/// Decoded image structures (FsdImage, DiscHeader, Track, Sector)
pub mod image;
/// I/O operations for reading FSD files
pub mod io;
/// Decode statistics
pub mod stats;

// Re-export common types
pub use dump::{hex_dump, DumpSink, NullSink, TextDump};
pub use error::{FsdError, Result};
pub use format::{fsd_size_to_bytes, DecodeOptions, HeaderStyle, FSD_SIGNATURE, FULL_INFO};
pub use image::{
    DiscHeader, FsdImage, HeaderInfo, Readability, Sector, SectorId, SectorInfo, SectorStatus,
    Track,
};
pub use io::{decode_fsd, dump_fsd, read_fsd, ByteCursor, FsdDecoder};
pub use stats::Statistics;
