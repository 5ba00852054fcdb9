/// I/O operations for reading FSD files

/// Forward-only byte cursor
pub mod cursor;
/// Reader and decoder for FSD files
pub mod reader;

pub use cursor::ByteCursor;
pub use reader::{decode_fsd, dump_fsd, open_source, read_fsd, FsdDecoder};
