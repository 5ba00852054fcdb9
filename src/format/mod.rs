/// FSD format constants and decode options

/// Format constants
pub mod constants;

pub use constants::*;

/// How the five header info bytes are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    /// Unpack creation date, creator ID and release number
    #[default]
    Detailed,
    /// Consume the info bytes but keep them raw
    Plain,
}

impl HeaderStyle {
    /// Get a human-readable name for this header style
    pub fn name(&self) -> &'static str {
        match self {
            HeaderStyle::Detailed => "Detailed",
            HeaderStyle::Plain => "Plain",
        }
    }
}

/// Options controlling a single decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Header interpretation
    pub header_style: HeaderStyle,
    /// Tally error and size codes and emit a summary
    pub collect_statistics: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            header_style: HeaderStyle::Detailed,
            collect_statistics: true,
        }
    }
}

impl DecodeOptions {
    /// Options for the plain decoder: raw header, no statistics
    pub fn plain() -> Self {
        Self {
            header_style: HeaderStyle::Plain,
            collect_statistics: false,
        }
    }
}

/// Check if the given bytes start with the FSD signature
pub fn is_fsd_signature(magic: &[u8]) -> bool {
    magic.starts_with(FSD_SIGNATURE)
}
