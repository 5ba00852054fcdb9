/// FSD image data structures

/// Disc header and unpacked info
pub mod header;
/// Sector definition and status
pub mod sector;
/// Track definition and readability
pub mod track;

pub use header::{DiscHeader, HeaderInfo};
pub use sector::{Sector, SectorId, SectorInfo, SectorStatus};
pub use track::{Readability, Track};

use crate::error::Result;
use crate::stats::Statistics;
use std::path::Path;

/// A decoded FSD image
///
/// Holds the header, the track table with sector metadata, and the
/// statistics gathered while decoding. Sector data is not retained; it is
/// only lent to the [`crate::DumpSink`] while the image is decoded.
#[derive(Debug, Clone)]
pub struct FsdImage {
    pub(crate) header: DiscHeader,
    pub(crate) tracks: Vec<Track>,
    pub(crate) statistics: Statistics,
    pub(crate) trailing_bytes: bool,
}

impl FsdImage {
    /// Open and decode an FSD file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::io::read_fsd(path)
    }

    /// Get the disc header
    pub fn header(&self) -> &DiscHeader {
        &self.header
    }

    /// Get all tracks in physical order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Get a track by physical index
    pub fn get_track(&self, physical_index: u8) -> Option<&Track> {
        self.tracks.get(physical_index as usize)
    }

    /// Get the number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Get the decode statistics
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Whether bytes followed the last declared track
    pub fn has_trailing_bytes(&self) -> bool {
        self.trailing_bytes
    }

    /// Total number of sectors across all tracks
    pub fn total_sectors(&self) -> usize {
        self.tracks.iter().map(|t| t.sector_count()).sum()
    }

    /// Number of sectors on full-info tracks
    pub fn readable_sectors(&self) -> usize {
        self.tracks
            .iter()
            .filter(|t| t.is_full_info())
            .map(|t| t.sector_count())
            .sum()
    }

    /// Total bytes of sector data stored in the image
    pub fn total_data_size(&self) -> usize {
        self.tracks.iter().map(|t| t.data_size()).sum()
    }

    /// Number of tracks declared with no sectors
    pub fn unformatted_track_count(&self) -> usize {
        self.tracks.iter().filter(|t| !t.is_formatted()).count()
    }
}
