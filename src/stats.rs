/// Per-image statistics gathered while decoding

use std::collections::BTreeMap;

/// Tallies and addressing flags for one decoded image
///
/// Counts and flags only grow while decoding. Once the decode finishes the
/// statistics are handed out read-only through [`crate::FsdImage::statistics`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    error_codes: BTreeMap<u8, usize>,
    size_codes: BTreeMap<u8, usize>,
    non_default_track_ids: bool,
    non_default_sector_ids: bool,
    non_readable_tracks: bool,
}

impl Statistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally the actual size code and error code of a full-info sector
    pub fn record_sector(&mut self, actual_size_code: u8, error_code: u8) {
        *self.size_codes.entry(actual_size_code).or_insert(0) += 1;
        *self.error_codes.entry(error_code).or_insert(0) += 1;
    }

    /// Note a logical track ID that differs from the physical track
    pub fn mark_non_default_track_ids(&mut self) {
        self.non_default_track_ids = true;
    }

    /// Note a logical sector ID that differs from the sector position
    pub fn mark_non_default_sector_ids(&mut self) {
        self.non_default_sector_ids = true;
    }

    /// Note a formatted track without full info
    pub fn mark_non_readable_track(&mut self) {
        self.non_readable_tracks = true;
    }

    /// Error code frequencies in ascending code order
    pub fn error_codes(&self) -> &BTreeMap<u8, usize> {
        &self.error_codes
    }

    /// Actual size code frequencies in ascending code order
    pub fn size_codes(&self) -> &BTreeMap<u8, usize> {
        &self.size_codes
    }

    /// Whether any logical track ID differs from its physical track
    pub fn has_non_default_track_ids(&self) -> bool {
        self.non_default_track_ids
    }

    /// Whether any logical sector ID differs from its position
    pub fn has_non_default_sector_ids(&self) -> bool {
        self.non_default_sector_ids
    }

    /// Whether any formatted track lacks full info
    pub fn has_non_readable_tracks(&self) -> bool {
        self.non_readable_tracks
    }

    /// Number of sectors tallied
    pub fn tallied_sectors(&self) -> usize {
        self.error_codes.values().sum()
    }

    /// Whether there is anything to summarise
    pub fn has_summary(&self) -> bool {
        !self.error_codes.is_empty()
    }
}
