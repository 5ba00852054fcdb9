/// Track data structures

use crate::format::constants::FULL_INFO;
use crate::image::sector::SectorInfo;
use std::fmt;

/// Readability flag stored for formatted tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readability {
    /// Every sector carries actual size, error code and data
    FullInfo,
    /// Sectors carry ID fields only (raw flag value kept)
    Partial(u8),
}

impl From<u8> for Readability {
    fn from(value: u8) -> Self {
        match value {
            FULL_INFO => Readability::FullInfo,
            other => Readability::Partial(other),
        }
    }
}

impl From<Readability> for u8 {
    fn from(readability: Readability) -> Self {
        match readability {
            Readability::FullInfo => FULL_INFO,
            Readability::Partial(value) => value,
        }
    }
}

impl fmt::Display for Readability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// A decoded track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Position in the track table
    pub physical_index: u8,
    /// Track number recorded in the track header
    pub track_number: u8,
    /// Declared number of sectors
    pub declared_sectors: u8,
    /// Readability flag, absent for unformatted tracks
    pub readability: Option<Readability>,
    sectors: Vec<SectorInfo>,
}

impl Track {
    /// Create an unformatted track
    pub fn unformatted(physical_index: u8, track_number: u8) -> Self {
        Self {
            physical_index,
            track_number,
            declared_sectors: 0,
            readability: None,
            sectors: Vec::new(),
        }
    }

    /// Create a formatted track with no sectors decoded yet
    pub fn formatted(
        physical_index: u8,
        track_number: u8,
        declared_sectors: u8,
        readability: Readability,
    ) -> Self {
        Self {
            physical_index,
            track_number,
            declared_sectors,
            readability: Some(readability),
            sectors: Vec::with_capacity(declared_sectors as usize),
        }
    }

    /// Add a decoded sector to this track
    pub fn add_sector(&mut self, sector: SectorInfo) {
        self.sectors.push(sector);
    }

    /// Get a reference to all sectors
    pub fn sectors(&self) -> &[SectorInfo] {
        &self.sectors
    }

    /// Get the number of decoded sectors
    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    /// Check if the track is formatted
    pub fn is_formatted(&self) -> bool {
        self.declared_sectors > 0
    }

    /// Check if the track's sectors carry full info and data
    pub fn is_full_info(&self) -> bool {
        self.readability == Some(Readability::FullInfo)
    }

    /// Total bytes of sector data stored for this track
    pub fn data_size(&self) -> usize {
        self.sectors.iter().map(|s| s.actual_size()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::sector::{SectorId, SectorStatus};

    #[test]
    fn test_readability_from_u8() {
        assert_eq!(Readability::from(255), Readability::FullInfo);
        assert_eq!(Readability::from(0), Readability::Partial(0));
        assert_eq!(Readability::from(1), Readability::Partial(1));
        assert_eq!(u8::from(Readability::Partial(7)), 7);
        assert_eq!(Readability::FullInfo.to_string(), "255");
    }

    #[test]
    fn test_unformatted_track() {
        let track = Track::unformatted(4, 4);
        assert!(!track.is_formatted());
        assert!(!track.is_full_info());
        assert_eq!(track.readability, None);
        assert_eq!(track.sector_count(), 0);
    }

    #[test]
    fn test_track_sectors() {
        let mut track = Track::formatted(0, 0, 2, Readability::FullInfo);
        for i in 0..2u8 {
            track.add_sector(SectorInfo {
                index: i,
                id: SectorId::new(0, 0, i, 1),
                status: Some(SectorStatus::new(i, 0)),
            });
        }

        assert!(track.is_full_info());
        assert_eq!(track.sector_count(), 2);
        assert_eq!(track.data_size(), 128 + 256);
        assert_eq!(track.sectors()[1].id.sector, 1);
    }
}
