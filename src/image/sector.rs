/// Sector data structures

use crate::format::constants::fsd_size_to_bytes;

/// Sector ID (CHRN) - addressing information as recorded for a sector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorId {
    /// C - Logical track number
    pub track: u8,
    /// H - Head number (0 in FSD images)
    pub head: u8,
    /// R - Logical sector ID
    pub sector: u8,
    /// N - Nominal size code (0=128, 1=256, 2=512, 3=1024, 4=2048)
    pub size_code: u8,
}

impl SectorId {
    /// Create a new sector ID
    pub fn new(track: u8, head: u8, sector: u8, size_code: u8) -> Self {
        Self {
            track,
            head,
            sector,
            size_code,
        }
    }

    /// Get the nominal sector size in bytes based on size code
    pub fn size_bytes(&self) -> usize {
        fsd_size_to_bytes(self.size_code)
    }
}

/// Read result stored for sectors of a full-info track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorStatus {
    /// Size code of the data actually stored
    pub actual_size_code: u8,
    /// Error code recorded when the sector was read
    pub error_code: u8,
}

impl SectorStatus {
    /// Create a new sector status
    pub fn new(actual_size_code: u8, error_code: u8) -> Self {
        Self {
            actual_size_code,
            error_code,
        }
    }

    /// Size in bytes of the stored data
    pub fn actual_size(&self) -> usize {
        fsd_size_to_bytes(self.actual_size_code)
    }
}

/// Sector metadata retained after decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorInfo {
    /// Position of the sector within its track
    pub index: u8,
    /// Sector addressing information (CHRN)
    pub id: SectorId,
    /// Actual size and error code, present only on full-info tracks
    pub status: Option<SectorStatus>,
}

impl SectorInfo {
    /// Get the nominal size from the size code
    pub fn nominal_size(&self) -> usize {
        self.id.size_bytes()
    }

    /// Get the stored data size, 0 when the track carries no data
    pub fn actual_size(&self) -> usize {
        self.status.map_or(0, |s| s.actual_size())
    }

    /// Check if the stored size differs from the nominal size
    pub fn has_size_mismatch(&self) -> bool {
        self.status
            .is_some_and(|s| s.actual_size() != self.nominal_size())
    }

    /// Check if a read error was recorded for this sector
    pub fn has_error(&self) -> bool {
        self.status.is_some_and(|s| s.error_code != 0)
    }

    /// Check if the sector ID differs from its position in the track
    pub fn has_non_default_id(&self) -> bool {
        self.id.sector != self.index
    }
}

/// A decoded sector with its data
///
/// The data length always matches the actual size code of the status, never
/// the nominal one. Sectors of tracks without full info carry no data.
#[derive(Debug, Clone)]
pub struct Sector {
    info: SectorInfo,
    data: Vec<u8>,
}

impl Sector {
    /// Create a sector with ID fields only
    pub fn id_only(index: u8, id: SectorId) -> Self {
        Self {
            info: SectorInfo {
                index,
                id,
                status: None,
            },
            data: Vec::new(),
        }
    }

    /// Create a sector with status and data
    ///
    /// Returns `None` if the data length does not match the actual size code.
    pub fn with_data(index: u8, id: SectorId, status: SectorStatus, data: Vec<u8>) -> Option<Self> {
        if data.len() != status.actual_size() {
            return None;
        }
        Some(Self {
            info: SectorInfo {
                index,
                id,
                status: Some(status),
            },
            data,
        })
    }

    /// Create a sector from data read for the given status
    pub(crate) fn from_read(index: u8, id: SectorId, status: SectorStatus, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), status.actual_size());
        Self {
            info: SectorInfo {
                index,
                id,
                status: Some(status),
            },
            data,
        }
    }

    /// Get the sector metadata
    pub fn info(&self) -> &SectorInfo {
        &self.info
    }

    /// Get the sector addressing information
    pub fn id(&self) -> &SectorId {
        &self.info.id
    }

    /// Get the read status if present
    pub fn status(&self) -> Option<&SectorStatus> {
        self.info.status.as_ref()
    }

    /// Get a reference to the sector data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Check if the sector carries data
    pub fn has_data(&self) -> bool {
        self.info.status.is_some()
    }

    /// Take the metadata, dropping the data
    pub fn into_info(self) -> SectorInfo {
        self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_id_size() {
        let id = SectorId::new(0, 0, 0, 1);
        assert_eq!(id.size_bytes(), 256);

        let id2 = SectorId::new(0, 0, 1, 3);
        assert_eq!(id2.size_bytes(), 1024);
    }

    #[test]
    fn test_id_only_sector() {
        let sector = Sector::id_only(3, SectorId::new(1, 0, 3, 1));
        assert!(!sector.has_data());
        assert!(sector.data().is_empty());
        assert_eq!(sector.info().actual_size(), 0);
        assert!(!sector.info().has_size_mismatch());
        assert!(!sector.info().has_error());
    }

    #[test]
    fn test_sector_with_data() {
        let id = SectorId::new(0, 0, 0, 2);
        let status = SectorStatus::new(0, 0x0E);
        let sector = Sector::with_data(0, id, status, vec![0x42; 128]).unwrap();

        assert_eq!(sector.data().len(), 128);
        assert_eq!(sector.info().nominal_size(), 512);
        assert_eq!(sector.info().actual_size(), 128);
        assert!(sector.info().has_size_mismatch());
        assert!(sector.info().has_error());
    }

    #[test]
    fn test_sector_with_wrong_length() {
        let id = SectorId::new(0, 0, 0, 1);
        let status = SectorStatus::new(1, 0);
        assert!(Sector::with_data(0, id, status, vec![0; 128]).is_none());
    }

    #[test]
    fn test_non_default_id() {
        let sector = Sector::id_only(2, SectorId::new(0, 0, 2, 1));
        assert!(!sector.info().has_non_default_id());

        let sector = Sector::id_only(2, SectorId::new(0, 0, 9, 1));
        assert!(sector.info().has_non_default_id());
    }
}
